//! Stateless demo endpoints: path and query parameters, body echo and
//! request header inspection.

use axum::{
    extract::Path,
    http::{
        header::{HeaderName, ACCEPT, CONTENT_TYPE, HOST, USER_AGENT},
        HeaderMap,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{JsonBody, QueryParams};

/// Name used when `/greet` is called without one
pub const DEFAULT_GREET_NAME: &str = "nitin";

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct GreetResponse {
    pub message: String,
    pub age: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct GreetQuery {
    /// Defaults to 0
    pub age: i64,
}

/// Minimal book payload, echoed back as-is
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookCreateModel {
    pub title: String,
    pub author: String,
}

/// Selected request headers; absent headers are null
#[derive(Debug, Serialize, ToSchema)]
pub struct HeadersResponse {
    #[serde(rename = "Accept")]
    pub accept: Option<String>,
    #[serde(rename = "Content-Type")]
    pub content_type: Option<String>,
    #[serde(rename = "User-Agent")]
    pub user_agent: Option<String>,
    #[serde(rename = "Host")]
    pub host: Option<String>,
}

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "demo",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hello world".to_string(),
    })
}

/// Greet the default name, with age from the query
#[utoipa::path(
    get,
    path = "/greet",
    tag = "demo",
    params(GreetQuery),
    responses(
        (status = 200, description = "Greeting", body = GreetResponse),
        (status = 400, description = "Age is not an integer", body = crate::error::ErrorResponse)
    )
)]
pub async fn greet(QueryParams(query): QueryParams<GreetQuery>) -> Json<GreetResponse> {
    greeting(DEFAULT_GREET_NAME, query.age)
}

/// Greet by name (path) and age (query)
#[utoipa::path(
    get,
    path = "/greet/{name}",
    tag = "demo",
    params(
        ("name" = String, Path, description = "Name to greet"),
        GreetQuery
    ),
    responses(
        (status = 200, description = "Greeting", body = GreetResponse),
        (status = 400, description = "Age is not an integer", body = crate::error::ErrorResponse)
    )
)]
pub async fn greet_name(
    Path(name): Path<String>,
    QueryParams(query): QueryParams<GreetQuery>,
) -> Json<GreetResponse> {
    greeting(&name, query.age)
}

fn greeting(name: &str, age: i64) -> Json<GreetResponse> {
    Json(GreetResponse {
        message: format!("hello {}", name),
        age,
    })
}

/// Echo a minimal book payload
#[utoipa::path(
    post,
    path = "/create_book",
    tag = "demo",
    request_body = BookCreateModel,
    responses(
        (status = 200, description = "Echoed payload", body = BookCreateModel),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(JsonBody(book): JsonBody<BookCreateModel>) -> Json<BookCreateModel> {
    Json(BookCreateModel {
        title: book.title,
        author: book.author,
    })
}

/// Echo selected request headers verbatim
///
/// The user agent is reported under `User-Agent` (not `User_Agent`).
#[utoipa::path(
    get,
    path = "/get_headers",
    tag = "demo",
    responses(
        (status = 200, description = "Request headers", body = HeadersResponse)
    )
)]
pub async fn get_headers(headers: HeaderMap) -> Json<HeadersResponse> {
    let raw = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    Json(HeadersResponse {
        accept: raw(ACCEPT),
        content_type: raw(CONTENT_TYPE),
        user_agent: raw(USER_AGENT),
        host: raw(HOST),
    })
}
