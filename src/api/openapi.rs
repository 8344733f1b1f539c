//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, demo, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookly API",
        version = "1.0.0",
        description = "A rest api for book review webservice"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::UpdateBook,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Demo endpoints live at the server root rather than under `/api/v1`
#[derive(OpenApi)]
#[openapi(
    info(title = "Bookly demo endpoints", version = "1.0.0"),
    paths(
        demo::read_root,
        demo::greet,
        demo::greet_name,
        demo::create_book,
        demo::get_headers,
    ),
    components(
        schemas(
            demo::MessageResponse,
            demo::GreetResponse,
            demo::BookCreateModel,
            demo::HeadersResponse,
        )
    ),
    tags(
        (name = "demo", description = "Parameter and header handling examples")
    )
)]
pub struct DemoApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(
        SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
            .url("/api-docs/demo.json", DemoApiDoc::openapi()),
    )
}
