//! Book catalog endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::book::{Book, UpdateBook},
    AppState,
};

use super::{JsonBody, PathParam};

/// List all books
#[utoipa::path(
    get,
    path = "/books/books",
    tag = "books",
    responses(
        (status = 200, description = "Every book in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get a single book
///
/// `book_id` is matched against book ids, or used as a catalog position
/// when the server runs with `books.lookup = "position"`.
#[utoipa::path(
    get,
    path = "/books/book/{book_id}",
    tag = "books",
    params(
        ("book_id" = i64, Path, description = "Book ID (or position in legacy lookup mode)")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    PathParam(book_id): PathParam<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(book_id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 409, description = "A book with this id already exists", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    patch,
    path = "/books/book/{book_id}",
    tag = "books",
    params(
        ("book_id" = i64, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathParam(book_id): PathParam<i64>,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.update(book_id, &data).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/book/{book_id}",
    tag = "books",
    params(
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted, empty object returned"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathParam(book_id): PathParam<i64>,
) -> AppResult<Json<Value>> {
    state.services.books.delete(book_id).await?;
    Ok(Json(json!({})))
}
