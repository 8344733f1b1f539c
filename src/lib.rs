//! Bookly Server
//!
//! A small Rust REST API exposing an in-memory book catalog, together with
//! a handful of stateless demo endpoints.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build state with a freshly seeded catalog
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new();
        let services = services::Services::new(repository, config.books.clone());

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Book catalog
    let books = Router::new()
        .route(
            "/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route(
            "/book/:book_id",
            get(api::books::get_book)
                .patch(api::books::update_book)
                .delete(api::books::delete_book),
        );

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/books", books)
        .with_state(state);

    // Stateless demo endpoints
    let demo = Router::new()
        .route("/", get(api::demo::read_root))
        .route("/greet", get(api::demo::greet))
        .route("/greet/:name", get(api::demo::greet_name))
        .route("/create_book", post(api::demo::create_book))
        .route("/get_headers", get(api::demo::get_headers));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(demo)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
