//! # Book Catalog Backend
//!
//! Stores book records and serves them over a JSON REST API.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, DTO mappers, error translation)
//!     ↓
//! Domain Layer (validated book fields, record operations)
//!     ↓
//! Storage Layer (SQLite pool, row mapping)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::BookService;
use crate::storage::DbConnection;

pub const SERVICE_TITLE: &str = "Book Catalog API";

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub db: DbConnection,
    pub book_service: BookService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            book_service: BookService::new(db.clone()),
            db,
        }
    }
}

/// Open the configured database and build the application state
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Parse configured CORS origins, skipping (and logging) any that are not
/// valid header values
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    if parsed.is_empty() && !origins.is_empty() {
        warn!("No valid CORS origins configured; cross-origin requests will be refused");
    }
    parsed
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parse_origins(origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/books", get(io::list_books).post(io::create_book))
        .route("/books/", get(io::list_books).post(io::create_book))
        .route(
            "/books/:book_id",
            get(io::get_book).put(io::update_book).delete(io::delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_invalid_values() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://bad\norigin".to_string(),
            "https://books.example.com".to_string(),
        ];

        let parsed = parse_origins(&origins);

        assert_eq!(
            parsed,
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://books.example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_origins_all_invalid_is_empty() {
        let origins = vec!["bad\u{7f}origin".to_string()];
        assert!(parse_origins(&origins).is_empty());
    }
}
