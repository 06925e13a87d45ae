//! # REST API for Book Management
//!
//! Endpoints for creating, listing, retrieving, replacing, and deleting books.

use axum::{extract::State, http::StatusCode, Json};
use shared::{Book, CreateBookRequest, UpdateBookRequest};
use tracing::info;

use super::error::ApiError;
use super::extract::{AppJson, AppPath};
use super::mappers::BookMapper;
use crate::AppState;

/// Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    info!("POST /books/ - request: {:?}", request);

    let fields = BookMapper::from_create_request(request)?;
    let book = state.book_service.create_book(fields).await?;

    Ok((StatusCode::CREATED, Json(BookMapper::to_dto(book))))
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    info!("GET /books/");

    let books = state.book_service.list_books().await?;
    Ok(Json(BookMapper::to_dto_list(books)))
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<AppState>,
    AppPath(book_id): AppPath<i64>,
) -> Result<Json<Book>, ApiError> {
    info!("GET /books/{}", book_id);

    let book = state
        .book_service
        .get_book(book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(BookMapper::to_dto(book)))
}

/// Replace every field of a book
pub async fn update_book(
    State(state): State<AppState>,
    AppPath(book_id): AppPath<i64>,
    AppJson(request): AppJson<UpdateBookRequest>,
) -> Result<Json<Book>, ApiError> {
    info!("PUT /books/{} - request: {:?}", book_id, request);

    let fields = BookMapper::from_update_request(request)?;
    let book = state
        .book_service
        .update_book(book_id, fields)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(BookMapper::to_dto(book)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    AppPath(book_id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE /books/{}", book_id);

    state
        .book_service
        .delete_book(book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(StatusCode::NO_CONTENT)
}
