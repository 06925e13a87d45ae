//! # REST API Interface Layer
//!
//! HTTP endpoints for the book catalog. This layer handles:
//! - JSON request/response serialization
//! - Validation of incoming payloads before any store access
//! - Translation of not-found and failures into `{"detail": ...}` responses
//! - Request logging

pub mod book_apis;
pub mod error;
pub mod extract;
pub mod mappers;

pub use book_apis::*;
pub use error::ApiError;
