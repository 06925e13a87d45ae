//! # Domain Module
//!
//! Book records, their validation rules and the record operations.

pub mod book_service;
pub mod models;

pub use book_service::BookService;
