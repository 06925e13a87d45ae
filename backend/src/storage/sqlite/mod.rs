//! # SQLite Storage
//!
//! - **connection.rs** - pool setup, schema creation and per-operation checkout
//! - **book_repository.rs** - mapping between `books` rows and domain records

pub mod book_repository;
pub mod connection;

pub use book_repository::BookRepository;
pub use connection::DbConnection;
