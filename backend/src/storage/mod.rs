//! # Storage Module
//!
//! Persistence for book records. SQLite via sqlx is the only backend.

pub mod sqlite;

pub use sqlite::{BookRepository, DbConnection};
