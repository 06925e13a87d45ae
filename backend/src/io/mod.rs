//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Handlers receive
//! the domain services through Axum state and convert DTOs with the
//! mappers in `rest::mappers`.

pub mod rest;

pub use rest::*;
