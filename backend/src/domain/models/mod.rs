pub mod book;

pub use book::{Book, BookFields, BookValidationError, PublishedYear};
