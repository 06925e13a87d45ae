//! Record operations for the book catalog.
//!
//! Absent records are reported as `Ok(None)`; only store failures are errors.

use anyhow::Result;
use tracing::info;

use crate::domain::models::{Book, BookFields};
use crate::storage::{BookRepository, DbConnection};

#[derive(Clone)]
pub struct BookService {
    repository: BookRepository,
}

impl BookService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: BookRepository::new(db),
        }
    }

    /// Store a new book and return it with its assigned id
    pub async fn create_book(&self, fields: BookFields) -> Result<Book> {
        info!("Creating book '{}' by {}", fields.title, fields.author);
        let book = self.repository.insert_book(&fields).await?;
        info!("Created book {}", book.id);
        Ok(book)
    }

    /// Every stored book
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let books = self.repository.list_books().await?;
        info!("Listing {} books", books.len());
        Ok(books)
    }

    pub async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        self.repository.get_book(id).await
    }

    /// Replace every field of book `id` with `fields`
    pub async fn update_book(&self, id: i64, fields: BookFields) -> Result<Option<Book>> {
        info!("Updating book {}", id);
        let updated = self.repository.replace_book(id, &fields).await?;
        if updated.is_none() {
            info!("Book {} not found for update", id);
        }
        Ok(updated)
    }

    /// Remove book `id`, returning the record as it was before removal
    pub async fn delete_book(&self, id: i64) -> Result<Option<Book>> {
        info!("Deleting book {}", id);
        let deleted = self.repository.delete_book(id).await?;
        if deleted.is_none() {
            info!("Book {} not found for delete", id);
        }
        Ok(deleted)
    }
}
