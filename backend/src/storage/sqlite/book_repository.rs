use anyhow::{Context, Result};
use tracing::debug;

use super::connection::DbConnection;
use crate::domain::models::{Book, BookFields, PublishedYear};

/// Row layout of the `books` table
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    published_year: i32,
    summary: Option<String>,
}

impl TryFrom<BookRow> for Book {
    type Error = anyhow::Error;

    fn try_from(row: BookRow) -> Result<Self> {
        let published_year = PublishedYear::try_from(row.published_year)
            .with_context(|| format!("Stored book {} has an invalid published_year", row.id))?;

        Ok(Book {
            id: row.id,
            title: row.title,
            author: row.author,
            published_year,
            summary: row.summary,
        })
    }
}

/// Repository for book rows.
///
/// Every method is a single statement run on its own pooled connection.
#[derive(Clone)]
pub struct BookRepository {
    db: DbConnection,
}

impl BookRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new row and return it with its assigned id
    pub async fn insert_book(&self, fields: &BookFields) -> Result<Book> {
        let mut conn = self.db.acquire().await?;

        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (title, author, published_year, summary)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, author, published_year, summary
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(fields.published_year.value())
        .bind(&fields.summary)
        .fetch_one(&mut *conn)
        .await?;

        debug!("Inserted book row {}", row.id);
        row.try_into()
    }

    /// List all books in id order
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let mut conn = self.db.acquire().await?;

        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, title, author, published_year, summary
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(Book::try_from).collect()
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let mut conn = self.db.acquire().await?;

        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, title, author, published_year, summary
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        row.map(Book::try_from).transpose()
    }

    /// Overwrite every column of an existing row.
    /// Returns None when no row has this id.
    pub async fn replace_book(&self, id: i64, fields: &BookFields) -> Result<Option<Book>> {
        let mut conn = self.db.acquire().await?;

        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET title = ?, author = ?, published_year = ?, summary = ?
            WHERE id = ?
            RETURNING id, title, author, published_year, summary
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(fields.published_year.value())
        .bind(&fields.summary)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        debug!("Replace book row {} (found: {})", id, row.is_some());
        row.map(Book::try_from).transpose()
    }

    /// Delete a row, returning it as it was before removal.
    /// Returns None when no row has this id.
    pub async fn delete_book(&self, id: i64) -> Result<Option<Book>> {
        let mut conn = self.db.acquire().await?;

        let row: Option<BookRow> = sqlx::query_as(
            r#"
            DELETE FROM books
            WHERE id = ?
            RETURNING id, title, author, published_year, summary
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        debug!("Delete book row {} (found: {})", id, row.is_some());
        row.map(Book::try_from).transpose()
    }
}
