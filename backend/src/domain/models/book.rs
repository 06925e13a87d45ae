use thiserror::Error;

/// Year of first publication, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub const MIN: i32 = 1450;
    pub const MAX: i32 = 2100;

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PublishedYear {
    type Error = BookValidationError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(BookValidationError::PublishedYearOutOfRange { year })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    #[error("published_year must be between 1450 and 2100 (got {year})")]
    PublishedYearOutOfRange { year: i32 },
}

/// Validated base fields of a book, shared by creation and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub published_year: PublishedYear,
    pub summary: Option<String>,
}

impl BookFields {
    pub fn new(
        title: String,
        author: String,
        published_year: i32,
        summary: Option<String>,
    ) -> Result<Self, BookValidationError> {
        Ok(Self {
            title,
            author,
            published_year: PublishedYear::try_from(published_year)?,
            summary,
        })
    }
}

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: PublishedYear,
    pub summary: Option<String>,
}

impl Book {
    /// The record's fields without its id
    #[cfg(test)]
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
            summary: self.summary.clone(),
        }
    }
}
