use crate::domain::models::{Book as DomainBook, BookFields, BookValidationError};
use shared::{Book as SharedBook, CreateBookRequest, UpdateBookRequest};

/// Mapper to convert between shared book DTOs and domain book models.
pub struct BookMapper;

impl BookMapper {
    /// Validates a creation payload into domain fields.
    pub fn from_create_request(request: CreateBookRequest) -> Result<BookFields, BookValidationError> {
        BookFields::new(
            request.title,
            request.author,
            request.published_year,
            request.summary,
        )
    }

    /// Validates an update payload into the full set of replacement fields.
    pub fn from_update_request(request: UpdateBookRequest) -> Result<BookFields, BookValidationError> {
        BookFields::new(
            request.title,
            request.author,
            request.published_year,
            request.summary,
        )
    }

    /// Converts a domain book to the read shape.
    pub fn to_dto(domain: DomainBook) -> SharedBook {
        SharedBook {
            id: domain.id,
            title: domain.title,
            author: domain.author,
            published_year: domain.published_year.value(),
            summary: domain.summary,
        }
    }

    pub fn to_dto_list(domain_books: Vec<DomainBook>) -> Vec<SharedBook> {
        domain_books.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_out_of_range_year() {
        let request = CreateBookRequest {
            title: "Too Early".to_string(),
            author: "Someone".to_string(),
            published_year: 1449,
            summary: None,
        };

        assert_eq!(
            BookMapper::from_create_request(request),
            Err(BookValidationError::PublishedYearOutOfRange { year: 1449 })
        );
    }

    #[test]
    fn test_update_request_keeps_every_field() {
        let request = UpdateBookRequest {
            title: "Updated".to_string(),
            author: "New Author".to_string(),
            published_year: 2001,
            summary: Some("Revised".to_string()),
        };

        let fields = BookMapper::from_update_request(request).unwrap();

        assert_eq!(fields.title, "Updated");
        assert_eq!(fields.author, "New Author");
        assert_eq!(fields.published_year.value(), 2001);
        assert_eq!(fields.summary.as_deref(), Some("Revised"));
    }

    #[test]
    fn test_to_dto() {
        let fields = BookFields::new("Dune".into(), "Frank Herbert".into(), 1965, None).unwrap();
        let domain = DomainBook {
            id: 1,
            title: fields.title,
            author: fields.author,
            published_year: fields.published_year,
            summary: fields.summary,
        };

        let dto = BookMapper::to_dto(domain);

        assert_eq!(
            dto,
            SharedBook {
                id: 1,
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                published_year: 1965,
                summary: None,
            }
        );
    }
}
