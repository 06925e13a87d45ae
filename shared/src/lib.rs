use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// A book as returned by the API (the read shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Year of first publication (1450..=2100)
    pub published_year: i32,
    pub summary: Option<String>,
}

/// Payload for POST /books/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub published_year: i32,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Payload for PUT /books/{id}
///
/// Every field replaces the stored value. Leaving `summary` out clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub published_year: i32,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Accepts a year as a JSON integer, a whole-number float (`1965.0`) or an
/// integer string (`"1965"`). Range checks happen later in the domain.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearVisitor;

    impl<'de> de::Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer year")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            let in_range = v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX);
            if v.fract() == 0.0 && in_range {
                Ok(v as i32)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

/// Body of every client-visible error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
