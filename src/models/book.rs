//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::author::Author;

/// Book as returned by the API, with its nested author list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub price: i32,
    /// Stored status code ("0" = unpublished, "1" = published)
    pub publish_status: String,
    /// Display label derived from the status code
    pub publish_status_name: String,
    pub authors: Vec<Author>,
}

/// Create/update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    pub title: String,
    #[validate(range(min = 0, message = "price must be 0 or greater"))]
    pub price: i32,
    pub publish_status: String,
    #[validate(length(min = 1, message = "at least one author is required"))]
    pub author_ids: Vec<i32>,
}

/// Book search filters. Absent filters impose no restriction.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring match on the title
    pub title: Option<String>,
    pub book_id: Option<i32>,
    /// Case-insensitive substring match on any linked author's name
    pub author_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: i32, author_ids: Vec<i32>) -> BookPayload {
        BookPayload {
            title: "World Atlas".to_string(),
            price,
            publish_status: "0".to_string(),
            author_ids,
        }
    }

    #[test]
    fn test_payload_rejects_negative_price() {
        assert!(payload(-1, vec![1]).validate().is_err());
    }

    #[test]
    fn test_payload_rejects_empty_author_list() {
        assert!(payload(2000, vec![]).validate().is_err());
    }

    #[test]
    fn test_payload_accepts_zero_price_with_authors() {
        assert!(payload(0, vec![1, 2]).validate().is_ok());
    }
}
