//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Author record as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Create/update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Author search filters. Absent filters impose no restriction.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AuthorQuery {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    pub author_id: Option<i32>,
    pub birth_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_rejects_empty_name() {
        let payload = AuthorPayload {
            name: String::new(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_accepts_named_author() {
        let payload = AuthorPayload {
            name: "Jane Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
        };
        assert!(payload.validate().is_ok());
    }
}
