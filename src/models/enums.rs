//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Publication status of a book, stored as a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PublishStatus {
    UnPublished,
    Published,
}

impl PublishStatus {
    /// Code value stored in the books table
    pub const fn code(self) -> &'static str {
        match self {
            PublishStatus::UnPublished => "0",
            PublishStatus::Published => "1",
        }
    }

    /// Human-readable label for this status
    pub const fn label(self) -> &'static str {
        match self {
            PublishStatus::UnPublished => "Unpublished",
            PublishStatus::Published => "Published",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(PublishStatus::UnPublished),
            "1" => Some(PublishStatus::Published),
            _ => None,
        }
    }

    /// Label for a stored code. Codes not known to this binary are returned
    /// unchanged instead of being rejected.
    pub fn label_for_code(code: &str) -> String {
        match Self::from_code(code) {
            Some(status) => status.label().to_string(),
            None => code.to_string(),
        }
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_label_mapping() {
        assert_eq!(PublishStatus::UnPublished.code(), "0");
        assert_eq!(PublishStatus::Published.code(), "1");
        assert_eq!(PublishStatus::label_for_code("0"), "Unpublished");
        assert_eq!(PublishStatus::label_for_code("1"), "Published");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(PublishStatus::label_for_code("9"), "9");
        assert_eq!(PublishStatus::label_for_code(""), "");
        assert_eq!(PublishStatus::from_code("9"), None);
    }
}
