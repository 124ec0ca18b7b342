//! Field limits and default thresholds
//!
//! Name and brand lengths are bounded so a single record cannot blow up the
//! trie depth. Violations surface as `ValidationError::TooLong`.

use crate::error::ValidationError;

/// Default threshold for low-stock queries when the caller supplies none.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 30;

/// Queries at or below this many characters always use prefix search.
pub const PREFIX_ONLY_QUERY_CHARS: usize = 2;

/// Length limits for record fields
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum name length in characters (default: 100)
    pub max_name_chars: usize,

    /// Maximum brand length in characters (default: 100)
    pub max_brand_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_chars: 100,
            max_brand_chars: 100,
        }
    }
}

impl Limits {
    /// Validate a trimmed name against the name limit
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        Self::check("name", name, self.max_name_chars)
    }

    /// Validate a trimmed brand against the brand limit
    pub fn validate_brand(&self, brand: &str) -> Result<(), ValidationError> {
        Self::check("brand", brand, self.max_brand_chars)
    }

    fn check(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::TooLong { field, actual, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_name_chars, 100);
        assert_eq!(limits.max_brand_chars, 100);
    }

    #[test]
    fn test_name_at_limit_is_accepted() {
        let limits = Limits::default();
        assert!(limits.validate_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_name_over_limit_is_rejected() {
        let limits = Limits::default();
        let err = limits.validate_name(&"a".repeat(101)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "name",
                actual: 101,
                max: 100
            }
        );
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        let limits = Limits {
            max_name_chars: 3,
            max_brand_chars: 3,
        };
        // 3 chars, 6 bytes
        assert!(limits.validate_brand("äöü").is_ok());
    }
}
