//! Field-length validation for note titles and bodies.
//!
//! [`validate`] is the gate every create and edit passes through before the
//! [`NoteStore`](super::store::NoteStore) is touched. The store itself never
//! validates; it trusts whatever the caller hands it.
//!
//! Lengths are counted in `char`s, so a title of three emoji is as valid as
//! a title of three ASCII letters.
//!
//! ## Examples
//!
//! ```rust
//! use pocketnotes_core::validate;
//!
//! assert!(validate("Groceries", "Milk, eggs").is_empty());
//! assert_eq!(validate("Hi", ""), vec!["Title must be at least 3 characters."]);
//! ```

use serde::{Deserialize, Serialize};

/// Inclusive length bounds applied to note fields.
///
/// The defaults are 3–50 characters for the title and at most 120 for the
/// body. Deserializing a partial object fills the missing bounds from
/// [`NoteLimits::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteLimits {
    /// Shortest accepted title.
    pub title_min: usize,
    /// Longest accepted title.
    pub title_max: usize,
    /// Longest accepted body. The body may always be empty.
    pub body_max: usize,
}

impl Default for NoteLimits {
    fn default() -> Self {
        Self {
            title_min: 3,
            title_max: 50,
            body_max: 120,
        }
    }
}

impl NoteLimits {
    /// Whether at least one title length satisfies these bounds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.title_min <= self.title_max
    }

    /// Returns every rule the proposed fields violate, in display order.
    ///
    /// At most one title error is reported (too short wins over too long),
    /// followed by the body error if any. An empty vector means the fields
    /// can be committed.
    #[must_use]
    pub fn validate(&self, title: &str, body: &str) -> Vec<String> {
        let mut errors = Vec::new();
        let title_len = title.chars().count();

        if title_len < self.title_min {
            errors.push(format!(
                "Title must be at least {} characters.",
                self.title_min
            ));
        } else if title_len > self.title_max {
            errors.push(format!("Title must be at most {} characters.", self.title_max));
        }

        if body.chars().count() > self.body_max {
            errors.push(format!("Text must be at most {} characters.", self.body_max));
        }

        errors
    }

    /// Whether the title input should be styled as invalid.
    #[must_use]
    pub fn title_invalid(&self, title: &str) -> bool {
        let len = title.chars().count();
        len < self.title_min || len > self.title_max
    }

    /// Whether the body input should be styled as invalid.
    #[must_use]
    pub fn body_invalid(&self, body: &str) -> bool {
        body.chars().count() > self.body_max
    }
}

/// Validates `title` and `body` against the default [`NoteLimits`].
#[must_use]
pub fn validate(title: &str, body: &str) -> Vec<String> {
    NoteLimits::default().validate(title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_produce_no_errors() {
        assert!(validate("Groceries", "Milk, eggs").is_empty());
        assert!(validate("abc", "").is_empty());
        assert!(validate(&"t".repeat(50), &"b".repeat(120)).is_empty());
    }

    #[test]
    fn test_short_titles_report_one_title_error() {
        for len in 0..3 {
            let errors = validate(&"t".repeat(len), "");
            assert_eq!(errors.len(), 1, "title length {len}");
            assert!(errors[0].contains("Title"));
        }
    }

    #[test]
    fn test_long_titles_report_one_title_error() {
        for len in [51, 52, 200] {
            let errors = validate(&"t".repeat(len), "");
            assert_eq!(errors, vec!["Title must be at most 50 characters."]);
        }
    }

    #[test]
    fn test_title_bounds_are_inclusive() {
        for len in 3..=50 {
            assert!(validate(&"t".repeat(len), "").is_empty(), "title length {len}");
        }
    }

    #[test]
    fn test_body_limit() {
        assert!(validate("abc", &"b".repeat(120)).is_empty());

        let errors = validate("abc", &"b".repeat(121));
        assert_eq!(errors, vec!["Text must be at most 120 characters."]);
    }

    #[test]
    fn test_title_error_precedes_body_error() {
        let errors = validate("Hi", &"b".repeat(130));
        assert_eq!(
            errors,
            vec![
                "Title must be at least 3 characters.",
                "Text must be at most 120 characters.",
            ]
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        // Three chars, nine bytes.
        assert!(validate("日本語", "").is_empty());
        assert_eq!(validate("日本", "").len(), 1);
    }

    #[test]
    fn test_custom_limits_change_thresholds_and_messages() {
        let limits = NoteLimits {
            title_min: 1,
            title_max: 5,
            body_max: 10,
        };
        assert!(limits.validate("a", "").is_empty());
        assert_eq!(
            limits.validate("abcdef", "01234567890"),
            vec![
                "Title must be at most 5 characters.",
                "Text must be at most 10 characters.",
            ]
        );
    }

    #[test]
    fn test_field_flags_match_validate() {
        let limits = NoteLimits::default();
        assert!(limits.title_invalid("Hi"));
        assert!(limits.title_invalid(&"t".repeat(51)));
        assert!(!limits.title_invalid("Groceries"));
        assert!(limits.body_invalid(&"b".repeat(121)));
        assert!(!limits.body_invalid(""));
    }

    #[test]
    fn test_inverted_title_bounds_are_inconsistent() {
        assert!(NoteLimits::default().is_consistent());
        let inverted = NoteLimits {
            title_min: 60,
            title_max: 10,
            body_max: 5,
        };
        assert!(!inverted.is_consistent());
        assert!((0..100).all(|len| !inverted.validate(&"t".repeat(len), "").is_empty()));
    }

    #[test]
    fn test_partial_limits_deserialize_with_defaults() {
        let limits: NoteLimits = serde_json::from_str(r#"{"bodyMax": 200}"#).unwrap();
        assert_eq!(limits.title_min, 3);
        assert_eq!(limits.title_max, 50);
        assert_eq!(limits.body_max, 200);
    }
}
