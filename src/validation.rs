use unicode_normalization::UnicodeNormalization;

use crate::error::{RosterError, RosterResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &'static str) -> RosterResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(RosterError::InvalidField {
            field,
            rule: "cannot be blank".into(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Derives the identity key used for duplicate detection: NFKC-normalized,
/// lowercased, with interior whitespace runs collapsed to single spaces.
/// The displayed value is left alone; only comparisons go through this.
pub fn identity_key(value: &str) -> String {
    let normalized: String = value.nfkc().collect();
    normalized
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses interior whitespace runs without changing case.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
