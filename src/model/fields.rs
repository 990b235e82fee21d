use std::fmt;

use crate::error::{RosterError, RosterResult};
use crate::validation::{self, collapse_whitespace, identity_key};

/// A person or club name. Keeps the spelling the user entered (trimmed) for
/// display, plus a normalized key used for duplicate detection and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    display: String,
    key: String,
}

impl Name {
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let display = validation::non_blank(raw, "name")?;
        let key = identity_key(&display);
        Ok(Self { display, key })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Normalized form: what identity equality compares.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// An optional phone number. Blank input is a valid, absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    value: Option<String>,
}

impl Phone {
    pub fn none() -> Self {
        Self { value: None }
    }

    /// Accepts an optional leading `+` followed by digits, spaces, hyphens and
    /// parentheses, with at least 3 digits overall. Blank input parses to the
    /// absent value.
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::none());
        }

        let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
        let chars_ok = trimmed.chars().enumerate().all(|(i, c)| {
            c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')' || (c == '+' && i == 0)
        });
        if digits < 3 || !chars_ok {
            return Err(RosterError::InvalidField {
                field: "phone",
                rule: "must contain at least 3 digits; only digits, spaces, hyphens, parentheses and a leading + are allowed".into(),
            });
        }

        Ok(Self {
            value: Some(collapse_whitespace(trimmed)),
        })
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mandatory email address. The lowercased form is the identity key and the
/// foreign key used by the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    value: String,
    key: String,
}

impl Email {
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let value = validation::non_blank(raw, "email")?;

        let invalid = |rule: &str| RosterError::InvalidField {
            field: "email",
            rule: rule.into(),
        };

        if value.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| invalid("must be of the form local@domain"))?;
        if local.is_empty() {
            return Err(invalid("must have a non-empty part before the @"));
        }
        if domain.contains('@') {
            return Err(invalid("must contain exactly one @"));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid("domain must contain a dot and not start or end with one"));
        }

        let key = value.to_lowercase();
        Ok(Self { value, key })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An optional free-text postal address. Blank input is a valid, absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    value: Option<String>,
}

impl Address {
    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn parse(raw: &str) -> RosterResult<Self> {
        Ok(Self {
            value: validation::trim_optional(Some(raw)),
        })
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-word label attached to a person or club.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let name = validation::non_blank(raw, "tag")?;
        let chars_ok = name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !chars_ok {
            return Err(RosterError::InvalidField {
                field: "tag",
                rule: "must be a single word of letters, digits, hyphens or underscores".into(),
            });
        }
        Ok(Self { name })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
