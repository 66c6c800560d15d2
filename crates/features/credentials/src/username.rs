use crate::error::ValidationError;
use gate_domain::config::UsernameRules;
use gate_domain::constants::USERNAME;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A username that has passed the acceptance rule.
///
/// At runtime this is bit-for-bit the underlying string; the wrapper exists so
/// the type system can tell "checked" apart from "raw". The field is private
/// and the only constructors are [`Username::parse`] and
/// [`Username::parse_with`].
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates `raw` against the default rule (3 to 20 characters inclusive).
    ///
    /// # Errors
    /// Returns [`ValidationError::Rejected`] naming the `username` category and
    /// the violated length bound.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_with(raw, &UsernameRules::default())
    }

    /// Validates `raw` against a configured rule.
    ///
    /// # Errors
    /// Returns [`ValidationError::Rejected`] naming the `username` category and
    /// the violated length bound.
    pub fn parse_with(
        raw: impl Into<String>,
        rules: &UsernameRules,
    ) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let count = raw.chars().count();

        if count < rules.bounds.min_chars {
            debug!(category = USERNAME, count, "Username rejected: too short");
            return Err(ValidationError::rejected(
                USERNAME,
                format!("length {count} is below the minimum of {}", rules.bounds.min_chars),
            ));
        }
        if count > rules.bounds.max_chars {
            debug!(category = USERNAME, count, "Username rejected: too long");
            return Err(ValidationError::rejected(
                USERNAME,
                format!("length {count} exceeds the maximum of {}", rules.bounds.max_chars),
            ));
        }

        Ok(Self(raw))
    }

    /// The validated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the brand, returning the plain string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pure predicate for the default username rule.
///
/// Total over all inputs; two calls on the same input always agree.
#[must_use]
pub fn is_username(raw: &str) -> bool {
    UsernameRules::default().bounds.admits(raw.chars().count())
}
