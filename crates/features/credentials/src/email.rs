use crate::error::ValidationError;
use gate_domain::constants::EMAIL;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// An e-mail address that has passed the structural check.
///
/// The rule is deliberately conservative: exactly one `@`, a non-empty local
/// part, and a domain with an interior dot. Full RFC grammar and DNS checks
/// are out of scope.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates `raw` structurally.
    ///
    /// # Errors
    /// Returns [`ValidationError::Rejected`] naming the `email` category and
    /// the structural defect.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let Some((local, domain)) = raw.split_once('@') else {
            debug!(category = EMAIL, "Email rejected: no separator");
            return Err(ValidationError::rejected(EMAIL, "missing the '@' separator"));
        };
        if domain.contains('@') {
            return Err(ValidationError::rejected(EMAIL, "more than one '@' separator"));
        }
        if local.is_empty() {
            return Err(ValidationError::rejected(EMAIL, "empty local part"));
        }
        if !has_interior_dot(domain) {
            return Err(ValidationError::rejected(EMAIL, "domain must contain an interior dot"));
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

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn has_interior_dot(domain: &str) -> bool {
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Pure predicate for the structural e-mail rule.
///
/// Total over all inputs; two calls on the same input always agree.
#[must_use]
pub fn is_email(raw: &str) -> bool {
    EmailAddress::parse(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_rule() {
        assert!(is_email("max@example.com"));
        assert!(!is_email("hello"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("max@example"));
        assert!(!is_email("max@.com"));
        assert!(!is_email("max@example.com."));
        assert!(!is_email("a@b@example.com"));
    }
}
