use crate::error::ValidationError;
use gate_domain::config::PasswordRules;
use gate_domain::constants::PASSWORD;
use gate_domain::rules::CharClasses;
use std::fmt;
use tracing::debug;

/// A password that has passed the acceptance rule.
///
/// Same branding scheme as [`crate::Username`], with two extra precautions:
/// `Debug` redacts the content and there is no `Display` or `Serialize`, so a
/// password cannot wander into logs or wire payloads by accident. Use
/// [`Password::as_str`] at the point where the secret is actually needed.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl Password {
    /// Validates `raw` against the default rule (8 to 20 characters, at least
    /// one uppercase letter, one lowercase letter, and one digit).
    ///
    /// # Errors
    /// Returns [`ValidationError::Rejected`] naming the `password` category and
    /// either the violated length bound or every missing character class.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_with(raw, &PasswordRules::default())
    }

    /// Validates `raw` against a configured rule.
    ///
    /// # Errors
    /// Returns [`ValidationError::Rejected`] naming the `password` category and
    /// either the violated length bound or every missing character class.
    pub fn parse_with(
        raw: impl Into<String>,
        rules: &PasswordRules,
    ) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let count = raw.chars().count();

        if count < rules.bounds.min_chars {
            debug!(category = PASSWORD, count, "Password rejected: too short");
            return Err(ValidationError::rejected(
                PASSWORD,
                format!("length {count} is below the minimum of {}", rules.bounds.min_chars),
            ));
        }
        if count > rules.bounds.max_chars {
            debug!(category = PASSWORD, count, "Password rejected: too long");
            return Err(ValidationError::rejected(
                PASSWORD,
                format!("length {count} exceeds the maximum of {}", rules.bounds.max_chars),
            ));
        }

        let missing = rules.required - CharClasses::scan(&raw);
        if !missing.is_empty() {
            debug!(category = PASSWORD, missing = ?missing, "Password rejected: missing classes");
            return Err(ValidationError::rejected(
                PASSWORD,
                format!("missing {}", missing.names().join(", ")),
            ));
        }

        Ok(Self(raw))
    }

    /// The validated secret.
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

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Pure predicate for the default password rule.
///
/// Total over all inputs; two calls on the same input always agree.
#[must_use]
pub fn is_password(raw: &str) -> bool {
    let rules = PasswordRules::default();
    rules.bounds.admits(raw.chars().count())
        && CharClasses::scan(raw).contains(rules.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_reference_password() {
        assert!(is_password("World1234"));
    }

    #[test]
    fn debug_never_prints_the_secret() {
        let secret = Password::parse("World1234").unwrap();
        let rendered = format!("{secret:?}");
        assert!(!rendered.contains("World1234"));
    }

    #[test]
    fn missing_classes_are_all_named() {
        let err = Password::parse("abcdefgh").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("uppercase letter"));
        assert!(text.contains("digit"));
        assert!(!text.contains("lowercase"));
    }
}
