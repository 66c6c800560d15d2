use crate::safe_id;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[gate_derive::gate_error]
pub enum IdError {
    #[error("ID validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// A verified `kind-body` identifier (e.g., `session-V7mKq2RtWxYz`).
///
/// The kind prefix prevents "ID spoofing" where a caller hands an identifier
/// from one namespace (e.g., a connection ID) to an operation expecting
/// another (e.g., a session endpoint). Construction goes through
/// [`TaggedId::mint`] or [`TaggedId::verify`] only; there is no `Deserialize`
/// impl, so untrusted wire data cannot skip the check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaggedId(String);

impl TaggedId {
    /// Length of a freshly minted ID body.
    pub const BODY_LEN: usize = 12;

    /// Mints a new identifier of the given kind with a random unambiguous body.
    ///
    /// # Errors
    /// Returns [`IdError::Validation`] if `kind` is empty or contains the `-` separator.
    pub fn mint(kind: &str) -> Result<Self, IdError> {
        check_kind(kind)?;
        Ok(Self(format!("{kind}-{}", safe_id!(Self::BODY_LEN))))
    }

    /// Validates an identifier against an expected kind.
    ///
    /// Accepts either a full `kind-body` string or a bare body, which is
    /// automatically prefixed with the expected kind.
    ///
    /// # Arguments
    /// * `id` - The ID to verify (e.g., `"session-V7mKq2RtWxYz"` or just `"V7mKq2RtWxYz"`)
    /// * `kind` - The kind the ID must belong to (e.g., `"session"`)
    ///
    /// # Errors
    /// Returns [`IdError::Validation`] if the kind prefix does not match, or if
    /// the body is empty or contains non-alphanumeric characters.
    pub fn verify<I, K>(id: I, kind: K) -> Result<Self, IdError>
    where
        I: AsRef<str>,
        K: AsRef<str>,
    {
        let id_ref = id.as_ref();
        let kind_ref = kind.as_ref();
        check_kind(kind_ref)?;

        if let Some((prefix, body)) = id_ref.split_once('-') {
            if prefix != kind_ref {
                return Err(IdError::Validation {
                    message: format!("Expected '{kind_ref}', got '{prefix}'").into(),
                    context: Some("ID kind mismatch".into()),
                });
            }
            check_body(body)?;
            Ok(Self(id_ref.to_owned()))
        } else {
            // Bare body provided; prefix it with the expected kind.
            check_body(id_ref)?;
            Ok(Self(format!("{kind_ref}-{id_ref}")))
        }
    }

    /// The kind prefix.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.0.split_once('-').map_or("", |(kind, _)| kind)
    }

    /// The random body after the separator.
    #[must_use]
    pub fn body(&self) -> &str {
        self.0.split_once('-').map_or("", |(_, body)| body)
    }

    /// The full `kind-body` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaggedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaggedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn check_kind(kind: &str) -> Result<(), IdError> {
    if kind.is_empty() || kind.contains('-') {
        return Err(IdError::Validation {
            message: format!("Invalid ID kind '{kind}'").into(),
            context: Some("Kind must be non-empty and free of '-'".into()),
        });
    }
    Ok(())
}

// Minted bodies use the unambiguous alphabet; verification accepts any
// alphanumeric body so externally issued IDs stay valid.
fn check_body(body: &str) -> Result<(), IdError> {
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(IdError::Validation {
            message: format!("Invalid ID body '{body}'").into(),
            context: Some("Body must be non-empty ASCII alphanumeric".into()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_produces_prefixed_ids() {
        let id = TaggedId::mint("session").unwrap();
        assert_eq!(id.kind(), "session");
        assert_eq!(id.body().len(), TaggedId::BODY_LEN);
    }

    #[test]
    fn verify_rejects_kind_mismatch() {
        assert!(TaggedId::verify("conn-abc123", "session").is_err());
    }
}
