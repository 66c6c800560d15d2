use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Wire name of the username field.
pub const FIELD_USERNAME: &str = "username";
/// Wire name of the password field.
pub const FIELD_PASSWORD: &str = "password";
/// Wire name of the creation timestamp field.
pub const FIELD_CREATED_AT: &str = "createdAt";

/// A partially-populated signup submission, exactly as received.
///
/// Every field is optional here; the assembler decides what is missing.
/// Unknown wire fields are rejected outright.
#[derive(Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SignupDraft {
    pub username: Option<String>,
    pub password: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for SignupDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDraft")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// A submission with every required field present.
///
/// The values are still raw text; branding happens in
/// [`admit`](crate::admit).
#[derive(Clone)]
pub struct SignupRecord {
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for SignupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRecord")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
