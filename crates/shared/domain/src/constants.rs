//! Entity and category string constants shared across slices.

/// Category label for validated usernames.
pub const USERNAME: &str = "username";
/// Category label for validated passwords.
pub const PASSWORD: &str = "password";
/// Category label for validated e-mail addresses.
pub const EMAIL: &str = "email";

/// Tagged-ID kind for login sessions.
pub const SESSION: &str = "session";
/// Tagged-ID kind for pooled connection handles.
pub const CONNECTION: &str = "conn";
