use std::borrow::Cow;

/// Error types for connection handling.
#[gate_derive::gate_error]
pub enum ConnError {
    /// The pool has reached its configured open-handle limit.
    #[error("Connection pool exhausted{}: {message}", format_context(.context))]
    Exhausted { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal connection error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
