use std::borrow::Cow;
use tracing::error;

#[gate_derive::gate_error]
pub enum InvariantError {
    #[error("Invariant violated{}: {message}", format_context(.context))]
    Violated { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Checks a programmer-level expectation.
///
/// A failed invariant signals a defect in the caller, not bad user input; it is
/// reported as a distinguished [`InvariantError`] and logged at `error`, never
/// swallowed and never turned into a panic.
///
/// # Errors
/// Returns [`InvariantError::Violated`] with the given message when `condition` is false.
pub fn invariant(
    condition: bool,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), InvariantError> {
    if condition {
        return Ok(());
    }

    let message = message.into();
    error!(invariant = %message, "Invariant violated");
    Err(InvariantError::Violated { message, context: None })
}

/// Unwraps an `Option` that the caller guarantees to be populated.
///
/// # Errors
/// Returns [`InvariantError::Violated`] naming `what` when the value is absent.
pub fn require_some<T>(value: Option<T>, what: &'static str) -> Result<T, InvariantError> {
    value.map_or_else(
        || {
            error!(what, "Required value was absent");
            Err(InvariantError::Violated {
                message: format!("'{what}' must be present").into(),
                context: None,
            })
        },
        Ok,
    )
}
