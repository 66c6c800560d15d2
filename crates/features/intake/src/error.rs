use gate_credentials::ValidationError;
use std::borrow::Cow;

/// Error types for the intake pipeline.
#[gate_derive::gate_error]
pub enum IntakeError {
    /// One or more required fields were absent from the submission.
    #[error("Required fields missing{}: {message}", format_context(.context))]
    Missing {
        fields: Vec<&'static str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Present fields failed their category rules.
    #[error("Field validation failed{}: {message}", format_context(.context))]
    Invalid {
        failures: Vec<ValidationError>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal intake error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntakeError {
    /// Builds a `Missing` error listing the absent fields in declaration order.
    pub(crate) fn missing(fields: Vec<&'static str>) -> Self {
        let message = fields.join(", ");
        Self::Missing { fields, message: message.into(), context: None }
    }

    /// Builds an `Invalid` error aggregating per-field validation failures.
    pub(crate) fn invalid(failures: Vec<ValidationError>) -> Self {
        let message =
            failures.iter().map(ValidationError::to_string).collect::<Vec<_>>().join("; ");
        Self::Invalid { failures, message: message.into(), context: None }
    }
}
