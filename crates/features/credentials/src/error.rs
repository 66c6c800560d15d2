use std::borrow::Cow;

/// Error types for credential validation.
#[gate_derive::gate_error]
pub enum ValidationError {
    /// The input did not satisfy the named category's rule.
    #[error("Validation of '{category}' failed{}: {message}", format_context(.context))]
    Rejected {
        category: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal validation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ValidationError {
    /// Builds a rejection for the given category and reason.
    pub(crate) fn rejected(
        category: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Rejected { category: Cow::Borrowed(category), message: message.into(), context: None }
    }

    /// The category whose rule was violated, or `"internal"`.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Rejected { category, .. } => category,
            Self::Internal { .. } => "internal",
        }
    }
}
