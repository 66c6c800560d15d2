use gate_derive::gate_error;
use std::borrow::Cow;

#[gate_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn display_without_context() {
    let err = DemoError::Rejected { message: "too short".into(), context: None };
    assert_eq!(err.to_string(), "Rejected: too short");
}

#[test]
fn context_trait_annotates_results() {
    let result: Result<(), DemoError> =
        Err(DemoError::Rejected { message: "too short".into(), context: None });
    let err = result.context("username intake").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (username intake): too short");
}

#[test]
fn source_field_enables_question_mark() {
    fn parse(raw: &str) -> Result<u32, DemoError> {
        let n = raw.parse::<u32>()?;
        Ok(n)
    }

    assert_eq!(parse("42").unwrap(), 42);
    let err = parse("nope").unwrap_err();
    assert!(matches!(err, DemoError::Parse { context: None, .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn context_trait_wraps_source_errors() {
    let result: Result<u32, std::num::ParseIntError> = "nope".parse::<u32>();
    let err = result.context("reading port").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (reading port):"));
}

#[test]
fn internal_variant_converts_strings() {
    let from_static: DemoError = "logic hole".into();
    assert_eq!(from_static.to_string(), "Internal error: logic hole");

    let from_owned: DemoError = String::from("bad state").into();
    assert!(matches!(from_owned, DemoError::Internal { .. }));
}

#[test]
fn gate_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/gate_error_pass.rs");
}
