use chrono::Utc;
use gate_domain::config::{IntakePolicy, RulesConfig};
use gate_intake::{FIELD_CREATED_AT, IntakeError, SignupDraft, admit, assemble};

fn draft(username: &str, password: &str) -> SignupDraft {
    SignupDraft {
        username: Some(username.to_owned()),
        password: Some(password.to_owned()),
        created_at: Some(Utc::now()),
    }
}

#[test]
fn complete_submission_assembles() {
    let record = assemble(draft("hello", "World1234"), IntakePolicy::Aggregate).unwrap();
    assert_eq!(record.username, "hello");
    assert_eq!(record.password, "World1234");
}

#[test]
fn missing_created_at_is_named() {
    let incomplete = SignupDraft {
        username: Some("hello".to_owned()),
        password: Some("World1234".to_owned()),
        created_at: None,
    };

    for policy in [IntakePolicy::FailFast, IntakePolicy::Aggregate] {
        let err = assemble(incomplete.clone(), policy).unwrap_err();
        let IntakeError::Missing { fields, .. } = &err else { panic!("expected Missing") };
        assert_eq!(fields, &vec![FIELD_CREATED_AT]);
        assert!(err.to_string().contains("createdAt"));
    }
}

#[test]
fn empty_submission_lists_every_field_under_aggregate() {
    let err = assemble(SignupDraft::default(), IntakePolicy::Aggregate).unwrap_err();
    let IntakeError::Missing { fields, .. } = err else { panic!("expected Missing") };
    assert_eq!(fields, vec!["username", "password", "createdAt"]);
}

#[test]
fn empty_submission_reports_only_username_under_fail_fast() {
    let err = assemble(SignupDraft::default(), IntakePolicy::FailFast).unwrap_err();
    let IntakeError::Missing { fields, .. } = err else { panic!("expected Missing") };
    assert_eq!(fields, vec!["username"]);
}

#[test]
fn drafts_deserialize_from_camel_case_wire_format() {
    let raw = r#"{
        "username": "hello",
        "password": "World1234",
        "createdAt": "2026-08-07T12:00:00Z"
    }"#;

    let parsed: SignupDraft = serde_json::from_str(raw).expect("draft deserialize");
    assert!(parsed.created_at.is_some());

    // Unknown fields are rejected outright.
    let stray = r#"{ "username": "hello", "role": "admin" }"#;
    assert!(serde_json::from_str::<SignupDraft>(stray).is_err());
}

#[test]
fn admit_brands_and_opens_a_session() {
    let rules = RulesConfig::default();
    let admission = admit(draft("hello", "World1234"), &rules).unwrap();

    assert_eq!(admission.username.as_str(), "hello");
    assert_eq!(admission.password.as_str(), "World1234");
    assert_eq!(admission.session.kind(), "session");
}

#[test]
fn admit_aggregates_validation_failures_across_fields() {
    let rules = RulesConfig::default();
    let err = admit(draft("ab", "short"), &rules).unwrap_err();

    let IntakeError::Invalid { failures, .. } = &err else { panic!("expected Invalid") };
    let categories: Vec<_> = failures.iter().map(|f| f.category().to_owned()).collect();
    assert_eq!(categories, vec!["username", "password"]);
}

#[test]
fn admit_respects_the_configured_policy() {
    let mut rules = RulesConfig::default();
    rules.intake.policy = IntakePolicy::FailFast;

    let err = admit(SignupDraft::default(), &rules).unwrap_err();
    let IntakeError::Missing { fields, .. } = err else { panic!("expected Missing") };
    assert_eq!(fields, vec!["username"]);
}
