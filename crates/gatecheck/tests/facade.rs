use chrono::Utc;
use gatecheck::features;
use gatecheck::features::intake::SignupDraft;

#[test]
fn registry_lists_the_slices() {
    assert!(features::is_enabled("credentials"));
    assert!(features::is_enabled("intake"));
    assert!(features::is_enabled("conn"));
    assert!(!features::is_enabled("telemetry"));
}

#[test]
fn admit_accepts_a_complete_valid_draft() {
    let draft = SignupDraft {
        username: Some("hello".to_owned()),
        password: Some("World1234".to_owned()),
        created_at: Some(Utc::now()),
    };

    let admission = gatecheck::admit(draft).expect("default rules admit the reference draft");
    assert_eq!(admission.username.as_str(), "hello");
    assert_eq!(admission.session.kind(), "session");
}

#[test]
fn admit_surfaces_validation_failures() {
    let draft = SignupDraft {
        username: Some("ab".to_owned()),
        password: Some("World1234".to_owned()),
        created_at: Some(Utc::now()),
    };

    let err = gatecheck::admit(draft).unwrap_err();
    assert!(err.to_string().contains("Field validation failed"));
}
