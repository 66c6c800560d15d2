use gate_credentials::{EmailAddress, Password, Username, is_email, is_password, is_username};
use gate_domain::config::{PasswordRules, UsernameRules};
use gate_domain::rules::{CharClasses, LengthBounds};

#[test]
fn username_failure_names_category_and_length() {
    let err = Username::parse("ab").unwrap_err();
    assert_eq!(err.category(), "username");

    let text = err.to_string();
    assert!(text.contains("username"), "missing category in: {text}");
    assert!(text.contains("length"), "missing reason in: {text}");
}

#[test]
fn username_success_preserves_raw_text() {
    let name = Username::parse("abc").unwrap();
    assert_eq!(name.as_str(), "abc");
    assert_eq!(name.to_string(), "abc");
    assert_eq!(name.into_inner(), "abc");
}

#[test]
fn username_boundaries() {
    assert!(Username::parse("ab").is_err());
    assert!(Username::parse("abc").is_ok());
    assert!(Username::parse("x".repeat(20)).is_ok());
    assert!(Username::parse("x".repeat(21)).is_err());
}

#[test]
fn password_boundaries() {
    // One character short of the minimum.
    assert!(!is_password("World12"));
    assert!(is_password("World123"));
    assert!(is_password(&("Wo1".to_owned() + &"x".repeat(17))));
    assert!(!is_password(&("Wo1".to_owned() + &"x".repeat(18))));
}

#[test]
fn password_requires_every_class() {
    // Valid reference, then each class removed in turn.
    assert!(is_password("Passw0rd"));
    assert!(!is_password("passw0rd"), "no uppercase");
    assert!(!is_password("PASSW0RD"), "no lowercase");
    assert!(!is_password("Password"), "no digit");
}

#[test]
fn password_failure_reasons_name_missing_classes() {
    let err = Password::parse("PASSWORD1").unwrap_err();
    assert!(err.to_string().contains("lowercase letter"));

    let err = Password::parse("password").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("uppercase letter"));
    assert!(text.contains("digit"));
}

#[test]
fn predicates_are_total_over_odd_input() {
    for raw in ["", "\0\0\0", "päßwörter", "🦀🦀🦀🦀", &"@".repeat(1000)] {
        // The answers only matter in that they exist and are stable.
        assert_eq!(is_username(raw), is_username(raw));
        assert_eq!(is_password(raw), is_password(raw));
        assert_eq!(is_email(raw), is_email(raw));
    }
}

#[test]
fn char_counting_admits_multibyte_boundaries() {
    // Three crabs are three chars, not twelve bytes.
    assert!(is_username("🦀🦀🦀"));
    assert!(!is_username("🦀🦀"));
}

#[test]
fn configured_rules_override_the_defaults() {
    let tight = UsernameRules { bounds: LengthBounds { min_chars: 5, max_chars: 8 } };
    assert!(Username::parse_with("abcd", &tight).is_err());
    assert!(Username::parse_with("abcde", &tight).is_ok());

    let relaxed = PasswordRules {
        bounds: LengthBounds { min_chars: 4, max_chars: 64 },
        required: CharClasses::LOWER | CharClasses::DIGIT,
    };
    assert!(Password::parse_with("ab12", &relaxed).is_ok());
    assert!(Password::parse_with("abcd", &relaxed).is_err());
}

#[test]
fn email_structural_cases() {
    assert_eq!(EmailAddress::parse("max@example.com").unwrap().as_str(), "max@example.com");

    for bad in ["hello", "@example.com", "max@example", "max@.com", "a@b@c.com"] {
        let err = EmailAddress::parse(bad).unwrap_err();
        assert_eq!(err.category(), "email", "for input {bad:?}");
    }
}
