use gate_domain::constants::{EMAIL, PASSWORD, USERNAME};
use gate_domain::rules::{CharClasses, LengthBounds};

#[test]
fn constants_match_category_strings() {
    assert_eq!(USERNAME, "username");
    assert_eq!(PASSWORD, "password");
    assert_eq!(EMAIL, "email");
}

#[test]
fn scan_reports_present_classes() {
    assert_eq!(CharClasses::scan(""), CharClasses::empty());
    assert_eq!(CharClasses::scan("abc"), CharClasses::LOWER);
    assert_eq!(CharClasses::scan("ABC123"), CharClasses::UPPER | CharClasses::DIGIT);
    assert_eq!(CharClasses::scan("aB3"), CharClasses::ALL);
    // Non-ASCII contributes nothing.
    assert_eq!(CharClasses::scan("päßwörter"), CharClasses::LOWER);
}

#[test]
fn names_follow_declaration_order() {
    let missing = CharClasses::ALL - CharClasses::LOWER;
    assert_eq!(missing.names(), vec!["uppercase letter", "digit"]);
    assert!(CharClasses::empty().names().is_empty());
}

#[test]
fn classes_roundtrip_as_bits() {
    let classes = CharClasses::UPPER | CharClasses::DIGIT;
    let encoded = serde_json::to_string(&classes).expect("serialize");
    assert_eq!(encoded, "5");
    let decoded: CharClasses = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, classes);
}

#[test]
fn classes_parse_from_names() {
    assert_eq!(CharClasses::from("upper"), CharClasses::UPPER);
    assert_eq!(CharClasses::from("*"), CharClasses::ALL);
    assert_eq!(CharClasses::from("unknown"), CharClasses::empty());
}

#[test]
fn bounds_are_inclusive() {
    let bounds = LengthBounds { min_chars: 3, max_chars: 20 };
    assert!(!bounds.admits(2));
    assert!(bounds.admits(3));
    assert!(bounds.admits(20));
    assert!(!bounds.admits(21));
}
