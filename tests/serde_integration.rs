#![cfg(feature = "serde")]

//! Wire-format tests for reports and violations
//!
//! Run with: cargo test --features serde

use proviso::{NonEmptyVec, ValidationResult, Violation};

#[test]
fn test_violation_round_trip() {
    let violation = Violation::new("age must be at least 18");
    let json = serde_json::to_string(&violation).unwrap();
    assert_eq!(json, r#"{"message":"age must be at least 18"}"#);

    let back: Violation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, violation);
}

#[test]
fn test_result_serializes_violations_as_a_plain_array() {
    let result = ValidationResult::from_violation(Violation::new("port must be positive"));
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"Invalid":[{"message":"port must be positive"}]}"#);

    assert_eq!(
        serde_json::to_string(&ValidationResult::Valid).unwrap(),
        r#""Valid""#,
    );
}

#[test]
fn test_invalid_result_round_trip() {
    let result = ValidationResult::from_violations(vec![
        Violation::new("name must not be blank"),
        Violation::new("age must be at least 18"),
    ]);

    let json = serde_json::to_string(&result).unwrap();
    let back: ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_empty_violation_list_is_rejected() {
    let err = serde_json::from_str::<NonEmptyVec<Violation>>("[]").unwrap_err();
    assert!(err.to_string().contains("at least one element"));

    // The structural invariant holds through deserialization too: an invalid
    // result cannot come back with zero violations.
    assert!(serde_json::from_str::<ValidationResult>(r#"{"Invalid":[]}"#).is_err());
}
