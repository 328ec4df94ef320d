use jsontypes::{semantic_equals, AttributePath, DiagnosticKind, Exact, Normalized, UnmarshalError};
use serde::Deserialize;
use test_case::test_case;

#[derive(Debug, Default, PartialEq, Deserialize)]
struct Target {
    hello: String,
    #[serde(rename = "nums")]
    numbers: Vec<i32>,
    #[serde(rename = "test-bool")]
    test: bool,
}

const DOCUMENT: &str = r#"{"hello": "world", "nums": [1, 2, 3], "test-bool": true}"#;

fn expected() -> Target {
    Target {
        hello: "world".into(),
        numbers: vec![1, 2, 3],
        test: true,
    }
}

#[test]
fn normalized_valid_target() {
    let mut target = Target::default();
    let diags = Normalized::new_value(DOCUMENT).unmarshal_into(&mut target);
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(target, expected());
}

#[test]
fn exact_valid_target() {
    let target: Target = Exact::new_value(DOCUMENT).unmarshal().expect("valid target");
    assert_eq!(target, expected());
}

#[test_case(Normalized::new_null(), DiagnosticKind::UnmarshalNullError, "json string value is null"; "null")]
#[test_case(Normalized::new_unknown(), DiagnosticKind::UnmarshalUnknownError, "json string value is unknown"; "unknown")]
#[test_case(Normalized::default(), DiagnosticKind::UnmarshalNullError, "json string value is null"; "default")]
fn normalized_absent(value: Normalized, kind: DiagnosticKind, detail: &str) {
    let mut target = Target::default();
    let diags = value.unmarshal_into(&mut target);
    assert_eq!(diags.len(), 1);
    let diagnostic = diags.iter().next().expect("one diagnostic");
    assert_eq!(diagnostic.kind(), kind);
    assert_eq!(diagnostic.summary(), "Normalized JSON Unmarshal Error");
    assert_eq!(diagnostic.detail(), detail);
    assert_eq!(diagnostic.path(), None);
    assert_eq!(target, Target::default());
}

#[test_case(Exact::new_null(), DiagnosticKind::UnmarshalNullError, "json string value is null"; "null")]
#[test_case(Exact::new_unknown(), DiagnosticKind::UnmarshalUnknownError, "json string value is unknown"; "unknown")]
fn exact_absent(value: Exact, kind: DiagnosticKind, detail: &str) {
    let mut target = Target::default();
    let diags = value.unmarshal_into(&mut target);
    let diagnostic = diags.iter().next().expect("one diagnostic");
    assert_eq!(diagnostic.kind(), kind);
    assert_eq!(diagnostic.summary(), "Exact JSON Unmarshal Error");
    assert_eq!(diagnostic.detail(), detail);
}

#[test]
fn absent_values_are_not_parsed() {
    assert!(matches!(
        Normalized::new_null().unmarshal::<Target>(),
        Err(UnmarshalError::NullSource)
    ));
    assert!(matches!(
        Exact::new_unknown().unmarshal::<Target>(),
        Err(UnmarshalError::UnknownSource)
    ));
}

#[test_case(r#"{"hello": 1, "nums": [], "test-bool": false}"#; "wrong field type")]
#[test_case(r#"{"hello": "world"}"#; "missing field")]
#[test_case(r#"{"hello": "world""#; "invalid json")]
#[test_case(r#"{"hello": "world", "nums": [1.5], "test-bool": true}"#; "float into integer")]
fn decode_failure(text: &str) {
    let mut target = Target::default();
    let diags = Normalized::new_value(text).unmarshal_into(&mut target);
    assert_eq!(diags.len(), 1);
    let diagnostic = diags.iter().next().expect("one diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::UnmarshalDecodeError);
    let error = serde_json::from_str::<Target>(text).expect_err("decoder rejects it");
    assert_eq!(diagnostic.detail(), error.to_string());
    assert_eq!(target, Target::default());
}

#[test]
fn decode_into_value_keeps_big_numbers() {
    let value: serde_json::Value = Normalized::new_value("[1.79769313486231570814527423731704356798070e+309]")
        .unmarshal()
        .expect("valid JSON");
    assert_eq!(
        value.to_string(),
        "[1.79769313486231570814527423731704356798070e+309]"
    );
}

#[test_case(127, true; "at the limit")]
#[test_case(128, false; "one past the limit")]
#[test_case(200, false; "far past the limit")]
fn nesting_limit_is_shared(depth: usize, accepted: bool) {
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let value = Normalized::new_value(&text);
    assert_eq!(value.validate_attribute(AttributePath::root("json")).is_empty(), accepted);
    assert_eq!(semantic_equals(&text, &text).is_ok(), accepted);
    assert_eq!(value.unmarshal::<serde_json::Value>().is_ok(), accepted);
}

#[test_case(r#""\ud800""#; "string")]
#[test_case(r#"{"a": ["\udc00"]}"#; "nested")]
fn lone_surrogate_is_rejected_everywhere(text: &str) {
    let value = Normalized::new_value(text);
    assert!(!value.validate_attribute(AttributePath::root("json")).is_empty());
    assert!(semantic_equals(text, text).is_err());
    assert!(value.unmarshal::<serde_json::Value>().is_err());
}
