use core::fmt;

use serde::de::DeserializeOwned;

use super::{StringValue, ValueState};
use crate::{diag::FuncError, AttributePath, Diagnostics, UnmarshalError};

const UNMARSHAL_SUMMARY: &str = "Exact JSON Unmarshal Error";

/// A JSON string compared byte for byte.
///
/// Validated and decoded like [`Normalized`](crate::Normalized), but any textual
/// difference, including whitespace and member order, makes two values unequal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Exact {
    state: ValueState,
}

impl Exact {
    /// Wrap `value` without validating it.
    #[must_use]
    pub fn new_value(value: impl Into<String>) -> Self {
        Self {
            state: ValueState::Known(value.into()),
        }
    }
    #[must_use]
    pub fn new_null() -> Self {
        Self {
            state: ValueState::Null,
        }
    }
    #[must_use]
    pub fn new_unknown() -> Self {
        Self {
            state: ValueState::Unknown,
        }
    }
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.state == ValueState::Null
    }
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.state == ValueState::Unknown
    }
    #[must_use]
    pub fn value_string(&self) -> &str {
        self.state.as_known().unwrap_or_default()
    }
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.state.as_known()
    }
    #[must_use]
    pub fn state(&self) -> &ValueState {
        &self.state
    }
    #[must_use]
    pub fn to_string_value(&self) -> StringValue {
        StringValue::from(self.state.clone())
    }

    #[must_use]
    pub fn validate_attribute(&self, path: AttributePath) -> Diagnostics {
        super::validate_attribute(&self.state, path)
    }

    #[must_use]
    pub fn validate_parameter(&self, position: usize) -> Option<FuncError> {
        super::validate_parameter(&self.state, position)
    }

    /// # Errors
    ///
    /// Fails without parsing for null and unknown values, otherwise with the decoder error.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, UnmarshalError> {
        super::decode(&self.state)
    }

    pub fn unmarshal_into<T: DeserializeOwned>(&self, target: &mut T) -> Diagnostics {
        super::unmarshal_into(&self.state, target, UNMARSHAL_SUMMARY)
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

/// Value type producing [`Exact`] values from host strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExactType;

impl ExactType {
    #[must_use]
    pub fn value_type(self) -> Exact {
        Exact::new_null()
    }

    #[must_use]
    pub fn value_from_string(self, value: StringValue) -> (Exact, Diagnostics) {
        (
            Exact {
                state: value.into_state(),
            },
            Diagnostics::new(),
        )
    }
}

impl fmt::Display for ExactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("jsontypes::ExactType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticKind;
    use test_case::test_case;

    #[test_case(Exact::default(); "empty struct")]
    #[test_case(Exact::new_null(); "null")]
    #[test_case(Exact::new_unknown(); "unknown")]
    #[test_case(Exact::new_value(r#"{"hello":"world", "array": [1, 2, 3]}"#); "valid json object")]
    #[test_case(Exact::new_value(r#"["hello", "world"]"#); "valid json array")]
    fn valid(value: Exact) {
        assert!(value.validate_attribute(AttributePath::root("test")).is_empty());
        assert_eq!(value.validate_parameter(0), None);
    }

    #[test_case(r#"{"hello":"world""#; "bracket mismatch")]
    #[test_case("notvalidjson123"; "normal string")]
    fn invalid(text: &str) {
        let diags = Exact::new_value(text).validate_attribute(AttributePath::root("test"));
        let diagnostic = diags.iter().next().expect("one diagnostic");
        assert_eq!(diags.len(), 1);
        assert_eq!(diagnostic.kind(), DiagnosticKind::InvalidJsonString);
        assert_eq!(diagnostic.path(), Some(&AttributePath::root("test")));
        assert_eq!(diagnostic.summary(), "Invalid JSON String Value");
        assert_eq!(
            diagnostic.detail(),
            format!(
                "A string value was provided that is not valid JSON string format (RFC 7159).\n\n\
                 Given Value: {text}\n"
            )
        );

        let error = Exact::new_value(text)
            .validate_parameter(0)
            .expect("invalid JSON");
        assert_eq!(error.position(), Some(0));
        assert!(error.text().starts_with("Invalid JSON String Value: "));
        assert!(error.text().ends_with(&format!("Given Value: {text}\n")));
    }

    #[test_case(r#"{"a":1}"#, r#"{ "a" : 1 }"#; "whitespace")]
    #[test_case(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#; "key order")]
    fn textual_differences_matter(lhs: &str, rhs: &str) {
        assert_ne!(Exact::new_value(lhs), Exact::new_value(rhs));
    }

    #[test]
    fn equality() {
        assert_eq!(Exact::new_value("[1]"), Exact::new_value("[1]"));
        assert_eq!(Exact::default(), Exact::new_null());
        assert_ne!(Exact::new_null(), Exact::new_unknown());
    }

    #[test]
    fn type_object() {
        let (value, diags) = ExactType.value_from_string(StringValue::new_value("{}"));
        assert!(diags.is_empty());
        assert_eq!(value.as_str(), Some("{}"));
        assert_eq!(value.to_string_value(), StringValue::new_value("{}"));
        assert!(ExactType.value_type().is_null());
        assert_eq!(ExactType.to_string(), "jsontypes::ExactType");
        assert_eq!(Exact::new_unknown().to_string(), "<unknown>");
    }
}
