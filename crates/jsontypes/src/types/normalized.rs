use core::fmt;

use serde::de::DeserializeOwned;

use super::{StringValuable, StringValue, ValueState};
use crate::{
    compare::{semantic_equals, ValueKind},
    diag::FuncError,
    AttributePath, ComparisonError, Diagnostic, DiagnosticKind, Diagnostics, UnmarshalError,
};

const SEMANTIC_EQUALITY_SUMMARY: &str = "Semantic Equality Check Error";
const UNMARSHAL_SUMMARY: &str = "Normalized JSON Unmarshal Error";

/// A JSON string compared by meaning.
///
/// Two values are semantically equal when their documents parse to the same tree:
/// whitespace, member order and string escaping do not matter, while array order,
/// key casing and number literals do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Normalized {
    state: ValueState,
}

impl Normalized {
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
    /// The known text, or an empty string for null and unknown values.
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

    /// Report a known value that is not valid JSON as an error on `path`.
    #[must_use]
    pub fn validate_attribute(&self, path: AttributePath) -> Diagnostics {
        super::validate_attribute(&self.state, path)
    }

    /// Same check as [`Normalized::validate_attribute`], for a function argument.
    #[must_use]
    pub fn validate_parameter(&self, position: usize) -> Option<FuncError> {
        super::validate_parameter(&self.state, position)
    }

    /// Compare with another string-like value by JSON meaning.
    ///
    /// If either side is null or unknown nothing is parsed, and the values match only
    /// when both are in the same state.
    ///
    /// # Errors
    ///
    /// [`ComparisonError::TypeMismatch`] if `other` is not a [`Normalized`] value,
    /// [`ComparisonError::InvalidJson`] if either text fails to parse.
    pub fn semantic_equals(&self, other: &StringValuable) -> Result<bool, ComparisonError> {
        let StringValuable::Normalized(other) = other else {
            return Err(ComparisonError::TypeMismatch {
                expected: ValueKind::Normalized,
                got: other.kind(),
            });
        };
        match (&self.state, &other.state) {
            (ValueState::Known(lhs), ValueState::Known(rhs)) => semantic_equals(lhs, rhs),
            (lhs, rhs) => Ok(lhs == rhs),
        }
    }

    /// Semantic equality hook: the outcome of [`Normalized::semantic_equals`] with
    /// errors reported as diagnostics and a `false` match.
    #[must_use]
    pub fn string_semantic_equals(&self, new_value: &StringValuable) -> (bool, Diagnostics) {
        match self.semantic_equals(new_value) {
            Ok(matches) => (matches, Diagnostics::new()),
            Err(error) => {
                tracing::debug!(%error, "semantic equality check failed");
                let diagnostic = match error {
                    ComparisonError::TypeMismatch { expected, got } => Diagnostic::error(
                        DiagnosticKind::SemanticEqualityTypeError,
                        SEMANTIC_EQUALITY_SUMMARY,
                        format!(
                            "An unexpected value type was received while performing semantic equality checks. \
                             Please report this to the provider developers.\n\n\
                             Expected Value Type: {expected}\n\
                             Got Value Type: {got}"
                        ),
                    ),
                    ComparisonError::InvalidJson { source } => Diagnostic::error(
                        DiagnosticKind::SemanticEqualityParseError,
                        SEMANTIC_EQUALITY_SUMMARY,
                        format!(
                            "An unexpected error occurred while performing semantic equality checks. \
                             Please report this to the provider developers.\n\n\
                             Error: {source}"
                        ),
                    ),
                };
                (false, diagnostic.into())
            }
        }
    }

    /// Decode the JSON text into `T`.
    ///
    /// # Errors
    ///
    /// Fails without parsing for null and unknown values, otherwise with the decoder error.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, UnmarshalError> {
        super::decode(&self.state)
    }

    /// Decode the JSON text into `target`, which is left untouched on failure.
    pub fn unmarshal_into<T: DeserializeOwned>(&self, target: &mut T) -> Diagnostics {
        super::unmarshal_into(&self.state, target, UNMARSHAL_SUMMARY)
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

/// Value type producing [`Normalized`] values from host strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NormalizedType;

impl NormalizedType {
    /// The null value of this type.
    #[must_use]
    pub fn value_type(self) -> Normalized {
        Normalized::new_null()
    }

    /// Convert a host string, keeping its state. The text is validated separately.
    #[must_use]
    pub fn value_from_string(self, value: StringValue) -> (Normalized, Diagnostics) {
        (
            Normalized {
                state: value.into_state(),
            },
            Diagnostics::new(),
        )
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("jsontypes::NormalizedType")
    }
}
