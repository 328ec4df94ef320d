//! String value types with JSON semantics, and the host string type they wrap.
mod exact;
mod normalized;

use core::fmt;

pub use exact::{Exact, ExactType};
pub use normalized::{Normalized, NormalizedType};
use serde::de::DeserializeOwned;

use crate::{
    compare::ValueKind, diag::FuncError, validate, AttributePath, Diagnostic, DiagnosticKind,
    Diagnostics, SyntaxError, UnmarshalError,
};

/// Presence state of a string value.
///
/// The default is [`ValueState::Null`]: a zero-initialized value is absent, not empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ValueState {
    /// The value is absent.
    #[default]
    Null,
    /// The value exists but is not resolved yet.
    Unknown,
    /// A concrete string. Not necessarily valid JSON until validated.
    Known(String),
}

impl ValueState {
    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            ValueState::Known(text) => Some(text),
            ValueState::Null | ValueState::Unknown => None,
        }
    }
}

impl fmt::Display for ValueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueState::Null => f.write_str("<null>"),
            ValueState::Unknown => f.write_str("<unknown>"),
            ValueState::Known(text) => write!(f, "{text:?}"),
        }
    }
}

/// A plain host string without JSON semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringValue {
    state: ValueState,
}

impl StringValue {
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
    pub fn state(&self) -> &ValueState {
        &self.state
    }
    pub(crate) fn into_state(self) -> ValueState {
        self.state
    }
}

impl From<ValueState> for StringValue {
    fn from(state: ValueState) -> Self {
        Self { state }
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

/// Any string-like value a semantic equality check may be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringValuable {
    String(StringValue),
    Exact(Exact),
    Normalized(Normalized),
}

impl StringValuable {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            StringValuable::String(_) => ValueKind::String,
            StringValuable::Exact(_) => ValueKind::Exact,
            StringValuable::Normalized(_) => ValueKind::Normalized,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ValueState {
        match self {
            StringValuable::String(value) => value.state(),
            StringValuable::Exact(value) => value.state(),
            StringValuable::Normalized(value) => value.state(),
        }
    }
}

impl From<StringValue> for StringValuable {
    fn from(value: StringValue) -> Self {
        StringValuable::String(value)
    }
}

impl From<Exact> for StringValuable {
    fn from(value: Exact) -> Self {
        StringValuable::Exact(value)
    }
}

impl From<Normalized> for StringValuable {
    fn from(value: Normalized) -> Self {
        StringValuable::Normalized(value)
    }
}

const INVALID_JSON_SUMMARY: &str = "Invalid JSON String Value";

fn invalid_json_detail(text: &str) -> String {
    format!(
        "A string value was provided that is not valid JSON string format (RFC 7159).\n\n\
         Given Value: {text}\n"
    )
}

/// Null and unknown values have nothing to validate.
fn check_known(state: &ValueState) -> Result<(), SyntaxError> {
    match state {
        ValueState::Known(text) => validate(text),
        ValueState::Null | ValueState::Unknown => Ok(()),
    }
}

pub(crate) fn validate_attribute(state: &ValueState, path: AttributePath) -> Diagnostics {
    match check_known(state) {
        Ok(()) => Diagnostics::new(),
        Err(error) => {
            tracing::debug!(%path, %error, "attribute is not valid JSON");
            Diagnostic::attribute_error(
                path,
                DiagnosticKind::InvalidJsonString,
                INVALID_JSON_SUMMARY,
                invalid_json_detail(error.input()),
            )
            .into()
        }
    }
}

pub(crate) fn validate_parameter(state: &ValueState, position: usize) -> Option<FuncError> {
    let error = check_known(state).err()?;
    tracing::debug!(position, %error, "function argument is not valid JSON");
    Some(FuncError::argument(
        position,
        format!(
            "{INVALID_JSON_SUMMARY}: {}",
            invalid_json_detail(error.input())
        ),
    ))
}

pub(crate) fn decode<T: DeserializeOwned>(state: &ValueState) -> Result<T, UnmarshalError> {
    match state {
        ValueState::Null => Err(UnmarshalError::NullSource),
        ValueState::Unknown => Err(UnmarshalError::UnknownSource),
        ValueState::Known(text) => Ok(serde_json::from_str(text)?),
    }
}

pub(crate) fn unmarshal_into<T: DeserializeOwned>(
    state: &ValueState,
    target: &mut T,
    summary: &str,
) -> Diagnostics {
    match decode(state) {
        Ok(value) => {
            *target = value;
            Diagnostics::new()
        }
        Err(error) => {
            tracing::debug!(%error, "failed to unmarshal JSON string");
            let kind = match error {
                UnmarshalError::NullSource => DiagnosticKind::UnmarshalNullError,
                UnmarshalError::UnknownSource => DiagnosticKind::UnmarshalUnknownError,
                UnmarshalError::DecodeFailure(_) => DiagnosticKind::UnmarshalDecodeError,
            };
            Diagnostic::error(kind, summary, error.to_string()).into()
        }
    }
}
