//! Error types produced by validation, comparison and unmarshalling.
//!
//! None of these escape the value wrappers: they are converted into
//! [`Diagnostic`](crate::Diagnostic)s there. They are public so the free functions
//! ([`validate`](crate::validate), [`semantic_equals`](crate::semantic_equals)) stay usable
//! on their own.
use crate::compare::ValueKind;

/// Text is not a single well-formed JSON value.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON {input:?}: {source}")]
pub struct SyntaxError {
    input: String,
    #[source]
    source: serde_json::Error,
}

impl SyntaxError {
    pub(crate) fn new(input: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            input: input.into(),
            source,
        }
    }

    /// The rejected text, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// One-based line of the first offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the first offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// Semantic comparison could not produce an answer.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    /// One of the operands is not valid JSON.
    #[error("{source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    /// The comparison partner is not a value of the same flavour.
    #[error("expected value type {expected}, got {got}")]
    TypeMismatch { expected: ValueKind, got: ValueKind },
}

impl From<serde_json::Error> for ComparisonError {
    fn from(source: serde_json::Error) -> Self {
        ComparisonError::InvalidJson { source }
    }
}

/// Decoding a wrapped JSON string into a typed target failed.
#[derive(Debug, thiserror::Error)]
pub enum UnmarshalError {
    #[error("json string value is null")]
    NullSource,
    #[error("json string value is unknown")]
    UnknownSource,
    #[error(transparent)]
    DecodeFailure(#[from] serde_json::Error),
}
