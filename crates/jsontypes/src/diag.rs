//! Non-fatal reports handed back to the host.
//!
//! Every failure inside the value wrappers ends up here, always at error level. The host
//! decides whether a diagnostic aborts the operation.
use core::fmt;

use crate::AttributePath;

/// What went wrong, for callers that branch on diagnostics instead of reading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A known value is not valid JSON.
    InvalidJsonString,
    /// The semantic equality partner has an unexpected value type.
    SemanticEqualityTypeError,
    /// One of the semantic equality operands is not valid JSON.
    SemanticEqualityParseError,
    /// Unmarshalling a null value.
    UnmarshalNullError,
    /// Unmarshalling an unknown value.
    UnmarshalUnknownError,
    /// The decoder rejected the value for the requested target.
    UnmarshalDecodeError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    summary: String,
    detail: String,
    path: Option<AttributePath>,
}

impl Diagnostic {
    pub(crate) fn error(
        kind: DiagnosticKind,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    pub(crate) fn attribute_error(
        path: AttributePath,
        kind: DiagnosticKind,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path),
            ..Self::error(kind, summary, detail)
        }
    }

    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }
    /// Short, human-readable title.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
    /// Attribute the diagnostic refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&AttributePath> {
        self.path.as_ref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{path}: ")?;
        }
        write!(f, "{}: {}", self.summary, self.detail)
    }
}

/// An ordered collection of [`Diagnostic`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move all diagnostics from `other` to the end of `self`.
    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Every diagnostic is an error, so this is `!self.is_empty()`.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.0.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Error raised for an invalid provider-defined function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncError {
    text: String,
    position: Option<usize>,
}

impl FuncError {
    pub(crate) fn argument(position: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: Some(position),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based position of the offending argument.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for FuncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::error::Error for FuncError {}
