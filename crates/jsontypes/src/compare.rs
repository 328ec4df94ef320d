use core::fmt;

use crate::{ComparisonError, ParsedNode};

/// Compare two JSON documents by meaning rather than by bytes.
///
/// Whitespace, member order and string escaping are ignored. Array order, key casing,
/// number literals and the set of members are not.
///
/// # Errors
///
/// Returns [`ComparisonError::InvalidJson`] if either document fails to parse. `lhs` is
/// parsed first, so its error wins when both are malformed.
pub fn semantic_equals(lhs: &str, rhs: &str) -> Result<bool, ComparisonError> {
    let lhs = ParsedNode::parse(lhs).map_err(|error| {
        tracing::debug!(%error, "left operand is not valid JSON");
        error
    })?;
    let rhs = ParsedNode::parse(rhs).map_err(|error| {
        tracing::debug!(%error, "right operand is not valid JSON");
        error
    })?;
    Ok(equal(&lhs, &rhs))
}

/// Structural equality of two parse trees.
pub(crate) fn equal(lhs: &ParsedNode, rhs: &ParsedNode) -> bool {
    match (lhs, rhs) {
        (ParsedNode::Null, ParsedNode::Null) => true,
        (ParsedNode::Bool(l), ParsedNode::Bool(r)) => l == r,
        (ParsedNode::Number(l), ParsedNode::Number(r)) => l == r,
        (ParsedNode::String(l), ParsedNode::String(r)) => l == r,
        (ParsedNode::Array(l), ParsedNode::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| equal(l, r))
        }
        (ParsedNode::Object(l), ParsedNode::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            // Equal sizes, so every left key present on the right means identical key sets.
            for (key, lv) in l {
                match r.get(key) {
                    Some(rv) if equal(lv, rv) => {}
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

/// The closed set of string-like value types a comparison partner may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A plain host string without JSON semantics.
    String,
    Exact,
    Normalized,
}

impl ValueKind {
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::String => "basetypes::StringValue",
            ValueKind::Exact => "jsontypes::Exact",
            ValueKind::Normalized => "jsontypes::Normalized",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
