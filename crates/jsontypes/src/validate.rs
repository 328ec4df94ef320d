use crate::{ParsedNode, SyntaxError};

/// Check that `text` is exactly one JSON value as defined by RFC 7159.
///
/// Surrounding whitespace is allowed, anything else after the value is not.
/// The document goes through the same parser as [`semantic_equals`](crate::semantic_equals),
/// so anything accepted here can be compared with itself: strings with unpaired UTF-16
/// surrogate escapes and containers nested more than 127 levels deep are rejected.
///
/// # Errors
///
/// Returns [`SyntaxError`] carrying the parser's description of the first
/// offending position together with the original `text`.
pub fn validate(text: &str) -> Result<(), SyntaxError> {
    match ParsedNode::parse(text) {
        Ok(_) => Ok(()),
        Err(error) => {
            tracing::debug!(
                line = error.line(),
                column = error.column(),
                %error,
                "rejected JSON string"
            );
            Err(SyntaxError::new(text, error))
        }
    }
}

/// Shorthand for `validate(text).is_ok()`.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}
