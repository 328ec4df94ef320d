use core::fmt;

/// A JSON number kept as the literal text it was written with.
///
/// Nothing is converted to `f64`, so values beyond floating-point range or precision survive
/// intact. Two numbers are equal only when their literals are identical: `12423434` and
/// `1.2423434e+07` denote the same quantity but are different values here, as are `1E5`
/// and `1e+5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(Box<str>);

impl Number {
    /// Wrap a literal that has already been checked against the JSON number grammar.
    pub(crate) fn from_literal(literal: &str) -> Self {
        Number(literal.into())
    }

    /// The literal as it appeared in the source document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
