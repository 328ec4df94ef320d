//! # jsontypes
//!
//! String value types holding raw JSON text, with RFC 7159 validation and semantic equality.
//!
//! ```
//! use jsontypes::{AttributePath, Normalized};
//!
//! let current = Normalized::new_value(r#"{"a": 1, "b": [1, 2]}"#);
//! let given = Normalized::new_value(r#"{ "b": [1, 2], "a": 1 }"#);
//!
//! assert!(current.validate_attribute(AttributePath::root("json")).is_empty());
//! let (matches, diags) = current.string_semantic_equals(&given.into());
//! assert!(matches);
//! assert!(diags.is_empty());
//! ```
//!
//! Numbers are compared by their literal text, never through `f64`, so values beyond
//! floating-point range compare without loss.
mod compare;
mod diag;
mod error;
mod path;
mod types;
mod validate;
mod value;

pub use compare::{semantic_equals, ValueKind};
pub use diag::{Diagnostic, DiagnosticKind, Diagnostics, FuncError};
pub use error::{ComparisonError, SyntaxError, UnmarshalError};
pub use path::{AttributePath, PathStep};
pub use types::{
    Exact, ExactType, Normalized, NormalizedType, StringValuable, StringValue, ValueState,
};
pub use validate::{is_valid, validate};
pub use value::{Number, ParsedNode};
