mod number;

use ahash::AHashMap;
pub use number::Number;
use serde::de::Error as _;
use serde_json::value::RawValue;

/// Containers nested deeper than this are rejected.
///
/// Equal to the number of levels `serde_json` accepts with its default recursion limit, so a
/// document that parses here also decodes into any target.
pub(crate) const MAX_DEPTH: usize = 127;

/// Canonical parse tree of a JSON document, built for comparison.
///
/// Strings hold decoded text, so escaping differences disappear. Object members are
/// stored in a hash map: duplicate keys resolve to the last occurrence and member order
/// is not retained.
#[derive(Debug, Clone)]
pub enum ParsedNode {
    Null,
    Bool(bool),
    Number(Number),
    String(Box<str>),
    Array(Box<[ParsedNode]>),
    Object(AHashMap<Box<str>, ParsedNode>),
}

impl ParsedNode {
    /// Parse `text` into a tree, keeping every number literal verbatim.
    ///
    /// # Errors
    ///
    /// Returns the decoder error if `text` is not a single well-formed JSON value, contains
    /// an undecodable string escape, or nests containers deeper than the recursion limit.
    pub fn parse(text: &str) -> Result<ParsedNode, serde_json::Error> {
        // The whole document is checked for syntax here, so positions in syntax errors are
        // relative to `text`.
        let raw: &RawValue = serde_json::from_str(text)?;
        ParsedNode::from_raw(raw, 0)
    }

    /// Build a node from the exact source slice of one value.
    fn from_raw(raw: &RawValue, depth: usize) -> Result<ParsedNode, serde_json::Error> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'{' | b'[') if depth >= MAX_DEPTH => {
                Err(serde_json::Error::custom("recursion limit exceeded"))
            }
            Some(b'{') => {
                let members: AHashMap<String, &RawValue> = serde_json::from_str(text)?;
                members
                    .into_iter()
                    .map(|(key, value)| {
                        ParsedNode::from_raw(value, depth + 1)
                            .map(|node| (key.into_boxed_str(), node))
                    })
                    .collect::<Result<AHashMap<_, _>, _>>()
                    .map(ParsedNode::Object)
            }
            Some(b'[') => {
                let items: Vec<&RawValue> = serde_json::from_str(text)?;
                items
                    .into_iter()
                    .map(|item| ParsedNode::from_raw(item, depth + 1))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|items| ParsedNode::Array(items.into_boxed_slice()))
            }
            Some(b'"') => {
                let value: String = serde_json::from_str(text)?;
                Ok(ParsedNode::String(value.into_boxed_str()))
            }
            Some(b't' | b'f') => serde_json::from_str(text).map(ParsedNode::Bool),
            Some(b'n') => Ok(ParsedNode::Null),
            // The outer parse has already checked the number grammar.
            _ => Ok(ParsedNode::Number(Number::from_literal(text))),
        }
    }
}

impl PartialEq for ParsedNode {
    fn eq(&self, other: &Self) -> bool {
        crate::compare::equal(self, other)
    }
}

impl Eq for ParsedNode {}
