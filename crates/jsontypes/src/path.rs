use core::fmt;
use std::borrow::Cow;

/// Location of an attribute inside a configuration, carried by attribute diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

/// A single step of an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// A named attribute or nested block.
    Attribute(Cow<'static, str>),
    /// An element of a list, by position.
    Index(usize),
    /// An element of a map, by key.
    Key(String),
}

impl From<&'static str> for PathStep {
    fn from(value: &'static str) -> Self {
        PathStep::Attribute(Cow::Borrowed(value))
    }
}

impl From<String> for PathStep {
    fn from(value: String) -> Self {
        PathStep::Attribute(Cow::Owned(value))
    }
}

impl From<usize> for PathStep {
    fn from(value: usize) -> Self {
        PathStep::Index(value)
    }
}

impl AttributePath {
    /// Path to a top-level attribute.
    #[must_use]
    pub fn root(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            steps: vec![PathStep::Attribute(name.into())],
        }
    }

    #[must_use]
    pub fn at_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    #[must_use]
    pub fn at_list_index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }

    #[must_use]
    pub fn at_map_key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::Key(key.into()));
        self
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if idx == 0 => f.write_str(name)?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AttributePath::root("test"), "test"; "root")]
    #[test_case(AttributePath::root("config").at_name("json"), "config.json"; "nested")]
    #[test_case(AttributePath::root("items").at_list_index(2), "items[2]"; "list element")]
    #[test_case(
        AttributePath::root("tags").at_map_key("env").at_name("value"),
        r#"tags["env"].value"#;
        "map element"
    )]
    fn display(path: AttributePath, expected: &str) {
        assert_eq!(path.to_string(), expected);
    }

    #[test]
    fn steps() {
        let path = AttributePath::root(String::from("a")).at_list_index(0);
        assert_eq!(path.steps(), &[PathStep::from("a"), PathStep::from(0)]);
    }
}
