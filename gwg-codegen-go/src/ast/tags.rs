//! Struct field tags.

use std::fmt;

/// A single `label:"content"` struct tag entry.
///
/// Content is written as-is; embedded double quotes are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub content: String,
}

impl Tag {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\"{}\"", self.label, self.content)
    }
}
