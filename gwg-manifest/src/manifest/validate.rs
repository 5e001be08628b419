//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "gwg.toml");
/// ctx.validate_name("Account", "name", "struct")?;
///
/// // For nested validation
/// let nested = ctx.push("Account");
/// nested.validate_name("Save", "name", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Account", "Save"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "method in 'Account'" or just "struct" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of the first `key = "value"` assignment in the source.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_spans(self.source.src(), key, value)
            .first()
            .copied()
    }

    /// Require a non-empty string value.
    pub fn require_non_empty(&self, value: &str, key: &str, what: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("{} cannot be empty", what),
                self.find_span(key, value),
            ));
        }
        Ok(())
    }

    /// Validate that a name is a Go identifier and not a keyword.
    pub fn validate_name(&self, name: &str, key: &str, kind: &str) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(key, name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(key, name),
            ));
        }

        Ok(())
    }
}

/// Go keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find every `key = "value"` (or single-quoted) assignment of `value`.
///
/// Spans cover the value without its quotes and are sorted by offset.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();

    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        // key, " = ", opening quote
        let skip = key.len() + 4;

        for (pos, _) in src.match_indices(&pattern) {
            let standalone = src[..pos]
                .chars()
                .next_back()
                .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
            if standalone {
                spans.push(SourceSpan::from((pos + skip, value.len())));
            }
        }
    }

    spans.sort_by_key(|span| span.offset());
    spans
}

/// Validate that a name is a Go identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name must contain only letters, digits and underscores");
    }

    if is_go_keyword(name) {
        return Some("name is a Go reserved keyword");
    }

    None
}
