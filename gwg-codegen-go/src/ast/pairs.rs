//! Typed names and the parameter/result lists built from them.

use std::fmt;

/// A `name type` pair, or a bare `type` when the name is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// An unnamed pair, e.g. a bare result type.
    pub fn ty(right: impl Into<String>) -> Self {
        Self::new(String::new(), right)
    }

    pub fn with_left(mut self, left: impl Into<String>) -> Self {
        self.left = left.into();
        self
    }

    pub fn with_right(mut self, right: impl Into<String>) -> Self {
        self.right = right.into();
        self
    }

    pub fn is_named(&self) -> bool {
        !self.left.is_empty()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left.is_empty() {
            write!(f, "{}", self.right)
        } else {
            write!(f, "{} {}", self.left, self.right)
        }
    }
}

fn join(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Function or method parameters, rendered comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pairs: Vec<Pair>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    pub fn add_all(mut self, pairs: impl IntoIterator<Item = Pair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<Pair> for Parameters {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self::new().add_all(iter)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.pairs))
    }
}

/// Function or method results.
///
/// A single unnamed result renders bare (`int`); a single named result or
/// several results render parenthesized (`(n int)`, `(int, error)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outputs {
    pairs: Vec<Pair>,
}

impl Outputs {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    pub fn add_all(mut self, pairs: impl IntoIterator<Item = Pair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Results joined without the arity shortcut, as used in prototypes.
    pub(crate) fn joined(&self) -> String {
        join(&self.pairs)
    }
}

impl FromIterator<Pair> for Outputs {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self::new().add_all(iter)
    }
}

impl fmt::Display for Outputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pairs.as_slice() {
            [] => Ok(()),
            [single] if !single.is_named() => write!(f, "{}", single.right),
            pairs => write!(f, "({})", join(pairs)),
        }
    }
}
