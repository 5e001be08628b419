//! Indentation of nested block bodies.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Every line is emitted flush-left.
    #[default]
    Flat,
    /// One tab per nesting level.
    Tab,
}

impl Indent {
    pub const NONE: Self = Self::Flat;

    /// gofmt layout.
    pub const GO: Self = Self::Tab;

    /// Text written once per nesting level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "",
            Self::Tab => "\t",
        }
    }
}
