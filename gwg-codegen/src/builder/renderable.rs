//! Fragment IR shared by every AST node.

use super::{CodeBuilder, Indent};

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line; a newline is appended when emitted.
    Line(String),
    /// A header line, a body nested one level deeper, and an optional
    /// closing line back at the header's level.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

/// Anything that can be turned into code fragments.
///
/// Go declarations implement this so a package can hold them as
/// `Box<dyn Renderable>` and render them in order.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render to text with every line flush-left.
    fn render(&self) -> String {
        self.render_with_indent(Indent::NONE)
    }

    /// Render to text, indenting block bodies with `indent`.
    fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(&self);
        builder.build()
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
