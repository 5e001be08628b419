//! String-backed Go enumerations.

use gwg_codegen::builder::{CodeFragment, Renderable};

/// A named `string` type plus one typed constant per value.
///
/// Each constant's identifier and its literal are the same text. Manifest
/// loading rejects values that are not Go identifiers; direct builder callers
/// must supply valid ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enums {
    title: String,
    values: Vec<String>,
}

impl Enums {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            values: Vec::new(),
        }
    }

    pub fn add_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn add_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Renderable for Enums {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::Line(format!("type {} string", self.title))];
        fragments.extend(self.values.iter().map(|value| {
            CodeFragment::Line(format!("const {} {} = \"{}\"", value, self.title, value))
        }));
        fragments
    }
}
