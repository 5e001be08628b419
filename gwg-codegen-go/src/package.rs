//! Package abstraction: the unit that becomes one `.go` file.

use std::path::Path;

use gwg_codegen::{CodeFragment, Renderable};
use gwg_core::{GeneratedFile, PersistenceError, WriteResult};

use crate::{ast::Import, files::PackageFile};

/// A Go package: header, imports and an ordered list of code elements.
///
/// Any [`Renderable`] can be registered as a code element; elements render
/// in registration order after all imports.
///
/// # Example
///
/// ```
/// use gwg_codegen_go::{Package, Renderable, ast::{Func, Import, Pair}};
///
/// let package = Package::new("model")
///     .add_import(Import::new().add("fmt"))
///     .add_code(Func::new("Hello").add_output(Pair::ty("string")).add_line("return \"hi\""));
///
/// assert_eq!(
///     package.render(),
///     "package model\nimport \"fmt\"\nfunc Hello() string {\nreturn \"hi\"\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct Package {
    name: String,
    imports: Vec<Import>,
    codes: Vec<Box<dyn Renderable>>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            codes: Vec::new(),
        }
    }

    pub fn add_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn add_imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Register a code element (function, struct, interface, enum, line...).
    pub fn add_code<R: Renderable + 'static>(mut self, code: R) -> Self {
        self.codes.push(Box::new(code));
        self
    }

    pub fn add_codes<R: Renderable + 'static>(mut self, codes: impl IntoIterator<Item = R>) -> Self {
        for code in codes {
            self.codes.push(Box::new(code));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn codes(&self) -> &[Box<dyn Renderable>] {
        &self.codes
    }

    /// File name this package is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.go", self.name)
    }

    /// Write the rendering to `<dir>/<name>.go`, creating `dir` if needed.
    pub fn write(&self, dir: &Path) -> Result<WriteResult, PersistenceError> {
        PackageFile::new(self).write(dir)
    }

    /// Check if the package has neither imports nor code.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.codes.is_empty()
    }
}

impl Renderable for Package {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::Line(format!("package {}", self.name))];
        fragments.extend(self.imports.iter().flat_map(|i| i.to_fragments()));
        fragments.extend(self.codes.iter().flat_map(|c| c.to_fragments()));
        fragments
    }
}
