//! Go import statements.

use gwg_codegen::builder::{CodeFragment, Renderable};

/// A list of imported package paths, one `import "path"` line each.
///
/// Paths keep insertion order and are never merged or de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Import {
    packages: Vec<String>,
}

impl Import {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, path: impl Into<String>) -> Self {
        self.packages.push(path.into());
        self
    }

    pub fn add_all(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.packages.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.packages
            .iter()
            .map(|path| CodeFragment::Line(format!("import \"{}\"", path)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_path() {
        let import = Import::new()
            .add("github.com/gin/gorm")
            .add("github.com/gin/gorm2");
        assert_eq!(
            import.render(),
            "import \"github.com/gin/gorm\"\nimport \"github.com/gin/gorm2\"\n"
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let import = Import::new().add_all(["fmt", "os", "fmt"]);
        assert_eq!(import.packages(), ["fmt", "os", "fmt"]);
        assert_eq!(
            import.render(),
            "import \"fmt\"\nimport \"os\"\nimport \"fmt\"\n"
        );
    }

    #[test]
    fn test_empty_import_renders_nothing() {
        assert_eq!(Import::new().render(), "");
    }
}
