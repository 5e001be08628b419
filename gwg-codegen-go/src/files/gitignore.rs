use std::path::{Path, PathBuf};

use gwg_core::{FileRules, GeneratedFile};

/// The .gitignore file
pub struct GitIgnore {
    pub content: String,
}

impl GitIgnore {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        if self.content.is_empty() || self.content.ends_with('\n') {
            self.content.clone()
        } else {
            format!("{}\n", self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_appends_trailing_newline() {
        assert_eq!(GitIgnore::new("/bin").render(), "/bin\n");
        assert_eq!(GitIgnore::new("/bin\n*.out\n").render(), "/bin\n*.out\n");
    }

    #[test]
    fn test_never_overwrites() {
        assert_eq!(GitIgnore::new("").rules(), FileRules::if_missing());
        assert_eq!(
            GitIgnore::new("").path(Path::new("shop")),
            Path::new("shop/.gitignore")
        );
    }
}
