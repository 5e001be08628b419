use std::path::{Path, PathBuf};

use gwg_core::{FileRules, GeneratedFile, GoVersion};

/// The go.mod module manifest
pub struct GoMod {
    pub module: String,
    pub go: GoVersion,
}

impl GoMod {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            go: GoVersion::default(),
        }
    }

    pub fn with_go(mut self, go: GoVersion) -> Self {
        self.go = go;
        self
    }
}

impl GeneratedFile for GoMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("go.mod")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!("module {}\n\ngo {}\n", self.module, self.go)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let go_mod = GoMod::new("github.com/acme/shop")
            .with_go(GoVersion::new(1, 21).with_patch(3));
        assert_eq!(go_mod.render(), "module github.com/acme/shop\n\ngo 1.21.3\n");
    }

    #[test]
    fn test_default_go_version() {
        assert_eq!(GoMod::new("example.com/m").render(), "module example.com/m\n\ngo 1.22\n");
    }
}
