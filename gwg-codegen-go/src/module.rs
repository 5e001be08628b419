//! A Go module on disk: `go.mod`, `.gitignore` and one package.

use std::path::{Path, PathBuf};

use gwg_core::{GeneratedFile, GoVersion, PersistenceError, WriteResult};
use tracing::{debug, info};

use crate::{
    Package,
    files::{GitIgnore, GoMod, PackageFile},
};

/// A file that would be generated, with its path relative to the module root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Outcome of writing one module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Module metadata wrapping the package it contains.
pub struct Mod {
    module: String,
    go: GoVersion,
    gitignore: String,
    package: Package,
}

impl Mod {
    pub fn new(module: impl Into<String>, package: Package) -> Self {
        Self {
            module: module.into(),
            go: GoVersion::default(),
            gitignore: String::new(),
            package,
        }
    }

    pub fn with_go(mut self, go: GoVersion) -> Self {
        self.go = go;
        self
    }

    pub fn with_gitignore(mut self, gitignore: impl Into<String>) -> Self {
        self.gitignore = gitignore.into();
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn go(&self) -> &GoVersion {
        &self.go
    }

    pub fn gitignore(&self) -> &str {
        &self.gitignore
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Directory of the package file relative to the module root.
    ///
    /// `main` lives at the root, every other package in a directory named
    /// after it.
    pub fn package_dir(&self) -> Option<&str> {
        match self.package.name() {
            "main" => None,
            name => Some(name),
        }
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> =
            vec![Box::new(GoMod::new(&self.module).with_go(self.go.clone()))];

        if !self.gitignore.is_empty() {
            files.push(Box::new(GitIgnore::new(&self.gitignore)));
        }

        let package_file = match self.package_dir() {
            Some(dir) => PackageFile::new(&self.package).in_dir(dir),
            None => PackageFile::new(&self.package),
        };
        files.push(Box::new(package_file));
        files
    }

    /// Render every module file without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Write every module file under `base`.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn write(&self, base: &Path) -> Result<Vec<WrittenFile>, PersistenceError> {
        info!(module = %self.module, base = %base.display(), "writing module");

        self.files()
            .iter()
            .map(|file| -> Result<WrittenFile, PersistenceError> {
                let path = file.path(base);
                let result = file.write(base)?;
                debug!(path = %path.display(), ?result, "module file");
                Ok(WrittenFile { path, result })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gwg_codegen::Renderable;
    use tempfile::TempDir;

    use super::*;
    use crate::ast::{Func, Import};

    fn shop() -> Mod {
        Mod::new(
            "github.com/acme/shop",
            Package::new("model").add_code(Func::new("Ping").add_line("return")),
        )
        .with_go(GoVersion::new(1, 21))
        .with_gitignore("/bin\n")
    }

    #[test]
    fn test_preview_lists_module_files() {
        let files = shop().preview();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["go.mod", ".gitignore", "model/model.go"]);
        assert_eq!(files[0].content, "module github.com/acme/shop\n\ngo 1.21\n");
        assert_eq!(files[1].content, "/bin\n");
        assert_eq!(files[2].content, shop().package().render());
    }

    #[test]
    fn test_empty_gitignore_is_not_generated() {
        let m = Mod::new("example.com/m", Package::new("util"));
        let paths: Vec<_> = m.preview().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, ["go.mod", "util/util.go"]);
    }

    #[test]
    fn test_main_package_lives_at_root() {
        let m = Mod::new(
            "example.com/cmd",
            Package::new("main").add_import(Import::new().add("fmt")),
        );
        assert_eq!(m.package_dir(), None);
        assert_eq!(m.preview().last().unwrap().path, "main.go");
    }

    #[test]
    fn test_write_module() {
        let temp = TempDir::new().unwrap();

        let written = shop().write(temp.path()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|w| w.result == WriteResult::Written));
        assert_eq!(
            fs::read_to_string(temp.path().join("go.mod")).unwrap(),
            "module github.com/acme/shop\n\ngo 1.21\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("model/model.go")).unwrap(),
            "package model\nfunc Ping() {\nreturn\n}\n"
        );
    }

    #[test]
    fn test_write_keeps_existing_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "custom\n").unwrap();

        let written = shop().write(temp.path()).unwrap();

        assert_eq!(written[1].result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "custom\n"
        );
    }
}
