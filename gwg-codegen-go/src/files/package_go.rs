use std::path::{Path, PathBuf};

use gwg_codegen::Renderable;
use gwg_core::GeneratedFile;

use crate::Package;

/// The `<name>.go` source file of a package.
pub struct PackageFile<'a> {
    package: &'a Package,
    dir: Option<PathBuf>,
}

impl<'a> PackageFile<'a> {
    /// Place the file directly in the base directory.
    pub fn new(package: &'a Package) -> Self {
        Self { package, dir: None }
    }

    /// Place the file in a subdirectory of the base directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl GeneratedFile for PackageFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) => base.join(dir).join(self.package.file_name()),
            None => base.join(self.package.file_name()),
        }
    }

    fn render(&self) -> String {
        self.package.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let package = Package::new("model");
        assert_eq!(
            PackageFile::new(&package).path(Path::new("out")),
            Path::new("out/model.go")
        );
        assert_eq!(
            PackageFile::new(&package).in_dir("model").path(Path::new("out")),
            Path::new("out/model/model.go")
        );
    }

    #[test]
    fn test_render_matches_package() {
        let package = Package::new("model");
        assert_eq!(PackageFile::new(&package).render(), "package model\n");
    }
}
