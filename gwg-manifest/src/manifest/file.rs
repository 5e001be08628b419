use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A gwg.toml file on disk and the manifest parsed from it.
pub struct GwgToml {
    path: PathBuf,
    manifest: Manifest,
}

impl GwgToml {
    /// Open and parse a gwg.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest, used as the default output root.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
