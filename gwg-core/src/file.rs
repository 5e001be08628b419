use std::path::{Path, PathBuf};

use tracing::debug;

use crate::PersistenceError;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult, PersistenceError> {
        write_with_rules(&self.path(base), self.rules(), || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    rules: FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult, PersistenceError> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        debug!(path = %path.display(), "skipping existing file");
        return Ok(WriteResult::Skipped);
    }
    write_file(path, &content())?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Generated code: replace whatever is on disk.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// User-owned files: only create when absent.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.go");

        write_file(&path, "package model\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package model\n");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("x.go");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.go");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_blocked_directory() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("pkg").join("x.go"), "x").unwrap_err();

        assert!(matches!(err, PersistenceError::CreateDir { .. }));
        assert_eq!(err.path(), blocker.join("pkg"));
    }

    #[test]
    fn test_write_file_reports_unwritable_target() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("model.go");
        fs::create_dir(&target).unwrap();

        let err = write_file(&target, "x").unwrap_err();

        assert!(matches!(err, PersistenceError::Write { .. }));
        assert_eq!(err.path(), target);
        assert!(err.to_string().starts_with("failed to write"));
    }

    struct Ignore {
        rules: FileRules,
    }

    impl GeneratedFile for Ignore {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(".gitignore")
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            "/bin\n".to_string()
        }
    }

    #[test]
    fn test_always_overwrite_replaces_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "original").unwrap();

        let file = Ignore {
            rules: FileRules::always_overwrite(),
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "/bin\n"
        );
    }

    #[test]
    fn test_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let file = Ignore {
            rules: FileRules::if_missing(),
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "/bin\n"
        );
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "original").unwrap();

        let file = Ignore {
            rules: FileRules::if_missing(),
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_generated_file_write_uses_base() {
        struct Stub;
        impl GeneratedFile for Stub {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("stub").join("stub.go")
            }

            fn render(&self) -> String {
                "package stub\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        let result = Stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("stub/stub.go")).unwrap(),
            "package stub\n"
        );
    }
}
