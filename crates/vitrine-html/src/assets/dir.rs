//! Filesystem-backed asset bundle for the debug workflow.

use std::fs;
use std::path::PathBuf;

use super::{AssetError, AssetSource};

/// Asset bundle rooted at a filesystem directory.
///
/// Logical paths resolve relative to the root, so `templates/index.html`
/// reads `<root>/templates/index.html`. Listing is non-recursive and sorted
/// by name for determinism; subdirectories appear in the listing but fail
/// on [`read`](AssetSource::read), which load pipelines skip over.
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    /// Creates a bundle rooted at `root`. The directory is not checked
    /// until the first list or read.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn list(&self, dir: &str) -> Result<Vec<String>, AssetError> {
        let full = self.root.join(dir);
        let entries = fs::read_dir(&full).map_err(|err| AssetError::List {
            dir: full.display().to_string(),
            message: err.to_string(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AssetError::List {
                dir: full.display().to_string(),
                message: err.to_string(),
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let full = self.root.join(path);
        fs::read(&full).map_err(|err| AssetError::Read {
            path: full.display().to_string(),
            message: err.to_string(),
        })
    }
}
