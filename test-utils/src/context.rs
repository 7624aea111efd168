use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary `.env` file created by `DotenvBuilder`.
///
/// The backing directory is deleted when the fixture is dropped, so keep the
/// fixture alive for as long as the path is used.
pub struct DotenvFixture {
    /// Owns the temporary directory. Never read, only held for cleanup on drop.
    _dir: TempDir,

    /// Location of the `.env` file inside `_dir`. May not exist if the builder
    /// was told to skip writing it.
    path: PathBuf,
}

impl DotenvFixture {
    pub(crate) fn new(dir: TempDir, path: PathBuf) -> Self {
        Self { _dir: dir, path }
    }

    /// Path of the `.env` file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
