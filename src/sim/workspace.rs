//! Scratch directories for simulator runs
//!
//! Each run gets its own fresh directory holding the generated source and
//! whatever the toolchain builds next to it. The directory is removed when
//! the [`Workspace`] is dropped, on success and failure alike.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::errors::SimError;

/// File name the generated source is written to
pub const SOURCE_FILE: &str = "V.v";

#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    source: PathBuf,
}

impl Workspace {
    /// Create a fresh directory and write `source_text` into it
    pub fn create(source_text: &str) -> Result<Self, SimError> {
        let dir = tempfile::Builder::new()
            .prefix("verepl-")
            .tempdir()
            .map_err(SimError::Workspace)?;
        let source = dir.path().join(SOURCE_FILE);
        fs::write(&source, source_text).map_err(SimError::Workspace)?;

        debug!(path = %dir.path().display(), "created scratch workspace");
        Ok(Workspace { dir, source })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the generated source file
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }
}
