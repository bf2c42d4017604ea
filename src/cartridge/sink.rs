//! Output destinations for generated packages.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Destination for generated package files.
///
/// Paths are relative to the package root and always use forward slashes.
/// A sink must create missing parent directories (or their equivalent) and
/// overwrite existing files.
pub trait PackageSink {
    /// Write one file.
    fn write(&mut self, path: &str, contents: &str) -> Result<()>;
}

/// Sink that writes files under a directory on disk.
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackageSink for DirSink {
    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        let dest = self.root.join(path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: dest.display().to_string(),
                source,
            })?;
        }
        fs::write(&dest, contents).map_err(|source| Error::Write {
            path: dest.display().to_string(),
            source,
        })
    }
}

/// Sink that collects files in memory, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a previously written file.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// All written paths, in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl PackageSink for MemorySink {
    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        self.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
