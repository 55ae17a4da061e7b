//! Generated file I/O.

use std::{
    fs::{create_dir_all, read},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// What happened to an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already held identical content and was not touched.
    Unchanged,
}

/// A generated file handle.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io { path: self.path.clone(), source }
    }

    /// Current content, or `None` if the file does not exist yet.
    pub fn read(&self) -> Result<Option<Vec<u8>>> {
        match read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            create_dir_all(parent)
                .map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Replace the file with `data` via a sibling temp file and a rename.
    pub fn write_atomic(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(data.as_ref()).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Persist { path: self.path.clone(), source: e.error })?;
        Ok(())
    }

    /// Write `data` unless the file already holds exactly these bytes.
    pub fn write_if_changed(&self, data: impl AsRef<[u8]>) -> Result<WriteOutcome> {
        let data = data.as_ref();
        if self.read()?.as_deref() == Some(data) {
            debug!("{} is up to date", self.path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        self.write_atomic(data)?;
        Ok(WriteOutcome::Written)
    }
}

impl AsRef<Path> for OutputFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
