use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use digest_logging::digest_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path:?} missing or not writable: {message}")]
    OutputDir { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let dir_error = |message: String| PersistError::OutputDir {
        path: dir.to_path_buf(),
        message,
    };
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| dir_error(e.to_string()))?;
        if !meta.is_dir() {
            return Err(dir_error("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| dir_error(e.to_string()))?;
    }
    Ok(())
}

/// A directory that generated files are written into.
///
/// Each write goes to a temp file in the same directory which is renamed over
/// the target on success and removed on drop otherwise, so a failed write
/// never leaves a half-written file or an open handle behind.
#[derive(Debug, Clone)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    /// Creates the directory if absent.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        ensure_output_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Writes `content` to `{dir}/{filename}`, replacing any existing file.
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        digest_debug!("Wrote {} bytes to {:?}", content.len(), target);
        Ok(target)
    }
}
