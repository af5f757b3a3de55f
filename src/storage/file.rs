use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use super::OutputStore;
use crate::error::{Clip2KmlError, Result};

/// Writes placemarks to the local filesystem.
#[derive(Debug, Default)]
pub struct FsOutputStore;

impl OutputStore for FsOutputStore {
    fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            info!("creating output directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Clip2KmlError::file_write(dir, e))?;
        }
        Ok(())
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Uniquely named sibling, so existing files in the directory are untouched.
        let mut temp =
            NamedTempFile::new_in(dir).map_err(|e| Clip2KmlError::file_write(dir, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| Clip2KmlError::file_write(temp.path(), e))?;

        temp.persist(path)
            .map_err(|e| Clip2KmlError::file_write(path, e.error))?;

        Ok(())
    }
}
