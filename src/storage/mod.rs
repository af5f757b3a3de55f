pub mod file;

use std::path::Path;

use crate::error::Result;

pub use file::FsOutputStore;

/// Destination for generated placemark files.
pub trait OutputStore {
    /// Create `dir` and its parents if missing.
    fn ensure_dir(&mut self, dir: &Path) -> Result<()>;
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}
