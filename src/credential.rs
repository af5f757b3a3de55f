use std::fs;
use std::path::PathBuf;

use crate::error::{Clip2KmlError, Result};

pub trait CredentialSource {
    /// Return the API key, trimmed and non-empty.
    fn read_credential(&self) -> Result<String>;
}

/// API key stored as the sole content of a text file.
#[derive(Debug, Clone)]
pub struct FileCredential {
    path: PathBuf,
}

impl FileCredential {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialSource for FileCredential {
    fn read_credential(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Clip2KmlError::config(format!(
                "failed to read API key file {}: {e}",
                self.path.display()
            ))
        })?;

        let key = content.trim();
        if key.is_empty() {
            return Err(Clip2KmlError::config(format!(
                "API key file {} is empty",
                self.path.display()
            )));
        }

        Ok(key.to_string())
    }
}
