//! Error types for clip2kml.
//!
//! Every pipeline stage returns [`Clip2KmlError`]; the binary wraps it with
//! `anyhow` for the final diagnostic.

use std::path::PathBuf;

use crate::report::Stage;

#[derive(Debug, thiserror::Error)]
pub enum Clip2KmlError {
    /// Missing or empty credential, or an unusable config file.
    #[error("config error: {message}")]
    Config { message: String },

    /// Clipboard unavailable, unreadable or empty.
    #[error("clipboard error: {message}")]
    Clipboard { message: String },

    /// The clipboard text carries no usable text fragment.
    #[error("malformed text fragment: {message}")]
    MalformedFragment { message: String },

    /// Invalid percent escape or non UTF-8 payload.
    #[error("failed to decode '{input}': {reason}")]
    Decode { input: String, reason: String },

    #[error("geocoder request failed: {0}")]
    Transport(String),

    #[error("geocoder returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    #[error("unexpected geocoder response: {0}")]
    Schema(String),

    #[error("toponym '{query}' not found")]
    NotFound { query: String },

    #[error("geocoder response has no canonical name")]
    MissingCanonicalName,

    #[error("invalid coordinates '{pos}'")]
    InvalidCoordinates { pos: String },

    #[error("failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Clip2KmlError>;

impl Clip2KmlError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard {
            message: msg.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedFragment {
            message: msg.into(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// The pipeline stage this error terminates.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config { .. } => Stage::LoadApiKey,
            Self::Clipboard { .. } => Stage::ReadClipboard,
            Self::MalformedFragment { .. } | Self::Decode { .. } => Stage::ExtractToponym,
            Self::Transport(_) | Self::Service { .. } => Stage::QueryGeocoder,
            Self::Schema(_)
            | Self::NotFound { .. }
            | Self::MissingCanonicalName
            | Self::InvalidCoordinates { .. } => Stage::ParseResponse,
            Self::FileWrite { .. } => Stage::WritePlacemark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formatting() {
        let err = Clip2KmlError::config("api key file is empty");
        assert_eq!(err.to_string(), "config error: api key file is empty");

        let err = Clip2KmlError::Service {
            status: 403,
            body: "Invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "geocoder returned HTTP 403: Invalid api key");
    }

    #[test]
    fn test_error_stage() {
        assert_eq!(Clip2KmlError::MissingCanonicalName.stage(), Stage::ParseResponse);
        assert_eq!(
            Clip2KmlError::Transport("timed out".to_string()).stage(),
            Stage::QueryGeocoder
        );
        assert_eq!(Clip2KmlError::clipboard("empty").stage(), Stage::ReadClipboard);
    }
}
