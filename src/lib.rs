pub mod clipboard;
pub mod config;
pub mod credential;
pub mod error;
pub mod fragment;
pub mod geocode;
pub mod pipeline;
pub mod placemark;
pub mod report;
pub mod storage;
pub mod toponym;
pub mod utils;

pub use error::{Clip2KmlError, Result};
pub use pipeline::{Pipeline, PipelineSettings};
