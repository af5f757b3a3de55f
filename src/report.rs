use std::fmt;

use tracing::info;

pub const STAGE_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadApiKey,
    PrepareOutputDir,
    ReadClipboard,
    ExtractToponym,
    NormalizeName,
    QueryGeocoder,
    ParseResponse,
    WritePlacemark,
}

impl Stage {
    pub fn number(&self) -> usize {
        match self {
            Self::LoadApiKey => 1,
            Self::PrepareOutputDir => 2,
            Self::ReadClipboard => 3,
            Self::ExtractToponym => 4,
            Self::NormalizeName => 5,
            Self::QueryGeocoder => 6,
            Self::ParseResponse => 7,
            Self::WritePlacemark => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadApiKey => "load api key",
            Self::PrepareOutputDir => "prepare output directory",
            Self::ReadClipboard => "read clipboard",
            Self::ExtractToponym => "extract toponym",
            Self::NormalizeName => "normalize name",
            Self::QueryGeocoder => "query geocoder",
            Self::ParseResponse => "parse response",
            Self::WritePlacemark => "write placemark",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.number(), STAGE_COUNT, self.label())
    }
}

/// Progress sink for the pipeline.
pub trait Reporter {
    fn report(&mut self, stage: Stage, message: &str);
}

/// Emits progress as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, stage: Stage, message: &str) {
        info!(stage = stage.number(), "{stage}: {message}");
    }
}
