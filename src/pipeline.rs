//! The clipboard → placemark run.
//!
//! Each stage either hands an immutable value to the next or stops the run
//! with an error. The placemark is written last, so an upstream failure never
//! leaves a file behind.

use std::path::PathBuf;

use tracing::info;

use crate::clipboard::ClipboardSource;
use crate::credential::CredentialSource;
use crate::error::{Clip2KmlError, Result};
use crate::fragment::extract_toponym;
use crate::geocode::Geocoder;
use crate::placemark::{KML_EXTENSION, RenderOptions, render_placemark};
use crate::report::{Reporter, Stage};
use crate::storage::OutputStore;
use crate::toponym::{GeocodeQuery, sanitize_file_name};

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub output_dir: PathBuf,
    pub render: RenderOptions,
}

pub struct Pipeline<'a> {
    credentials: &'a dyn CredentialSource,
    clipboard: &'a mut dyn ClipboardSource,
    geocoder: &'a dyn Geocoder,
    store: &'a mut dyn OutputStore,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        credentials: &'a dyn CredentialSource,
        clipboard: &'a mut dyn ClipboardSource,
        geocoder: &'a dyn Geocoder,
        store: &'a mut dyn OutputStore,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            credentials,
            clipboard,
            geocoder,
            store,
            reporter,
        }
    }

    /// Run every stage once and return the path of the written placemark.
    pub fn run(&mut self, settings: &PipelineSettings) -> Result<PathBuf> {
        self.reporter.report(Stage::LoadApiKey, "loading API key");
        let api_key = self.credentials.read_credential()?;

        self.reporter.report(
            Stage::PrepareOutputDir,
            &format!("checking {}", settings.output_dir.display()),
        );
        self.store.ensure_dir(&settings.output_dir)?;

        self.reporter.report(Stage::ReadClipboard, "reading clipboard");
        let clipboard = self.clipboard.read()?;
        if clipboard.is_empty() {
            return Err(Clip2KmlError::clipboard("clipboard is empty"));
        }
        info!(content = %clipboard, "clipboard content");

        self.reporter.report(Stage::ExtractToponym, "extracting toponym");
        let toponym = extract_toponym(&clipboard)?;
        info!(toponym = %toponym, "extracted toponym");

        self.reporter.report(Stage::NormalizeName, "encoding query");
        let query = GeocodeQuery::new(&toponym);

        self.reporter
            .report(Stage::QueryGeocoder, &format!("resolving '{toponym}'"));
        let result = self.geocoder.geocode(&api_key, &query)?;

        self.reporter.report(
            Stage::ParseResponse,
            &format!(
                "resolved '{}' at longitude={} latitude={}",
                result.canonical_name, result.longitude, result.latitude
            ),
        );
        let file_name = format!("{}.{KML_EXTENSION}", sanitize_file_name(&result.canonical_name));
        let path = settings.output_dir.join(file_name);
        let document = render_placemark(&result, &clipboard, settings.render);

        self.reporter
            .report(Stage::WritePlacemark, &format!("writing {}", path.display()));
        self.store.write(&path, &document)?;

        Ok(path)
    }
}
