mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clip2kml::clipboard::SystemClipboard;
use clip2kml::config::Config;
use clip2kml::credential::FileCredential;
use clip2kml::geocode::HttpGeocoder;
use clip2kml::placemark::RenderOptions;
use clip2kml::report::TracingReporter;
use clip2kml::storage::FsOutputStore;
use clip2kml::{Clip2KmlError, Pipeline, PipelineSettings};
use cli::Cli;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let _cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Clip2KmlError>() {
                Some(cause) => eprintln!("Error at {}: {err:#}", cause.stage()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    let settings = PipelineSettings {
        output_dir: config.output_dir()?,
        render: RenderOptions {
            escape_name: config.escape_name,
        },
    };
    let credentials = FileCredential::new(config.api_key_path()?);
    let geocoder = HttpGeocoder::new(config.endpoint_url()?, config.timeout());
    let mut clipboard = SystemClipboard;
    let mut store = FsOutputStore;
    let mut reporter = TracingReporter;

    let path = Pipeline::new(
        &credentials,
        &mut clipboard,
        &geocoder,
        &mut store,
        &mut reporter,
    )
    .run(&settings)
    .context("placemark generation failed")?;

    info!("✓ Placemark written to {}", path.display());

    Ok(())
}
