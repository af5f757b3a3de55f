use clap::Parser;

/// Turn a copied map link into a KML placemark.
///
/// Reads a URL with a `#:~:text=` fragment from the clipboard, resolves the
/// place name through the geocoder and writes `<name>.kml` into the
/// configured output directory (`~/.clip2kml/config.toml`).
#[derive(Parser, Debug)]
#[command(name = "clip2kml", version)]
pub struct Cli {}
