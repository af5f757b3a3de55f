use std::path::PathBuf;

use crate::error::{Clip2KmlError, Result};

pub fn get_clip2kml_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| Clip2KmlError::config("could not find home directory"))?;
    Ok(home.join(".clip2kml"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_clip2kml_dir()?.join("config.toml"))
}

pub fn get_default_api_key_path() -> Result<PathBuf> {
    Ok(get_clip2kml_dir()?.join("apikey.txt"))
}

pub fn get_default_output_dir() -> Result<PathBuf> {
    Ok(get_clip2kml_dir()?.join("placemarks"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_clip2kml_dir() {
        let dir = get_clip2kml_dir().unwrap();
        assert!(dir.to_string_lossy().ends_with(".clip2kml"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".clip2kml"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_default_paths() {
        assert!(get_default_api_key_path()
            .unwrap()
            .to_string_lossy()
            .ends_with("apikey.txt"));
        assert!(get_default_output_dir()
            .unwrap()
            .to_string_lossy()
            .ends_with("placemarks"));
    }
}
