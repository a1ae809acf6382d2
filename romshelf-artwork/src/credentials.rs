use std::path::PathBuf;

use crate::error::ArtworkError;

/// Credentials for the artwork catalog.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
    /// Product identifier sent with logins.
    pub product: String,
}

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    emumovies: Option<EmuMoviesConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct EmuMoviesConfig {
    username: Option<String>,
    api_key: Option<String>,
    product: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file. Required: username, api_key.
    pub fn load() -> Result<Self, ArtworkError> {
        let config = load_config_file();

        let username = std::env::var("EMUMOVIES_USER")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.username.clone()))
            .ok_or_else(|| {
                ArtworkError::Config(
                    "Missing username. Set EMUMOVIES_USER env var or add to config file"
                        .to_string(),
                )
            })?;

        let api_key = std::env::var("EMUMOVIES_APIKEY")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.api_key.clone()))
            .ok_or_else(|| {
                ArtworkError::Config(
                    "Missing api_key. Set EMUMOVIES_APIKEY env var or add to config file"
                        .to_string(),
                )
            })?;

        let product = std::env::var("EMUMOVIES_PRODUCT")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.product.clone()))
            .unwrap_or_else(|| "romshelf".to_string());

        Ok(Self {
            username,
            api_key,
            product,
        })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("romshelf").join("credentials.toml"))
}

fn load_config_file() -> Option<EmuMoviesConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.emumovies
}
