use thiserror::Error;

/// Errors from loading the association config file.
///
/// Classification and game building themselves never fail hard; a path
/// that cannot be classified is a normal negative result.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid association file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
