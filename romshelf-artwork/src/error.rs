/// Errors surfaced by the artwork crate.
///
/// Lookup itself is best-effort and returns empty results instead of
/// errors; these only cover client construction and credential loading.
#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
