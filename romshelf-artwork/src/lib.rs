pub mod category;
pub mod client;
pub mod credentials;
pub mod error;
pub mod response;
pub mod systems;
pub mod types;

pub use category::ImageCategory;
pub use client::{ArtworkClient, PROVIDER_NAME, PROVIDER_ORDER};
pub use credentials::{Credentials, config_path};
pub use error::ArtworkError;
pub use systems::catalog_platform;
pub use types::{CatalogSession, ImageCandidate};
