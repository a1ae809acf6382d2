//! User-configured platform/directory associations.
//!
//! Hosts tell us which directories hold which platform's games. The list
//! is consumed read-only per classification pass; its file order is the
//! iteration order the classifier uses.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One configured platform root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAssociation {
    /// Directory that holds this platform's games.
    pub root_path: PathBuf,
    /// Platform display name, a key into the platform catalog.
    pub platform: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct AssociationFile {
    #[serde(default)]
    association: Vec<PlatformAssociation>,
}

/// Path to the association config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("romshelf").join("associations.toml"))
}

/// Load associations from the config file, preserving file order.
///
/// A missing file is an empty configuration, not an error.
pub fn load_associations() -> Result<Vec<PlatformAssociation>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    parse_associations(&content)
}

fn parse_associations(content: &str) -> Result<Vec<PlatformAssociation>, ConfigError> {
    let file: AssociationFile = toml::from_str(content)?;
    Ok(file.association)
}
