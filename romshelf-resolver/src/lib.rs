pub mod associations;
pub mod classify;
pub mod error;
pub mod fs;
pub mod resolver;

pub use associations::{PlatformAssociation, config_path, load_associations};
pub use classify::classify_path;
pub use error::ConfigError;
pub use fs::{DirEntryInfo, read_children};
pub use resolver::{ArchiveNamer, BiosDetector, GameResolver};
