use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::is_placeholder_system;

/// A classified game, ready to hand to a library indexer.
///
/// Built once by the resolver and not mutated afterwards. When
/// `multi_part` is set, `multi_part_paths` holds every file of the set in
/// enumeration order and `primary_path` is its first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntity {
    /// The playable file (first file of a multi-part set).
    pub primary_path: PathBuf,
    /// Canonical system code, e.g. "SNES".
    pub system_id: String,
    /// Host-facing display category, e.g. "SNESGame".
    pub display_category: String,
    /// Human-readable name, where one could be derived.
    pub name: Option<String>,
    /// The matched path was a directory rather than a loose file.
    pub directory_backed: bool,
    /// The file sits in a directory shared with other independent games.
    pub in_mixed_folder: bool,
    /// One logical game split across several files (multi-disc sets).
    pub multi_part: bool,
    /// All files of a multi-part set; empty otherwise.
    pub multi_part_paths: Vec<PathBuf>,
    /// Native launcher shortcut, not an emulated ROM.
    pub placeholder: bool,
}

impl GameEntity {
    /// Single-file entity for a platform.
    pub fn single(primary_path: PathBuf, system_id: &str, display_category: &str) -> Self {
        Self {
            primary_path,
            system_id: system_id.to_string(),
            display_category: display_category.to_string(),
            name: None,
            directory_backed: false,
            in_mixed_folder: false,
            multi_part: false,
            multi_part_paths: Vec::new(),
            placeholder: is_placeholder_system(system_id),
        }
    }

    /// Multi-part entity; `paths` must hold at least two files and is
    /// consumed in enumeration order.
    pub fn multi_part(paths: Vec<PathBuf>, system_id: &str, display_category: &str) -> Self {
        debug_assert!(paths.len() >= 2, "a multi-part set needs at least two files");
        Self {
            primary_path: paths[0].clone(),
            system_id: system_id.to_string(),
            display_category: display_category.to_string(),
            name: None,
            directory_backed: false,
            in_mixed_folder: false,
            multi_part: true,
            multi_part_paths: paths,
            placeholder: is_placeholder_system(system_id),
        }
    }
}
