//! Pre-enumerated directory listings for the resolver.
//!
//! The resolver itself never touches the filesystem; hosts enumerate a
//! directory once and pass the listing in. Sorting by path keeps
//! multi-part ordering deterministic across platforms.

use std::path::{Path, PathBuf};

/// One directory child, as handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// Extension with its leading dot, lowercased. `None` when the file
    /// has no extension.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
    }
}

/// Enumerate the children of `path`, sorted by path.
pub fn read_children(path: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
    let mut entries: Vec<DirEntryInfo> = std::fs::read_dir(path)?
        .flatten()
        .map(|e| {
            let path = e.path();
            let is_dir = path.is_dir();
            DirEntryInfo { path, is_dir }
        })
        .collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
