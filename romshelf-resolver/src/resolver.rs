//! Game construction from classified paths.

use std::path::Path;

use log::{debug, warn};
use romshelf_core::platform::descriptor_for;
use romshelf_core::GameEntity;

use crate::fs::DirEntryInfo;

/// Loose Arcade files must be one of these archive formats.
const ARCADE_ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".7z"];

/// Decides whether an Arcade archive is a BIOS/support file rather than a
/// game. Implemented by the host (it owns the MAME dataset).
pub trait BiosDetector {
    fn is_bios_archive(&self, path: &Path) -> bool;
}

/// Derives a human-readable title from an Arcade archive. Implemented by
/// the host (it owns the archive listing and name table).
pub trait ArchiveNamer {
    fn derive_display_name(&self, path: &Path) -> String;
}

/// Builds [`GameEntity`] values from classified paths.
///
/// Pure over the listings it is given: no I/O, no locks. Safe to call
/// concurrently for independent paths as long as the association snapshot
/// that produced `display_name` stays fixed for the pass.
pub struct GameResolver<'a> {
    bios: &'a dyn BiosDetector,
    namer: &'a dyn ArchiveNamer,
}

impl<'a> GameResolver<'a> {
    pub fn new(bios: &'a dyn BiosDetector, namer: &'a dyn ArchiveNamer) -> Self {
        Self { bios, namer }
    }

    /// Build a game from a classified path.
    ///
    /// `children` is the pre-enumerated listing of `path` (ignored for
    /// loose files). Returns `None` for every soft negative: unknown or
    /// file-resolution-unsupported platform, no recognized files, loose
    /// files outside the Arcade rules, BIOS archives.
    pub fn resolve(
        &self,
        path: &Path,
        is_directory: bool,
        children: &[DirEntryInfo],
        display_name: &str,
    ) -> Option<GameEntity> {
        let descriptor = match descriptor_for(display_name) {
            Some(d) => d,
            None => {
                debug!("no platform descriptor for '{}'", display_name);
                return None;
            }
        };
        if !descriptor.extensions.is_supported() {
            debug!(
                "platform '{}' has no resolvable file formats",
                display_name
            );
            return None;
        }

        if is_directory {
            return self.resolve_directory(path, children, descriptor);
        }

        // Loose files are only games on the Arcade platform, where a whole
        // directory of sibling archives is the norm.
        if descriptor.system_id == "Arcade" {
            return self.resolve_arcade_file(path, descriptor);
        }

        debug!("loose file outside an Arcade root: {}", path.display());
        None
    }

    fn resolve_arcade_file(
        &self,
        path: &Path,
        descriptor: &romshelf_core::PlatformDescriptor,
    ) -> Option<GameEntity> {
        let extension = DirEntryInfo::file(path).extension()?;
        if !ARCADE_ARCHIVE_EXTENSIONS
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&extension))
        {
            return None;
        }
        if self.bios.is_bios_archive(path) {
            debug!("skipping BIOS archive {}", path.display());
            return None;
        }

        let mut game = GameEntity::single(
            path.to_path_buf(),
            descriptor.system_id,
            descriptor.display_category,
        );
        game.name = Some(self.namer.derive_display_name(path));
        game.in_mixed_folder = true;
        Some(game)
    }

    fn resolve_directory(
        &self,
        path: &Path,
        children: &[DirEntryInfo],
        descriptor: &romshelf_core::PlatformDescriptor,
    ) -> Option<GameEntity> {
        let game_files: Vec<&DirEntryInfo> = children
            .iter()
            .filter(|c| !c.is_dir)
            .filter(|c| {
                c.extension()
                    .map(|e| descriptor.matches_extension(&e))
                    .unwrap_or(false)
            })
            .collect();

        if game_files.is_empty() {
            // Usually a misconfigured root rather than a broken library.
            warn!(
                "no {} files found under {}",
                descriptor.display_name,
                path.display()
            );
            return None;
        }

        let mut game = if game_files.len() == 1 {
            GameEntity::single(
                game_files[0].path.clone(),
                descriptor.system_id,
                descriptor.display_category,
            )
        } else {
            GameEntity::multi_part(
                game_files.iter().map(|f| f.path.clone()).collect(),
                descriptor.system_id,
                descriptor.display_category,
            )
        };
        game.directory_backed = true;
        Some(game)
    }
}
