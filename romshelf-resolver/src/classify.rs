//! Path classification against configured platform roots.

use std::path::{Component, Path};

use crate::associations::PlatformAssociation;

/// Find the configured platform that owns `path`.
///
/// A path matches an association when it equals the association's root or
/// the root is a proper ancestor directory of it; both comparisons are
/// case-insensitive. Associations are scanned in order and the first match
/// wins — keeping roots non-overlapping is the configuration's contract,
/// and overlaps are deliberately not re-resolved here (no longest-prefix
/// preference).
///
/// Returns the platform display name, or `None` when no association owns
/// the path; callers must not attempt further resolution on `None`.
pub fn classify_path<'a>(
    path: &Path,
    associations: &'a [PlatformAssociation],
) -> Option<&'a str> {
    associations
        .iter()
        .find(|a| paths_equal(&a.root_path, path) || is_proper_ancestor(&a.root_path, path))
        .map(|a| a.platform.as_str())
}

fn component_eq(a: &Component<'_>, b: &Component<'_>) -> bool {
    match (a, b) {
        (Component::Normal(x), Component::Normal(y)) => {
            x.to_string_lossy().eq_ignore_ascii_case(&y.to_string_lossy())
        }
        _ => a == b,
    }
}

fn paths_equal(a: &Path, b: &Path) -> bool {
    let mut ac = a.components();
    let mut bc = b.components();
    loop {
        match (ac.next(), bc.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if component_eq(&x, &y) => continue,
            _ => return false,
        }
    }
}

fn is_proper_ancestor(root: &Path, path: &Path) -> bool {
    let root_components: Vec<_> = root.components().collect();
    let path_components: Vec<_> = path.components().collect();
    if root_components.len() >= path_components.len() {
        return false;
    }
    root_components
        .iter()
        .zip(&path_components)
        .all(|(r, p)| component_eq(r, p))
}
