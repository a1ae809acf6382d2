use tokio::time::Instant;

use crate::category::ImageCategory;

/// One candidate image URL returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Name of the provider that supplied this candidate.
    pub source_name: &'static str,
    /// The category the caller asked for (not the catalog's media token).
    pub category: ImageCategory,
    pub url: String,
}

/// An authenticated catalog session, shared by all lookups on a client.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    pub token: String,
    pub obtained_at: Instant,
}
