/// Image categories this provider can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Box,
    Disc,
    Screenshot,
    Menu,
}

/// All categories, in the order lookups request them.
pub const ALL_CATEGORIES: &[ImageCategory] = &[
    ImageCategory::Box,
    ImageCategory::Disc,
    ImageCategory::Screenshot,
    ImageCategory::Menu,
];

impl ImageCategory {
    /// The catalog's own media-type vocabulary. This is the catalog's
    /// naming, not ours: box art lives under "Cabinet", cartridge shots
    /// under "Cart".
    pub fn media_token(&self) -> &'static str {
        match self {
            Self::Box => "Cabinet",
            Self::Disc => "Cart",
            Self::Screenshot => "Snap",
            Self::Menu => "Title",
        }
    }
}
