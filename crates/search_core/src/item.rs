/// Provenance of a [`SearchItem`]. Does not affect ordering or toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Image,
    Video,
}

/// One image or video result, in the shape the presentation list uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    /// Stable identifier from the provider; used for identity lookups.
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    pub thumbnail_url: String,
    /// Opaque, lexicographically ordered time key (no timezone normalization).
    pub timestamp: String,
    pub source_url: String,
    pub saved: bool,
}
