//! Playlist records and the immutable gallery collection.

use std::collections::HashSet;

use thiserror::Error;

/// Gallery construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("duplicate playlist id: {0}")]
    DuplicateId(u32),
}

/// Display metadata for one playlist card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRecord {
    /// Identity of the card; never used for lookup by the view
    pub id: u32,

    /// Display title, may carry an emoji prefix
    pub title: String,

    /// Short mood subtitle
    pub tag: String,

    /// Absolute URL of the cover image
    pub cover: String,
}

impl PlaylistRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        tag: impl Into<String>,
        cover: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            tag: tag.into(),
            cover: cover.into(),
        }
    }
}

/// Ordered, read-only collection of playlist records.
///
/// Insertion order is render order. Ids are checked for uniqueness once,
/// at construction; there is no way to mutate the collection afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    records: Vec<PlaylistRecord>,
}

impl Gallery {
    /// Build a gallery, rejecting duplicate ids.
    pub fn new(records: Vec<PlaylistRecord>) -> Result<Self, GalleryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(GalleryError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The three built-in mood playlists.
    pub fn reference() -> Result<Self, GalleryError> {
        let records = vec![
            PlaylistRecord::new(
                1,
                "🌙 Night Vibe",
                "차분한 밤, 감성적인 노래들",
                "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=800&q=80",
            ),
            PlaylistRecord::new(
                2,
                "☀️ Morning Chill",
                "햇살 아래 듣기 좋은 잔잔한 음악",
                "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=800&q=80",
            ),
            PlaylistRecord::new(
                3,
                "🔥 Energetic Beats",
                "운동할 때 듣기 좋은 에너지 충전 트랙",
                "https://images.unsplash.com/photo-1485579149621-3123dd979885?auto=format&fit=crop&w=800&q=80",
            ),
        ];
        Self::new(records)
    }

    pub fn records(&self) -> &[PlaylistRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a record in render order.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
