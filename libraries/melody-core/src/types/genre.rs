/// Genre taxonomy and filtering
use serde::{Deserialize, Serialize};

/// Genres surfaced by the marketplace browse chips
pub const APP_GENRES: &[&str] = &["Amapiano", "Gospel", "Jazz", "RnB", "Hip Hop", "House"];

/// Genre filter for catalog views
///
/// `All` passes every track; a named genre matches the track's genre tag
/// exactly, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenreFilter {
    /// Pass everything
    #[default]
    All,

    /// Case-insensitive exact match on the genre tag
    Genre(String),
}

impl GenreFilter {
    /// Create a filter for a named genre
    pub fn genre(name: impl Into<String>) -> Self {
        Self::Genre(name.into())
    }

    /// Check whether a track's genre tag passes the filter
    pub fn matches(&self, track_genre: &str) -> bool {
        match self {
            Self::All => true,
            Self::Genre(name) => track_genre.eq_ignore_ascii_case(name),
        }
    }
}
