//! Discovery views: featured pick, trending sample, home rails

use melody_core::types::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Marketing keyword that promotes a track to the hero slot
pub const FEATURED_KEYWORD: &str = "empini";

/// Number of tracks in each home rail (trending, recently played, ...)
pub const RAIL_SIZE: usize = 8;

/// Featured track for the hero section
///
/// Prefers the first track whose title contains the marketing keyword
/// (case-insensitive), otherwise falls back to the first (newest) track.
pub fn featured(tracks: &[Track]) -> Option<&Track> {
    tracks
        .iter()
        .find(|t| t.title.to_lowercase().contains(FEATURED_KEYWORD))
        .or_else(|| tracks.first())
}

/// Random trending sample
///
/// Shuffles the full set and takes a fixed-size prefix. Recomputed on
/// every call, so consecutive calls return different samples; callers
/// that need a stable rail must memoize.
pub fn trending(tracks: &[Track]) -> Vec<&Track> {
    let mut sample: Vec<&Track> = tracks.iter().collect();
    sample.shuffle(&mut thread_rng());
    sample.truncate(RAIL_SIZE);
    sample
}

/// Recently-played rail: the first tracks of the catalog
pub fn recently_played(tracks: &[Track]) -> Vec<&Track> {
    tracks.iter().take(RAIL_SIZE).collect()
}

/// Recommended rail: the slice after the recently-played rail
pub fn recommended(tracks: &[Track]) -> Vec<&Track> {
    tracks.iter().skip(RAIL_SIZE).take(RAIL_SIZE).collect()
}
