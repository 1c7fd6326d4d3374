//! Catalog store and membership sets
//!
//! Holds the full set of known tracks (newest-first, as served by the
//! backend) and the current user's owned/liked sets. Everything else in
//! this crate derives views from this struct.

use crate::browse::{self, SortOrder};
use crate::discover;
use melody_core::types::{GenreFilter, Track, TrackId};
use std::collections::HashSet;
use tracing::debug;

/// In-memory catalog plus per-user membership sets
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// All known tracks, newest first
    tracks: Vec<Track>,

    /// Track IDs in the user's purchased library
    owned: HashSet<TrackId>,

    /// Track IDs the user has liked
    liked: HashSet<TrackId>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Track Set =====

    /// Replace the full track set
    ///
    /// The list is taken as-is; the backend serves it newest-first.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        debug!(count = tracks.len(), "Catalog replaced");
        self.tracks = tracks;
    }

    /// All tracks, newest first
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track by ID
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Remove a track (artist-initiated delete)
    ///
    /// Returns the removed track if it was present.
    pub fn remove(&mut self, id: &TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|t| &t.id == id)?;
        Some(self.tracks.remove(index))
    }

    /// Number of tracks in the catalog
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    // ===== Membership Sets =====

    /// Replace the owned-library set
    pub fn set_owned(&mut self, owned: HashSet<TrackId>) {
        self.owned = owned;
    }

    /// Replace the liked set
    pub fn set_liked(&mut self, liked: HashSet<TrackId>) {
        self.liked = liked;
    }

    /// Mark a track as owned (after a confirmed purchase)
    pub fn add_owned(&mut self, id: TrackId) {
        self.owned.insert(id);
    }

    /// Remove a track from the owned library
    pub fn remove_owned(&mut self, id: &TrackId) {
        self.owned.remove(id);
    }

    /// Clear the owned library
    pub fn clear_owned(&mut self) {
        self.owned.clear();
    }

    /// Toggle the liked state for a track, returning the new state
    pub fn toggle_liked(&mut self, id: &TrackId) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        }
    }

    /// Check whether the user owns a track
    pub fn is_owned(&self, id: &TrackId) -> bool {
        self.owned.contains(id)
    }

    /// Check whether the user has liked a track
    pub fn is_liked(&self, id: &TrackId) -> bool {
        self.liked.contains(id)
    }

    /// Download is gated on ownership
    pub fn can_download(&self, id: &TrackId) -> bool {
        self.is_owned(id)
    }

    /// Tracks in the user's owned library, catalog order
    pub fn owned_tracks(&self) -> Vec<&Track> {
        self.tracks.iter().filter(|t| self.is_owned(&t.id)).collect()
    }

    // ===== Derived Views =====

    /// Filtered and sorted browse view
    pub fn browse(&self, genre: &GenreFilter, sort: SortOrder) -> Vec<&Track> {
        browse::browse(&self.tracks, genre, sort)
    }

    /// Case-insensitive substring search on title or artist
    pub fn search(&self, query: &str) -> Vec<&Track> {
        browse::search(&self.tracks, query)
    }

    /// Featured track for the hero section
    pub fn featured(&self) -> Option<&Track> {
        discover::featured(&self.tracks)
    }

    /// Random trending sample, recomputed per call
    pub fn trending(&self) -> Vec<&Track> {
        discover::trending(&self.tracks)
    }

    /// Recently-played rail
    pub fn recently_played(&self) -> Vec<&Track> {
        discover::recently_played(&self.tracks)
    }

    /// Recommended rail
    pub fn recommended(&self) -> Vec<&Track> {
        discover::recommended(&self.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: &str, title: &str) -> Track {
        let mut track = Track::new(title, "Test Artist", "Test Album");
        track.id = TrackId::new(id);
        track
    }

    #[test]
    fn empty_store() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.featured().is_none());
    }

    #[test]
    fn set_and_get_tracks() {
        let mut store = CatalogStore::new();
        store.set_tracks(vec![
            create_test_track("1", "One"),
            create_test_track("2", "Two"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&TrackId::new("2")).unwrap().title, "Two");
        assert!(store.get(&TrackId::new("3")).is_none());
    }

    #[test]
    fn remove_track() {
        let mut store = CatalogStore::new();
        store.set_tracks(vec![
            create_test_track("1", "One"),
            create_test_track("2", "Two"),
        ]);

        let removed = store.remove(&TrackId::new("1")).unwrap();
        assert_eq!(removed.title, "One");
        assert_eq!(store.len(), 1);
        assert!(store.remove(&TrackId::new("1")).is_none());
    }

    #[test]
    fn ownership_gates_download() {
        let mut store = CatalogStore::new();
        store.set_tracks(vec![create_test_track("1", "One")]);

        let id = TrackId::new("1");
        assert!(!store.can_download(&id));

        store.add_owned(id.clone());
        assert!(store.is_owned(&id));
        assert!(store.can_download(&id));

        store.remove_owned(&id);
        assert!(!store.can_download(&id));
    }

    #[test]
    fn clear_owned_library() {
        let mut store = CatalogStore::new();
        store.add_owned(TrackId::new("1"));
        store.add_owned(TrackId::new("2"));

        store.clear_owned();
        assert!(!store.is_owned(&TrackId::new("1")));
        assert!(!store.is_owned(&TrackId::new("2")));
    }

    #[test]
    fn toggle_like() {
        let mut store = CatalogStore::new();
        let id = TrackId::new("1");

        assert!(store.toggle_liked(&id));
        assert!(store.is_liked(&id));

        assert!(!store.toggle_liked(&id));
        assert!(!store.is_liked(&id));
    }

    #[test]
    fn owned_tracks_keep_catalog_order() {
        let mut store = CatalogStore::new();
        store.set_tracks(vec![
            create_test_track("1", "One"),
            create_test_track("2", "Two"),
            create_test_track("3", "Three"),
        ]);
        store.add_owned(TrackId::new("3"));
        store.add_owned(TrackId::new("1"));

        let owned = store.owned_tracks();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].title, "One");
        assert_eq!(owned[1].title, "Three");
    }
}
