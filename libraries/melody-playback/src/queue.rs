//! Play queue: ordering and next/previous resolution
//!
//! The queue is a snapshot of whatever context playback started from
//! (grid, playlist, library), not a live filter over the catalog. It is
//! replaced wholesale when playback starts from a new context and
//! mutated in place by drag-reorder. Duplicate entries are allowed.

use melody_core::types::{Track, TrackId};
use rand::Rng;

/// Ordered sequence of tracks to play
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: Vec<Track>,
}

impl PlayQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale
    ///
    /// No validation against catalog membership; the context list is
    /// taken as-is.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Apply a user reorder
    ///
    /// `new_order` comes from interactive drag-and-drop and is expected
    /// to be a permutation of the current entries; that contract is the
    /// caller's and is not validated here.
    pub fn reorder(&mut self, new_order: Vec<Track>) {
        self.tracks = new_order;
    }

    /// Clear the queue
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// All queued tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Resolve the track after `current`
    ///
    /// With shuffle on, picks a uniformly random index independent of the
    /// current position; the pick may be the currently playing track
    /// again, which is deliberate policy, not a bug. Otherwise the first
    /// identity match of `current` advances by one, wrapping at the end.
    /// If `current` is not in the queue the cursor is treated as sitting
    /// before index 0, so the first track is returned.
    pub fn next(&self, current: &TrackId, shuffle: bool) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        if shuffle {
            let index = rand::thread_rng().gen_range(0..self.tracks.len());
            return Some(&self.tracks[index]);
        }

        match self.index_of(current) {
            Some(index) => Some(&self.tracks[(index + 1) % self.tracks.len()]),
            None => self.tracks.first(),
        }
    }

    /// Resolve the track before `current`
    ///
    /// Wraps backward from the first track to the last. Ignores shuffle.
    /// If `current` is not in the queue, wraps backward from the virtual
    /// before-start position to the last track.
    pub fn previous(&self, current: &TrackId) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        match self.index_of(current) {
            Some(index) => {
                let len = self.tracks.len();
                Some(&self.tracks[(index + len - 1) % len])
            }
            None => self.tracks.last(),
        }
    }

    fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
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

    fn abc() -> PlayQueue {
        let mut queue = PlayQueue::new();
        queue.replace(vec![
            create_test_track("a", "Track A"),
            create_test_track("b", "Track B"),
            create_test_track("c", "Track C"),
        ]);
        queue
    }

    #[test]
    fn empty_queue_resolves_nothing() {
        let queue = PlayQueue::new();
        assert!(queue.next(&TrackId::new("a"), false).is_none());
        assert!(queue.next(&TrackId::new("a"), true).is_none());
        assert!(queue.previous(&TrackId::new("a")).is_none());
    }

    #[test]
    fn next_advances_in_order() {
        let queue = abc();
        let next = queue.next(&TrackId::new("a"), false).unwrap();
        assert_eq!(next.id, TrackId::new("b"));
    }

    #[test]
    fn next_wraps_at_end() {
        let queue = abc();
        let next = queue.next(&TrackId::new("c"), false).unwrap();
        assert_eq!(next.id, TrackId::new("a"));
    }

    #[test]
    fn previous_goes_back() {
        let queue = abc();
        let prev = queue.previous(&TrackId::new("b")).unwrap();
        assert_eq!(prev.id, TrackId::new("a"));
    }

    #[test]
    fn previous_wraps_at_start() {
        let queue = abc();
        let prev = queue.previous(&TrackId::new("a")).unwrap();
        assert_eq!(prev.id, TrackId::new("c"));
    }

    #[test]
    fn unknown_current_starts_from_the_edges() {
        let queue = abc();

        let next = queue.next(&TrackId::new("zz"), false).unwrap();
        assert_eq!(next.id, TrackId::new("a"));

        let prev = queue.previous(&TrackId::new("zz")).unwrap();
        assert_eq!(prev.id, TrackId::new("c"));
    }

    #[test]
    fn single_track_queue_returns_itself() {
        let mut queue = PlayQueue::new();
        queue.replace(vec![create_test_track("solo", "Only One")]);

        let id = TrackId::new("solo");
        assert_eq!(queue.next(&id, false).unwrap().id, id);
        assert_eq!(queue.previous(&id).unwrap().id, id);
        assert_eq!(queue.next(&id, true).unwrap().id, id);
    }

    #[test]
    fn shuffle_next_stays_inside_the_queue() {
        let queue = abc();
        let ids = [TrackId::new("a"), TrackId::new("b"), TrackId::new("c")];

        for _ in 0..50 {
            let pick = queue.next(&ids[0], true).unwrap();
            assert!(ids.contains(&pick.id));
        }
    }

    #[test]
    fn duplicates_resolve_by_first_match() {
        let mut queue = PlayQueue::new();
        queue.replace(vec![
            create_test_track("a", "Track A"),
            create_test_track("b", "Track B"),
            create_test_track("a", "Track A"),
        ]);

        // First match of "a" is index 0, so next is "b" even though the
        // duplicate sits at the end.
        let next = queue.next(&TrackId::new("a"), false).unwrap();
        assert_eq!(next.id, TrackId::new("b"));
    }

    #[test]
    fn reorder_replaces_play_order() {
        let mut queue = abc();
        let mut reordered: Vec<Track> = queue.tracks().to_vec();
        reordered.swap(0, 2); // [c, b, a]
        queue.reorder(reordered);

        let next = queue.next(&TrackId::new("c"), false).unwrap();
        assert_eq!(next.id, TrackId::new("b"));

        let prev = queue.previous(&TrackId::new("c")).unwrap();
        assert_eq!(prev.id, TrackId::new("a"));
    }
}
