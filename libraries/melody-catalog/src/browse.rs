//! Browse view: genre filtering and sorting

use melody_core::types::{GenreFilter, Track};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order for the browse grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep the source order (the backend serves newest-first)
    Newest,

    /// Title ascending
    TitleAsc,

    /// Title descending
    TitleDesc,
}

/// Filter and sort the track set for display
pub fn browse<'a>(tracks: &'a [Track], genre: &GenreFilter, sort: SortOrder) -> Vec<&'a Track> {
    let mut filtered: Vec<&Track> = tracks.iter().filter(|t| genre.matches(&t.genre)).collect();

    match sort {
        SortOrder::Newest => {}
        SortOrder::TitleAsc => filtered.sort_by(|a, b| compare_titles(a, b)),
        SortOrder::TitleDesc => filtered.sort_by(|a, b| compare_titles(b, a)),
    }

    filtered
}

/// Case-insensitive substring search on title or artist
pub fn search<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query) || t.artist.to_lowercase().contains(&query)
        })
        .collect()
}

// Case-insensitive stand-in for the browser's locale-aware compare.
fn compare_titles(a: &Track, b: &Track) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use melody_core::types::TrackId;

    fn create_test_track(id: &str, title: &str, genre: &str) -> Track {
        let mut track = Track::new(title, "Test Artist", "Test Album");
        track.id = TrackId::new(id);
        track.genre = genre.to_string();
        track
    }

    fn sample() -> Vec<Track> {
        vec![
            create_test_track("1", "Zulu Nights", "Amapiano"),
            create_test_track("2", "amber", "House"),
            create_test_track("3", "Bright Morning", "amapiano"),
        ]
    }

    #[test]
    fn all_returns_full_set_in_source_order() {
        let tracks = sample();
        let view = browse(&tracks, &GenreFilter::All, SortOrder::Newest);
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].id, TrackId::new("1"));
        assert_eq!(view[2].id, TrackId::new("3"));
    }

    #[test]
    fn genre_filter_is_case_insensitive_exact() {
        let tracks = sample();
        let view = browse(
            &tracks,
            &GenreFilter::genre("Amapiano"),
            SortOrder::Newest,
        );
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|t| t.genre.eq_ignore_ascii_case("Amapiano")));
    }

    #[test]
    fn title_sort_ignores_case() {
        let tracks = sample();
        let asc = browse(&tracks, &GenreFilter::All, SortOrder::TitleAsc);
        let titles: Vec<&str> = asc.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["amber", "Bright Morning", "Zulu Nights"]);

        let desc = browse(&tracks, &GenreFilter::All, SortOrder::TitleDesc);
        let titles: Vec<&str> = desc.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Zulu Nights", "Bright Morning", "amber"]);
    }

    #[test]
    fn search_matches_title_or_artist() {
        let mut tracks = sample();
        tracks[1].artist = "Nandi".to_string();

        let by_title = search(&tracks, "zulu");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, TrackId::new("1"));

        let by_artist = search(&tracks, "nandi");
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].id, TrackId::new("2"));
    }

    #[test]
    fn empty_query_returns_nothing() {
        let tracks = sample();
        assert!(search(&tracks, "").is_empty());
        assert!(search(&tracks, "   ").is_empty());
    }
}
