//! Transport bridge: OS media-control surface
//!
//! Two-way mirror between the playback engine and the platform's
//! "now playing" surface (MPRIS, SMTC, macOS Now Playing) via souvlaki.
//! Platforms without a surface are a valid runtime condition, not an
//! error: the bridge simply stays unattached and every call degrades to
//! a no-op.
//!
//! Inbound hardware events are forwarded over a channel and applied to
//! the engine by its owning thread in [`TransportBridge::pump`], so all
//! engine mutations stay serialized on one owner.

use crate::{engine::PlayerEngine, events::PlayerEvent, types::PlaybackState};
use melody_core::types::Track;
use souvlaki::{
    MediaControlEvent, MediaControls, MediaMetadata, MediaPlayback, MediaPosition, PlatformConfig,
};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::debug;

/// Artwork candidate sizes published to the media surface, in pixels
pub const ARTWORK_SIZES: [u32; 6] = [96, 128, 192, 256, 384, 512];

/// Placeholder artwork host used when a track has no cover
const ARTWORK_PLACEHOLDER: &str = "https://via.placeholder.com";

/// Album name published when a track has none
const ALBUM_PLACEHOLDER: &str = "Single";

/// One artwork candidate at a standard size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkCandidate {
    /// Image URL
    pub url: String,

    /// Square edge length in pixels
    pub size_px: u32,
}

/// Metadata descriptor published on every current-track change
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Album, falling back to the placeholder for singles
    pub album: String,

    /// Artwork candidates at the standard sizes
    pub artwork: Vec<ArtworkCandidate>,

    /// Track duration in seconds, when known
    pub duration_secs: Option<f64>,
}

impl NowPlaying {
    /// Build the descriptor for a track
    ///
    /// When the track has artwork, every candidate carries the same URL;
    /// otherwise each size gets its own placeholder reference.
    pub fn for_track(track: &Track, duration_secs: Option<f64>) -> Self {
        let album = if track.album.is_empty() {
            ALBUM_PLACEHOLDER.to_string()
        } else {
            track.album.clone()
        };

        let artwork = ARTWORK_SIZES
            .iter()
            .map(|&size_px| ArtworkCandidate {
                url: track
                    .cover_url
                    .clone()
                    .unwrap_or_else(|| format!("{}/{}", ARTWORK_PLACEHOLDER, size_px)),
                size_px,
            })
            .collect();

        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            album,
            artwork,
            duration_secs,
        }
    }

    /// The largest artwork candidate, for surfaces that take one URL
    pub fn cover_url(&self) -> Option<&str> {
        self.artwork.last().map(|a| a.url.as_str())
    }
}

/// Inbound hardware transport command
#[derive(Debug, Clone, Copy, PartialEq)]
enum TransportCommand {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    SeekTo(f64),
}

fn map_event(event: MediaControlEvent) -> Option<TransportCommand> {
    match event {
        MediaControlEvent::Play => Some(TransportCommand::Play),
        MediaControlEvent::Pause => Some(TransportCommand::Pause),
        MediaControlEvent::Toggle => Some(TransportCommand::Toggle),
        MediaControlEvent::Next => Some(TransportCommand::Next),
        MediaControlEvent::Previous => Some(TransportCommand::Previous),
        MediaControlEvent::SetPosition(MediaPosition(position)) => {
            Some(TransportCommand::SeekTo(position.as_secs_f64()))
        }
        _ => None,
    }
}

/// Bridge between the engine and the OS media-control surface
pub struct TransportBridge {
    controls: Option<MediaControls>,
    commands: Receiver<TransportCommand>,
}

impl TransportBridge {
    /// Attach to the platform surface
    ///
    /// Returns an unattached (no-op) bridge when the platform has no
    /// usable surface; that is capability absence, not an error.
    pub fn attach(dbus_name: &str, display_name: &str) -> Self {
        Self::attach_with_config(PlatformConfig {
            dbus_name,
            display_name,
            hwnd: None,
        })
    }

    /// Attach with a full platform config (Windows embedders pass hwnd)
    pub fn attach_with_config(config: PlatformConfig) -> Self {
        let (tx, rx) = mpsc::channel();

        let controls = match MediaControls::new(config) {
            Ok(mut controls) => {
                let attached = controls.attach(move |event| {
                    if let Some(command) = map_event(event) {
                        let _ = tx.send(command);
                    }
                });
                match attached {
                    Ok(()) => Some(controls),
                    Err(e) => {
                        debug!(error = ?e, "Media-control handler attach failed; bridge disabled");
                        None
                    }
                }
            }
            Err(e) => {
                debug!(error = ?e, "No media-control surface on this platform");
                None
            }
        };

        Self {
            controls,
            commands: rx,
        }
    }

    /// Whether a platform surface is attached
    pub fn is_attached(&self) -> bool {
        self.controls.is_some()
    }

    /// Apply queued hardware commands to the engine
    ///
    /// Call from the engine's owning thread. Hardware events re-enter
    /// the engine exactly as user intents would.
    pub fn pump(&mut self, engine: &mut PlayerEngine) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                TransportCommand::Play => engine.play(),
                TransportCommand::Pause => engine.pause(),
                TransportCommand::Toggle => engine.toggle_play(),
                TransportCommand::Next => engine.advance(true),
                TransportCommand::Previous => engine.advance(false),
                TransportCommand::SeekTo(secs) => engine.seek(secs),
            }
        }
    }

    /// Mirror engine changes out to the surface
    ///
    /// The bridge subscribes once and reads current values off the
    /// engine per event; it never re-registers handlers.
    pub fn sync(&mut self, engine: &PlayerEngine, events: &[PlayerEvent]) {
        for event in events {
            match event {
                PlayerEvent::TrackChanged { .. } => {
                    self.publish_metadata(engine);
                    self.publish_playback(engine);
                }
                PlayerEvent::StateChanged { .. } | PlayerEvent::PositionUpdate { .. } => {
                    self.publish_playback(engine);
                }
                _ => {}
            }
        }
    }

    fn publish_metadata(&mut self, engine: &PlayerEngine) {
        let Some(controls) = self.controls.as_mut() else {
            return;
        };
        let Some(track) = engine.current_track() else {
            return;
        };

        let now_playing = NowPlaying::for_track(track, engine.duration());
        let result = controls.set_metadata(MediaMetadata {
            title: Some(&now_playing.title),
            artist: Some(&now_playing.artist),
            album: Some(&now_playing.album),
            cover_url: now_playing.cover_url(),
            duration: now_playing.duration_secs.map(Duration::from_secs_f64),
        });
        if let Err(e) = result {
            debug!(error = ?e, "Failed to publish media metadata");
        }
    }

    fn publish_playback(&mut self, engine: &PlayerEngine) {
        let Some(controls) = self.controls.as_mut() else {
            return;
        };

        let progress = Some(MediaPosition(Duration::from_secs_f64(
            engine.position().max(0.0),
        )));
        let playback = match engine.state() {
            PlaybackState::Playing => MediaPlayback::Playing { progress },
            PlaybackState::Paused => MediaPlayback::Paused { progress },
            PlaybackState::Stopped => MediaPlayback::Stopped,
        };

        if let Err(e) = controls.set_playback(playback) {
            debug!(error = ?e, "Failed to publish playback state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melody_core::types::TrackId;

    fn create_test_track(id: &str) -> Track {
        let mut track = Track::new("Umoya", "Sipho M", "Night Sessions");
        track.id = TrackId::new(id);
        track
    }

    #[test]
    fn descriptor_uses_track_cover_for_all_sizes() {
        let mut track = create_test_track("1");
        track.cover_url = Some("https://cdn.example.com/covers/1.jpg".to_string());

        let now_playing = NowPlaying::for_track(&track, Some(180.0));
        assert_eq!(now_playing.artwork.len(), ARTWORK_SIZES.len());
        assert!(now_playing
            .artwork
            .iter()
            .all(|a| a.url == "https://cdn.example.com/covers/1.jpg"));
        assert_eq!(
            now_playing.cover_url(),
            Some("https://cdn.example.com/covers/1.jpg")
        );
    }

    #[test]
    fn descriptor_falls_back_to_per_size_placeholders() {
        let track = create_test_track("1");

        let now_playing = NowPlaying::for_track(&track, None);
        assert_eq!(now_playing.artwork[0].url, "https://via.placeholder.com/96");
        assert_eq!(now_playing.artwork[0].size_px, 96);
        assert_eq!(
            now_playing.artwork.last().unwrap().url,
            "https://via.placeholder.com/512"
        );
    }

    #[test]
    fn descriptor_defaults_album_for_singles() {
        let mut track = create_test_track("1");
        track.album = String::new();

        let now_playing = NowPlaying::for_track(&track, None);
        assert_eq!(now_playing.album, "Single");
    }

    #[test]
    fn inbound_events_map_to_transport_commands() {
        assert_eq!(
            map_event(MediaControlEvent::Play),
            Some(TransportCommand::Play)
        );
        assert_eq!(
            map_event(MediaControlEvent::Next),
            Some(TransportCommand::Next)
        );
        assert_eq!(
            map_event(MediaControlEvent::SetPosition(MediaPosition(
                Duration::from_secs(30)
            ))),
            Some(TransportCommand::SeekTo(30.0))
        );
        // Events outside the registered handler set are dropped
        assert_eq!(map_event(MediaControlEvent::Raise), None);
    }
}
