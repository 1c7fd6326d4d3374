//! Melody - Playback Management
//!
//! Queue-driven playback engine for the Melody marketplace client.
//!
//! This crate provides:
//! - A playback engine over one opaque media output primitive
//!   (play/pause/seek/volume, auto-advance, last-write-wins state)
//! - A reorderable play queue with wrapping next/previous resolution
//! - Shuffle and repeat policies (Off, All, One)
//! - Typed playback events for UI synchronization
//! - A transport bridge onto the OS media-control surface
//!
//! # Architecture
//!
//! The engine is platform-agnostic: the audio side is a single
//! [`MediaOutput`] trait object that is rebound per track, and the
//! primitive's own event stream (time-update, metadata-ready, ended,
//! play, pause) re-enters the engine through its `on_media_*` methods.
//! Everything is owned by one thread; inbound hardware events cross over
//! via the transport bridge's command channel.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use melody_playback::{NullOutput, PlayerConfig, PlayerEngine};
//! use melody_core::types::Track;
//!
//! let mut engine = PlayerEngine::new(PlayerConfig::default(), Box::new(NullOutput));
//!
//! let tracks = vec![
//!     Track::new("Umoya", "Sipho M", "Night Sessions"),
//!     Track::new("Sunrise", "Thandi", "Dawn"),
//! ];
//!
//! // Play the first track within a queue context
//! engine.load_track(tracks[0].clone(), Some(tracks.clone()));
//! assert!(engine.is_playing());
//!
//! // Skip forward, seek, pause
//! engine.advance(true);
//! engine.seek(30.0);
//! engine.pause();
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use melody_playback::{PlayerEngine, RepeatMode};
//!
//! let mut engine = PlayerEngine::default();
//!
//! engine.toggle_shuffle();
//! assert!(engine.shuffle());
//!
//! // OFF -> ALL -> ONE -> OFF
//! engine.cycle_repeat();
//! assert_eq!(engine.repeat(), RepeatMode::All);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod output;
mod queue;
mod transport;
pub mod types;

// Public exports
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use output::{MediaOutput, NullOutput};
pub use queue::PlayQueue;
pub use transport::{ArtworkCandidate, NowPlaying, TransportBridge, ARTWORK_SIZES};
pub use types::{PlaybackState, PlayerConfig, RepeatMode};
