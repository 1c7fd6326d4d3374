//! Melody Core
//!
//! Domain types, IDs, and error handling shared by every Melody crate.
//!
//! The marketplace treats tracks as immutable catalog records: they are
//! created by the artist upload workflow, edited only through the artist
//! edit workflow, and read everywhere else. This crate defines those
//! records plus the user, playlist, and comment types that surround them.
//!
//! # Example
//!
//! ```rust
//! use melody_core::types::{GenreFilter, Track};
//!
//! let track = Track::new("Umoya", "Sipho M", "Night Sessions");
//!
//! let amapiano = GenreFilter::genre("Amapiano");
//! assert!(!amapiano.matches(&track.genre));
//! assert!(GenreFilter::All.matches(&track.genre));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{MelodyError, Result};
pub use types::{
    Comment, CommentId, GenreFilter, Playlist, PlaylistId, Track, TrackId, User, UserId,
    APP_GENRES,
};
