//! Media output primitive abstraction
//!
//! One opaque decode-and-output primitive plays everything; the engine
//! rebinds its source per track rather than recreating it. On the web
//! platform this is the single `<audio>` element; headless embedders and
//! tests use [`NullOutput`].

use crate::error::Result;

/// The single audio output primitive
///
/// Exactly one instance is bound to the engine at a time. `play` and
/// `pause` are fallible (autoplay policies and network stalls reject
/// them), but the engine discards those errors by contract; the next
/// explicit user play re-attempts.
///
/// Playback progress flows back into the engine through its
/// `on_media_*` methods, mirroring the primitive's event stream
/// (time-update, metadata-ready, ended, play, pause).
pub trait MediaOutput: Send {
    /// Rebind the primitive to a new media source
    ///
    /// Any in-flight load of a previous source is implicitly abandoned.
    fn bind(&mut self, source_url: &str);

    /// Start producing audio
    fn play(&mut self) -> Result<()>;

    /// Stop producing audio, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Move the playback cursor (seconds from track start)
    fn set_position(&mut self, position_secs: f64);

    /// Set output gain (0.0-1.0)
    fn set_volume(&mut self, volume: f32);
}

/// No-op output for headless use and tests
///
/// Accepts every call and never fails; playback state lives entirely in
/// the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl MediaOutput for NullOutput {
    fn bind(&mut self, _source_url: &str) {}

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_position(&mut self, _position_secs: f64) {}

    fn set_volume(&mut self, _volume: f32) {}
}
