//! Playback engine - core orchestration
//!
//! Single source of truth for "what is currently audible". The engine
//! owns the one media output primitive, the play queue, and the
//! transport state, and reconciles the primitive on every transition
//! that changes audibility.
//!
//! The engine is an explicitly owned value: embedders create one and
//! pass it around (or inject it), which keeps it testable and allows
//! several instances side by side in tests. Nothing here is global.

use crate::{
    events::PlayerEvent,
    output::MediaOutput,
    queue::PlayQueue,
    types::{PlaybackState, PlayerConfig, RepeatMode},
};
use melody_core::types::{Track, TrackId};
use tracing::debug;

/// Queue-driven playback engine
///
/// State machine over three transport states: `Stopped` (no track),
/// `Paused`, and `Playing`. Inbound events from the output primitive
/// (`on_media_*`) and user intents mutate the same state; the last
/// write wins, and primitive rejections are swallowed so the logical
/// state may transiently diverge from actual output. The next explicit
/// `play` re-attempts.
pub struct PlayerEngine {
    // State
    state: PlaybackState,
    current_track: Option<Track>,
    position_secs: f64,
    duration_secs: Option<f64>,

    // Queue
    queue: PlayQueue,

    // Settings
    volume: f32,
    shuffle: bool,
    repeat: RepeatMode,

    // Output primitive
    output: Box<dyn MediaOutput>,

    // Event buffer for UI / transport bridge synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerEngine {
    /// Create a new engine driving the given output primitive
    pub fn new(config: PlayerConfig, mut output: Box<dyn MediaOutput>) -> Self {
        // Volume is a property of the primitive instance, so it is
        // applied on acquisition, not only on change.
        let volume = config.volume.clamp(0.0, 1.0);
        output.set_volume(volume);

        Self {
            state: PlaybackState::Stopped,
            current_track: None,
            position_secs: 0.0,
            duration_secs: None,
            queue: PlayQueue::new(),
            volume,
            shuffle: config.shuffle,
            repeat: config.repeat,
            output,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Load a track and start playing it
    ///
    /// If `queue_context` is supplied, the queue is replaced with it
    /// first. Loading the track that is already current resumes playback
    /// without reloading the media (position is preserved); any other
    /// track rebinds the primitive and optimistically resets the
    /// position display to 0 before the primitive reports.
    pub fn load_track(&mut self, track: Track, queue_context: Option<Vec<Track>>) {
        if let Some(context) = queue_context {
            self.queue.replace(context);
            self.emit_queue_changed();
        }

        let is_current = self
            .current_track
            .as_ref()
            .is_some_and(|t| t.id == track.id);

        if !is_current {
            let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());

            self.position_secs = 0.0;
            self.duration_secs = None;
            self.output.bind(&track.audio_url);

            self.emit_track_changed(track.id.clone(), previous_track_id);
            self.current_track = Some(track);
        }

        self.start_output();
    }

    /// Start or resume playback
    ///
    /// No-op when no track is loaded.
    pub fn play(&mut self) {
        if self.current_track.is_none() {
            return;
        }
        self.start_output();
    }

    /// Pause playback
    ///
    /// No-op when no track is loaded.
    pub fn pause(&mut self) {
        if self.current_track.is_none() {
            return;
        }

        self.set_state(PlaybackState::Paused);
        if let Err(e) = self.output.pause() {
            debug!(error = %e, "Output rejected pause; state kept");
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(),
            PlaybackState::Stopped => {}
        }
    }

    /// Seek to a position in the current track (seconds)
    ///
    /// Clamps into `[0, duration]` once the duration is known; while the
    /// metadata is still pending the target is accepted verbatim (no
    /// clamp is possible). Does not change the transport state.
    pub fn seek(&mut self, target_secs: f64) {
        if self.current_track.is_none() {
            return;
        }

        let position = match self.duration_secs {
            Some(duration) => target_secs.clamp(0.0, duration),
            None => target_secs,
        };

        self.position_secs = position;
        self.output.set_position(position);
    }

    /// Skip to the next or previous track in the queue
    ///
    /// No-op if the queue is empty or nothing is playing. Resolving to
    /// the current track itself (single-track queue, shuffle re-pick)
    /// restarts it from the top.
    pub fn advance(&mut self, forward: bool) {
        let Some(current) = self.current_track.as_ref() else {
            return;
        };
        if self.queue.is_empty() {
            return;
        }

        let current_id = current.id.clone();
        let target = if forward {
            self.queue.next(&current_id, self.shuffle).cloned()
        } else {
            self.queue.previous(&current_id).cloned()
        };

        let Some(track) = target else { return };

        if track.id == current_id {
            self.restart_current();
        } else {
            self.load_track(track, None);
        }
    }

    // ===== Inbound Media Events =====

    /// Time-update event from the output primitive
    pub fn on_media_time_update(&mut self, position_secs: f64) {
        self.position_secs = position_secs;
    }

    /// Metadata-ready event from the output primitive
    ///
    /// Non-finite or negative durations are treated as still unknown.
    pub fn on_media_metadata_ready(&mut self, duration_secs: f64) {
        if duration_secs.is_finite() && duration_secs >= 0.0 {
            self.duration_secs = Some(duration_secs);
            // A verbatim pre-metadata seek may have overshot; position
            // must not exceed the duration once it is known.
            if self.position_secs > duration_secs {
                self.position_secs = duration_secs;
            }
        }
    }

    /// Play acknowledgement from the output primitive
    pub fn on_media_play(&mut self) {
        if self.current_track.is_some() {
            self.set_state(PlaybackState::Playing);
        }
    }

    /// Pause acknowledgement from the output primitive
    pub fn on_media_pause(&mut self) {
        if self.current_track.is_some() {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Ended event from the output primitive
    ///
    /// Repeat `One` restarts the same track at position 0 and keeps
    /// playing; any other mode advances forward.
    pub fn on_media_ended(&mut self) {
        if self.repeat == RepeatMode::One && self.current_track.is_some() {
            self.restart_current();
        } else {
            self.advance(true);
        }
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.output.set_volume(self.volume);
        self.emit_volume_changed();
    }

    /// Current volume (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    // ===== Shuffle & Repeat =====

    /// Toggle the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.emit_shuffle_changed();
    }

    /// Current shuffle flag
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Advance the repeat mode through the fixed Off -> All -> One cycle
    pub fn cycle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycle());
    }

    /// Set the repeat mode directly
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        self.emit_repeat_changed();
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    // ===== Queue =====

    /// Apply a user reorder to the queue
    ///
    /// Subsequent next/previous resolution uses the new order.
    pub fn reorder_queue(&mut self, new_order: Vec<Track>) {
        self.queue.reorder(new_order);
        self.emit_queue_changed();
    }

    /// Tracks queued to play, in order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== State Queries =====

    /// Current transport state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether audio should currently be audible
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// ID of the currently loaded track
    pub fn current_track_id(&self) -> Option<&TrackId> {
        self.current_track.as_ref().map(|t| &t.id)
    }

    /// Elapsed position in seconds
    pub fn position(&self) -> f64 {
        self.position_secs
    }

    /// Track duration in seconds, once metadata has arrived
    pub fn duration(&self) -> Option<f64> {
        self.duration_secs
    }

    // ===== Output Binding =====

    /// Swap in a (re)acquired output primitive
    ///
    /// Volume is re-applied because it is a property of the primitive
    /// instance, not of the logical session. If a track is loaded its
    /// source is rebound, and playback is re-attempted when the logical
    /// state says it should be audible.
    pub fn bind_output(&mut self, output: Box<dyn MediaOutput>) {
        self.output = output;
        self.output.set_volume(self.volume);

        if let Some(track) = &self.current_track {
            self.output.bind(&track.audio_url);
            self.output.set_position(self.position_secs);
            if self.state == PlaybackState::Playing {
                if let Err(e) = self.output.play() {
                    debug!(error = %e, "Output rejected play on rebind");
                }
            }
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns everything emitted since the last drain. Consumers call
    /// this from their update loop and read current values off the
    /// engine for each event.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a position/duration snapshot event
    pub fn emit_position_update(&mut self) {
        self.pending_events.push(PlayerEvent::PositionUpdate {
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
        });
    }

    // ===== Internal =====

    /// Set the logical state to Playing and reconcile the primitive
    fn start_output(&mut self) {
        self.set_state(PlaybackState::Playing);
        if let Err(e) = self.output.play() {
            // Autoplay policy or a network stall; logical state is kept
            // and the next explicit play re-attempts.
            debug!(error = %e, "Output rejected play; state kept");
        }
    }

    /// Restart the current track from position 0, staying in Playing
    fn restart_current(&mut self) {
        self.position_secs = 0.0;
        self.output.set_position(0.0);
        self.start_output();
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn emit_track_changed(&mut self, track_id: TrackId, previous_track_id: Option<TrackId>) {
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
        });
    }

    fn emit_shuffle_changed(&mut self) {
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    fn emit_repeat_changed(&mut self) {
        self.pending_events
            .push(PlayerEvent::RepeatChanged { mode: self.repeat });
    }
}

impl Default for PlayerEngine {
    fn default() -> Self {
        Self::new(PlayerConfig::default(), Box::new(crate::output::NullOutput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NullOutput;

    fn create_test_track(id: &str) -> Track {
        let mut track = Track::new(format!("Track {}", id), "Test Artist", "Test Album");
        track.id = TrackId::new(id);
        track.audio_url = format!("https://cdn.example.com/audio/{}.mp3", id);
        track
    }

    fn engine() -> PlayerEngine {
        PlayerEngine::new(PlayerConfig::default(), Box::new(NullOutput))
    }

    #[test]
    fn starts_stopped_and_empty() {
        let engine = engine();
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert!(engine.current_track().is_none());
        assert_eq!(engine.queue_len(), 0);
        assert_eq!(engine.volume(), 0.75);
    }

    #[test]
    fn play_without_track_is_a_noop() {
        let mut engine = engine();
        engine.play();
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert!(!engine.has_pending_events());
    }

    #[test]
    fn load_track_autoplays() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);

        assert_eq!(engine.state(), PlaybackState::Playing);
        assert_eq!(engine.current_track_id(), Some(&TrackId::new("1")));
        assert_eq!(engine.position(), 0.0);
        assert!(engine.duration().is_none());
    }

    #[test]
    fn load_track_replaces_queue_from_context() {
        let mut engine = engine();
        let context = vec![create_test_track("1"), create_test_track("2")];
        engine.load_track(context[0].clone(), Some(context.clone()));

        assert_eq!(engine.queue_len(), 2);
    }

    #[test]
    fn same_track_load_resumes_without_reset() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);
        engine.on_media_metadata_ready(200.0);
        engine.on_media_time_update(42.0);
        engine.pause();

        engine.load_track(create_test_track("1"), None);
        assert_eq!(engine.state(), PlaybackState::Playing);
        assert_eq!(engine.position(), 42.0);
    }

    #[test]
    fn different_track_load_resets_position() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);
        engine.on_media_time_update(42.0);

        engine.load_track(create_test_track("2"), None);
        assert_eq!(engine.position(), 0.0);
        assert!(engine.duration().is_none());
    }

    #[test]
    fn toggle_play_flips_state() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);

        engine.toggle_play();
        assert_eq!(engine.state(), PlaybackState::Paused);

        engine.toggle_play();
        assert_eq!(engine.state(), PlaybackState::Playing);
    }

    #[test]
    fn volume_clamps() {
        let mut engine = engine();
        engine.set_volume(1.5);
        assert_eq!(engine.volume(), 1.0);

        engine.set_volume(-0.2);
        assert_eq!(engine.volume(), 0.0);
    }

    #[test]
    fn media_acknowledgements_win_last() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);

        engine.on_media_pause();
        assert_eq!(engine.state(), PlaybackState::Paused);

        engine.on_media_play();
        assert_eq!(engine.state(), PlaybackState::Playing);
    }

    #[test]
    fn media_acknowledgements_ignored_without_track() {
        let mut engine = engine();
        engine.on_media_play();
        assert_eq!(engine.state(), PlaybackState::Stopped);
    }

    #[test]
    fn drain_events_empties_buffer() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);
        assert!(engine.has_pending_events());

        let events = engine.drain_events();
        assert!(!events.is_empty());
        assert!(!engine.has_pending_events());
    }

    #[test]
    fn state_change_events_are_deduplicated() {
        let mut engine = engine();
        engine.load_track(create_test_track("1"), None);
        engine.drain_events();

        // Second play while already playing: no state change, no event
        engine.play();
        let events = engine.drain_events();
        assert!(events.is_empty());
    }
}
