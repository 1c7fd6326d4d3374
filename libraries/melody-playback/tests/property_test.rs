//! Property-based tests for playback invariants

use melody_core::types::{Track, TrackId};
use melody_playback::{NullOutput, PlaybackState, PlayerConfig, PlayerEngine, RepeatMode};
use proptest::prelude::*;

fn create_track(id: &str) -> Track {
    let mut track = Track::new(format!("Track {}", id), "Test Artist", "Test Album");
    track.id = TrackId::new(id);
    track
}

fn playing_engine() -> PlayerEngine {
    let mut engine = PlayerEngine::new(PlayerConfig::default(), Box::new(NullOutput));
    engine.load_track(create_track("t"), None);
    engine
}

proptest! {
    /// Transport state always equals the last requested state
    #[test]
    fn play_pause_sequences_end_in_last_requested_state(ops in prop::collection::vec(any::<bool>(), 1..40)) {
        let mut engine = playing_engine();

        for &play in &ops {
            if play {
                engine.play();
            } else {
                engine.pause();
            }
        }

        let expected = if *ops.last().unwrap() {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
        prop_assert_eq!(engine.state(), expected);
    }

    /// With a known duration, position stays inside [0, duration] across
    /// arbitrary seeks
    #[test]
    fn seek_never_escapes_known_duration(
        duration in 1.0f64..10_000.0,
        seeks in prop::collection::vec(-10_000.0f64..20_000.0, 1..30),
    ) {
        let mut engine = playing_engine();
        engine.on_media_metadata_ready(duration);

        for &target in &seeks {
            engine.seek(target);
            let position = engine.position();
            prop_assert!((0.0..=duration).contains(&position));
        }
    }

    /// Seeks are accepted verbatim while the duration is unknown
    #[test]
    fn seek_is_verbatim_without_duration(target in -1_000.0f64..10_000.0) {
        let mut engine = playing_engine();
        engine.seek(target);
        prop_assert_eq!(engine.position(), target);
    }

    /// Any multiple of three repeat cycles lands back where it started
    #[test]
    fn repeat_cycle_has_period_three(start in 0usize..3, cycles in 0usize..12) {
        let modes = [RepeatMode::Off, RepeatMode::All, RepeatMode::One];
        let mut engine = PlayerEngine::default();
        engine.set_repeat(modes[start]);

        for _ in 0..cycles * 3 {
            engine.cycle_repeat();
        }
        prop_assert_eq!(engine.repeat(), modes[start]);
    }

    /// Shuffle advance only ever lands on queue members
    #[test]
    fn shuffle_advance_stays_in_queue(queue_len in 2usize..10, steps in 1usize..20) {
        let queue: Vec<Track> = (0..queue_len)
            .map(|i| create_track(&i.to_string()))
            .collect();

        let mut engine = PlayerEngine::default();
        engine.load_track(queue[0].clone(), Some(queue.clone()));
        engine.toggle_shuffle();

        for _ in 0..steps {
            engine.advance(true);
            let current = engine.current_track_id().unwrap();
            prop_assert!(queue.iter().any(|t| &t.id == current));
        }
    }
}
