//! Playback-related types and timing state

use std::time::{Duration, Instant};

/// Slack past the cached duration before a track counts as finished.
pub const TRACK_END_SLACK_SECS: f64 = 0.3;

/// Playback state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Internal timing state for the current track.
///
/// The start reference is monotonic; pausing folds the elapsed position into
/// `paused_offset` and resuming recomputes the reference from it, so the
/// derived position survives pause/resume round-trips.
#[derive(Clone, Debug)]
pub struct PlaybackTiming {
    pub state: PlayState,
    pub current_index: usize,
    pub started_at: Option<Instant>,
    pub paused_offset: Duration,
    /// Duration of the loaded song in seconds, cached at play time.
    pub duration_secs: f64,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            state: PlayState::Stopped,
            current_index: 0,
            started_at: None,
            paused_offset: Duration::ZERO,
            duration_secs: 0.0,
        }
    }
}

impl PlaybackTiming {
    /// Derives the playback position in seconds, one authority per state:
    /// while Playing the engine's native position wins and the monotonic
    /// reference is only the fallback for a transiently unknown position;
    /// while Paused the stored offset is authoritative; Stopped is 0.
    /// Never negative.
    pub fn elapsed_secs(&self, native: Option<Duration>, now: Instant) -> f64 {
        match self.state {
            PlayState::Playing => match native {
                Some(pos) => pos.as_secs_f64(),
                None => self
                    .started_at
                    .map(|start| now.saturating_duration_since(start).as_secs_f64())
                    .unwrap_or(0.0),
            },
            PlayState::Paused => self.paused_offset.as_secs_f64(),
            PlayState::Stopped => 0.0,
        }
    }

    /// Resets timing for a freshly started song.
    pub fn begin(&mut self, index: usize, duration_secs: f64, now: Instant) {
        self.state = PlayState::Playing;
        self.current_index = index;
        self.started_at = Some(now);
        self.paused_offset = Duration::ZERO;
        self.duration_secs = duration_secs;
    }

    /// Folds the current position into the paused offset.
    pub fn pause_at(&mut self, elapsed_secs: f64) {
        self.state = PlayState::Paused;
        self.paused_offset = Duration::from_secs_f64(elapsed_secs.max(0.0));
    }

    /// Recomputes the start reference from the paused offset.
    pub fn resume(&mut self, now: Instant) {
        self.state = PlayState::Playing;
        self.started_at = Some(now - self.paused_offset);
    }

    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
        self.started_at = None;
        self.paused_offset = Duration::ZERO;
    }
}

/// Snapshot of playback for rendering
#[derive(Clone, Debug)]
pub struct PlaybackInfo {
    pub state: PlayState,
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub has_cover: bool,
    pub elapsed_secs: f64,
    pub duration_secs: f64,
    /// Whether the audio engine reports it is actively producing sound.
    pub engine_busy: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            state: PlayState::Stopped,
            index: 0,
            title: String::new(),
            artist: String::new(),
            has_cover: false,
            elapsed_secs: 0.0,
            duration_secs: 0.0,
            engine_busy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_prefers_native_position_while_playing() {
        let mut timing = PlaybackTiming::default();
        let now = Instant::now();
        timing.begin(0, 180.0, now);

        let elapsed = timing.elapsed_secs(Some(Duration::from_secs_f64(12.5)), now);
        assert!((elapsed - 12.5).abs() < 1e-9);
    }

    #[test]
    fn elapsed_falls_back_to_monotonic_reference() {
        let mut timing = PlaybackTiming::default();
        let now = Instant::now();
        timing.begin(0, 180.0, now);

        let later = now + Duration::from_secs(4);
        let elapsed = timing.elapsed_secs(None, later);
        assert!((elapsed - 4.0).abs() < 0.001);
    }

    #[test]
    fn elapsed_fallback_never_goes_negative() {
        let mut timing = PlaybackTiming::default();
        let now = Instant::now();
        timing.begin(0, 180.0, now + Duration::from_secs(5));

        // A reading taken before the recorded reference clamps to zero.
        assert_eq!(timing.elapsed_secs(None, now), 0.0);
    }

    #[test]
    fn paused_offset_is_authoritative_even_with_native_position() {
        let mut timing = PlaybackTiming::default();
        let now = Instant::now();
        timing.begin(0, 180.0, now);
        timing.pause_at(33.0);

        // A flaky native query must not move a paused position.
        let elapsed = timing.elapsed_secs(Some(Duration::from_secs(99)), now);
        assert!((elapsed - 33.0).abs() < 1e-9);
        assert!((timing.elapsed_secs(None, now) - 33.0).abs() < 1e-9);
    }

    #[test]
    fn stopped_reports_zero() {
        let timing = PlaybackTiming::default();
        assert_eq!(
            timing.elapsed_secs(Some(Duration::from_secs(7)), Instant::now()),
            0.0
        );
    }

    #[test]
    fn pause_resume_round_trip_preserves_position() {
        let mut timing = PlaybackTiming::default();
        let now = Instant::now();
        timing.begin(2, 240.0, now);
        timing.pause_at(60.0);
        let resume_at = now + Duration::from_secs(10);
        timing.resume(resume_at);

        // Immediately after resume the fallback position equals the offset.
        let elapsed = timing.elapsed_secs(None, resume_at);
        assert!((elapsed - 60.0).abs() < 0.05);
    }
}
