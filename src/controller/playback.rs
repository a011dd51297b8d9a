//! Playback control methods
//!
//! State machine over {Stopped, Playing, Paused}. Index arithmetic is modulo
//! the catalog length in both directions; every control is a no-op on an
//! empty catalog. Engine failures are logged and leave the playback state
//! untouched — nothing here can crash the render loop.

use std::time::Instant;

use crate::model::{PlayState, PlaybackInfo, TRACK_END_SLACK_SECS};

use super::AppController;

impl AppController {
    /// Loads and starts the song at `index`, wrapped into catalog range.
    pub async fn play(&self, index: usize) {
        let songs = self.model.songs();
        if songs.is_empty() {
            return;
        }
        let index = index % songs.len();
        let song = &songs[index];

        {
            let mut engine = self.engine.lock().await;
            if let Err(e) = engine.load(&song.path) {
                tracing::error!(path = %song.path.display(), error = %e, "failed to load song");
                return;
            }
            engine.play();
        }

        self.model.begin_playback(index, song.duration_secs).await;
        tracing::info!(index, title = %song.title, "playback started");
    }

    /// Stopped -> plays the current index; Playing -> pauses, preserving the
    /// elapsed offset; Paused -> resumes from that offset.
    pub async fn toggle(&self) {
        let timing = self.model.get_timing().await;
        match timing.state {
            PlayState::Stopped => self.play(timing.current_index).await,
            PlayState::Playing => {
                let elapsed = self.elapsed_seconds().await;
                self.engine.lock().await.pause();
                self.model.mark_paused(elapsed).await;
                tracing::debug!(elapsed, "playback paused");
            }
            PlayState::Paused => {
                self.engine.lock().await.resume();
                self.model.mark_resumed().await;
                tracing::debug!("playback resumed");
            }
        }
    }

    pub async fn stop(&self) {
        if self.model.songs().is_empty() {
            return;
        }
        self.engine.lock().await.stop();
        self.model.mark_stopped().await;
        tracing::debug!("playback stopped");
    }

    pub async fn next(&self) {
        let len = self.model.songs().len();
        if len == 0 {
            return;
        }
        let timing = self.model.get_timing().await;
        self.play((timing.current_index + 1) % len).await;
    }

    pub async fn previous(&self) {
        let len = self.model.songs().len();
        if len == 0 {
            return;
        }
        let timing = self.model.get_timing().await;
        self.play((timing.current_index + len - 1) % len).await;
    }

    /// Current playback position in seconds; never negative. The engine's
    /// native position is authoritative while playing, with the monotonic
    /// start reference as fallback for a transiently unknown position.
    pub async fn elapsed_seconds(&self) -> f64 {
        let native = self.engine.lock().await.native_position();
        let timing = self.model.get_timing().await;
        timing.elapsed_secs(native, Instant::now())
    }

    /// Treats the track as finished once the position passes the cached
    /// duration plus slack, and advances. Called on every render tick while
    /// the player screen is visible; never fires while Paused or Stopped.
    pub async fn check_auto_advance(&self) {
        let timing = self.model.get_timing().await;
        if timing.state != PlayState::Playing || timing.duration_secs <= 0.0 {
            return;
        }
        let elapsed = self.elapsed_seconds().await;
        if elapsed > timing.duration_secs + TRACK_END_SLACK_SECS {
            tracing::debug!(elapsed, duration = timing.duration_secs, "track finished");
            self.next().await;
        }
    }

    /// Playback snapshot for the renderer.
    pub(crate) async fn playback_info(&self) -> PlaybackInfo {
        let timing = self.model.get_timing().await;
        let (elapsed_secs, engine_busy) = {
            let engine = self.engine.lock().await;
            let native = engine.native_position();
            (timing.elapsed_secs(native, Instant::now()), engine.is_busy())
        };

        match self.model.song(timing.current_index) {
            Some(song) => PlaybackInfo {
                state: timing.state,
                index: timing.current_index,
                title: song.title.clone(),
                artist: song.artist.clone(),
                has_cover: song.cover_art.is_some(),
                elapsed_secs,
                duration_secs: if timing.duration_secs > 0.0 {
                    timing.duration_secs
                } else {
                    song.duration_secs
                },
                engine_busy,
            },
            None => PlaybackInfo::default(),
        }
    }
}
