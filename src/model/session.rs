//! Shared session state read by the render loop and written by workers

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::discovery::DiscoverySlot;
use super::playback::{PlaybackInfo, PlaybackTiming};
use super::types::{DiscoveryChannel, Screen, Song, UiState};

/// Immutable snapshot of the session consumed by the renderer each tick
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    pub screen: Screen,
    pub playback: PlaybackInfo,
    pub wifi: DiscoverySlot,
    pub bluetooth: DiscoverySlot,
    pub selected_song: usize,
}

/// The single shared record of all UI-visible, worker-visible mutable data.
///
/// Each sub-state sits behind its own lock so a writer touches only the
/// fields it owns: the Bluetooth worker writes its channel slot, the render
/// thread writes everything else. Channel publishes hold the lock only for
/// the assignment, never across a scan.
pub struct SessionModel {
    /// Song catalog, loaded once at startup and immutable afterwards.
    songs: Vec<Song>,
    screen: Arc<Mutex<Screen>>,
    timing: Arc<Mutex<PlaybackTiming>>,
    wifi: Arc<Mutex<DiscoverySlot>>,
    bluetooth: Arc<Mutex<DiscoverySlot>>,
    ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl SessionModel {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs,
            screen: Arc::new(Mutex::new(Screen::Home)),
            timing: Arc::new(Mutex::new(PlaybackTiming::default())),
            wifi: Arc::new(Mutex::new(DiscoverySlot::default())),
            bluetooth: Arc::new(Mutex::new(DiscoverySlot::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    // ========================================================================
    // Screen
    // ========================================================================

    pub async fn current_screen(&self) -> Screen {
        *self.screen.lock().await
    }

    pub async fn set_screen(&self, screen: Screen) {
        *self.screen.lock().await = screen;
    }

    // ========================================================================
    // Playback timing
    // ========================================================================

    pub async fn get_timing(&self) -> PlaybackTiming {
        self.timing.lock().await.clone()
    }

    pub async fn begin_playback(&self, index: usize, duration_secs: f64) {
        self.timing
            .lock()
            .await
            .begin(index, duration_secs, Instant::now());
    }

    pub async fn mark_paused(&self, elapsed_secs: f64) {
        self.timing.lock().await.pause_at(elapsed_secs);
    }

    pub async fn mark_resumed(&self) {
        self.timing.lock().await.resume(Instant::now());
    }

    pub async fn mark_stopped(&self) {
        self.timing.lock().await.stop();
    }

    // ========================================================================
    // Discovery channels
    // ========================================================================

    fn channel_slot(&self, channel: DiscoveryChannel) -> &Arc<Mutex<DiscoverySlot>> {
        match channel {
            DiscoveryChannel::Wifi => &self.wifi,
            DiscoveryChannel::Bluetooth => &self.bluetooth,
        }
    }

    /// Atomically replaces a channel's result list and error as one update.
    pub async fn publish_discovery(
        &self,
        channel: DiscoveryChannel,
        outcome: Result<Vec<String>, String>,
    ) {
        let mut slot = self.channel_slot(channel).lock().await;
        slot.publish(outcome, Instant::now());
    }

    pub async fn discovery_snapshot(&self, channel: DiscoveryChannel) -> DiscoverySlot {
        self.channel_slot(channel).lock().await.clone()
    }

    pub async fn discovery_due(&self, channel: DiscoveryChannel, interval: Duration) -> bool {
        self.channel_slot(channel)
            .lock()
            .await
            .is_due(interval, Instant::now())
    }

    // ========================================================================
    // Song list selection
    // ========================================================================

    pub async fn selected_song(&self) -> usize {
        self.ui_state.lock().await.selected_song
    }

    pub async fn select_previous_song(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.selected_song = ui.selected_song.saturating_sub(1);
    }

    pub async fn select_next_song(&self) {
        if self.songs.is_empty() {
            return;
        }
        let mut ui = self.ui_state.lock().await;
        ui.selected_song = (ui.selected_song + 1).min(self.songs.len() - 1);
    }

    // ========================================================================
    // Shutdown
    // ========================================================================

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self) {
        *self.should_quit.lock().await = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn catalog(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song {
                path: PathBuf::from(format!("/music/{i}.mp3")),
                title: format!("Song {i}"),
                artist: String::new(),
                cover_art: None,
                duration_secs: 10.0,
            })
            .collect()
    }

    #[tokio::test]
    async fn failed_then_successful_scan_never_leaves_a_stale_pair() {
        let model = SessionModel::new(vec![]);

        model
            .publish_discovery(DiscoveryChannel::Wifi, Err("WiFi tool not found".into()))
            .await;
        let slot = model.discovery_snapshot(DiscoveryChannel::Wifi).await;
        assert!(slot.entries.is_empty());
        assert!(slot.error.is_some());

        model
            .publish_discovery(DiscoveryChannel::Wifi, Ok(vec!["HomeNet".into()]))
            .await;
        let slot = model.discovery_snapshot(DiscoveryChannel::Wifi).await;
        assert_eq!(slot.entries, vec!["HomeNet"]);
        assert!(slot.error.is_none());
    }

    #[tokio::test]
    async fn channels_are_independent() {
        let model = SessionModel::new(vec![]);
        model
            .publish_discovery(DiscoveryChannel::Bluetooth, Ok(vec!["Speaker (AA:BB)".into()]))
            .await;

        let wifi = model.discovery_snapshot(DiscoveryChannel::Wifi).await;
        assert!(wifi.entries.is_empty());
        assert!(wifi.last_scan.is_none());

        let bt = model.discovery_snapshot(DiscoveryChannel::Bluetooth).await;
        assert_eq!(bt.entries.len(), 1);
    }

    #[tokio::test]
    async fn a_fresh_publish_suppresses_the_next_scan() {
        let model = SessionModel::new(vec![]);
        assert!(
            model
                .discovery_due(DiscoveryChannel::Wifi, Duration::from_secs(6))
                .await
        );

        model.publish_discovery(DiscoveryChannel::Wifi, Ok(vec![])).await;
        assert!(
            !model
                .discovery_due(DiscoveryChannel::Wifi, Duration::from_secs(6))
                .await
        );
    }

    #[tokio::test]
    async fn song_selection_clamps_to_catalog_bounds() {
        let model = SessionModel::new(catalog(2));
        model.select_previous_song().await;
        assert_eq!(model.selected_song().await, 0);

        model.select_next_song().await;
        model.select_next_song().await;
        model.select_next_song().await;
        assert_eq!(model.selected_song().await, 1);
    }

    #[tokio::test]
    async fn selection_on_empty_catalog_stays_at_zero() {
        let model = SessionModel::new(vec![]);
        model.select_next_song().await;
        assert_eq!(model.selected_song().await, 0);
    }
}
