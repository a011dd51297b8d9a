//! Screen navigation state machine
//!
//! Transitions are input-driven only. Each screen exposes a few edges of its
//! own, and the persistent bottom navigation bar can jump to Home, SongList
//! or Settings from anywhere. The machine starts on Home and runs for the
//! process lifetime; illegal transitions are ignored, not errors.

use crate::model::Screen;

use super::AppController;

impl AppController {
    /// Moves to `target` when the transition is legal from the current
    /// screen; otherwise logs and stays put.
    pub async fn navigate_to(&self, target: Screen) {
        let current = self.model.current_screen().await;
        if current == target {
            return;
        }
        if !Self::transition_allowed(current, target) {
            tracing::debug!(?current, ?target, "ignoring illegal screen transition");
            return;
        }
        tracing::debug!(?current, ?target, "screen changed");
        self.model.set_screen(target).await;
    }

    /// Returns to the parent screen, if the current one has one.
    pub async fn navigate_back(&self) {
        let current = self.model.current_screen().await;
        if let Some(parent) = current.parent() {
            self.model.set_screen(parent).await;
        }
    }

    /// Song selection from the list: starts playback and shows the player.
    pub async fn select_song(&self, index: usize) {
        self.play(index).await;
        self.navigate_to(Screen::Player).await;
    }

    fn transition_allowed(current: Screen, target: Screen) -> bool {
        if target.is_bottom_nav_target() {
            return true;
        }
        matches!(
            (current, target),
            (Screen::Settings, Screen::WifiSettings)
                | (Screen::Settings, Screen::BluetoothSettings)
                | (Screen::SongList, Screen::Player)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioEngine;
    use crate::model::{PlayState, SessionModel, Song};
    use anyhow::Result;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    struct NullEngine;

    impl AudioEngine for NullEngine {
        fn load(&mut self, _path: &Path) -> Result<()> {
            Ok(())
        }
        fn play(&mut self) {}
        fn pause(&mut self) {}
        fn resume(&mut self) {}
        fn stop(&mut self) {}
        fn is_busy(&self) -> bool {
            false
        }
        fn native_position(&self) -> Option<Duration> {
            None
        }
    }

    fn controller(songs: Vec<Song>) -> AppController {
        AppController::new(Arc::new(SessionModel::new(songs)), Box::new(NullEngine))
    }

    fn one_song() -> Vec<Song> {
        vec![Song {
            path: PathBuf::from("/music/a.mp3"),
            title: "a".into(),
            artist: String::new(),
            cover_art: None,
            duration_secs: 10.0,
        }]
    }

    #[tokio::test]
    async fn initial_screen_is_home() {
        let ctl = controller(vec![]);
        assert_eq!(ctl.model.current_screen().await, Screen::Home);
    }

    #[tokio::test]
    async fn settings_opens_its_sub_screens() {
        let ctl = controller(vec![]);
        ctl.navigate_to(Screen::Settings).await;
        ctl.navigate_to(Screen::WifiSettings).await;
        assert_eq!(ctl.model.current_screen().await, Screen::WifiSettings);

        ctl.navigate_back().await;
        ctl.navigate_to(Screen::BluetoothSettings).await;
        assert_eq!(ctl.model.current_screen().await, Screen::BluetoothSettings);
    }

    #[tokio::test]
    async fn wifi_screen_is_not_reachable_from_home() {
        let ctl = controller(vec![]);
        ctl.navigate_to(Screen::WifiSettings).await;
        assert_eq!(ctl.model.current_screen().await, Screen::Home);
    }

    #[tokio::test]
    async fn player_is_only_reachable_from_the_song_list() {
        let ctl = controller(vec![]);
        ctl.navigate_to(Screen::Settings).await;
        ctl.navigate_to(Screen::Player).await;
        assert_eq!(ctl.model.current_screen().await, Screen::Settings);

        ctl.navigate_to(Screen::SongList).await;
        ctl.navigate_to(Screen::Player).await;
        assert_eq!(ctl.model.current_screen().await, Screen::Player);
    }

    #[tokio::test]
    async fn bottom_nav_jumps_from_any_screen() {
        let ctl = controller(vec![]);
        ctl.navigate_to(Screen::Settings).await;
        ctl.navigate_to(Screen::BluetoothSettings).await;
        ctl.navigate_to(Screen::Home).await;
        assert_eq!(ctl.model.current_screen().await, Screen::Home);

        ctl.navigate_to(Screen::SongList).await;
        assert_eq!(ctl.model.current_screen().await, Screen::SongList);
    }

    #[tokio::test]
    async fn back_walks_up_to_home_and_stops() {
        let ctl = controller(vec![]);
        ctl.navigate_to(Screen::Settings).await;
        ctl.navigate_to(Screen::WifiSettings).await;
        ctl.navigate_back().await;
        assert_eq!(ctl.model.current_screen().await, Screen::Settings);
        ctl.navigate_back().await;
        assert_eq!(ctl.model.current_screen().await, Screen::Home);
        ctl.navigate_back().await;
        assert_eq!(ctl.model.current_screen().await, Screen::Home);
    }

    #[tokio::test]
    async fn selecting_a_song_starts_playback_and_shows_the_player() {
        let ctl = controller(one_song());
        ctl.navigate_to(Screen::SongList).await;
        ctl.select_song(0).await;

        assert_eq!(ctl.model.current_screen().await, Screen::Player);
        let timing = ctl.model.get_timing().await;
        assert_eq!(timing.state, PlayState::Playing);
        assert_eq!(timing.current_index, 0);
    }
}
