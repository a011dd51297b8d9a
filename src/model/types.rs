//! Core type definitions for the application

use std::path::PathBuf;

/// Which screen the UI is currently showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    SongList,
    Player,
    Settings,
    WifiSettings,
    BluetoothSettings,
}

impl Screen {
    /// Screens reachable from the persistent bottom navigation bar.
    pub fn is_bottom_nav_target(self) -> bool {
        matches!(self, Screen::Home | Screen::SongList | Screen::Settings)
    }

    /// Parent screen for back navigation, if any.
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::SongList => Some(Screen::Home),
            Screen::Player => Some(Screen::SongList),
            Screen::Settings => Some(Screen::Home),
            Screen::WifiSettings => Some(Screen::Settings),
            Screen::BluetoothSettings => Some(Screen::Settings),
        }
    }
}

/// One entry of the song catalog.
///
/// Created once at startup by the library loader and immutable afterwards;
/// the file path is the song's identity.
#[derive(Clone, Debug)]
pub struct Song {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    /// Embedded cover art bytes, extracted once at load.
    pub cover_art: Option<Vec<u8>>,
    /// Duration in seconds; 0.0 when unknown.
    pub duration_secs: f64,
}

/// One of the two discovery channels, each with its own result slot and cadence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryChannel {
    Wifi,
    Bluetooth,
}

/// UI state not owned by playback or discovery
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub selected_song: usize,
}
