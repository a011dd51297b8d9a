//! Model module - Session state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (screens, songs, channels)
//! - `playback`: Playback timing state and the elapsed-time derivation
//! - `discovery`: Per-channel discovery result slots
//! - `session`: The shared session model with its accessor methods

mod discovery;
mod playback;
mod session;
mod types;

// Re-export all public types for convenient access
pub use discovery::DiscoverySlot;
pub use playback::{PlayState, PlaybackInfo, PlaybackTiming, TRACK_END_SLACK_SECS};
pub use session::{RenderSnapshot, SessionModel};
pub use types::{DiscoveryChannel, Screen, Song, UiState};
