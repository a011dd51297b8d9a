//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and manages playback operations.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Playback control methods
//! - `navigation`: Screen navigation state machine

mod input;
mod navigation;
mod playback;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::AudioEngine;
use crate::model::{DiscoveryChannel, RenderSnapshot, SessionModel};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<SessionModel>,
    pub(crate) engine: Arc<Mutex<Box<dyn AudioEngine>>>,
}

impl AppController {
    pub fn new(model: Arc<SessionModel>, engine: Box<dyn AudioEngine>) -> Self {
        Self {
            model,
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Assembles the immutable snapshot the renderer consumes this tick.
    pub async fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            screen: self.model.current_screen().await,
            playback: self.playback_info().await,
            wifi: self.model.discovery_snapshot(DiscoveryChannel::Wifi).await,
            bluetooth: self
                .model
                .discovery_snapshot(DiscoveryChannel::Bluetooth)
                .await,
            selected_song: self.model.selected_song().await,
        }
    }
}
