//! Audio engine capability
//!
//! The controller drives playback through the [`AudioEngine`] trait; the
//! production implementation sits on top of rodio. Any engine call may fail
//! at runtime — failures are surfaced to the caller and logged there, never
//! allowed to take down the render loop.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

/// Playback capability consumed by the playback controller.
pub trait AudioEngine {
    /// Loads the file at `path`, replacing whatever was loaded before.
    /// The engine stays silent until `play` is called.
    fn load(&mut self, path: &Path) -> Result<()>;
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    /// Whether the engine is actively producing sound.
    fn is_busy(&self) -> bool;
    /// Engine-native playback offset; `None` when transiently unknown
    /// (nothing loaded, or the backend cannot answer right now).
    fn native_position(&self) -> Option<Duration>;
}

/// rodio-backed engine: one output stream for the process lifetime, one sink
/// per loaded song.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl RodioEngine {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::from_default_device()
            .context("no default audio device")?
            .open_stream_or_fallback()
            .context("failed to open audio output stream")?;
        Ok(Self { stream, sink: None })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode {}", path.display()))?;

        // Appending to a paused sink keeps the position query at zero until
        // playback actually starts.
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|sink| !sink.empty() && !sink.is_paused())
            .unwrap_or(false)
    }

    fn native_position(&self) -> Option<Duration> {
        self.sink.as_ref().map(|sink| sink.get_pos())
    }
}
