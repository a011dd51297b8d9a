//! View module - UI rendering
//!
//! Renders an immutable session snapshot each tick. Organized into
//! submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `screens`: Home, settings, discovery and song-list screens
//! - `player`: The player screen with its progress bar

mod player;
mod screens;
mod utils;

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{RenderSnapshot, Screen, Song};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &RenderSnapshot, songs: &[Song]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status header
                Constraint::Min(0),    // Current screen
                Constraint::Length(3), // Bottom navigation bar
            ])
            .split(frame.area());

        render_header(frame, chunks[0]);

        match snapshot.screen {
            Screen::Home => screens::render_home(frame, chunks[1]),
            Screen::SongList => {
                screens::render_song_list(frame, chunks[1], songs, snapshot.selected_song)
            }
            Screen::Player => player::render_player(frame, chunks[1], &snapshot.playback),
            Screen::Settings => screens::render_settings(frame, chunks[1]),
            Screen::WifiSettings => screens::render_discovery(
                frame,
                chunks[1],
                "WiFi Networks",
                &snapshot.wifi,
                "No networks found yet (is nmcli available?)",
            ),
            Screen::BluetoothSettings => screens::render_discovery(
                frame,
                chunks[1],
                "Bluetooth Devices",
                &snapshot.bluetooth,
                "No devices found yet (is Bluetooth on?)",
            ),
        }

        render_bottom_nav(frame, chunks[2], snapshot.screen);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let clock = Local::now().format("%H:%M").to_string();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(clock, Style::default().fg(Color::White)),
        Span::styled("  jukebox-rs", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

fn render_bottom_nav(frame: &mut Frame, area: Rect, current: Screen) {
    let entries = [
        (Screen::Home, "[1] Home"),
        (Screen::SongList, "[2] Songs"),
        (Screen::Settings, "[3] Settings"),
    ];

    let mut spans = Vec::new();
    for (i, (screen, label)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if current == *screen || current.parent() == Some(*screen) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*label, style));
    }

    let nav = Paragraph::new(Line::from(spans))
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" q quit · esc back "));
    frame.render_widget(nav, area);
}
