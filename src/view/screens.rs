//! Home, settings, discovery and song-list screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

use crate::model::{DiscoverySlot, Song};

use super::utils::{format_duration, render_scrollable_list};

pub fn render_home(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let songs = Paragraph::new(" [m] Songs")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(songs, chunks[0]);

    let settings = Paragraph::new(" [s] Settings")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(settings, chunks[1]);
}

pub fn render_settings(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let wifi = Paragraph::new(" [w] WiFi Settings")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(wifi, chunks[0]);

    let bluetooth = Paragraph::new(" [b] Bluetooth Settings")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bluetooth, chunks[1]);
}

pub fn render_song_list(frame: &mut Frame, area: Rect, songs: &[Song], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Songs ({}) ", songs.len()));

    if songs.is_empty() {
        let info = Paragraph::new("No songs found")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(info, area);
        return;
    }

    let items: Vec<ListItem> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let style = if i == selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            let text = if song.artist.is_empty() {
                format!(" {}  ({})", song.title, format_duration(song.duration_secs))
            } else {
                format!(
                    " {} — {}  ({})",
                    song.title,
                    song.artist,
                    format_duration(song.duration_secs)
                )
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    render_scrollable_list(frame, area, items, selected, block);
}

/// Discovery screens render the latest published slot: an inline error in
/// place of the list when the last scan failed, otherwise the entries in
/// scan-result order.
pub fn render_discovery(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    slot: &DiscoverySlot,
    empty_hint: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));

    if let Some(error) = &slot.error {
        let message = Paragraph::new(format!("Error: {error}"))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    if slot.entries.is_empty() {
        let hint = Paragraph::new(empty_hint.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = slot
        .entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                format!(" {entry}"),
                Style::default().add_modifier(Modifier::DIM),
            )))
        })
        .collect();

    render_scrollable_list(frame, area, items, 0, block);
}
