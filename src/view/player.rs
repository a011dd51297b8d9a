//! Player screen rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::model::PlaybackInfo;

use super::utils::format_duration;

pub fn render_player(frame: &mut Frame, area: Rect, playback: &PlaybackInfo) {
    if playback.title.is_empty() {
        let info = Paragraph::new("No song loaded")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Player "));
        frame.render_widget(info, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Cover art placeholder
            Constraint::Length(2), // Title / artist
            Constraint::Length(3), // Progress bar
            Constraint::Length(1), // Control hints
        ])
        .margin(1)
        .split(area);

    let cover = if playback.has_cover { "▣ ♫ ▣" } else { "♫" };
    let art = Paragraph::new(cover)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(art, chunks[0]);

    let title = Paragraph::new(playback.title.as_str())
        .centered()
        .style(Style::default().fg(Color::White));
    let artist = Paragraph::new(playback.artist.as_str())
        .centered()
        .style(Style::default().fg(Color::DarkGray));
    let text_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[1]);
    frame.render_widget(title, text_chunks[0]);
    frame.render_widget(artist, text_chunks[1]);

    render_progress(frame, chunks[2], playback);

    let hints = Paragraph::new(" space play/pause · n next · p prev · s stop")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, playback: &PlaybackInfo) {
    // The busy flag comes straight from the audio engine, so the icon drops
    // back to ▶ the moment sound actually stops, not when the state does.
    let status_icon = if playback.engine_busy { "⏸" } else { "▶" };

    let time_str = format!(
        "{} / {}",
        format_duration(playback.elapsed_secs),
        format_duration(playback.duration_secs)
    );

    let ratio = if playback.duration_secs > 0.0 {
        (playback.elapsed_secs / playback.duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {status_icon} "))
                .title_bottom(Line::from(time_str).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::White))
        .ratio(ratio)
        .label("");

    frame.render_widget(gauge, area);
}
