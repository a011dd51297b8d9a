//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::model::Screen;

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Global keys: quit, the persistent bottom navigation bar, and back.
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit().await;
                return Ok(());
            }
            KeyCode::Char('1') => {
                self.navigate_to(Screen::Home).await;
                return Ok(());
            }
            KeyCode::Char('2') => {
                self.navigate_to(Screen::SongList).await;
                return Ok(());
            }
            KeyCode::Char('3') => {
                self.navigate_to(Screen::Settings).await;
                return Ok(());
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.navigate_back().await;
                return Ok(());
            }
            _ => {}
        }

        // Per-screen keys, dispatched off the current screen.
        match self.model.current_screen().await {
            Screen::Home => match key.code {
                KeyCode::Char('m') | KeyCode::Char('M') => {
                    self.navigate_to(Screen::SongList).await;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.navigate_to(Screen::Settings).await;
                }
                _ => {}
            },
            Screen::Settings => match key.code {
                KeyCode::Char('w') | KeyCode::Char('W') => {
                    self.navigate_to(Screen::WifiSettings).await;
                }
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    self.navigate_to(Screen::BluetoothSettings).await;
                }
                _ => {}
            },
            Screen::SongList => match key.code {
                KeyCode::Up => self.model.select_previous_song().await,
                KeyCode::Down => self.model.select_next_song().await,
                KeyCode::Enter => {
                    let index = self.model.selected_song().await;
                    self.select_song(index).await;
                }
                _ => {}
            },
            Screen::Player => match key.code {
                KeyCode::Char(' ') => self.toggle().await,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => self.next().await,
                KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Left => self.previous().await,
                KeyCode::Char('s') | KeyCode::Char('S') => self.stop().await,
                _ => {}
            },
            // The discovery screens are read-only; their scans are driven by
            // the render loop and the background worker.
            Screen::WifiSettings | Screen::BluetoothSettings => {}
        }

        Ok(())
    }
}
