// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Input handling for the playlist pane.
//!
//! Cursor movement stays inside the pane; everything acting on the store
//! (selecting or deleting a song) is sent out as an [`AppEvent`], keyed on
//! the row under the cursor.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{components::PlaylistPane, events::AppEvent};

impl PlaylistPane {
    /// Offers a terminal event to the pane.
    ///
    /// Returns `true` when the event was consumed, so unhandled keys fall
    /// through to the global key map.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        song_count: usize,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.cursor_next(song_count),
            KeyCode::Char('k') | KeyCode::Up => self.cursor_previous(song_count),
            KeyCode::Char('g') => self.cursor_first(),
            KeyCode::Char('G') => self.cursor_last(song_count),

            KeyCode::Enter => {
                if let Some(index) = self.cursor() {
                    event_tx.send(AppEvent::SelectSong(index))?;
                }
            }

            // Per-row delete, bypassing the selection
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.cursor() {
                    event_tx.send(AppEvent::DeleteAt(index))?;
                }
            }

            // Delete whichever song is selected in the store
            KeyCode::Char('x') => event_tx.send(AppEvent::DeleteSelected)?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}
