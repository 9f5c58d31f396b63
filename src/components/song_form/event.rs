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

//! Input handling for the add-song form.
//!
//! While the form is open it is modal: every key event lands here. Tab moves
//! between the two fields, Enter submits, Esc abandons the entry, and
//! everything else is delegated to the focused text input.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SongForm,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SongForm {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = &event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc => {
                self.clear();
                self.is_active = false;
            }

            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => self.focus_next(),

            KeyCode::Enter => {
                event_tx.send(AppEvent::AddSong {
                    title: self.title.value().to_string(),
                    artist: self.artist.value().to_string(),
                })?;
            }

            _ => {
                self.focused_input().handle_event(&event);
            }
        }

        Ok(())
    }
}
