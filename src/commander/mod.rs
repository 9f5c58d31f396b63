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

//! Command-line input logic and state management.
//!
//! The commander is a second front end to the same application events the
//! key map produces: any store operation can be invoked by a typed command.
//! Song numbers are entered one-based, as displayed in the playlist pane.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, theme::ColourScheme};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => {
                    match key_event.code {
                        KeyCode::Esc => {
                            self.input.reset();
                            self.active = false;
                            true
                        }

                        KeyCode::Enter => {
                            let buffer = self.input.value().trim().to_string();
                            if !buffer.is_empty() {
                                let _ = self.run_command(&buffer, event_tx);
                                self.input.reset();
                            }
                            self.active = false;

                            true
                        }

                        _ => {
                            // Delegate all other key events to the managed
                            // input component.
                            self.input.handle_event(event);

                            true
                        }
                    }
                }

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["p"] => event_tx.send(AppEvent::TogglePlayPause)?,
            ["s"] => event_tx.send(AppEvent::Stop)?,
            ["pn"] => event_tx.send(AppEvent::NextTrack)?,
            ["pp"] => event_tx.send(AppEvent::PrevTrack)?,
            ["np"] => event_tx.send(AppEvent::NextPlaylist)?,

            ["sel", number] => match parse_song_number(number) {
                Some(index) => event_tx.send(AppEvent::SelectSong(index))?,
                None => event_tx.send(AppEvent::Error(format!("not a song number: {number}")))?,
            },

            ["del"] => event_tx.send(AppEvent::DeleteSelected)?,
            ["del", number] => match parse_song_number(number) {
                Some(index) => event_tx.send(AppEvent::DeleteAt(index))?,
                None => event_tx.send(AppEvent::Error(format!("not a song number: {number}")))?,
            },

            ["add", rest @ ..] => match parse_song_entry(rest) {
                Some((title, artist)) => event_tx.send(AppEvent::AddSong { title, artist })?,
                None => event_tx.send(AppEvent::Error(String::from(
                    "usage: add <title> / <artist>",
                )))?,
            },

            ["theme", name] => match ColourScheme::from_name(name) {
                Some(scheme) => event_tx.send(AppEvent::SetColourScheme(scheme))?,
                None => event_tx.send(AppEvent::Error(format!("unknown theme: {name}")))?,
            },

            [] => {}

            [command, ..] => {
                event_tx.send(AppEvent::Error(format!("unknown command: {command}")))?
            }
        }

        Ok(())
    }
}

// One-based as displayed, zero-based internally.
fn parse_song_number(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|n| *n > 0).map(|n| n - 1)
}

// "add <title> / <artist>", split on the first slash.
fn parse_song_entry(parts: &[&str]) -> Option<(String, String)> {
    let joined = parts.join(" ");
    let (title, artist) = joined.split_once('/')?;

    Some((title.trim().to_string(), artist.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn run(command: &str) -> Vec<AppEvent> {
        let commander = Commander::new();
        let (tx, rx) = mpsc::channel();
        commander.run_command(command, &tx).expect("run command");
        drop(tx);
        rx.into_iter().collect()
    }

    #[test]
    fn transport_commands_map_to_events() {
        assert!(matches!(run("p").as_slice(), [AppEvent::TogglePlayPause]));
        assert!(matches!(run("s").as_slice(), [AppEvent::Stop]));
        assert!(matches!(run("np").as_slice(), [AppEvent::NextPlaylist]));
    }

    #[test]
    fn song_numbers_are_one_based() {
        assert!(matches!(run("sel 1").as_slice(), [AppEvent::SelectSong(0)]));
        assert!(matches!(run("del 3").as_slice(), [AppEvent::DeleteAt(2)]));
        assert!(matches!(run("sel 0").as_slice(), [AppEvent::Error(_)]));
        assert!(matches!(run("del").as_slice(), [AppEvent::DeleteSelected]));
    }

    #[test]
    fn add_splits_title_and_artist_on_slash() {
        let events = run("add Blue Train / John Coltrane");
        match events.as_slice() {
            [AppEvent::AddSong { title, artist }] => {
                assert_eq!(title, "Blue Train");
                assert_eq!(artist, "John Coltrane");
            }
            other => panic!("unexpected events: {other:?}"),
        }

        assert!(matches!(run("add no slash here").as_slice(), [AppEvent::Error(_)]));
    }

    #[test]
    fn theme_command_uses_scheme_names() {
        assert!(matches!(
            run("theme light-grey").as_slice(),
            [AppEvent::SetColourScheme(ColourScheme::LightGrey)]
        ));
        assert!(matches!(run("theme neon").as_slice(), [AppEvent::Error(_)]));
    }

    #[test]
    fn unknown_commands_report_an_error() {
        assert!(matches!(run("volume 5").as_slice(), [AppEvent::Error(_)]));
    }
}
