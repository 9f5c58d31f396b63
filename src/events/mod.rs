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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Raw keyboard input is translated into [`AppEvent`]s, each of
//! which maps onto exactly one store operation or UI state change, so that
//! any front end (key map, commander, tests) drives the same command set.
//!
//! Every processed event ends with a terminal draw; the renderer pulls a
//! fresh view-model snapshot rather than reading store internals.

mod handlers;
use handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw, theme::ColourScheme};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    AddSong { title: String, artist: String },

    TogglePlayPause,
    Stop,
    NextTrack,
    PrevTrack,
    NextPlaylist,

    SelectSong(usize),
    DeleteAt(usize),
    DeleteSelected,

    OpenSongForm,

    SetColourScheme(ColourScheme),

    Error(String),

    Tick,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::AddSong { title, artist } => handle_add_song(app, title, artist),
            AppEvent::TogglePlayPause => handle_toggle_play_pause(app),
            AppEvent::Stop => handle_stop(app),
            AppEvent::NextTrack => handle_next_track(app),
            AppEvent::PrevTrack => handle_prev_track(app),
            AppEvent::NextPlaylist => handle_next_playlist(app),
            AppEvent::SelectSong(index) => handle_select_song(app, index),
            AppEvent::DeleteAt(index) => handle_delete_at(app, index),
            AppEvent::DeleteSelected => handle_delete_selected(app),
            AppEvent::OpenSongForm => handle_open_song_form(app),
            AppEvent::SetColourScheme(scheme) => handle_set_colour_scheme(app, scheme),
            AppEvent::Error(message) => handle_status(app, message),
            AppEvent::Tick | _ => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application events.
///
/// Input is offered to each focusable component in priority order: the
/// commander first, then the add-song form when it is open (the form is
/// modal and swallows everything), then the playlist pane, and finally the
/// global key map below.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let handled = app.commander.handle_event(&event, &app.event_tx);
    if handled {
        return Ok(());
    }

    if app.song_form.is_active {
        let event = Event::Key(key);
        return app.song_form.process_event(event, &app.event_tx);
    }

    let song_count = app.store.view().songs.len();
    let event = Event::Key(key);
    if app
        .playlist_pane
        .process_event(&event, song_count, &app.event_tx)?
    {
        return Ok(());
    }

    process_global_key_event(app, key)?;
    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        // Transport
        (KeyCode::Char(' '), _) => app.event_tx.send(AppEvent::TogglePlayPause)?,
        (KeyCode::Char('s'), _) => app.event_tx.send(AppEvent::Stop)?,
        (KeyCode::Char('n'), _) | (KeyCode::Right, _) => app.event_tx.send(AppEvent::NextTrack)?,
        (KeyCode::Char('b'), _) | (KeyCode::Left, _) => app.event_tx.send(AppEvent::PrevTrack)?,
        (KeyCode::Char('N'), _) => app.event_tx.send(AppEvent::NextPlaylist)?,

        // Library management
        (KeyCode::Char('a'), _) => app.event_tx.send(AppEvent::OpenSongForm)?,

        // Appearance
        (KeyCode::Char('t'), _) => app
            .event_tx
            .send(AppEvent::SetColourScheme(app.scheme.next()))?,

        _ => {}
    }

    Ok(())
}
