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

//! User interface rendering logic.
//!
//! This module translates the application state into `ratatui` widgets. The
//! entry point is [`draw`], called after every processed event. Rendering is
//! a pure function of the current state: the playlist pane and transport bar
//! consume the store's view-model snapshot, never the store itself.

pub(crate) mod icons;

mod commander;
mod transport;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::App;

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the playlist pane, the transport bar, and the
/// commander/status line. The add-song form, when open, is drawn last as a
/// popup over the lot.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: playlist, transport, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    let snapshot = app.store.view();

    app.playlist_pane.draw(f, outer[0], &snapshot, &app.theme);

    transport::draw_transport(f, outer[1], &snapshot, &app.theme);

    commander::draw_commander(f, outer[2], app);

    if app.song_form.is_active {
        app.song_form.draw(f, area, &app.theme);
    }
}
