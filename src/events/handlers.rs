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

use crate::{App, config, model::store::StoreError, theme::ColourScheme, util};

// Applies the outcome of a store operation to the UI: failures surface in
// the status line, successes clear it, and the pane cursor is clamped to the
// possibly shorter playlist.
fn apply(app: &mut App, result: Result<(), StoreError>) {
    match result {
        Ok(()) => app.status = None,
        Err(e) => app.status = Some(e.to_string()),
    }

    app.playlist_pane.sync_cursor(app.store.view().songs.len());
}

pub(super) fn handle_add_song(app: &mut App, title: String, artist: String) {
    match app.store.add_song(&title, &artist) {
        Ok(()) => {
            // The store owns validation; the form is only cleared once the
            // song is actually in.
            app.song_form.clear();
            app.song_form.is_active = false;
            app.status = Some(format!("Added \"{}\"", title.trim()));
            app.playlist_pane.sync_cursor(app.store.view().songs.len());
        }
        Err(e) => app.status = Some(e.to_string()),
    }
}

pub(super) fn handle_toggle_play_pause(app: &mut App) {
    let result = app.store.toggle_play_pause();
    apply(app, result);
}

pub(super) fn handle_stop(app: &mut App) {
    app.store.stop();
    apply(app, Ok(()));
}

pub(super) fn handle_next_track(app: &mut App) {
    app.store.next_track();
    apply(app, Ok(()));
}

pub(super) fn handle_prev_track(app: &mut App) {
    app.store.prev_track();
    apply(app, Ok(()));
}

pub(super) fn handle_next_playlist(app: &mut App) {
    app.store.next_playlist();
    apply(app, Ok(()));

    let view = app.store.view();
    app.status = Some(format!(
        "Playlist {} of {}",
        view.playlist_number, view.playlist_count
    ));
}

pub(super) fn handle_select_song(app: &mut App, index: usize) {
    let result = app.store.select_song(index);
    apply(app, result);
}

pub(super) fn handle_delete_at(app: &mut App, index: usize) {
    let result = app.store.delete_at(index);
    apply(app, result);
}

pub(super) fn handle_delete_selected(app: &mut App) {
    let result = app.store.delete_selected();
    apply(app, result);
}

pub(super) fn handle_open_song_form(app: &mut App) {
    app.song_form.open();
}

pub(super) fn handle_set_colour_scheme(app: &mut App, scheme: ColourScheme) {
    app.scheme = scheme;
    app.theme = scheme.palette();
    util::term::set_terminal_bg(app.theme.background_colour);

    app.config.colour_scheme = scheme;
    match config::save_config(&app.config) {
        Ok(()) => app.status = Some(format!("Colour scheme: {}", scheme.as_name())),
        Err(e) => app.status = Some(format!("Failed to save configuration: {e}")),
    }
}

pub(super) fn handle_status(app: &mut App, message: String) {
    app.status = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}
