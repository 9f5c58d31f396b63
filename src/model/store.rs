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

//! Playlist collection state and playback position management.
//!
//! This module owns all mutable player state: the playlists themselves, which
//! playlist is active, the playback position and flag, and the UI selection.
//! Every mutation goes through one of the [`PlaylistStore`] operations, each
//! of which either applies fully or fails with the store unchanged.
//!
//! The store knows nothing about rendering. Front ends (key handlers, the
//! commander, tests) invoke operations and then pull a fresh
//! [`PlaylistSnapshot`] for display.

use thiserror::Error;

use crate::model::{PlaylistSnapshot, Song};

/// A recoverable failure of a store operation.
///
/// None of these are fatal: the store is left exactly as it was and the
/// message is surfaced to the user in the status line.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum StoreError {
    #[error("both a song title and an artist are required")]
    Validation,

    #[error("the playlist has no songs yet")]
    EmptyPlaylist,

    #[error("no song is selected")]
    NoSelection,

    #[error("song {0} is not in the playlist")]
    IndexOutOfRange(usize),
}

/// The collection of playlists and all playback and selection state.
///
/// Invariants, maintained by every operation:
///
/// * there is always at least one playlist,
/// * the active playlist index is in bounds,
/// * `current_song` and `selected_song`, when set, index into the active
///   playlist,
/// * `is_playing` implies a current song is positioned.
pub(crate) struct PlaylistStore {
    playlists: Vec<Vec<Song>>,
    current_playlist: usize,
    current_song: Option<usize>,
    is_playing: bool,
    selected_song: Option<usize>,
}

impl PlaylistStore {
    /// Creates a store with a single empty playlist and nothing positioned,
    /// playing, or selected.
    pub(crate) fn new() -> Self {
        Self {
            playlists: vec![Vec::new()],
            current_playlist: 0,
            current_song: None,
            is_playing: false,
            selected_song: None,
        }
    }

    fn active(&self) -> &[Song] {
        &self.playlists[self.current_playlist]
    }

    /// Appends a song to the active playlist.
    ///
    /// Both fields are trimmed of surrounding whitespace first; if either is
    /// empty after trimming the operation fails and nothing is added.
    pub(crate) fn add_song(&mut self, title: &str, artist: &str) -> Result<(), StoreError> {
        let title = title.trim();
        let artist = artist.trim();

        if title.is_empty() || artist.is_empty() {
            return Err(StoreError::Validation);
        }

        self.playlists[self.current_playlist].push(Song {
            title: title.to_string(),
            artist: artist.to_string(),
        });

        Ok(())
    }

    /// Toggles between playing and paused.
    ///
    /// Fails on an empty playlist. If no song is positioned yet, the first
    /// song becomes current as a side effect of this call, so toggling from
    /// a fresh store starts playing song zero.
    pub(crate) fn toggle_play_pause(&mut self) -> Result<(), StoreError> {
        if self.active().is_empty() {
            return Err(StoreError::EmptyPlaylist);
        }

        if self.current_song.is_none() {
            self.current_song = Some(0);
        }
        self.is_playing = !self.is_playing;

        Ok(())
    }

    /// Stops playback and clears the position.
    ///
    /// Always succeeds and is idempotent; safe to call with no song
    /// positioned or on an empty playlist.
    pub(crate) fn stop(&mut self) {
        self.is_playing = false;
        self.current_song = None;
    }

    /// Moves the position to the next song, wrapping from the last song back
    /// to the first.
    ///
    /// From the unpositioned state this lands on song zero. Repositioning
    /// does not change the play/pause flag. No-op on an empty playlist.
    pub(crate) fn next_track(&mut self) {
        let len = self.active().len();
        if len == 0 {
            return;
        }

        self.current_song = Some(match self.current_song {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Moves the position to the previous song, wrapping from the first song
    /// to the last.
    ///
    /// From the unpositioned state this lands on the last song. No-op on an
    /// empty playlist.
    pub(crate) fn prev_track(&mut self) {
        let len = self.active().len();
        if len == 0 {
            return;
        }

        self.current_song = Some(match self.current_song {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
    }

    /// Switches to the next playlist, creating a fresh empty one when the
    /// active playlist is already the last.
    ///
    /// Switching always stops playback and drops the selection, whatever the
    /// prior state. Playlists are never removed, so the collection only
    /// grows.
    pub(crate) fn next_playlist(&mut self) {
        if self.current_playlist + 1 < self.playlists.len() {
            self.current_playlist += 1;
        } else {
            self.playlists.push(Vec::new());
            self.current_playlist = self.playlists.len() - 1;
        }

        self.current_song = None;
        self.selected_song = None;
        self.is_playing = false;
    }

    /// Marks the song at `index` as selected in the UI.
    ///
    /// Pure selection; playback is unaffected.
    pub(crate) fn select_song(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.active().len() {
            return Err(StoreError::IndexOutOfRange(index));
        }

        self.selected_song = Some(index);

        Ok(())
    }

    /// Removes the selected song from the active playlist.
    ///
    /// Fails when nothing is selected. The selection is always cleared on
    /// success.
    pub(crate) fn delete_selected(&mut self) -> Result<(), StoreError> {
        let index = self.selected_song.ok_or(StoreError::NoSelection)?;
        self.remove_song(index);

        Ok(())
    }

    /// Removes the song at `index` from the active playlist, bypassing the
    /// selection.
    ///
    /// Any existing selection is dropped, even when it is unrelated to the
    /// removed song.
    pub(crate) fn delete_at(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.active().len() {
            return Err(StoreError::IndexOutOfRange(index));
        }

        self.remove_song(index);

        Ok(())
    }

    // Removal plus the position-adjustment policy shared by both delete
    // operations. `index` must already be bounds-checked.
    //
    // Removing the current song stops playback outright; removing an earlier
    // song shifts the position down by one to track the splice.
    fn remove_song(&mut self, index: usize) {
        self.playlists[self.current_playlist].remove(index);

        match self.current_song {
            Some(current) if current == index => self.stop(),
            Some(current) if current > index => self.current_song = Some(current - 1),
            _ => {}
        }

        self.selected_song = None;
    }

    /// Returns the view model for the renderer.
    pub(crate) fn view(&self) -> PlaylistSnapshot<'_> {
        PlaylistSnapshot {
            songs: self.active(),
            current_song: self.current_song,
            is_playing: self.is_playing,
            selected_song: self.selected_song,
            playlist_number: self.current_playlist + 1,
            playlist_count: self.playlists.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prop_assert;

    use super::*;
    use crate::model::PlaybackState;

    fn store_with_songs(count: usize) -> PlaylistStore {
        let mut store = PlaylistStore::new();
        for n in 0..count {
            store
                .add_song(&format!("song {n}"), &format!("artist {n}"))
                .expect("add song");
        }
        store
    }

    fn assert_invariants(store: &PlaylistStore) {
        assert!(!store.playlists.is_empty());
        assert!(store.current_playlist < store.playlists.len());

        let len = store.playlists[store.current_playlist].len();
        if let Some(current) = store.current_song {
            assert!(current < len);
        }
        if let Some(selected) = store.selected_song {
            assert!(selected < len);
        }
        if store.is_playing {
            assert!(store.current_song.is_some());
        }
    }

    #[test]
    fn fresh_store_has_one_empty_playlist() {
        let store = PlaylistStore::new();
        let view = store.view();

        assert!(view.songs.is_empty());
        assert_eq!(view.playlist_number, 1);
        assert_eq!(view.playlist_count, 1);
        assert_eq!(view.playback_state(), PlaybackState::Stopped);
        assert_eq!(view.selected_song, None);
    }

    #[test]
    fn add_song_trims_fields() {
        let mut store = PlaylistStore::new();
        store.add_song("  Holiday  ", "  Bee Gees  ").expect("add");

        let view = store.view();
        assert_eq!(view.songs[0].title, "Holiday");
        assert_eq!(view.songs[0].artist, "Bee Gees");
    }

    #[test]
    fn add_song_rejects_blank_fields() {
        let mut store = PlaylistStore::new();

        assert_eq!(store.add_song("", "x"), Err(StoreError::Validation));
        assert_eq!(store.add_song("x", ""), Err(StoreError::Validation));
        assert_eq!(store.add_song("   ", "x"), Err(StoreError::Validation));
        assert!(store.view().songs.is_empty());
    }

    #[test]
    fn toggle_on_empty_playlist_fails() {
        let mut store = PlaylistStore::new();

        assert_eq!(store.toggle_play_pause(), Err(StoreError::EmptyPlaylist));
        assert_eq!(store.view().playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn first_toggle_positions_song_zero_and_plays() {
        let mut store = store_with_songs(1);

        store.toggle_play_pause().expect("toggle");
        let view = store.view();
        assert_eq!(view.current_song, Some(0));
        assert!(view.is_playing);

        // A second toggle pauses but keeps the position.
        store.toggle_play_pause().expect("toggle");
        let view = store.view();
        assert_eq!(view.current_song, Some(0));
        assert!(!view.is_playing);
        assert_eq!(view.playback_state(), PlaybackState::Paused);
    }

    #[test]
    fn next_track_from_unpositioned_lands_on_first_song() {
        for count in [1, 2, 5] {
            let mut store = store_with_songs(count);
            store.next_track();
            assert_eq!(store.view().current_song, Some(0));
        }
    }

    #[test]
    fn next_track_wraps_to_start() {
        let mut store = store_with_songs(3);
        store.toggle_play_pause().expect("toggle");
        store.next_track();
        store.next_track();
        assert_eq!(store.view().current_song, Some(2));

        store.next_track();
        assert_eq!(store.view().current_song, Some(0));
        // Repositioning never touches the play flag.
        assert!(store.view().is_playing);
    }

    #[test]
    fn prev_track_wraps_to_end() {
        let mut store = store_with_songs(3);
        store.toggle_play_pause().expect("toggle");
        assert_eq!(store.view().current_song, Some(0));

        store.prev_track();
        assert_eq!(store.view().current_song, Some(2));
    }

    #[test]
    fn prev_track_from_unpositioned_lands_on_last_song() {
        let mut store = store_with_songs(4);
        store.prev_track();
        assert_eq!(store.view().current_song, Some(3));
    }

    #[test]
    fn track_navigation_ignores_empty_playlist() {
        let mut store = PlaylistStore::new();
        store.next_track();
        store.prev_track();
        assert_eq!(store.view().current_song, None);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut store = store_with_songs(2);
        store.toggle_play_pause().expect("toggle");

        store.stop();
        let first = (store.view().current_song, store.view().is_playing);
        store.stop();
        let second = (store.view().current_song, store.view().is_playing);

        assert_eq!(first, (None, false));
        assert_eq!(first, second);
    }

    #[test]
    fn next_playlist_appends_and_resets() {
        let mut store = store_with_songs(2);
        store.toggle_play_pause().expect("toggle");
        store.select_song(1).expect("select");

        store.next_playlist();
        let view = store.view();
        assert_eq!(view.playlist_number, 2);
        assert_eq!(view.playlist_count, 2);
        assert!(view.songs.is_empty());
        assert_eq!(view.current_song, None);
        assert_eq!(view.selected_song, None);
        assert!(!view.is_playing);
    }

    #[test]
    fn next_playlist_keeps_earlier_playlists() {
        let mut store = store_with_songs(1);
        store.next_playlist();
        store.add_song("b side", "someone").expect("add");

        // The active playlist is always the last, so each call appends;
        // songs in earlier playlists are retained, never discarded.
        store.next_playlist();
        assert_eq!(store.view().playlist_count, 3);
        assert_eq!(store.view().playlist_number, 3);
        assert!(store.view().songs.is_empty());
    }

    #[test]
    fn select_song_checks_bounds() {
        let mut store = store_with_songs(2);

        assert_eq!(store.select_song(2), Err(StoreError::IndexOutOfRange(2)));
        assert_eq!(store.view().selected_song, None);

        store.select_song(1).expect("select");
        assert_eq!(store.view().selected_song, Some(1));
        // Selection does not position or play anything.
        assert_eq!(store.view().playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn delete_selected_requires_selection() {
        let mut store = store_with_songs(1);
        assert_eq!(store.delete_selected(), Err(StoreError::NoSelection));
        assert_eq!(store.view().songs.len(), 1);
    }

    #[test]
    fn deleting_the_current_song_stops_playback() {
        let mut store = store_with_songs(3);
        store.toggle_play_pause().expect("toggle");
        store.next_track();
        store.select_song(1).expect("select");

        store.delete_selected().expect("delete");
        let view = store.view();
        assert_eq!(view.songs.len(), 2);
        assert_eq!(view.current_song, None);
        assert!(!view.is_playing);
        assert_eq!(view.selected_song, None);
    }

    #[test]
    fn deleting_an_earlier_song_shifts_the_position() {
        let mut store = store_with_songs(3);
        store.toggle_play_pause().expect("toggle");
        store.next_track();
        store.next_track();
        assert_eq!(store.view().current_song, Some(2));

        store.delete_at(0).expect("delete");
        let view = store.view();
        assert_eq!(view.current_song, Some(1));
        assert!(view.is_playing);
        assert_eq!(view.songs[1].title, "song 2");
    }

    #[test]
    fn deleting_a_later_song_keeps_the_position() {
        let mut store = store_with_songs(3);
        store.toggle_play_pause().expect("toggle");

        store.delete_at(2).expect("delete");
        let view = store.view();
        assert_eq!(view.current_song, Some(0));
        assert!(view.is_playing);
    }

    #[test]
    fn delete_at_drops_unrelated_selection() {
        let mut store = store_with_songs(3);
        store.select_song(0).expect("select");

        store.delete_at(2).expect("delete");
        assert_eq!(store.view().selected_song, None);
    }

    #[test]
    fn delete_at_checks_bounds() {
        let mut store = store_with_songs(1);
        assert_eq!(store.delete_at(1), Err(StoreError::IndexOutOfRange(1)));
        assert_eq!(store.view().songs.len(), 1);
    }

    proptest::proptest! {
        #[test]
        fn invariants_hold_after_random_ops(ops in proptest::collection::vec((0u8..9, 0usize..8), 1..200)) {
            let mut store = PlaylistStore::new();

            for (op, arg) in ops {
                match op {
                    0 => {
                        let _ = store.add_song(&format!("t{arg}"), "a");
                    }
                    1 => {
                        let _ = store.toggle_play_pause();
                    }
                    2 => store.stop(),
                    3 => store.next_track(),
                    4 => store.prev_track(),
                    5 => store.next_playlist(),
                    6 => {
                        let _ = store.select_song(arg);
                    }
                    7 => {
                        let _ = store.delete_selected();
                    }
                    _ => {
                        let _ = store.delete_at(arg);
                    }
                }

                assert_invariants(&store);
                let view = store.view();
                prop_assert!(view.playlist_number <= view.playlist_count);
            }
        }
    }
}
