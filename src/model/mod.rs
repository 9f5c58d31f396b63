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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—Songs, the
//! playlist collection that owns them, and the read-only snapshot handed to
//! the renderer on every frame.

pub(crate) mod store;

/// A single entry in a playlist.
///
/// Songs are plain values; their identity is their position within the
/// playlist that owns them, and the same title/artist pair may appear any
/// number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub title: String,
    pub artist: String,
}

/// Playback status derived from the store's position and play flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlaybackState {
    Playing,
    Paused,
    Stopped,
}

/// A read-only view of the active playlist, pulled by the renderer.
///
/// The renderer never reaches into [`store::PlaylistStore`] directly; it
/// consumes this snapshot so that rendering stays decoupled from mutation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaylistSnapshot<'a> {
    /// Songs of the active playlist, in order.
    pub songs: &'a [Song],
    /// Position of the current song, if one is positioned.
    pub current_song: Option<usize>,
    /// Whether the current song is nominally playing.
    pub is_playing: bool,
    /// Position of the song selected in the UI, if any.
    pub selected_song: Option<usize>,
    /// One-based ordinal of the active playlist.
    pub playlist_number: usize,
    /// Total number of playlists.
    pub playlist_count: usize,
}

impl PlaylistSnapshot<'_> {
    pub(crate) fn playback_state(&self) -> PlaybackState {
        match (self.current_song, self.is_playing) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }
}
