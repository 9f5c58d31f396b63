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

//! Playlist pane state.
//!
//! The pane owns only view-local state: the table cursor (the row the user
//! is hovering over). The store's selection is a separate, deliberate act
//! performed from the cursor, so moving around the list never mutates the
//! domain state.

mod event;
mod render;

use ratatui::widgets::TableState;

pub(crate) struct PlaylistPane {
    pub(crate) table_state: TableState,
}

impl PlaylistPane {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// The row the cursor is on, if any.
    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn cursor_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn cursor_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn cursor_first(&mut self) {
        self.table_state.select_first();
    }

    fn cursor_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// Clamps the cursor to the playlist after a mutation elsewhere.
    ///
    /// Deleting the last row, or switching to a shorter playlist, would
    /// otherwise leave the cursor pointing past the end.
    pub(crate) fn sync_cursor(&mut self, len: usize) {
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_directions() {
        let mut pane = PlaylistPane::new();

        pane.cursor_next(3);
        assert_eq!(pane.cursor(), Some(0));
        pane.cursor_previous(3);
        assert_eq!(pane.cursor(), Some(2));
        pane.cursor_next(3);
        assert_eq!(pane.cursor(), Some(0));
    }

    #[test]
    fn cursor_ignores_empty_list() {
        let mut pane = PlaylistPane::new();
        pane.cursor_next(0);
        pane.cursor_previous(0);
        assert_eq!(pane.cursor(), None);
    }

    #[test]
    fn sync_cursor_clamps_after_shrink() {
        let mut pane = PlaylistPane::new();
        pane.cursor_last(5);
        assert_eq!(pane.cursor(), Some(4));

        pane.sync_cursor(2);
        assert_eq!(pane.cursor(), Some(1));

        pane.sync_cursor(0);
        assert_eq!(pane.cursor(), None);
    }
}
