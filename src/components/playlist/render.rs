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

//! UI rendering logic for the playlist pane.
//!
//! Renders the active playlist as a table. The row at the current position
//! carries the playing marker only while playback is on; the row selected in
//! the store is tinted. The pane cursor is a third, independent highlight.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::PlaylistPane, model::PlaylistSnapshot, render::icons::ICON_PLAY, theme::Theme,
};

impl PlaylistPane {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        snapshot: &PlaylistSnapshot,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!(
            "Playlist {} of {} | {} songs",
            snapshot.playlist_number,
            snapshot.playlist_count,
            snapshot.songs.len(),
        );

        if let Some(selected) = snapshot.selected_song {
            let _ = write!(header_text, " | song {} selected", selected + 1);
        }

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.foreground_colour))
            .block(header_block);

        f.render_widget(header, chunks[0]);
        self.draw_table(f, chunks[1], snapshot, theme);
    }

    fn draw_table(
        &mut self,
        f: &mut Frame,
        area: Rect,
        snapshot: &PlaylistSnapshot,
        theme: &Theme,
    ) {
        let rows = snapshot.songs.iter().enumerate().map(|(index, song)| {
            let playing_here = snapshot.is_playing && snapshot.current_song == Some(index);
            let marker = if playing_here {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.active_song_fg))
            } else {
                Line::from("")
            };

            let number = format!("{:2}", index + 1);

            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(
                    Line::from(number)
                        .style(Style::default().fg(theme.table_number_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(song.title.as_str())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(song.artist.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
            ]);

            if snapshot.selected_song == Some(index) {
                row.style(Style::default().bg(theme.selected_song_bg))
            } else {
                row
            }
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from("Artist"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().fg(theme.background_colour).bg(theme.accent_colour))
        .block(Block::default().padding(Padding::horizontal(1)));

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
