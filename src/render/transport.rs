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

//! Render the transport bar.
//!
//! Shows the playback state, the current song, and the key bindings for the
//! transport controls. "Playing" here is the store's flag, nothing more; no
//! audio is produced anywhere in the application.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    model::{PlaybackState, PlaylistSnapshot},
    render::icons::{ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_STOP},
    theme::Theme,
};

pub(crate) fn draw_transport(
    f: &mut Frame,
    area: Rect,
    snapshot: &PlaylistSnapshot,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let state = snapshot.playback_state();
    let icon = match state {
        PlaybackState::Playing => ICON_PLAY,
        PlaybackState::Paused => ICON_PAUSE,
        PlaybackState::Stopped => ICON_STOP,
    };

    let song_line = match snapshot.current_song.and_then(|i| snapshot.songs.get(i)) {
        Some(song) => Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(theme.foreground_colour),
            Span::styled(&song.title, Style::default().add_modifier(Modifier::BOLD))
                .fg(theme.accent_colour),
            Span::raw(" by ").fg(theme.foreground_colour),
            Span::styled(&song.artist, Style::default().add_modifier(Modifier::BOLD))
                .fg(theme.accent_colour),
        ]),
        None => Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(theme.foreground_colour),
            Span::raw("nothing playing").fg(theme.table_number_fg),
        ]),
    };
    f.render_widget(Paragraph::new(song_line), chunks[0]);

    let controls = Line::from(vec![
        Span::raw(format!("{ICON_PREV} b  ")),
        Span::raw(format!("{ICON_PLAY} space  ")),
        Span::raw(format!("{ICON_STOP} s  ")),
        Span::raw(format!("{ICON_NEXT} n  ")),
        Span::raw("playlist N  add a  theme t  quit q"),
    ])
    .style(Style::default().fg(theme.table_number_fg));

    let state_label = match state {
        PlaybackState::Playing => "PLAYING",
        PlaybackState::Paused => "PAUSED",
        PlaybackState::Stopped => "STOPPED",
    };

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(chunks[1]);

    f.render_widget(Paragraph::new(controls), control_chunks[0]);
    f.render_widget(
        Paragraph::new(state_label)
            .style(Style::default().bold().fg(theme.accent_colour))
            .alignment(Alignment::Right),
        control_chunks[1],
    );
}
