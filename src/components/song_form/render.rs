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

//! UI rendering logic for the add-song form.
//!
//! Draws the form as a small centered popup over the playlist, with the
//! terminal cursor placed inside the focused field.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::{SongForm, song_form::FormField},
    theme::Theme,
};

const FORM_WIDTH: u16 = 46;
const FORM_HEIGHT: u16 = 6;

impl SongForm {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);

        let block = Block::default()
            .title(" Add Song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);

        f.render_widget(Clear, popup);
        f.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_field(f, rows[0], "Title ", &self.title, FormField::Title, theme);
        self.draw_field(f, rows[1], "Artist", &self.artist, FormField::Artist, theme);

        let hint = Paragraph::new("Enter adds, Tab switches, Esc cancels")
            .style(Style::default().fg(theme.table_number_fg));
        f.render_widget(hint, rows[3]);
    }

    fn draw_field(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        input: &tui_input::Input,
        field: FormField,
        theme: &Theme,
    ) {
        let focused = self.focus == field;

        let label_style = if focused {
            Style::default().bold().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.foreground_colour)
        };

        let text = format!("{label}  {}", input.value());
        f.render_widget(Paragraph::new(text).style(label_style), area);

        if focused {
            // label + two spaces, then the input's own cursor offset
            let cursor_x = area.x + label.len() as u16 + 2 + input.cursor() as u16;
            f.set_cursor_position((cursor_x, area.y));
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
