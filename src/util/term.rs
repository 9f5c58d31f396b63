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

//! Terminal environment and styling utilities.
//!
//! OSC (Operating System Command) escape sequences for controlling the
//! terminal emulator's own background colour, which Ratatui cannot reach.
//! Called at startup and again whenever the colour scheme changes, so the
//! window matches the active palette edge to edge.
//!
//! # Compatibility
//!
//! Relies on the emulator supporting OSC 11/111. Most modern terminals
//! (XTerm, iTerm2, Alacritty, Kitty) do.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Sets the terminal background to the given colour via OSC 11.
///
/// Flushes `stdout` immediately so the change applies without delay.
pub(crate) fn set_terminal_bg(colour: Color) {
    print!("\x1b]11;{}\x07", Theme::to_hex(colour));
    io::stdout().flush().ok();
}

/// Reverts the terminal background to the user's own configuration (OSC 111).
///
/// Called during cleanup so the user's terminal state is restored.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
