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

//! Visual styling and color configuration for the TUI.
//!
//! Colour schemes form a closed enumeration: every [`ColourScheme`] maps to a
//! complete [`Theme`] palette, so applying a scheme is total and replaces the
//! whole palette at once. The scheme round-trips by name for the commander
//! and the configuration file.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The named colour schemes offered by the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ColourScheme {
    #[default]
    Normal,
    Dark,
    Blue,
    Gold,
    Red,
    Cream,
    LightGrey,
}

impl ColourScheme {
    pub(crate) const ALL: [ColourScheme; 7] = [
        ColourScheme::Normal,
        ColourScheme::Dark,
        ColourScheme::Blue,
        ColourScheme::Gold,
        ColourScheme::Red,
        ColourScheme::Cream,
        ColourScheme::LightGrey,
    ];

    pub(crate) fn as_name(self) -> &'static str {
        match self {
            ColourScheme::Normal => "normal",
            ColourScheme::Dark => "dark",
            ColourScheme::Blue => "blue",
            ColourScheme::Gold => "gold",
            ColourScheme::Red => "red",
            ColourScheme::Cream => "cream",
            ColourScheme::LightGrey => "light-grey",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_name() == name)
    }

    /// Returns the scheme after this one, wrapping at the end of the list.
    pub(crate) fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the full palette for this scheme.
    pub(crate) const fn palette(self) -> Theme {
        match self {
            ColourScheme::Normal => Theme {
                background_colour: Color::Rgb(40, 20, 50),
                foreground_colour: Color::Rgb(235, 235, 235),
                accent_colour: Color::Rgb(250, 189, 47),
                border_colour: Color::Rgb(102, 102, 102),
                commander_colour: Color::Rgb(235, 235, 235),
                commander_bg: Color::Rgb(50, 30, 60),
                table_number_fg: Color::Rgb(162, 161, 166),
                table_title_fg: Color::Rgb(255, 255, 255),
                table_artist_fg: Color::Rgb(255, 215, 0),
                active_song_fg: Color::Rgb(0, 255, 0),
                selected_song_bg: Color::Rgb(0, 90, 0),
                status_colour: Color::Rgb(255, 140, 105),
            },
            ColourScheme::Dark => Theme {
                background_colour: Color::Rgb(18, 18, 18),
                foreground_colour: Color::Rgb(200, 200, 200),
                accent_colour: Color::Rgb(130, 170, 255),
                border_colour: Color::Rgb(70, 70, 70),
                commander_colour: Color::Rgb(200, 200, 200),
                commander_bg: Color::Rgb(30, 30, 30),
                table_number_fg: Color::Rgb(120, 120, 120),
                table_title_fg: Color::Rgb(230, 230, 230),
                table_artist_fg: Color::Rgb(130, 170, 255),
                active_song_fg: Color::Rgb(0, 255, 0),
                selected_song_bg: Color::Rgb(40, 70, 40),
                status_colour: Color::Rgb(255, 120, 120),
            },
            ColourScheme::Blue => Theme {
                background_colour: Color::Rgb(12, 25, 54),
                foreground_colour: Color::Rgb(210, 225, 245),
                accent_colour: Color::Rgb(95, 180, 255),
                border_colour: Color::Rgb(50, 80, 130),
                commander_colour: Color::Rgb(210, 225, 245),
                commander_bg: Color::Rgb(20, 40, 80),
                table_number_fg: Color::Rgb(120, 150, 190),
                table_title_fg: Color::Rgb(235, 245, 255),
                table_artist_fg: Color::Rgb(140, 200, 255),
                active_song_fg: Color::Rgb(80, 255, 160),
                selected_song_bg: Color::Rgb(30, 60, 110),
                status_colour: Color::Rgb(255, 160, 120),
            },
            ColourScheme::Gold => Theme {
                background_colour: Color::Rgb(40, 32, 10),
                foreground_colour: Color::Rgb(240, 230, 200),
                accent_colour: Color::Rgb(255, 200, 60),
                border_colour: Color::Rgb(120, 100, 40),
                commander_colour: Color::Rgb(240, 230, 200),
                commander_bg: Color::Rgb(60, 48, 16),
                table_number_fg: Color::Rgb(170, 150, 100),
                table_title_fg: Color::Rgb(255, 245, 220),
                table_artist_fg: Color::Rgb(255, 200, 60),
                active_song_fg: Color::Rgb(120, 255, 120),
                selected_song_bg: Color::Rgb(90, 70, 20),
                status_colour: Color::Rgb(255, 130, 100),
            },
            ColourScheme::Red => Theme {
                background_colour: Color::Rgb(45, 12, 16),
                foreground_colour: Color::Rgb(240, 210, 210),
                accent_colour: Color::Rgb(255, 110, 110),
                border_colour: Color::Rgb(120, 50, 55),
                commander_colour: Color::Rgb(240, 210, 210),
                commander_bg: Color::Rgb(70, 22, 28),
                table_number_fg: Color::Rgb(180, 120, 120),
                table_title_fg: Color::Rgb(255, 235, 235),
                table_artist_fg: Color::Rgb(255, 150, 130),
                active_song_fg: Color::Rgb(120, 255, 140),
                selected_song_bg: Color::Rgb(95, 35, 40),
                status_colour: Color::Rgb(255, 200, 120),
            },
            ColourScheme::Cream => Theme {
                background_colour: Color::Rgb(248, 242, 226),
                foreground_colour: Color::Rgb(60, 50, 40),
                accent_colour: Color::Rgb(170, 110, 30),
                border_colour: Color::Rgb(190, 175, 150),
                commander_colour: Color::Rgb(60, 50, 40),
                commander_bg: Color::Rgb(235, 226, 205),
                table_number_fg: Color::Rgb(150, 135, 110),
                table_title_fg: Color::Rgb(50, 40, 30),
                table_artist_fg: Color::Rgb(150, 90, 20),
                active_song_fg: Color::Rgb(0, 140, 60),
                selected_song_bg: Color::Rgb(220, 235, 210),
                status_colour: Color::Rgb(190, 60, 40),
            },
            ColourScheme::LightGrey => Theme {
                background_colour: Color::Rgb(230, 230, 232),
                foreground_colour: Color::Rgb(50, 50, 55),
                accent_colour: Color::Rgb(70, 100, 180),
                border_colour: Color::Rgb(170, 170, 175),
                commander_colour: Color::Rgb(50, 50, 55),
                commander_bg: Color::Rgb(210, 210, 214),
                table_number_fg: Color::Rgb(130, 130, 135),
                table_title_fg: Color::Rgb(40, 40, 45),
                table_artist_fg: Color::Rgb(70, 100, 180),
                active_song_fg: Color::Rgb(0, 150, 70),
                selected_song_bg: Color::Rgb(200, 215, 200),
                status_colour: Color::Rgb(190, 70, 50),
            },
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) foreground_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) table_number_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,

    pub(crate) active_song_fg: Color,
    pub(crate) selected_song_bg: Color,

    pub(crate) status_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        ColourScheme::default().palette()
    }
}

impl Theme {
    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_names_round_trip() {
        for scheme in ColourScheme::ALL {
            assert_eq!(ColourScheme::from_name(scheme.as_name()), Some(scheme));
        }
        assert_eq!(ColourScheme::from_name("neon"), None);
    }

    #[test]
    fn next_cycles_through_every_scheme() {
        let mut scheme = ColourScheme::Normal;
        let mut seen = vec![scheme];
        for _ in 1..ColourScheme::ALL.len() {
            scheme = scheme.next();
            assert!(!seen.contains(&scheme));
            seen.push(scheme);
        }
        assert_eq!(scheme.next(), ColourScheme::Normal);
    }

    #[test]
    fn every_palette_uses_rgb_backgrounds() {
        for scheme in ColourScheme::ALL {
            // to_hex panics on non-RGB colours, so this doubles as a check
            // that terminal background updates work for every scheme.
            let hex = Theme::to_hex(scheme.palette().background_colour);
            assert!(hex.starts_with('#') && hex.len() == 7);
        }
    }
}
