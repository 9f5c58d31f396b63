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

//! The add-song form.
//!
//! A modal two-field form (title and artist) built on `tui_input`. The form
//! only collects text; validation lives in the store, so a rejected
//! submission keeps the typed values on screen for correction and the fields
//! are cleared by the submit handler once the song is actually added.

mod event;
mod render;

use tui_input::Input;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FormField {
    Title,
    Artist,
}

pub(crate) struct SongForm {
    pub(crate) title: Input,
    pub(crate) artist: Input,
    pub(crate) focus: FormField,
    pub(crate) is_active: bool,
}

impl SongForm {
    pub(crate) fn new() -> Self {
        Self {
            title: Input::default(),
            artist: Input::default(),
            focus: FormField::Title,
            is_active: false,
        }
    }

    /// Opens the form with focus on the title field.
    pub(crate) fn open(&mut self) {
        self.is_active = true;
        self.focus = FormField::Title;
    }

    pub(crate) fn clear(&mut self) {
        self.title.reset();
        self.artist.reset();
        self.focus = FormField::Title;
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Artist,
            FormField::Artist => FormField::Title,
        };
    }

    fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_focuses_title() {
        let mut form = SongForm::new();
        form.focus = FormField::Artist;

        form.open();
        assert!(form.is_active);
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn focus_cycles_between_fields() {
        let mut form = SongForm::new();
        form.focus_next();
        assert_eq!(form.focus, FormField::Artist);
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut form = SongForm::new();
        form.title = Input::new("Dust".into());
        form.artist = Input::new("Someone".into());
        form.focus = FormField::Artist;

        form.clear();
        assert!(form.title.value().is_empty());
        assert!(form.artist.value().is_empty());
        assert_eq!(form.focus, FormField::Title);
    }
}
