// followtree — interactive terminal explorer for micro.blog follower graphs
// Copyright (C) 2026  followtree contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The setup form: root username + access token, with the start action
//! enabled only while both fields are non-empty.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetupField {
    #[default]
    Username,
    Token,
}

#[derive(Debug, Clone, Default)]
pub struct SetupState {
    pub username: String,
    pub token: String,
    pub focus: SetupField,
    /// Shown under the form when the root fetch failed.
    pub error: Option<String>,
}

impl SetupState {
    pub fn prefilled(username: Option<String>, token: Option<String>) -> Self {
        Self {
            username: username.unwrap_or_default(),
            token: token.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Start is enabled only when both inputs carry a value.
    #[must_use]
    pub fn can_start(&self) -> bool {
        !self.username.trim().is_empty() && !self.token.trim().is_empty()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SetupField::Username => SetupField::Token,
            SetupField::Token => SetupField::Username,
        };
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            SetupField::Username => &mut self.username,
            SetupField::Token => &mut self.token,
        }
    }

    pub fn insert(&mut self, ch: char) {
        if !ch.is_control() {
            self.focused_value_mut().push(ch);
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        let value = self.focused_value_mut();
        value.extend(text.chars().filter(|ch| !ch.is_control()));
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }
}
