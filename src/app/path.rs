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

/// Ordered chain of drill-down choices; index 0 is the root account.
/// Never empty, never mutated in place — every selection produces a new
/// path (truncate to the activated column, append the chosen username).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPath(Vec<String>);

impl SelectionPath {
    pub fn root(username: impl Into<String>) -> Self {
        Self(vec![username.into()])
    }

    /// `path[0..=column] ++ [username]`: everything that followed `column`
    /// is discarded, regardless of how deep the old path went.
    #[must_use]
    pub fn select(&self, column: usize, username: impl Into<String>) -> Self {
        let keep = (column + 1).min(self.0.len());
        let mut names = self.0[..keep].to_vec();
        names.push(username.into());
        Self(names)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Invariant: a path is never empty.
        false
    }

    #[must_use]
    pub fn last(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
