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

use crate::fetch::Follower;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable snapshot of fetched follower lists, keyed by username.
///
/// `with_entry` produces a new snapshot and never touches the old one, so
/// an in-flight fetch can keep holding the snapshot it closed over while a
/// newer one is installed for rendering. Absence of a key is the sole
/// signal that a fetch is required.
#[derive(Debug, Clone, Default)]
pub struct FollowerCache {
    entries: Arc<HashMap<String, Arc<Vec<Follower>>>>,
}

impl FollowerCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New snapshot = every entry of `self` plus `{username: followers}`.
    /// Re-inserting an existing key is last-write-wins (never exercised
    /// under the fetch-at-most-once policy, but well-defined).
    #[must_use]
    pub fn with_entry(&self, username: impl Into<String>, followers: Vec<Follower>) -> Self {
        let mut entries: HashMap<String, Arc<Vec<Follower>>> = (*self.entries).clone();
        entries.insert(username.into(), Arc::new(followers));
        Self { entries: Arc::new(entries) }
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&[Follower]> {
        self.entries.get(username).map(|list| list.as_slice())
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
