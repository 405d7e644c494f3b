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

//! The selection reducer: pure decisions about what a drill-down choice
//! means, separate from the event-loop glue that spawns fetch tasks.

use super::cache::FollowerCache;
use super::path::SelectionPath;
use crate::fetch::Follower;

/// The pair that fully determines the displayed tree. Two equal
/// `RenderState`s render identically; there is no other hidden state.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub path: SelectionPath,
    pub cache: FollowerCache,
}

/// Outcome of a selection: the next state is either ready now (cache hit)
/// or waits on one network round trip (cache miss).
#[derive(Debug)]
pub enum Transition {
    Render(RenderState),
    Fetch(PendingFetch),
}

/// One dispatched fetch. It carries the snapshot it closed over, so a
/// resolution layers its result onto *that* snapshot — whichever fetch
/// resolves last installs its state (last-resolved-wins).
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub username: String,
    pub next_path: SelectionPath,
    pub base: FollowerCache,
}

impl PendingFetch {
    /// Fold a resolved follower list into the snapshot this fetch closed
    /// over, producing the state to install.
    #[must_use]
    pub fn resolve(self, followers: Vec<Follower>) -> RenderState {
        RenderState {
            path: self.next_path,
            cache: self.base.with_entry(self.username, followers),
        }
    }
}

/// The Start transition: fetch the root's followers over an empty cache.
pub fn start(root: &str) -> PendingFetch {
    PendingFetch {
        username: root.to_owned(),
        next_path: SelectionPath::root(root),
        base: FollowerCache::new(),
    }
}

/// The Select transition: activating `username` in `column` truncates the
/// path to that column and appends the choice. A cached username renders
/// immediately; an uncached one needs a fetch first.
pub fn select(state: &RenderState, username: &str, column: usize) -> Transition {
    let next_path = state.path.select(column, username);
    if state.cache.contains(username) {
        Transition::Render(RenderState { path: next_path, cache: state.cache.clone() })
    } else {
        Transition::Fetch(PendingFetch {
            username: username.to_owned(),
            next_path,
            base: state.cache.clone(),
        })
    }
}
