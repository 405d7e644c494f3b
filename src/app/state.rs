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

use super::reducer::{PendingFetch, RenderState};
use super::setup::SetupState;
use crate::fetch::{AccessToken, FetchError, FetchFollowers, Follower};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tokio::sync::mpsc;

/// Completion of one spawned fetch task, delivered to the event loop over
/// the app's mpsc channel and applied sequentially.
#[derive(Debug)]
pub enum FetchEvent {
    Resolved { pending: PendingFetch, followers: Vec<Follower> },
    Failed { username: String, error: FetchError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Tree,
}

/// Keyboard focus on the tree screen: active column and highlighted row.
/// UI chrome only — not part of `RenderState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

/// Geometry of one column as of the last frame, recorded during rendering
/// so mouse events can be mapped back to entries.
#[derive(Debug, Clone, Copy)]
pub struct RenderedColumn {
    /// Absolute column index (= path index).
    pub index: usize,
    /// Inner area the entry cards were drawn into.
    pub area: ratatui::layout::Rect,
    /// First visible entry (cards above it are scrolled off).
    pub scroll: usize,
    /// Total entry count in the column.
    pub len: usize,
}

pub struct App {
    pub screen: Screen,
    pub setup: SetupState,
    /// Session credential, constant once a tree is started.
    pub token: AccessToken,
    /// `(path, cache)` — present from the first resolved root fetch on.
    /// `None` on the tree screen means the root fetch is still in flight.
    pub state: Option<RenderState>,
    pub fetcher: Rc<dyn FetchFollowers>,
    pub event_tx: mpsc::UnboundedSender<FetchEvent>,
    pub event_rx: mpsc::UnboundedReceiver<FetchEvent>,
    /// Usernames with a fetch currently in flight (spinner on their cards).
    pub in_flight: HashSet<String>,
    /// Usernames whose last fetch failed, with the failure message.
    /// Re-activating such an entry retries (it is still a cache miss).
    pub failed: HashMap<String, String>,
    /// Footer message, replaced on every fetch outcome.
    pub status_line: Option<String>,
    pub cursor: Cursor,
    /// Column geometry from the last frame, for mouse mapping.
    pub rendered_columns: Vec<RenderedColumn>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(fetcher: Rc<dyn FetchFollowers>, token: AccessToken) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Setup,
            setup: SetupState::default(),
            token,
            state: None,
            fetcher,
            event_tx,
            event_rx,
            in_flight: HashSet::new(),
            failed: HashMap::new(),
            status_line: None,
            cursor: Cursor::default(),
            rendered_columns: Vec::new(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Entries of the column the cursor is in, if that column has resolved.
    #[must_use]
    pub fn cursor_column_entries(&self) -> Option<&[Follower]> {
        let state = self.state.as_ref()?;
        let owner = state.path.get(self.cursor.column)?;
        state.cache.get(owner)
    }

    /// Clamp the cursor to the current path and column lengths. Called
    /// after every state install; a stale resolution may have shortened
    /// the tree under the cursor.
    pub fn clamp_cursor(&mut self) {
        let Some(state) = self.state.as_ref() else {
            self.cursor = Cursor::default();
            return;
        };
        self.cursor.column = self.cursor.column.min(state.path.len().saturating_sub(1));
        let len = self
            .cursor_column_entries()
            .map_or(0, <[Follower]>::len);
        self.cursor.row = self.cursor.row.min(len.saturating_sub(1));
    }
}
