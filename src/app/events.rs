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

//! Event-loop glue: terminal events in, fetch completions in, reducer
//! decisions out. The only place mutation happens is here — the reducer
//! and the renderer are pure.

use super::reducer::{self, PendingFetch, RenderState, Transition};
use super::state::{App, Cursor, FetchEvent, Screen};
use crate::fetch::AccessToken;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::rc::Rc;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match app.screen {
            Screen::Setup => handle_setup_key(app, key),
            Screen::Tree => handle_tree_key(app, key),
        },
        Event::Mouse(mouse) if app.screen == Screen::Tree => handle_mouse_event(app, mouse),
        Event::Paste(text) if app.screen == Screen::Setup => app.setup.insert_str(&text),
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

fn handle_setup_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
            app.setup.toggle_focus();
        }
        (KeyCode::Enter, _) => {
            if app.setup.can_start() {
                app.token = AccessToken::new(app.setup.token.trim());
                let root = app.setup.username.trim().to_owned();
                dispatch_start(app, root);
            }
        }
        (KeyCode::Backspace, _) => app.setup.backspace(),
        (KeyCode::Char(ch), m) if !m.contains(KeyModifiers::CONTROL) => app.setup.insert(ch),
        _ => {}
    }
}

fn handle_tree_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Char('q'), _) => app.should_quit = true,
        // Esc abandons the tree and returns to the form (fresh session).
        (KeyCode::Esc, _) => {
            app.state = None;
            app.screen = Screen::Setup;
            app.status_line = None;
            app.cursor = Cursor::default();
        }
        (KeyCode::Up, _) => move_cursor_row(app, -1),
        (KeyCode::Down, _) => move_cursor_row(app, 1),
        (KeyCode::Left, _) => move_cursor_column(app, -1),
        (KeyCode::Right, _) => move_cursor_column(app, 1),
        (KeyCode::Enter, _) => activate_cursor(app),
        _ => {}
    }
}

fn move_cursor_row(app: &mut App, delta: isize) {
    let len = app.cursor_column_entries().map_or(0, <[crate::fetch::Follower]>::len);
    if len == 0 {
        return;
    }
    let row = app.cursor.row as isize + delta;
    app.cursor.row = row.clamp(0, len as isize - 1) as usize;
}

fn move_cursor_column(app: &mut App, delta: isize) {
    let Some(state) = app.state.as_ref() else {
        return;
    };
    let max = state.path.len() as isize - 1;
    let column = (app.cursor.column as isize + delta).clamp(0, max) as usize;
    if column != app.cursor.column {
        app.cursor.column = column;
        app.cursor.row = 0;
        app.clamp_cursor();
    }
}

/// Enter on the cursor entry: the Select transition for that column.
fn activate_cursor(app: &mut App) {
    let Some(entries) = app.cursor_column_entries() else {
        return;
    };
    let Some(follower) = entries.get(app.cursor.row) else {
        return;
    };
    let username = follower.username.clone();
    dispatch_select(app, &username, app.cursor.column);
}

const MOUSE_SCROLL_ROWS: isize = 3;

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        // Click on a card = move the cursor there and drill in, the
        // original click-to-drill interaction.
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((column, row)) = mouse_to_entry(app, mouse.column, mouse.row) {
                app.cursor = Cursor { column, row };
                activate_cursor(app);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            if let Some(column) = mouse_to_column(app, mouse.column, mouse.row) {
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -MOUSE_SCROLL_ROWS
                } else {
                    MOUSE_SCROLL_ROWS
                };
                app.cursor.column = column;
                move_cursor_row(app, delta);
            }
        }
        _ => {}
    }
}

fn mouse_to_column(app: &App, x: u16, y: u16) -> Option<usize> {
    app.rendered_columns
        .iter()
        .find(|rc| {
            x >= rc.area.x && x < rc.area.right() && y >= rc.area.y && y < rc.area.bottom()
        })
        .map(|rc| rc.index)
}

fn mouse_to_entry(app: &App, x: u16, y: u16) -> Option<(usize, usize)> {
    let rc = app.rendered_columns.iter().find(|rc| {
        x >= rc.area.x && x < rc.area.right() && y >= rc.area.y && y < rc.area.bottom()
    })?;
    let card = usize::from(y - rc.area.y) / usize::from(crate::ui::CARD_HEIGHT);
    let entry = rc.scroll + card;
    (entry < rc.len).then_some((rc.index, entry))
}

/// Start transition: leave the form, fetch the root's followers over an
/// empty cache. The tree screen shows a loading placeholder until the
/// root fetch resolves.
pub fn dispatch_start(app: &mut App, root: String) {
    app.screen = Screen::Tree;
    app.state = None;
    app.setup.error = None;
    app.status_line = None;
    app.cursor = Cursor::default();
    spawn_fetch(app, reducer::start(&root));
}

/// Select transition for `username` activated in `column`.
pub fn dispatch_select(app: &mut App, username: &str, column: usize) {
    let Some(state) = app.state.as_ref() else {
        return;
    };
    match reducer::select(state, username, column) {
        Transition::Render(next) => {
            tracing::debug!(username, column, "cache hit, rendering immediately");
            install(app, next);
        }
        Transition::Fetch(pending) => spawn_fetch(app, pending),
    }
}

fn spawn_fetch(app: &mut App, pending: PendingFetch) {
    // A retry clears the previous failure mark for this entry.
    app.failed.remove(&pending.username);
    app.in_flight.insert(pending.username.clone());
    tracing::debug!(username = %pending.username, "dispatching follower fetch");

    let fetcher = Rc::clone(&app.fetcher);
    let token = app.token.clone();
    let tx = app.event_tx.clone();
    tokio::task::spawn_local(async move {
        let event = match fetcher.fetch(&pending.username, &token).await {
            Ok(followers) => FetchEvent::Resolved { pending, followers },
            Err(error) => FetchEvent::Failed { username: pending.username, error },
        };
        // The receiver only closes on shutdown; a send error is fine then.
        let _ = tx.send(event);
    });
}

/// Apply one fetch completion. Completions may arrive out of dispatch
/// order; whichever resolves last installs its state (last-resolved-wins,
/// no generation counter).
pub fn handle_fetch_event(app: &mut App, event: FetchEvent) {
    match event {
        FetchEvent::Resolved { pending, followers } => {
            app.in_flight.remove(&pending.username);
            app.failed.remove(&pending.username);
            tracing::info!(
                username = %pending.username,
                count = followers.len(),
                "follower fetch resolved"
            );
            app.status_line = None;
            install(app, pending.resolve(followers));
        }
        FetchEvent::Failed { username, error } => {
            app.in_flight.remove(&username);
            tracing::warn!(username = %username, %error, "follower fetch failed");
            app.status_line = Some(format!("fetch for @{username} failed: {error}"));
            app.failed.insert(username, error.to_string());
            // A failed root fetch has no tree to keep showing; fall back
            // to the form with the error visible.
            if app.state.is_none() {
                app.screen = Screen::Setup;
                app.setup.error = app.status_line.clone();
            }
        }
    }
}

/// Replace the displayed state wholesale and focus the deepest column.
fn install(app: &mut App, next: RenderState) {
    app.cursor = Cursor { column: next.path.len().saturating_sub(1), row: 0 };
    app.state = Some(next);
    app.clamp_cursor();
}
