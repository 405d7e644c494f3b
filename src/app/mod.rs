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

mod cache;
mod events;
mod path;
mod reducer;
mod setup;
mod state;

pub use cache::FollowerCache;
pub use events::{dispatch_select, dispatch_start, handle_fetch_event, handle_terminal_event};
pub use path::SelectionPath;
pub use reducer::{PendingFetch, RenderState, Transition, select, start};
pub use setup::{SetupField, SetupState};
pub use state::{App, Cursor, FetchEvent, RenderedColumn, Screen};

use crate::Cli;
use crate::fetch::{AccessToken, HttpFetcher};
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Build the app from CLI flags. When both `--user` and a token are given
/// the session starts immediately, skipping the setup form.
/// Must run inside a `LocalSet` (start may spawn the root fetch).
pub fn create_app(cli: &Cli) -> App {
    let fetcher = Rc::new(HttpFetcher::new(cli.base_url.clone()));
    let token = cli.token.clone().or_else(|| std::env::var("MICROBLOG_TOKEN").ok());

    let mut app = App::new(fetcher, AccessToken::default());
    app.setup = SetupState::prefilled(cli.user.clone(), token);
    if app.setup.can_start() {
        app.token = AccessToken::new(app.setup.token.trim());
        let root = app.setup.username.trim().to_owned();
        events::dispatch_start(&mut app, root);
    }
    app
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture for click-to-drill (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(80);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                events::handle_fetch_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first (keeps input responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => events::handle_fetch_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        if !app.in_flight.is_empty() {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    Ok(())
}
