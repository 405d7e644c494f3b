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

pub mod columns;
mod layout;
mod setup;
pub mod theme;

pub use columns::CARD_HEIGHT;

use crate::app::{App, Screen};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    if areas.header.height > 0 {
        render_header(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
    }

    match app.screen {
        Screen::Setup => setup::render(frame, areas.body, app),
        Screen::Tree => columns::render(frame, areas.body, app),
    }

    if areas.footer.height > 0 {
        render_separator(frame, areas.footer_sep);
        render_footer(frame, areas.footer, app);
    }
}

const HEADER_PAD: u16 = 2;

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + HEADER_PAD,
        width: area.width.saturating_sub(HEADER_PAD * 2),
        ..area
    };

    let mut spans = vec![Span::styled(
        concat!("followtree v", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(state) = app.state.as_ref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("@{}", state.path.get(0).unwrap_or("")), Style::default()));
        spans.push(Span::styled(
            format!("  ·  {} accounts cached", state.cache.len()),
            Style::default().fg(theme::DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + HEADER_PAD,
        width: area.width.saturating_sub(HEADER_PAD * 2),
        ..area
    };

    let line = if let Some(error) = app.status_line.as_ref() {
        Line::from(Span::styled(error.clone(), Style::default().fg(theme::STATUS_ERROR)))
    } else if !app.in_flight.is_empty() {
        let mut names: Vec<&str> = app.in_flight.iter().map(String::as_str).collect();
        names.sort_unstable();
        Line::from(Span::styled(
            format!("{} fetching @{}...", theme::spinner(app.spinner_frame), names.join(", @")),
            Style::default().fg(theme::ACCENT),
        ))
    } else {
        let hints = match app.screen {
            Screen::Setup => "Tab: switch field  ·  Enter: start  ·  Esc: quit",
            Screen::Tree => "↑↓←→: move  ·  Enter/click: drill in  ·  Esc: new session  ·  q: quit",
        };
        Line::from(Span::styled(hints, Style::default().fg(theme::DIM)))
    };
    frame.render_widget(Paragraph::new(line), padded);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
