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

use crate::app::{App, SetupField};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const FORM_WIDTH: u16 = 56;
const FIELD_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let form_width = FORM_WIDTH.min(area.width);
    let x = area.x + (area.width - form_width) / 2;
    let form_height = (2 + FIELD_HEIGHT * 2 + 2).min(area.height);
    let y = area.y + (area.height.saturating_sub(form_height)) / 2;
    let form = Rect { x, y, width: form_width, height: form_height };

    let [title_area, username_area, token_area, hint_area, error_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(form);

    let title = Line::from(Span::styled(
        "Explore a follower graph",
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), title_area);

    render_field(
        frame,
        username_area,
        "Root username",
        &app.setup.username,
        app.setup.focus == SetupField::Username,
    );
    // The token is a credential; render dots, not the value.
    let masked = "•".repeat(app.setup.token.chars().count());
    render_field(
        frame,
        token_area,
        "Access token",
        &masked,
        app.setup.focus == SetupField::Token,
    );

    let hint = if app.setup.can_start() {
        Line::from(Span::styled(
            "Enter to start  ·  Tab to switch fields",
            Style::default().fg(theme::ACCENT),
        ))
    } else {
        Line::from(Span::styled(
            "Fill in both fields to start",
            Style::default().fg(theme::DIM),
        ))
    };
    frame.render_widget(Paragraph::new(hint.centered()), hint_area);

    if let Some(error) = app.setup.error.as_ref() {
        let line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::STATUS_ERROR),
        ))
        .centered();
        frame.render_widget(Paragraph::new(line), error_area);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::DIM)
    };
    let block =
        Block::default().borders(Borders::ALL).border_style(border).title(format!(" {label} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(value.to_owned()), inner);

    if focused && inner.height > 0 {
        let cursor_x = inner.x + (value.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
