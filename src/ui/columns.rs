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

//! The follower tree: one column per path index, left to right by depth.
//! View derivation is pure in `(path, cache)`; the widget pass below it
//! rebuilds the whole layout every frame (total replace, no diffing).

use crate::app::{App, FollowerCache, RenderedColumn, SelectionPath};
use crate::fetch::Follower;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows per entry card: name, @username, profile URL.
pub const CARD_HEIGHT: u16 = 3;

/// Columns narrower than this are not worth reading; when the tree is
/// deeper than the frame is wide, only the deepest columns are shown.
const MIN_COLUMN_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub follower: &'a Follower,
    /// True for the one entry this column drilled into (`path[index + 1]`).
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Depth in the path (= absolute column index).
    pub index: usize,
    pub owner: &'a str,
    /// `None` while the owner's follower list is still being fetched —
    /// only ever the last column, by the path invariant.
    pub entries: Option<Vec<EntryView<'a>>>,
}

/// Derive the whole multi-column view from `(path, cache)`. Pure: equal
/// inputs produce an equal view, and nothing else feeds the layout.
pub fn column_views<'a>(
    path: &'a SelectionPath,
    cache: &'a FollowerCache,
) -> Vec<ColumnView<'a>> {
    path.iter()
        .enumerate()
        .map(|(index, owner)| {
            let next_selection = path.get(index + 1);
            let entries = cache.get(owner).map(|followers| {
                followers
                    .iter()
                    .map(|follower| EntryView {
                        follower,
                        selected: next_selection == Some(follower.username.as_str()),
                    })
                    .collect()
            });
            ColumnView { index, owner, entries }
        })
        .collect()
}

/// First visible entry so that `anchor` stays on screen.
fn scroll_offset(anchor: usize, visible_cards: usize) -> usize {
    if visible_cards == 0 || anchor < visible_cards {
        0
    } else {
        anchor + 1 - visible_cards
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    app.rendered_columns.clear();

    // Cheap clone (Arc-backed) so the borrow does not pin `app`.
    let Some(state) = app.state.clone() else {
        render_loading_placeholder(frame, area, app);
        return;
    };

    let views = column_views(&state.path, &state.cache);
    let total = views.len();
    let visible = usize::from((area.width / MIN_COLUMN_WIDTH).max(1)).min(total);
    let first = total - visible;

    let constraints = vec![Constraint::Ratio(1, visible as u32); visible];
    let column_areas = Layout::horizontal(constraints).split(area);

    for (view, column_area) in views[first..].iter().zip(column_areas.iter()) {
        render_column(frame, *column_area, app, view);
    }
}

fn render_loading_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(Span::styled(
        format!("{} fetching followers...", theme::spinner(app.spinner_frame)),
        Style::default().fg(theme::DIM),
    ))
    .centered();
    let y = area.y + area.height / 2;
    frame.render_widget(Paragraph::new(line), Rect { y, height: 1.min(area.height), ..area });
}

fn render_column(frame: &mut Frame, area: Rect, app: &mut App, view: &ColumnView<'_>) {
    let active = view.index == app.cursor.column;
    let border_style = if active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::DIM)
    };

    let mut title = format!(" @{} ", view.owner);
    if view.entries.is_none() {
        title.push_str(&format!("{} ", theme::spinner(app.spinner_frame)));
    }
    let block = Block::default().borders(Borders::ALL).border_style(border_style).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(entries) = view.entries.as_ref() else {
        render_loading_placeholder(frame, inner, app);
        return;
    };

    let visible_cards = usize::from(inner.height / CARD_HEIGHT);
    let anchor = if active {
        app.cursor.row
    } else {
        entries.iter().position(|e| e.selected).unwrap_or(0)
    };
    let scroll = scroll_offset(anchor, visible_cards);

    for (slot, entry) in entries.iter().skip(scroll).take(visible_cards.max(1)).enumerate() {
        let row = scroll + slot;
        let y = inner.y + (slot as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect { y, height, ..inner };
        let under_cursor = active && row == app.cursor.row;
        render_card(frame, card_area, app, entry, under_cursor);
    }

    app.rendered_columns.push(RenderedColumn {
        index: view.index,
        area: inner,
        scroll,
        len: entries.len(),
    });
}

fn render_card(frame: &mut Frame, area: Rect, app: &App, entry: &EntryView<'_>, under_cursor: bool) {
    let follower = entry.follower;
    let width = usize::from(area.width);

    let base = if under_cursor {
        Style::default().bg(theme::CURSOR_BG)
    } else {
        Style::default()
    };

    let marker = if entry.selected { theme::SELECTED_MARKER } else { " " };
    let display_name =
        if follower.name.is_empty() { follower.username.as_str() } else { follower.name.as_str() };

    let mut name_spans = vec![
        Span::styled(
            format!("{marker} "),
            base.fg(theme::SELECTED_FG).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            fit(display_name, width.saturating_sub(4)),
            if entry.selected {
                base.fg(theme::SELECTED_FG).add_modifier(Modifier::BOLD)
            } else {
                base.add_modifier(Modifier::BOLD)
            },
        ),
    ];
    if app.in_flight.contains(&follower.username) {
        name_spans.push(Span::styled(format!(" {}", theme::spinner(app.spinner_frame)), base));
    } else if app.failed.contains_key(&follower.username) {
        name_spans
            .push(Span::styled(format!(" {}", theme::ICON_FAILED), base.fg(theme::FAILED_FG)));
    }

    let lines = vec![
        Line::from(name_spans),
        Line::from(Span::styled(
            fit(&format!("  @{}", follower.username), width),
            base.fg(theme::DIM),
        )),
        Line::from(Span::styled(fit(&format!("  {}", follower.url), width), base.fg(theme::DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).style(base), area);
}

/// Truncate to `max_width` terminal cells with an ellipsis.
fn fit(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_owned();
    }
    let mut fitted = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        fitted.push(ch);
        width += ch_width;
    }
    fitted.push('…');
    fitted
}
