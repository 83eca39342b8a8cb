//! Priority selector component
//!
//! A popup list offering the four fixed levels plus a leading
//! "No Priority" row that clears the task's priority.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::super::app::{App, InputMode};
use super::super::layout::LayoutManager;
use super::priority_badge::{create_priority_badge, BadgeVariant};
use crate::constants::{PRIORITY_SELECT_NONE, PRIORITY_SELECT_TITLE};
use crate::model::PRIORITY_LEVELS;

/// Priority selector component
pub struct PrioritySelect;

impl PrioritySelect {
    /// Render the selector overlay when it is open
    pub fn render(f: &mut Frame, app: &App) {
        let InputMode::PrioritySelect(selected) = &app.input_mode else {
            return;
        };
        let selected = *selected;

        let area = LayoutManager::centered_rect_fixed(48, App::PRIORITY_SELECT_ROWS as u16 + 2, f.area());
        f.render_widget(Clear, area);

        let mut items: Vec<ListItem> = Vec::with_capacity(App::PRIORITY_SELECT_ROWS);

        items.push(ListItem::new(Line::from(Span::styled(
            PRIORITY_SELECT_NONE,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))));

        for level in PRIORITY_LEVELS {
            let mut spans = create_priority_badge(level, BadgeVariant::Minimal);
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                level.config().description,
                Style::default().fg(Color::DarkGray),
            ));
            items.push(ListItem::new(Line::from(spans)));
        }

        let items: Vec<ListItem> = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                if i == selected {
                    item.style(Style::default().bg(Color::Blue))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(PRIORITY_SELECT_TITLE)
                .title_alignment(Alignment::Center),
        );
        f.render_widget(list, area);
    }
}
