//! Task list component
//!
//! The consumer of the filter context: renders only the tasks passing the
//! current search and date filters.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::super::app::App;
use super::priority_badge::create_priority_dot;
use crate::model::Task;
use crate::utils::color::convert_hex_color;
use crate::utils::datetime::format_human_date;

/// Task list component
pub struct TasksList;

impl TasksList {
    /// Render the filtered task list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let visible = app.visible_tasks();

        let title = if app.filter.is_filter_active() {
            format!("📋 Tasks ({} of {})", visible.len(), app.user.tasks.len())
        } else {
            format!("📋 Tasks ({})", app.user.tasks.len())
        };

        if visible.is_empty() {
            let empty = List::new([ListItem::new("  No tasks match the current filters")])
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|task| ListItem::new(Self::task_line(task, app)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::Rgb(40, 44, 68)))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(app.selected_index.min(visible.len() - 1)));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn task_line(task: &Task, app: &App) -> Line<'static> {
        let mut spans = Vec::new();

        spans.push(Span::raw(if task.done { "✅ " } else { "⬜ " }));

        if task.pinned {
            spans.push(Span::raw("📌 "));
        }

        if app.config.display.show_priorities {
            if let Some(priority) = task.priority {
                spans.push(create_priority_dot(priority));
                spans.push(Span::raw(" "));
            }
        }

        if let Some(emoji) = &task.emoji {
            spans.push(Span::raw(format!("{emoji} ")));
        }

        let name_style = if task.done {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(convert_hex_color(&task.color))
        };
        spans.push(Span::styled(task.name.clone(), name_style));

        spans.push(Span::styled(
            format!("  {}", format_human_date(task.date.date())),
            Style::default().fg(Color::DarkGray),
        ));

        if app.config.display.show_descriptions {
            if let Some(description) = &task.description {
                spans.push(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::Gray),
                ));
            }
        }

        if app.config.display.show_categories {
            if let Some(categories) = &task.category {
                for category in categories {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        format!(" {} ", category.name),
                        Style::default()
                            .bg(convert_hex_color(&category.color))
                            .fg(Color::White),
                    ));
                }
            }
        }

        Line::from(spans)
    }
}
