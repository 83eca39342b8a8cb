//! Filter bar component
//!
//! Shows the active date filter mode and search text, and renders the
//! mode menu and the custom range editor as overlays. All transitions go
//! through the filter context; this component only wires events to them.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::{App, InputMode};
use super::super::layout::LayoutManager;
use crate::filter::{predicates, DateFilter, DATE_FILTERS};
use crate::utils::datetime::{format_ymd, DATE_FORMAT};

/// Filter bar component
pub struct FilterBar;

impl FilterBar {
    /// Render the filter bar line
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let mut spans = vec![
            Span::styled("Filter by: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                Self::display_text(app),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        if !app.filter.search().is_empty() || app.input_mode == InputMode::Search {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("Search: ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                app.filter.search().to_string(),
                Style::default().fg(Color::Yellow),
            ));
            if app.input_mode == InputMode::Search {
                spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
            }
        }

        if app.filter.is_filter_active() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                "[filtered — C to clear]",
                Style::default().fg(Color::Cyan),
            ));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("🔎 Filters")
                .title_alignment(Alignment::Left),
        );
        f.render_widget(bar, area);
    }

    /// Text describing the active mode, including derived or explicit bounds
    fn display_text(app: &App) -> String {
        let filter = &app.filter;
        match filter.date_filter() {
            DateFilter::Custom => {
                let range = filter.date_range();
                if let (Some(from), Some(to)) = (range.from, range.to) {
                    format!("{} - {}", format_ymd(from.date()), format_ymd(to.date()))
                } else {
                    filter.date_filter().label().to_string()
                }
            }
            DateFilter::Today => {
                let range = predicates::date_range_for_today();
                match range.from {
                    Some(from) => format!("Today ({})", format_ymd(from.date())),
                    None => filter.date_filter().label().to_string(),
                }
            }
            DateFilter::ThisWeek => {
                let range = predicates::date_range_for_this_week();
                match (range.from, range.to) {
                    (Some(from), Some(to)) => {
                        format!("This Week ({} - {})", format_ymd(from.date()), format_ymd(to.date()))
                    }
                    _ => filter.date_filter().label().to_string(),
                }
            }
            DateFilter::All => filter.date_filter().label().to_string(),
        }
    }

    /// Render the mode menu overlay when it is open
    pub fn render_menu(f: &mut Frame, app: &App) {
        let InputMode::FilterMenu(selected) = &app.input_mode else {
            return;
        };
        let selected = *selected;

        let area = LayoutManager::centered_rect_fixed(30, DATE_FILTERS.len() as u16 + 2, f.area());
        f.render_widget(Clear, area);

        let items: Vec<ListItem> = DATE_FILTERS
            .iter()
            .enumerate()
            .map(|(i, mode)| {
                let marker = if *mode == app.filter.date_filter() { "● " } else { "  " };
                let style = if i == selected {
                    Style::default().bg(Color::Blue).fg(Color::White)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{marker}{}", mode.label())).style(style)
            })
            .collect();

        let menu = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter by")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(menu, area);
    }

    /// Render the custom range editor overlay when it is open
    pub fn render_custom_inputs(f: &mut Frame, app: &App) {
        let InputMode::CustomRange {
            start,
            end,
            editing_end,
        } = &app.input_mode
        else {
            return;
        };
        let editing_end = *editing_end;

        let area = LayoutManager::centered_rect_fixed(46, 8, f.area());
        f.render_widget(Clear, area);

        let field = |label: &str, value: &str, focused: bool| -> Line<'static> {
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let shown = if value.is_empty() {
                DATE_FORMAT.to_string()
            } else {
                value.to_string()
            };
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::styled(shown, style),
                Span::raw(if focused { "▏" } else { " " }),
            ])
        };

        let lines = vec![
            field("Start Date", start, !editing_end),
            field("End Date  ", end, editing_end),
            Line::raw(""),
            Line::styled(
                "Tab: switch field • Enter: apply • Esc: clear",
                Style::default().fg(Color::Yellow),
            ),
        ];

        let editor = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("📅 Custom Range")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(editor, area);
    }
}
