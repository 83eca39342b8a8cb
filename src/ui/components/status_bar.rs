//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::{App, InputMode};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if let Some(message) = &app.status_message {
            message.clone()
        } else {
            match app.input_mode {
                InputMode::Search => "Type to search • Enter/Esc: done".to_string(),
                InputMode::FilterMenu(_) | InputMode::PrioritySelect(_) => {
                    "↑↓: navigate • Enter: select • Esc: cancel".to_string()
                }
                InputMode::CustomRange { .. } => {
                    "Enter dates as YYYY-MM-DD • Tab: switch • Enter: apply • Esc: clear".to_string()
                }
                InputMode::Normal => {
                    "Space: toggle • /: search • f: filter • p: priority • s: save • q: quit".to_string()
                }
            }
        };

        let status_color = if app.status_message.as_deref().is_some_and(|m| m.starts_with('❌')) {
            Color::Red
        } else if app.status_message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
