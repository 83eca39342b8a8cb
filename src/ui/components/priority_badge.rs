//! Priority badge rendering
//!
//! Maps each priority level onto its fixed color as terminal spans: a
//! colored dot plus an uppercase label. Variants trade emphasis for
//! legibility on busy rows.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::model::PriorityLevel;
use crate::utils::color::convert_hex_color;

/// Visual weight of a priority badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    /// Label on a colored background
    #[default]
    Filled,
    /// Hollow dot, colored label
    Outlined,
    /// Colored dot and label, no background
    Minimal,
}

/// Create the spans for a full priority badge (dot + label)
#[must_use]
pub fn create_priority_badge(priority: PriorityLevel, variant: BadgeVariant) -> Vec<Span<'static>> {
    let config = priority.config();
    let color = convert_hex_color(config.color);

    let dot = match variant {
        BadgeVariant::Outlined => Span::styled("○", Style::default().fg(color)),
        _ => Span::styled("●", Style::default().fg(color)),
    };

    let label_style = match variant {
        BadgeVariant::Filled => Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Outlined | BadgeVariant::Minimal => {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        }
    };

    vec![
        dot,
        Span::raw(" "),
        Span::styled(config.label.to_uppercase(), label_style),
    ]
}

/// Create just the colored dot, for compact task rows
#[must_use]
pub fn create_priority_dot(priority: PriorityLevel) -> Span<'static> {
    let config = priority.config();
    Span::styled(
        "●",
        Style::default()
            .fg(convert_hex_color(config.color))
            .add_modifier(Modifier::BOLD),
    )
}
