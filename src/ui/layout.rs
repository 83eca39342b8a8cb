//! Layout helpers for the TUI

use ratatui::layout::Rect;

/// Layout manager for common geometry calculations
pub struct LayoutManager;

impl LayoutManager {
    /// Create a centered rectangle with a fixed size, clamped to `r`
    #[must_use]
    pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width.saturating_sub(width)) / 2,
            r.y + (r.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }
}
