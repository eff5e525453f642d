//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title/tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Widest the notification stack gets
pub const NOTIFICATION_WIDTH: u16 = 48;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and view tabs
    pub header: Rect,

    /// Active view
    pub content: Rect,

    /// One-line key help
    pub footer: Rect,
}

/// Split the screen into header, content and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Top-right corner of `content` reserved for `count` stacked notifications,
/// three rows each. Clamped to the content area.
pub fn notification_area(content: Rect, count: usize) -> Rect {
    let width = NOTIFICATION_WIDTH.min(content.width);
    let wanted = (count as u16).saturating_mul(3);
    let height = wanted.min(content.height);

    Rect {
        x: content.x + content.width - width,
        y: content.y,
        width,
        height,
    }
}
