//! Custom widget components

mod footer;
mod header;
mod leads_table;
mod notifications;
mod product;
mod sequence;
mod text_area;

pub use footer::{key_hints, Footer};
pub use header::{MainHeader, APP_TITLE};
pub use leads_table::{checkbox, select_all_glyph, LeadsTable};
pub use notifications::NotificationStack;
pub use product::ProductView;
pub use sequence::SequenceComposer;
pub use text_area::TextArea;

use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Inline trigger rendered as `[ label ]`
pub(crate) fn button(label: &str, enabled: bool) -> Span<'static> {
    Span::styled(format!("[ {} ]", label), styles::button(enabled))
}

/// Truncate to `max_width` display columns, adding an ellipsis if needed
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
