//! Semantic style builders.

use leadagent_core::Severity;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn badge() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::BADGE_BG)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---

/// Trigger style: enabled, busy (disabled with a busy label), or
/// disabled for lack of input.
pub fn button(enabled: bool) -> Style {
    if enabled {
        focused_selected()
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    }
}

// --- Severity ---

/// Fixed color for each notification severity
pub fn severity_color(severity: Severity) -> ratatui::style::Color {
    match severity {
        Severity::Info => palette::STATUS_BLUE,
        Severity::Success => palette::STATUS_GREEN,
        Severity::Warning => palette::STATUS_YELLOW,
        Severity::Error => palette::STATUS_RED,
    }
}

pub fn severity(severity: Severity) -> Style {
    Style::default().fg(severity_color(severity))
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn notification_block(severity: Severity) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(self::severity(severity))
        .style(Style::default().bg(palette::POPUP_BG))
}
