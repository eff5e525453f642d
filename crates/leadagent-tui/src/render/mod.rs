//! Main render/view function (View in TEA pattern)


use leadagent_app::AppState;
use leadagent_core::View;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI. Pure with respect to `state`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(&state.views), areas.header);

    // Only the active view is drawn
    match state.views.active() {
        View::Product => {
            frame.render_widget(widgets::ProductView::new(&state.analysis), areas.content)
        }
        View::Leads => frame.render_widget(widgets::LeadsTable::new(&state.leads), areas.content),
        View::Sequences => frame.render_widget(
            widgets::SequenceComposer::new(&state.sequence),
            areas.content,
        ),
    }

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    if !state.notifications.is_empty() {
        let toast_area = layout::notification_area(areas.content, state.notifications.len());
        frame.render_widget(
            widgets::NotificationStack::new(&state.notifications),
            toast_area,
        );
    }
}
