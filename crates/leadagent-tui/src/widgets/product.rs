//! Product view: description form and analysis results

use leadagent_app::analysis::{AnalysisFlow, AnalysisStage, AnalysisView, ResultSlot};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{button, TextArea};
use crate::theme::styles;

const DESCRIPTION_PLACEHOLDER: &str =
    "Describe your product and the problem it solves";

/// Scalar slots in display order (the headline and summary are drawn apart)
const DETAIL_SLOTS: [ResultSlot; 6] = [
    ResultSlot::Industry,
    ResultSlot::CompanySize,
    ResultSlot::Characteristics,
    ResultSlot::Revenue,
    ResultSlot::DecisionMakerTitle,
    ResultSlot::DecisionMakerDepartment,
];

pub struct ProductView<'a> {
    analysis: &'a AnalysisFlow,
}

impl<'a> ProductView<'a> {
    pub fn new(analysis: &'a AnalysisFlow) -> Self {
        Self { analysis }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let [input_area, button_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        TextArea::new(&self.analysis.description, "Product Description")
            .placeholder(DESCRIPTION_PLACEHOLDER)
            .focused(true)
            .render(input_area, buf);

        let trigger = &self.analysis.trigger;
        Paragraph::new(Line::from(vec![
            button(trigger.label(), trigger.is_enabled()),
            Span::styled("  Ctrl+S", styles::keybinding()),
        ]))
        .render(button_area, buf);
    }

    fn render_results(&self, view: &AnalysisView, area: Rect, buf: &mut Buffer) {
        let [audience_area, ranked_area, button_area] = Layout::vertical([
            Constraint::Length(DETAIL_SLOTS.len() as u16 + 5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::styled(view.slot(ResultSlot::Headline).to_string(), styles::accent_bold()),
            Line::styled(view.slot(ResultSlot::Summary).to_string(), styles::text_secondary()),
            Line::default(),
        ];
        lines.extend(DETAIL_SLOTS.iter().map(|slot| {
            Line::from(vec![
                Span::styled(format!("{:<16}", slot.label()), styles::label()),
                Span::styled(view.slot(*slot).to_string(), styles::text_primary()),
            ])
        }));
        Paragraph::new(lines)
            .block(styles::glass_block(false).title(" Target Audience "))
            .wrap(Wrap { trim: true })
            .render(audience_area, buf);

        let [segments_area, countries_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(ranked_area);

        let segments: Vec<Line> = view
            .segments
            .iter()
            .flat_map(|seg| {
                [
                    Line::from(vec![
                        Span::styled(format!(" {} ", seg.badge), styles::badge()),
                        Span::raw(" "),
                        Span::styled(seg.title.clone(), styles::text_primary()),
                    ]),
                    Line::styled(format!("    {}", seg.rationale), styles::text_muted()),
                ]
            })
            .collect();
        Paragraph::new(segments)
            .block(styles::glass_block(false).title(" Additional Audiences "))
            .wrap(Wrap { trim: false })
            .render(segments_area, buf);

        let countries: Vec<Line> = view
            .countries
            .iter()
            .flat_map(|c| {
                [
                    Line::from(vec![
                        Span::styled(format!(" {} ", c.badge), styles::badge()),
                        Span::raw(format!(" {} ", c.flag)),
                        Span::styled(c.country.clone(), styles::text_primary()),
                    ]),
                    Line::styled(format!("    {}", c.insight), styles::text_muted()),
                ]
            })
            .collect();
        Paragraph::new(countries)
            .block(styles::glass_block(false).title(" Target Countries "))
            .wrap(Wrap { trim: false })
            .render(countries_area, buf);

        let trigger = &self.analysis.lead_trigger;
        Paragraph::new(Line::from(vec![
            button(trigger.label(), trigger.is_enabled()),
            Span::styled("  g", styles::keybinding()),
            Span::styled("  b back to form", styles::text_muted()),
        ]))
        .render(button_area, buf);
    }
}

impl Widget for ProductView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match (self.analysis.stage, self.analysis.view.as_ref()) {
            (AnalysisStage::Results, Some(view)) => self.render_results(view, area, buf),
            _ => self.render_form(area, buf),
        }
    }
}
