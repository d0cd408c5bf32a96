//! Reports section: report catalog with simulated generation.

use ireno_core::grid::REPORTS;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::render::SPINNER_FRAMES;
use crate::theme::Palette;

/// Reports feature state.
#[derive(Debug, Default)]
pub struct ReportsState {
    /// Index of the selected report card.
    pub selected: usize,
    /// Title of the report currently being generated, if any.
    pub generating: Option<String>,
}

impl ReportsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < REPORTS.len() {
            self.selected += 1;
        }
    }

    /// Title of the selected report.
    pub fn selected_title(&self) -> &'static str {
        REPORTS[self.selected.min(REPORTS.len() - 1)].title
    }
}

pub fn render(
    reports: &ReportsState,
    palette: &Palette,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![Line::from(Span::styled(
        " Reports & Analytics   (Enter to generate)",
        Style::default().fg(palette.dim),
    ))];
    lines.push(Line::default());

    for (i, report) in REPORTS.iter().enumerate() {
        let selected = i == reports.selected;
        let marker = if selected { "> " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(report.title, title_style),
        ];
        if reports.generating.as_deref() == Some(report.title) {
            let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::raw("  "));
            spans.push(Span::styled(spinner, Style::default().fg(palette.success)));
            spans.push(Span::styled(
                " Generating...",
                Style::default().fg(palette.success),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("    {}", report.description),
            Style::default().fg(palette.dim),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = ReportsState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        for _ in 0..20 {
            state.select_next();
        }
        assert_eq!(state.selected, REPORTS.len() - 1);
        assert_eq!(state.selected_title(), "Maintenance Schedule");
    }
}
