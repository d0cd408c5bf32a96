//! Alerts section: filterable alert cards with a simulated refresh.

use ireno_core::grid::{self, Alert, AlertFilter, AlertKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::SPINNER_FRAMES;
use crate::theme::Palette;

/// Alerts feature state.
#[derive(Debug)]
pub struct AlertsState {
    pub alerts: Vec<Alert>,
    pub filter: AlertFilter,
    /// True while the simulated refresh delay runs.
    pub refreshing: bool,
}

impl AlertsState {
    pub fn new() -> Self {
        Self {
            alerts: grid::seed_alerts(),
            filter: AlertFilter::default(),
            refreshing: false,
        }
    }

    /// Alerts visible under the current filter.
    pub fn filtered(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| self.filter.matches(a))
    }
}

impl Default for AlertsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn kind_color(kind: AlertKind, palette: &Palette) -> Color {
    match kind {
        AlertKind::Critical => palette.error,
        AlertKind::Warning => palette.warning,
        AlertKind::Info => palette.info,
    }
}

pub fn render(
    alerts: &AlertsState,
    palette: &Palette,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Header: active filter + refresh status
    let mut spans = vec![
        Span::styled(" Filter: ", Style::default().fg(palette.dim)),
        Span::styled(
            alerts.filter.label(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (f to cycle)", Style::default().fg(palette.dim)),
    ];
    if alerts.refreshing {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(spinner, Style::default().fg(palette.success)));
        spans.push(Span::styled(
            " Refreshing...",
            Style::default().fg(palette.success),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    // One bordered card per visible alert
    let visible: Vec<&Alert> = alerts.filtered().collect();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No alerts match this filter.",
                Style::default().fg(palette.dim),
            ))),
            rows[1],
        );
        return;
    }

    let card_height = 4;
    let mut y = rows[1].y;
    for alert in visible {
        if y + card_height > rows[1].bottom() {
            break;
        }
        let card_area = Rect {
            x: rows[1].x,
            y,
            width: rows[1].width,
            height: card_height,
        };
        render_alert_card(alert, palette, frame, card_area);
        y += card_height;
    }
}

fn render_alert_card(alert: &Alert, palette: &Palette, frame: &mut Frame, area: Rect) {
    let color = kind_color(alert.kind, palette);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} [{}] ", alert.title, alert.kind.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            alert.description,
            Style::default().fg(palette.fg),
        )),
        Line::from(Span::styled(
            format!(
                "{} · {} · {}",
                alert.location, alert.timestamp, alert.status
            ),
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_respects_filter() {
        let mut state = AlertsState::new();
        assert_eq!(state.filtered().count(), 3);

        state.filter = AlertFilter::Critical;
        let titles: Vec<&str> = state.filtered().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Transformer T-4 Overload"]);
    }
}
