//! Dashboard section: metric cards, system health, recent alerts.
//!
//! Pure display over the mock grid data; nothing here feeds back into
//! the chat/settings core.

use ireno_core::grid::{Alert, HealthStatus, Metrics, SYSTEM_HEALTH};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::theme::Palette;

pub fn render(
    metrics: &Metrics,
    alerts: &[Alert],
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    render_metric_cards(metrics, palette, frame, rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_system_health(palette, frame, bottom[0]);
    render_recent_alerts(alerts, palette, frame, bottom[1]);
}

fn render_metric_cards(metrics: &Metrics, palette: &Palette, frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_grid_status_card(metrics, palette, frame, cards[0]);

    render_stat_card(
        "Smart Meters",
        &format_count(metrics.active_meters),
        vec![
            (format_count(metrics.online_meters), "Online", palette.success),
            (
                format_count(metrics.offline_meters),
                "Offline",
                palette.warning,
            ),
        ],
        palette,
        frame,
        cards[1],
    );

    render_stat_card(
        "System Alerts",
        &metrics.total_alerts.to_string(),
        vec![
            (metrics.critical_alerts.to_string(), "Critical", palette.error),
            (metrics.warning_alerts.to_string(), "Warning", palette.warning),
            (metrics.info_alerts.to_string(), "Info", palette.info),
        ],
        palette,
        frame,
        cards[2],
    );

    render_stat_card(
        "Energy Today",
        &format!("{} MWh", format_count(metrics.energy_consumed_mwh)),
        vec![
            (
                format!("{} MWh", format_count(metrics.energy_generated_mwh)),
                "Generated",
                palette.success,
            ),
            (
                format!("{}%", metrics.renewable_percent),
                "Renewable",
                palette.info,
            ),
        ],
        palette,
        frame,
        cards[3],
    );
}

fn render_grid_status_card(metrics: &Metrics, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = card_block("Grid Status", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Operational",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ))),
        lines[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "{} MW / {} MW",
                format_count(metrics.grid_load_mw),
                format_count(metrics.grid_capacity_mw)
            ),
            Style::default().fg(palette.dim),
        ))),
        lines[1],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(f64::from(metrics.efficiency_percent.min(100)) / 100.0)
            .label(format!("{}% Efficiency", metrics.efficiency_percent)),
        lines[2],
    );
}

fn render_stat_card(
    title: &str,
    value: &str,
    stats: Vec<(String, &str, ratatui::style::Color)>,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let block = card_block(title, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    ))];
    for (stat_value, label, color) in stats {
        lines.push(Line::from(vec![
            Span::styled(stat_value, Style::default().fg(color)),
            Span::styled(format!(" {label}"), Style::default().fg(palette.dim)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_system_health(palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = card_block("System Health", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line<'static>> = SYSTEM_HEALTH
        .iter()
        .map(|item| {
            let (dot, color) = match item.status {
                HealthStatus::Online => ("●", palette.success),
                HealthStatus::Warning => ("●", palette.warning),
            };
            Line::from(vec![
                Span::styled(format!("{dot} "), Style::default().fg(color)),
                Span::styled(item.name, Style::default().fg(palette.fg)),
                Span::styled(
                    format!("  {}", item.uptime),
                    Style::default().fg(palette.dim),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recent_alerts(alerts: &[Alert], palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = card_block("Recent Alerts", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for alert in alerts {
        lines.push(Line::from(vec![
            Span::styled(
                alert.timestamp,
                Style::default().fg(palette.dim),
            ),
            Span::raw(" "),
            Span::styled(
                alert.title,
                Style::default()
                    .fg(super::alerts::kind_color(alert.kind, palette))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("        {} - {}", alert.location, alert.status),
            Style::default().fg(palette.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn card_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.accent),
        ))
}

/// Formats a count with thousands separators (125430 → "125,430").
fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2847), "2,847");
        assert_eq!(format_count(125_430), "125,430");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
