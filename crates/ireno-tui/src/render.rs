//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::features::{alerts, chat, dashboard, notifications, reports};
use crate::overlays;
use crate::state::{AppState, Section};
use crate::theme::{self, Palette};

/// Height of the tab bar at the top.
const HEADER_HEIGHT: u16 = 1;

/// Height of the hint line below the body.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for activity animation.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let palette = theme::palette(state.settings.theme);

    // Paint the themed background first
    frame.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(state.section, &palette, frame, chunks[0]);

    match state.section {
        Section::Dashboard => dashboard::render(
            &state.metrics,
            &state.alerts.alerts,
            &palette,
            frame,
            chunks[1],
        ),
        Section::Chat => chat::render(
            &state.chat,
            &palette,
            state.spinner_frame,
            frame,
            chunks[1],
        ),
        Section::Alerts => alerts::render(
            &state.alerts,
            &palette,
            state.spinner_frame,
            frame,
            chunks[1],
        ),
        Section::Reports => reports::render(
            &state.reports,
            &palette,
            state.spinner_frame,
            frame,
            chunks[1],
        ),
    }

    render_status_line(state.section, &palette, frame, chunks[2]);

    // Notifications float over the body, newest at the top
    notifications::render(&state.notifications, &palette, frame, chunks[1]);

    // Render overlay last, so it appears on top
    overlays::render_overlay(&app.overlay, &palette, frame, area);
}

fn render_header(active: Section, palette: &Palette, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " IRENO ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, section) in Section::all().iter().enumerate() {
        let style = if *section == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, section.title()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(section: Section, palette: &Palette, frame: &mut Frame, area: Rect) {
    let hints = match section {
        Section::Dashboard => " Tab sections  r refresh  s settings  t theme  q quit",
        Section::Chat => {
            " Enter send  Ctrl+K quick actions  Ctrl+E export  Ctrl+L clear  Ctrl+S settings  Ctrl+C quit"
        }
        Section::Alerts => " Tab sections  f filter  r refresh  s settings  q quit",
        Section::Reports => " Tab sections  Up/Down select  Enter generate  s settings  q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.dim),
        ))),
        area,
    );
}
