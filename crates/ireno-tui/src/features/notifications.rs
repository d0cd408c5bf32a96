//! Floating notification rendering.
//!
//! Notifications stack in the top-right corner, newest last, each
//! colored by its kind. The list itself lives in the core; this is a
//! pure view.

use ireno_core::notify::{NotificationKind, Notifications};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// Maximum width of a notification box.
const MAX_WIDTH: u16 = 44;

/// Maximum number of stacked notifications rendered at once.
const MAX_VISIBLE: usize = 4;

fn kind_color(kind: NotificationKind, palette: &Palette) -> Color {
    match kind {
        NotificationKind::Info => palette.info,
        NotificationKind::Success => palette.success,
        NotificationKind::Warning => palette.warning,
        NotificationKind::Error => palette.error,
    }
}

pub fn render(notifications: &Notifications, palette: &Palette, frame: &mut Frame, area: Rect) {
    if notifications.is_empty() {
        return;
    }

    let mut y = area.y + 1;
    for notification in notifications.iter().take(MAX_VISIBLE) {
        let width = (notification.message.width() as u16 + 4)
            .min(MAX_WIDTH)
            .min(area.width);
        if width < 5 || y + 3 > area.bottom() {
            break;
        }
        let x = area.right().saturating_sub(width + 1);
        let box_area = Rect {
            x,
            y,
            width,
            height: 3,
        };

        let color = kind_color(notification.kind, palette);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        frame.render_widget(Clear, box_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notification.message.clone(),
                Style::default().fg(palette.fg),
            )))
            .block(block),
            box_area,
        );

        y += 3;
    }
}
