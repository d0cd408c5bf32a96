//! Chat section rendering: transcript, typing indicator, input line.

use ireno_core::transcript::Role;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::ChatState;
use crate::render::SPINNER_FRAMES;
use crate::theme::Palette;

/// Height of the bordered input box.
const INPUT_HEIGHT: u16 = 3;

/// Height of the typing indicator line.
const TYPING_HEIGHT: u16 = 1;

pub fn render(
    chat: &ChatState,
    palette: &Palette,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(TYPING_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    render_transcript(chat, palette, frame, chunks[0]);
    render_typing_indicator(chat, palette, spinner_frame, frame, chunks[1]);
    render_input(chat, palette, frame, chunks[2]);
}

fn render_transcript(chat: &ChatState, palette: &Palette, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    if width == 0 || area.height == 0 {
        return;
    }

    // Pre-wrap every message into lines so scrolling works on line
    // granularity.
    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in chat.transcript.messages() {
        let (label, style) = match message.role {
            Role::User => ("You", Style::default().fg(palette.user)),
            Role::Assistant => ("IRENO", Style::default().fg(palette.assistant)),
        };
        lines.push(Line::from(vec![
            Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", message.display_time()),
                Style::default().fg(palette.dim),
            ),
        ]));
        for text_line in message.text.lines() {
            for wrapped in wrap_line(text_line, width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(palette.fg),
                )));
            }
        }
        lines.push(Line::default());
    }

    let height = area.height as usize;
    let total = lines.len();
    let max_offset = total.saturating_sub(height);
    let offset = max_offset.saturating_sub((chat.scroll_offset as usize).min(max_offset));

    let visible: Vec<Line<'static>> = lines.into_iter().skip(offset).take(height).collect();
    let transcript_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(visible), transcript_area);
}

fn render_typing_indicator(
    chat: &ChatState,
    palette: &Palette,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    if !chat.turn.is_awaiting_response() {
        return;
    }

    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(spinner, Style::default().fg(palette.accent)),
        Span::styled(
            " IRENO Assistant is typing...",
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_input(chat: &ChatState, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Message ",
            Style::default().fg(palette.dim),
        ));
    let inner = block.inner(area);

    let input = Paragraph::new(Line::from(Span::styled(
        chat.input.text().to_string(),
        Style::default().fg(palette.fg),
    )))
    .block(block);
    frame.render_widget(input, area);

    // Cursor sits after the chars left of the cursor position.
    let prefix: String = chat.input.text().chars().take(chat.input.cursor()).collect();
    let x = inner.x + prefix.width() as u16;
    frame.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
}

/// Wraps a single line to `width` columns on char boundaries.
///
/// Display-width aware via unicode-width; long unbreakable words are
/// hard-split.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Hard-split an unbreakable word
            for ch in word.chars() {
                let ch_width = ch.to_string().width();
                if current_width + ch_width > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_line("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_line("alpha beta gamma", 10),
            vec!["alpha beta", "gamma"]
        );
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let wrapped = wrap_line("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_line_keeps_blank() {
        assert_eq!(wrap_line("", 10), vec![""]);
    }
}
