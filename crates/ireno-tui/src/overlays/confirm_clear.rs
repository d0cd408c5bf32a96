//! Clear-chat confirmation dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{OverlayUpdate, centered_rect};
use crate::mutations::{ChatMutation, StateMutation};
use crate::theme::Palette;

/// Confirmation dialog state (stateless beyond being open).
#[derive(Debug, Default)]
pub struct ConfirmClearState;

impl ConfirmClearState {
    pub fn open() -> Self {
        Self
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                OverlayUpdate::close_with(vec![StateMutation::Chat(ChatMutation::Clear)])
            }
            KeyCode::Char('n') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(48, 5, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.warning))
            .title(Span::styled(
                " Clear chat ",
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let lines = vec![
            Line::from(Span::styled(
                " Are you sure you want to clear all chat messages?",
                Style::default().fg(palette.fg),
            )),
            Line::default(),
            Line::from(Span::styled(
                " y confirm · n cancel",
                Style::default().fg(palette.dim),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_confirm_emits_clear() {
        let mut state = ConfirmClearState::open();
        let update = state.handle_key(KeyEvent::from(KeyCode::Char('y')));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Chat(ChatMutation::Clear)]
        ));
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let mut state = ConfirmClearState::open();
        let update = state.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }
}
