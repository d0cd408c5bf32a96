//! Quick actions picker.
//!
//! Offers the canned prompts from the product's quick-action buttons.
//! A selected prompt goes through the normal submit path, so all turn
//! guards (typing state, re-entrancy) apply unchanged.

use crossterm::event::{KeyCode, KeyEvent};
use ireno_core::grid::QUICK_ACTIONS;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{OverlayUpdate, centered_rect};
use crate::mutations::{ChatMutation, StateMutation};
use crate::theme::Palette;

/// Quick actions picker state.
#[derive(Debug, Default)]
pub struct QuickActionsState {
    selected: usize,
}

impl QuickActionsState {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(QUICK_ACTIONS.len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let prompt = QUICK_ACTIONS[self.selected].prompt.to_string();
                OverlayUpdate::close_with(vec![StateMutation::Chat(ChatMutation::Submit(prompt))])
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let height = QUICK_ACTIONS.len() as u16 + 4;
        let modal = centered_rect(44, height, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(
                " Quick Actions ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let mut lines = Vec::with_capacity(QUICK_ACTIONS.len() + 2);
        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(action.label, style),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Enter send · Esc close",
            Style::default().fg(palette.dim),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_enter_submits_selected_prompt() {
        let mut state = QuickActionsState::open();
        state.handle_key(KeyEvent::from(KeyCode::Down));

        let update = state.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Chat(ChatMutation::Submit(prompt))]
                if prompt == QUICK_ACTIONS[1].prompt
        ));
    }

    #[test]
    fn test_selection_clamped() {
        let mut state = QuickActionsState::open();
        for _ in 0..20 {
            state.handle_key(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(state.selected, QUICK_ACTIONS.len() - 1);
    }
}
