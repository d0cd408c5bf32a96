//! Chat feature reducer.
//!
//! Handles keyboard input for the chat section. Submission goes through
//! a `ChatMutation` so quick actions and direct typing share one path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ireno_core::notify::{NotificationKind, NotificationSource};

use super::state::ChatState;
use crate::effects::UiEffect;
use crate::mutations::{ChatMutation, StateMutation};
use crate::overlays::OverlayRequest;

/// Result type for key handlers.
pub type KeyResult = (Vec<StateMutation>, Vec<UiEffect>, Option<OverlayRequest>);

/// Lines scrolled per Up/Down press.
const SCROLL_STEP: u16 = 1;

/// Lines scrolled per PageUp/PageDown press.
const PAGE_SCROLL_STEP: u16 = 10;

/// Handles a key press while the chat section is active and no overlay
/// is open.
pub fn handle_key(chat: &mut ChatState, key: KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Ctrl+E: export the transcript
        KeyCode::Char('e') if ctrl => export(chat),
        // Ctrl+L: clear chat (with confirmation)
        KeyCode::Char('l') if ctrl => (vec![], vec![], Some(OverlayRequest::ConfirmClear)),
        // Ctrl+K: quick actions picker
        KeyCode::Char('k') if ctrl => (vec![], vec![], Some(OverlayRequest::QuickActions)),
        // Ctrl+S: settings modal
        KeyCode::Char('s') if ctrl => (vec![], vec![], Some(OverlayRequest::Settings)),

        KeyCode::Enter => submit(chat),
        // Escape clears the draft
        KeyCode::Esc => {
            chat.input.clear();
            (vec![], vec![], None)
        }

        // Scrollback
        KeyCode::Up => {
            chat.scroll_up(SCROLL_STEP);
            (vec![], vec![], None)
        }
        KeyCode::Down => {
            chat.scroll_down(SCROLL_STEP);
            (vec![], vec![], None)
        }
        KeyCode::PageUp => {
            chat.scroll_up(PAGE_SCROLL_STEP);
            (vec![], vec![], None)
        }
        KeyCode::PageDown => {
            chat.scroll_down(PAGE_SCROLL_STEP);
            (vec![], vec![], None)
        }

        // Line editing
        KeyCode::Backspace => {
            chat.input.backspace();
            (vec![], vec![], None)
        }
        KeyCode::Delete => {
            chat.input.delete();
            (vec![], vec![], None)
        }
        KeyCode::Left => {
            chat.input.move_left();
            (vec![], vec![], None)
        }
        KeyCode::Right => {
            chat.input.move_right();
            (vec![], vec![], None)
        }
        KeyCode::Home => {
            chat.input.move_home();
            (vec![], vec![], None)
        }
        KeyCode::End => {
            chat.input.move_end();
            (vec![], vec![], None)
        }
        KeyCode::Char(ch) if !ctrl => {
            chat.input.insert_char(ch);
            (vec![], vec![], None)
        }
        _ => (vec![], vec![], None),
    }
}

/// Handles Enter: empty drafts and mid-turn submissions are silently
/// rejected without touching the draft, so the user can resubmit once
/// the pending reply lands.
fn submit(chat: &mut ChatState) -> KeyResult {
    if chat.input.text().trim().is_empty() || chat.turn.is_awaiting_response() {
        return (vec![], vec![], None);
    }

    let text = chat.input.take();
    (
        vec![StateMutation::Chat(ChatMutation::Submit(text))],
        vec![],
        None,
    )
}

fn export(chat: &ChatState) -> KeyResult {
    if chat.transcript.is_empty() {
        // Unreachable in practice (the transcript is never empty), but
        // the guard keeps export advisory rather than failing.
        return (
            vec![StateMutation::Notify {
                source: NotificationSource::System,
                kind: NotificationKind::Warning,
                message: "No chat messages to export".to_string(),
            }],
            vec![],
            None,
        );
    }

    (
        vec![],
        vec![UiEffect::ExportChat {
            export: chat.transcript.export(),
        }],
        None,
    )
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_text(chat: &mut ChatState, text: &str) {
        for ch in text.chars() {
            handle_key(chat, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_enter_with_empty_input_produces_nothing() {
        let mut chat = ChatState::new();
        let (mutations, effects, overlay) = handle_key(&mut chat, key(KeyCode::Enter));
        assert!(mutations.is_empty());
        assert!(effects.is_empty());
        assert!(overlay.is_none());
    }

    #[test]
    fn test_enter_submits_and_clears_input() {
        let mut chat = ChatState::new();
        type_text(&mut chat, "hello");

        let (mutations, _, _) = handle_key(&mut chat, key(KeyCode::Enter));
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::Chat(ChatMutation::Submit(text))] if text == "hello"
        ));
        assert!(chat.input.is_empty());
    }

    #[test]
    fn test_enter_while_awaiting_keeps_draft() {
        let mut chat = ChatState::new();
        chat.turn.submit(&mut chat.transcript, "first").unwrap();

        type_text(&mut chat, "second");
        let (mutations, effects, _) = handle_key(&mut chat, key(KeyCode::Enter));
        assert!(mutations.is_empty());
        assert!(effects.is_empty());
        // The rejected draft stays put for a later resubmit.
        assert_eq!(chat.input.text(), "second");
    }

    #[test]
    fn test_export_produces_effect() {
        let mut chat = ChatState::new();
        let (_, effects, _) = handle_key(
            &mut chat,
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::ExportChat { .. }]));
    }

    #[test]
    fn test_escape_clears_draft() {
        let mut chat = ChatState::new();
        type_text(&mut chat, "draft");
        handle_key(&mut chat, key(KeyCode::Esc));
        assert!(chat.input.is_empty());
    }
}
