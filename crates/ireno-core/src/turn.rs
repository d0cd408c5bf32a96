//! Chat turn controller.
//!
//! Orchestrates one user → assistant exchange as a two-state machine:
//!
//! ```text
//! Idle --submit(text)--> AwaitingResponse --complete()--> Idle
//! ```
//!
//! `submit` appends the user message and returns the response delay for
//! the caller to schedule; `complete` resolves the scripted reply and
//! appends it. The controller owns no timer, so the whole exchange is
//! testable without an async runtime. There is no cancellation path: a
//! started delay is always driven to completion by the caller.

use std::time::Duration;

use rand::Rng;

use crate::responses;
use crate::transcript::{ChatMessage, Transcript};

/// Lower bound of the simulated response delay (inclusive).
pub const RESPONSE_DELAY_MIN_MS: u64 = 1500;

/// Upper bound of the simulated response delay (exclusive).
pub const RESPONSE_DELAY_MAX_MS: u64 = 2500;

/// Turn state. Exactly one writer (the controller itself).
#[derive(Debug)]
enum TurnState {
    /// Ready for input.
    Idle,
    /// User message sent; reply pending until the delay elapses.
    AwaitingResponse { text: String },
}

/// Controls turn-taking for a single chat session.
///
/// The typing indicator the UI shows is exactly
/// `is_awaiting_response()`: it flips true after the user message is
/// appended and false before the assistant message is appended.
#[derive(Debug)]
pub struct TurnController {
    state: TurnState,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            state: TurnState::Idle,
        }
    }

    /// Returns true while a reply is pending (the UI's typing state).
    pub fn is_awaiting_response(&self) -> bool {
        matches!(self.state, TurnState::AwaitingResponse { .. })
    }

    /// Submits a user message.
    ///
    /// Rejected (returns `None`, transcript untouched) if the input is
    /// empty or whitespace-only, or if a reply is already pending; a
    /// second submission is dropped rather than queued. On accept the
    /// user message is appended, the typing state flips true, and the
    /// sampled response delay is returned for the caller to schedule.
    pub fn submit(&mut self, transcript: &mut Transcript, input: &str) -> Option<Duration> {
        let text = input.trim();
        if text.is_empty() || self.is_awaiting_response() {
            return None;
        }

        transcript.append(ChatMessage::user(text));
        self.state = TurnState::AwaitingResponse {
            text: text.to_string(),
        };
        Some(sample_response_delay())
    }

    /// Completes the pending turn after the scheduled delay elapsed.
    ///
    /// Flips the typing state false, resolves the scripted reply for the
    /// submitted text, appends the assistant message, and returns the
    /// reply. Returns `None` (and appends nothing) if no turn is pending.
    pub fn complete(&mut self, transcript: &mut Transcript) -> Option<&'static str> {
        let TurnState::AwaitingResponse { text } =
            std::mem::replace(&mut self.state, TurnState::Idle)
        else {
            return None;
        };

        let reply = responses::resolve(&text);
        transcript.append(ChatMessage::assistant(reply));
        Some(reply)
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

/// Samples the response delay, uniform in [1500ms, 2500ms).
fn sample_response_delay() -> Duration {
    let ms = rand::thread_rng().gen_range(RESPONSE_DELAY_MIN_MS..RESPONSE_DELAY_MAX_MS);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_rejects_empty_and_whitespace() {
        let mut transcript = Transcript::new();
        let mut turn = TurnController::new();

        assert!(turn.submit(&mut transcript, "").is_none());
        assert!(turn.submit(&mut transcript, "   \t ").is_none());
        assert_eq!(transcript.len(), 1);
        assert!(!turn.is_awaiting_response());
    }

    #[test]
    fn test_submit_while_awaiting_is_a_noop() {
        let mut transcript = Transcript::new();
        let mut turn = TurnController::new();

        assert!(turn.submit(&mut transcript, "hello").is_some());
        let len_after_first = transcript.len();

        assert!(turn.submit(&mut transcript, "second message").is_none());
        assert_eq!(transcript.len(), len_after_first);
    }

    #[test]
    fn test_full_turn_grows_transcript_by_two() {
        let mut transcript = Transcript::new();
        let mut turn = TurnController::new();

        // Before: welcome only, not typing.
        assert!(!turn.is_awaiting_response());
        assert_eq!(transcript.len(), 1);

        turn.submit(&mut transcript, "hello").unwrap();
        // User message appended, typing on.
        assert_eq!(transcript.len(), 2);
        assert!(turn.is_awaiting_response());

        let reply = turn.complete(&mut transcript).unwrap();
        // Assistant message appended, typing off.
        assert_eq!(transcript.len(), 3);
        assert!(!turn.is_awaiting_response());
        assert!(reply.contains("Hello! I can help you with"));

        let roles: Vec<_> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                crate::transcript::Role::Assistant,
                crate::transcript::Role::User,
                crate::transcript::Role::Assistant
            ]
        );
    }

    #[test]
    fn test_complete_without_pending_turn_is_a_noop() {
        let mut transcript = Transcript::new();
        let mut turn = TurnController::new();

        assert!(turn.complete(&mut transcript).is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_input_is_trimmed_before_append() {
        let mut transcript = Transcript::new();
        let mut turn = TurnController::new();

        turn.submit(&mut transcript, "  brooklyn  ").unwrap();
        assert_eq!(transcript.messages()[1].text, "brooklyn");

        let reply = turn.complete(&mut transcript).unwrap();
        assert!(reply.contains("Brooklyn grid status"));
    }

    #[test]
    fn test_delay_stays_in_range() {
        let mut transcript = Transcript::new();
        for _ in 0..100 {
            let mut turn = TurnController::new();
            let delay = turn.submit(&mut transcript, "ping").unwrap();
            assert!(delay >= Duration::from_millis(RESPONSE_DELAY_MIN_MS));
            assert!(delay < Duration::from_millis(RESPONSE_DELAY_MAX_MS));
            turn.complete(&mut transcript);
        }
    }
}
