//! Chat transcript and export snapshot.
//!
//! The transcript is an append-only ordered log of messages, owned by a
//! single session. It is seeded with a welcome message and never becomes
//! empty: `clear` replaces the contents with a fresh welcome message
//! rather than leaving nothing behind.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

/// Welcome message the assistant opens every session with.
pub const WELCOME_MESSAGE: &str = "Hello! I'm the IRENO AI Assistant. I can help you \
    with grid operations, meter readings, alerts, and system monitoring. \
    How can I assist you today?";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name used in export artifacts ("user" / "bot").
    pub fn export_name(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "bot",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    /// Clock-face time the message list displays (e.g. "08:45 AM").
    pub fn display_time(&self) -> String {
        self.sent_at.format("%I:%M %p").to_string()
    }
}

/// Ordered chat history for one session.
///
/// Insertion order is display order. Messages are never edited or
/// removed individually; the only destructive operation is `clear`,
/// which resets to a single fresh welcome message.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates a transcript seeded with the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    /// Appends a message, preserving order.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Resets to a single freshly timestamped welcome message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::assistant(WELCOME_MESSAGE));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Produces a read-only export snapshot of the transcript.
    pub fn export(&self) -> ChatExport {
        ChatExport {
            export_date: Utc::now().to_rfc3339(),
            messages: self
                .messages
                .iter()
                .map(|m| ExportedMessage {
                    kind: m.role.export_name(),
                    text: m.text.clone(),
                    timestamp: m.display_time(),
                })
                .collect(),
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Downloadable chat export artifact.
///
/// Serializes as `{"exportDate": "<ISO-8601>", "messages": [{"type":
/// "user"|"bot", "text": ..., "timestamp": ...}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatExport {
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub messages: Vec<ExportedMessage>,
}

/// One message in an export artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
    pub timestamp: String,
}

/// File name for an export written on the given date:
/// `ireno-chat-<ISO-date>.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ireno-chat-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_seeded_with_welcome() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("first"));
        transcript.append(ChatMessage::assistant("second"));

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec![WELCOME_MESSAGE, "first", "second"]);
    }

    #[test]
    fn test_clear_leaves_exactly_one_welcome_message() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("hello"));
        transcript.append(ChatMessage::assistant("hi"));

        transcript.clear();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].text, WELCOME_MESSAGE);

        // Clearing an already-fresh transcript is also exactly one message.
        transcript.clear();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_export_schema() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("status?"));

        let export = transcript.export();
        let value = serde_json::to_value(&export).unwrap();

        assert!(value["exportDate"].is_string());
        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["type"], "bot");
        assert_eq!(messages[1]["type"], "user");
        assert_eq!(messages[1]["text"], "status?");
        assert!(messages[1]["timestamp"].is_string());
    }

    #[test]
    fn test_export_does_not_mutate_transcript() {
        let transcript = Transcript::new();
        let _ = transcript.export();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(export_file_name(date), "ireno-chat-2026-08-06.json");
    }
}
