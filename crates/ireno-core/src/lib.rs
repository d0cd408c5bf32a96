//! Presentation-agnostic core for the IRENO terminal dashboard.
//!
//! Everything that has behavior lives here: the settings store, the
//! scripted response resolver, the chat transcript, the turn controller,
//! the notification list, and the mock grid data. The TUI crate binds
//! these to a rendering surface but contributes no logic of its own.

pub mod grid;
pub mod logging;
pub mod notify;
pub mod responses;
pub mod settings;
pub mod transcript;
pub mod turn;
