//! Cross-slice state mutations.
//!
//! Feature reducers and overlays return these mutations to request
//! changes outside their own slice. The main reducer applies them in
//! order; applying a mutation may itself produce effects (scheduling a
//! response delay, persisting settings, expiring a notification).

use ireno_core::notify::{NotificationKind, NotificationSource};
use ireno_core::settings::Settings;

/// Mutations for cross-slice state changes.
#[derive(Debug)]
pub enum StateMutation {
    Chat(ChatMutation),
    Settings(SettingsMutation),
    /// Surface a transient notification (gated by the user's toggles).
    Notify {
        source: NotificationSource,
        kind: NotificationKind,
        message: String,
    },
}

/// Chat slice mutations requested by other slices.
#[derive(Debug)]
pub enum ChatMutation {
    /// Submit a message through the turn controller (quick actions use
    /// this path too).
    Submit(String),
    /// Reset the transcript to a fresh welcome message.
    Clear,
}

/// Settings mutations requested by overlays.
#[derive(Debug)]
pub enum SettingsMutation {
    /// Replace the live settings and persist them.
    Replace(Settings),
    /// Advance the theme one step (auto → light → dark) and persist.
    CycleTheme,
}
