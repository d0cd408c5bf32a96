//! UI event types.
//!
//! All inputs to the TUI are converted to `UiEvent` before being
//! processed by the reducer. Timer-driven results (the response delay,
//! notification expiry, simulated refresh/generate delays) arrive
//! through the runtime's inbox channel as separate events.

use std::path::PathBuf;

use crossterm::event::Event as CrosstermEvent;
use ireno_core::notify::NotificationId;

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (for spinner animation; also caps the render rate).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// The chat response delay elapsed; the pending turn should complete.
    ResponseDelayElapsed,

    /// A notification reached its TTL and should be removed.
    NotificationExpired { id: NotificationId },

    /// The metrics refresh interval elapsed.
    MetricsTick,

    /// The simulated alert refresh delay elapsed.
    AlertsRefreshed,

    /// The simulated report generation delay elapsed.
    ReportGenerated { title: String },

    /// Chat export finished (path on success, message on failure).
    ChatExported { result: Result<PathBuf, String> },
}
