//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── settings: Settings           (persisted preferences)
//! │   ├── chat: ChatState              (transcript, turn, input, scroll)
//! │   ├── notifications: Notifications (transient messages)
//! │   ├── metrics: Metrics             (dashboard numbers)
//! │   ├── alerts: AlertsState          (alert list + filter)
//! │   └── reports: ReportsState        (report catalog selection)
//! └── overlay: Option<Overlay>         (modal overlays)
//! ```
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`
//! so overlay handlers and section handlers never fight the borrow
//! checker over the same struct.

use ireno_core::grid::Metrics;
use ireno_core::notify::Notifications;
use ireno_core::settings::Settings;

use crate::features::alerts::AlertsState;
use crate::features::chat::ChatState;
use crate::features::reports::ReportsState;
use crate::overlays::Overlay;

/// Top-level sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Chat,
    Alerts,
    Reports,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Chat,
            Section::Alerts,
            Section::Reports,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Chat => "AI Assistant",
            Section::Alerts => "Alerts",
            Section::Reports => "Reports",
        }
    }

    pub fn next(&self) -> Section {
        let all = Self::all();
        let i = all.iter().position(|s| s == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn previous(&self) -> Section {
        let all = Self::all();
        let i = all.iter().position(|s| s == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            tui: TuiState::new(settings),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active section.
    pub section: Section,
    /// Live user settings.
    pub settings: Settings,
    /// Chat slice (transcript, turn controller, input).
    pub chat: ChatState,
    /// Transient notification list.
    pub notifications: Notifications,
    /// Dashboard metrics.
    pub metrics: Metrics,
    /// Alerts slice.
    pub alerts: AlertsState,
    /// Reports slice.
    pub reports: ReportsState,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(settings: Settings) -> Self {
        Self {
            should_quit: false,
            section: Section::Dashboard,
            settings,
            chat: ChatState::new(),
            notifications: Notifications::new(),
            metrics: Metrics::default(),
            alerts: AlertsState::new(),
            reports: ReportsState::new(),
            spinner_frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_roundtrip() {
        let mut section = Section::Dashboard;
        for _ in 0..Section::all().len() {
            section = section.next();
        }
        assert_eq!(section, Section::Dashboard);
        assert_eq!(Section::Dashboard.previous(), Section::Reports);
    }

    #[test]
    fn test_new_state_is_seeded() {
        let state = TuiState::new(Settings::default());
        assert_eq!(state.chat.transcript.len(), 1);
        assert!(state.notifications.is_empty());
        assert_eq!(state.section, Section::Dashboard);
    }
}
