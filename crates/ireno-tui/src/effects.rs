//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent I/O and timer scheduling only; no direct UI
//! mutations. This keeps the reducer pure: it only mutates state and
//! returns effects, never performs I/O or spawns tasks directly.
//!
//! There are no cancellation effects: a scheduled response delay always
//! runs to completion, and notification expiry is idempotent against a
//! manual dismiss.

use std::time::Duration;

use ireno_core::notify::NotificationId;
use ireno_core::settings::Settings;
use ireno_core::transcript::ChatExport;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Schedule completion of the pending chat turn after `delay`.
    ScheduleResponse { delay: Duration },

    /// Schedule auto-expiry of a notification after the fixed TTL.
    ScheduleNotificationExpiry { id: NotificationId },

    /// Persist settings to disk (failure is logged, never surfaced).
    PersistSettings { settings: Settings },

    /// Write a chat export artifact to disk.
    ExportChat { export: ChatExport },

    /// Start the simulated alert refresh delay.
    RefreshAlerts,

    /// Start the simulated report generation delay.
    GenerateReport { title: String },
}
