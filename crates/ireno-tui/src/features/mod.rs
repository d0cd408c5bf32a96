//! Feature slices for the TUI (state/update/render per slice).

pub mod alerts;
pub mod chat;
pub mod dashboard;
pub mod notifications;
pub mod reports;
