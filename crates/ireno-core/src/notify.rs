//! Transient notifications.
//!
//! Any part of the app can surface a short message; each notification
//! gets a unique id and is expected to be expired by the caller exactly
//! `NOTIFICATION_TTL` after creation (the runtime schedules the timer).
//! Dismissal is idempotent, so an auto-expiry racing a manual dismiss is
//! harmless.

use std::time::Duration;

use crate::settings::Settings;

/// How long a notification stays visible before auto-expiry.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

/// Unique id for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Which settings toggle gates a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSource {
    /// Alert-related messages, gated by `alert_notifications`.
    Alert,
    /// Everything else, gated by `system_notifications`.
    System,
}

/// A visible transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// Process-wide notification list.
///
/// Multiple notifications may be visible at once, each independently
/// timed by its caller-scheduled expiry.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its unique id.
    ///
    /// The caller is responsible for scheduling expiry after
    /// `NOTIFICATION_TTL`.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Appends a notification unless the user has muted its source.
    ///
    /// Returns `None` when suppressed.
    pub fn notify_gated(
        &mut self,
        settings: &Settings,
        source: NotificationSource,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Option<NotificationId> {
        let enabled = match source {
            NotificationSource::Alert => settings.alert_notifications,
            NotificationSource::System => settings.system_notifications,
        };
        enabled.then(|| self.notify(message, kind))
    }

    /// Removes a notification. Dismissing an unknown or already-removed
    /// id is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_assigns_unique_ids() {
        let mut notifications = Notifications::new();
        let a = notifications.notify("one", NotificationKind::Info);
        let b = notifications.notify("two", NotificationKind::Success);
        assert_ne!(a, b);
        assert_eq!(notifications.len(), 2);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut notifications = Notifications::new();
        let id = notifications.notify("x", NotificationKind::Info);

        notifications.dismiss(id);
        assert!(notifications.is_empty());

        // Second dismiss of the same id is a no-op, not an error.
        notifications.dismiss(id);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut notifications = Notifications::new();
        let a = notifications.notify("keep", NotificationKind::Info);
        let b = notifications.notify("drop", NotificationKind::Warning);

        notifications.dismiss(b);
        let remaining: Vec<_> = notifications.iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![a]);
    }

    #[test]
    fn test_gating_by_settings() {
        let mut notifications = Notifications::new();
        let muted = Settings {
            alert_notifications: false,
            system_notifications: false,
            ..Settings::default()
        };

        assert!(
            notifications
                .notify_gated(
                    &muted,
                    NotificationSource::Alert,
                    "a",
                    NotificationKind::Info
                )
                .is_none()
        );
        assert!(
            notifications
                .notify_gated(
                    &muted,
                    NotificationSource::System,
                    "s",
                    NotificationKind::Info
                )
                .is_none()
        );
        assert!(notifications.is_empty());

        let defaults = Settings::default();
        assert!(
            notifications
                .notify_gated(
                    &defaults,
                    NotificationSource::Alert,
                    "a",
                    NotificationKind::Info
                )
                .is_some()
        );
        assert_eq!(notifications.len(), 1);
    }
}
