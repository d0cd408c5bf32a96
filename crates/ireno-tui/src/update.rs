//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app,
//! event)` and executes the returned effects. This is the single source
//! of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ireno_core::notify::{NotificationKind, NotificationSource};
use tracing::warn;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::chat;
use crate::mutations::{ChatMutation, SettingsMutation, StateMutation};
use crate::overlays::{self, Overlay, OverlayRequest};
use crate::state::{AppState, Section, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ResponseDelayElapsed => {
            // Typing flips off, the reply is resolved and appended.
            let chat = &mut app.tui.chat;
            if chat.turn.complete(&mut chat.transcript).is_some() {
                chat.follow_latest();
            }
            vec![]
        }
        UiEvent::NotificationExpired { id } => {
            // Idempotent against a manual dismiss
            app.tui.notifications.dismiss(id);
            vec![]
        }
        UiEvent::MetricsTick => {
            app.tui.metrics.refresh(&mut rand::thread_rng());
            vec![]
        }
        UiEvent::AlertsRefreshed => {
            app.tui.alerts.refreshing = false;
            // The product refreshes the headline numbers alongside alerts
            app.tui.metrics.refresh(&mut rand::thread_rng());
            let mut effects = Vec::new();
            push_notification(
                &mut app.tui,
                &mut effects,
                NotificationSource::Alert,
                NotificationKind::Success,
                "Alerts refreshed".to_string(),
            );
            effects
        }
        UiEvent::ReportGenerated { title } => {
            app.tui.reports.generating = None;
            let mut effects = Vec::new();
            push_notification(
                &mut app.tui,
                &mut effects,
                NotificationSource::System,
                NotificationKind::Success,
                format!("{title} generated successfully"),
            );
            effects
        }
        UiEvent::ChatExported { result } => {
            let mut effects = Vec::new();
            match result {
                Ok(path) => push_notification(
                    &mut app.tui,
                    &mut effects,
                    NotificationSource::System,
                    NotificationKind::Success,
                    format!("Chat exported to {}", path.display()),
                ),
                Err(error) => {
                    warn!("chat export failed: {error}");
                    push_notification(
                        &mut app.tui,
                        &mut effects,
                        NotificationSource::System,
                        NotificationKind::Warning,
                        "Failed to export chat".to_string(),
                    );
                }
            }
            effects
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

/// Applies cross-slice mutations in order. Applying a mutation may
/// produce effects (scheduling timers, persisting settings).
fn apply_mutations(
    tui: &mut TuiState,
    mutations: Vec<StateMutation>,
    effects: &mut Vec<UiEffect>,
) {
    for mutation in mutations {
        match mutation {
            StateMutation::Chat(mutation) => apply_chat_mutation(tui, mutation, effects),
            StateMutation::Settings(mutation) => apply_settings_mutation(tui, mutation, effects),
            StateMutation::Notify {
                source,
                kind,
                message,
            } => push_notification(tui, effects, source, kind, message),
        }
    }
}

fn apply_chat_mutation(tui: &mut TuiState, mutation: ChatMutation, effects: &mut Vec<UiEffect>) {
    match mutation {
        ChatMutation::Submit(text) => {
            let chat = &mut tui.chat;
            if let Some(delay) = chat.turn.submit(&mut chat.transcript, &text) {
                chat.follow_latest();
                effects.push(UiEffect::ScheduleResponse { delay });
            }
        }
        ChatMutation::Clear => {
            tui.chat.transcript.clear();
            tui.chat.follow_latest();
            push_notification(
                tui,
                effects,
                NotificationSource::System,
                NotificationKind::Info,
                "Chat cleared".to_string(),
            );
        }
    }
}

fn apply_settings_mutation(
    tui: &mut TuiState,
    mutation: SettingsMutation,
    effects: &mut Vec<UiEffect>,
) {
    match mutation {
        SettingsMutation::Replace(settings) => {
            tui.settings = settings;
            effects.push(UiEffect::PersistSettings {
                settings: tui.settings.clone(),
            });
        }
        SettingsMutation::CycleTheme => {
            tui.settings.theme = tui.settings.theme.next();
            effects.push(UiEffect::PersistSettings {
                settings: tui.settings.clone(),
            });
            push_notification(
                tui,
                effects,
                NotificationSource::System,
                NotificationKind::Info,
                format!("Theme switched to {}", tui.settings.theme.display_name()),
            );
        }
    }
}

/// Appends a notification (honoring the user's toggles) and schedules
/// its auto-expiry.
fn push_notification(
    tui: &mut TuiState,
    effects: &mut Vec<UiEffect>,
    source: NotificationSource,
    kind: NotificationKind,
    message: String,
) {
    if let Some(id) = tui
        .notifications
        .notify_gated(&tui.settings, source, message, kind)
    {
        effects.push(UiEffect::ScheduleNotificationExpiry { id });
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        // Resize just triggers the next render; everything is
        // recomputed from state each frame.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let mut effects = Vec::new();

    // Ctrl+C always quits, overlay or not
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations), &mut effects);
        effects.extend(update.effects);
        return effects;
    }

    // Tab cycles sections everywhere
    match key.code {
        KeyCode::Tab => {
            app.tui.section = app.tui.section.next();
            return effects;
        }
        KeyCode::BackTab => {
            app.tui.section = app.tui.section.previous();
            return effects;
        }
        _ => {}
    }

    // Chat captures raw typing; everything else shares section hotkeys
    if app.tui.section == Section::Chat {
        let (mutations, chat_effects, overlay_request) =
            chat::handle_key(&mut app.tui.chat, key);
        apply_mutations(&mut app.tui, mutations, &mut effects);
        effects.extend(chat_effects);
        if let Some(request) = overlay_request
            && app.overlay.is_none()
        {
            open_overlay_request(app, request);
        }
        return effects;
    }

    handle_section_key(app, key, &mut effects);
    effects
}

fn handle_section_key(app: &mut AppState, key: KeyEvent, effects: &mut Vec<UiEffect>) {
    // Shared hotkeys for the non-chat sections
    match key.code {
        KeyCode::Char('q') => {
            effects.push(UiEffect::Quit);
            return;
        }
        KeyCode::Char('1') => {
            app.tui.section = Section::Dashboard;
            return;
        }
        KeyCode::Char('2') => {
            app.tui.section = Section::Chat;
            return;
        }
        KeyCode::Char('3') => {
            app.tui.section = Section::Alerts;
            return;
        }
        KeyCode::Char('4') => {
            app.tui.section = Section::Reports;
            return;
        }
        KeyCode::Char('s') => {
            open_overlay_request(app, OverlayRequest::Settings);
            return;
        }
        KeyCode::Char('t') => {
            apply_mutations(
                &mut app.tui,
                vec![StateMutation::Settings(SettingsMutation::CycleTheme)],
                effects,
            );
            return;
        }
        _ => {}
    }

    match app.tui.section {
        Section::Dashboard => {
            if key.code == KeyCode::Char('r') {
                app.tui.metrics.refresh(&mut rand::thread_rng());
            }
        }
        Section::Alerts => match key.code {
            KeyCode::Char('f') => {
                app.tui.alerts.filter = app.tui.alerts.filter.next();
                let label = app.tui.alerts.filter.label();
                push_notification(
                    &mut app.tui,
                    effects,
                    NotificationSource::Alert,
                    NotificationKind::Info,
                    format!("Showing {label} alerts"),
                );
            }
            KeyCode::Char('r') => {
                if !app.tui.alerts.refreshing {
                    app.tui.alerts.refreshing = true;
                    effects.push(UiEffect::RefreshAlerts);
                }
            }
            _ => {}
        },
        Section::Reports => match key.code {
            KeyCode::Up => app.tui.reports.select_previous(),
            KeyCode::Down => app.tui.reports.select_next(),
            KeyCode::Enter => {
                if app.tui.reports.generating.is_none() {
                    let title = app.tui.reports.selected_title().to_string();
                    app.tui.reports.generating = Some(title.clone());
                    effects.push(UiEffect::GenerateReport { title });
                }
            }
            _ => {}
        },
        Section::Chat => {}
    }
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) {
    app.overlay = Some(match request {
        OverlayRequest::Settings => {
            Overlay::Settings(overlays::SettingsState::open(app.tui.settings.clone()))
        }
        OverlayRequest::ConfirmClear => Overlay::ConfirmClear(overlays::ConfirmClearState::open()),
        OverlayRequest::QuickActions => {
            Overlay::QuickActions(overlays::QuickActionsState::open())
        }
    });
}
