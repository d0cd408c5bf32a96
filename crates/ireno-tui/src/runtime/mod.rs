//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Timer-driven results use an "inbox" channel:
//! - Effect handlers send `UiEvent`s to `inbox_tx` when their delay elapses
//! - The runtime drains `inbox_rx` each frame
//!
//! Every suspension point in the app is a timer (the chat response
//! delay, notification expiry, the metrics refresh tick, simulated
//! refresh/generate delays); none of them are cancelable, so there is no
//! cancellation machinery here.

use std::future::Future;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ireno_core::notify::NOTIFICATION_TTL;
use ireno_core::settings::Settings;
use ireno_core::transcript::{ChatExport, export_file_name};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::warn;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while something animates (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when
/// nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Simulated delay for the alerts refresh action.
const ALERTS_REFRESH_DELAY: Duration = Duration::from_millis(1000);

/// Simulated delay for report generation.
const REPORT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes
/// effects. Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Inbox sender - effect handlers send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time the dashboard metrics were refreshed.
    last_metrics_refresh: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(settings);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_metrics_refresh: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at
                // tick cadence; other events batch renders to the next Tick
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (terminal, inbox, timers).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while anything animates, slow otherwise.
        let needs_fast_poll = self.state.tui.chat.turn.is_awaiting_response()
            || self.state.tui.alerts.refreshing
            || self.state.tui.reports.generating.is_some()
            || !self.state.tui.notifications.is_empty();

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Periodic metrics refresh driven by the settings interval
        let refresh_secs = self.state.tui.settings.refresh_interval;
        if refresh_secs > 0
            && self.last_metrics_refresh.elapsed() >= Duration::from_secs(u64::from(refresh_secs))
        {
            events.push(UiEvent::MetricsTick);
            self.last_metrics_refresh = Instant::now();
        }

        // Drain inbox - timer results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do a non-blocking poll
        // - Otherwise block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect that resolves to a `UiEvent` on the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Executes a single effect.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // A pending response always runs to completion; there is no
            // cancellation path.
            UiEffect::ScheduleResponse { delay } => {
                self.spawn_effect(move || async move {
                    tokio::time::sleep(delay).await;
                    UiEvent::ResponseDelayElapsed
                });
            }

            UiEffect::ScheduleNotificationExpiry { id } => {
                self.spawn_effect(move || async move {
                    tokio::time::sleep(NOTIFICATION_TTL).await;
                    UiEvent::NotificationExpired { id }
                });
            }

            UiEffect::PersistSettings { settings } => {
                // Errors are logged only - settings stay live in memory
                if let Err(e) = settings.save() {
                    warn!("failed to persist settings: {e:#}");
                }
            }

            UiEffect::ExportChat { export } => {
                let result = write_export(&export);
                let _ = self.inbox_tx.send(UiEvent::ChatExported { result });
            }

            UiEffect::RefreshAlerts => {
                self.spawn_effect(|| async {
                    tokio::time::sleep(ALERTS_REFRESH_DELAY).await;
                    UiEvent::AlertsRefreshed
                });
            }

            UiEffect::GenerateReport { title } => {
                self.spawn_effect(move || async move {
                    tokio::time::sleep(REPORT_GENERATION_DELAY).await;
                    UiEvent::ReportGenerated { title }
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

/// Writes a chat export artifact to the working directory.
fn write_export(export: &ChatExport) -> Result<PathBuf, String> {
    let path = PathBuf::from(export_file_name(chrono::Local::now().date_naive()));
    let contents = serde_json::to_string_pretty(export).map_err(|e| e.to_string())?;
    std::fs::write(&path, contents).map_err(|e| e.to_string())?;
    Ok(path)
}
