//! Modal overlays.
//!
//! Overlays capture all key input while open. Handlers return an
//! `OverlayUpdate` (mutations + effects + transition) rather than
//! touching shared state directly; the main reducer applies the result.

mod confirm_clear;
mod quick_actions;
mod settings;

pub use confirm_clear::ConfirmClearState;
use crossterm::event::KeyEvent;
pub use quick_actions::QuickActionsState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use settings::SettingsState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::theme::Palette;

/// The active modal overlay, if any.
#[derive(Debug)]
pub enum Overlay {
    Settings(SettingsState),
    ConfirmClear(ConfirmClearState),
    QuickActions(QuickActionsState),
}

/// Request to open an overlay, returned by feature reducers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    Settings,
    ConfirmClear,
    QuickActions,
}

/// What happens to the overlay after a key press.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Result of an overlay key press.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
    pub transition: OverlayTransition,
}

impl OverlayUpdate {
    fn stay() -> Self {
        Self {
            mutations: vec![],
            effects: vec![],
            transition: OverlayTransition::Stay,
        }
    }

    fn close() -> Self {
        Self {
            mutations: vec![],
            effects: vec![],
            transition: OverlayTransition::Close,
        }
    }

    fn close_with(mutations: Vec<StateMutation>) -> Self {
        Self {
            mutations,
            effects: vec![],
            transition: OverlayTransition::Close,
        }
    }
}

/// Dispatches a key press to the active overlay.
///
/// Returns `None` when no overlay is open (the key falls through to the
/// section handlers). Closing transitions clear the overlay here.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> Option<OverlayUpdate> {
    let active = overlay.as_mut()?;
    let update = match active {
        Overlay::Settings(state) => state.handle_key(key),
        Overlay::ConfirmClear(state) => state.handle_key(key),
        Overlay::QuickActions(state) => state.handle_key(key),
    };
    if matches!(update.transition, OverlayTransition::Close) {
        *overlay = None;
    }
    Some(update)
}

/// Renders the active overlay centered over the given area.
pub fn render_overlay(overlay: &Option<Overlay>, palette: &Palette, frame: &mut Frame, area: Rect) {
    match overlay {
        None => {}
        Some(Overlay::Settings(state)) => state.render(palette, frame, area),
        Some(Overlay::ConfirmClear(state)) => state.render(palette, frame, area),
        Some(Overlay::QuickActions(state)) => state.render(palette, frame, area),
    }
}

/// Computes a centered rect of the given size, clamped to `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
