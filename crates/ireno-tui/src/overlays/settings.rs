//! Settings modal.
//!
//! Edits a working copy of the settings; nothing is applied until the
//! user saves. Reset applies and persists the defaults immediately, as
//! the product's reset button does.

use crossterm::event::{KeyCode, KeyEvent};
use ireno_core::notify::{NotificationKind, NotificationSource};
use ireno_core::settings::{Settings, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{OverlayTransition, OverlayUpdate, centered_rect};
use crate::mutations::{SettingsMutation, StateMutation};
use crate::theme::Palette;

/// Refresh interval choices offered in the modal, in seconds.
const REFRESH_CHOICES: &[u32] = &[30, 60, 120, 300];

/// Editable rows, top to bottom.
const ROW_COUNT: usize = 4;
const ROW_THEME: usize = 0;
const ROW_ALERT_NOTIFICATIONS: usize = 1;
const ROW_SYSTEM_NOTIFICATIONS: usize = 2;
const ROW_REFRESH_INTERVAL: usize = 3;

/// Settings modal state.
#[derive(Debug)]
pub struct SettingsState {
    /// Working copy; applied on save.
    working: Settings,
    selected: usize,
}

impl SettingsState {
    pub fn open(current: Settings) -> Self {
        Self {
            working: current,
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(ROW_COUNT - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Left => {
                self.adjust(false);
                OverlayUpdate::stay()
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.adjust(true);
                OverlayUpdate::stay()
            }
            // Enter saves the working copy
            KeyCode::Enter => OverlayUpdate::close_with(vec![
                StateMutation::Settings(SettingsMutation::Replace(self.working.clone())),
                StateMutation::Notify {
                    source: NotificationSource::System,
                    kind: NotificationKind::Success,
                    message: "Settings saved successfully".to_string(),
                },
            ]),
            // r resets to the fixed default tuple and persists it
            KeyCode::Char('r') => {
                self.working = Settings::default();
                OverlayUpdate {
                    mutations: vec![
                        StateMutation::Settings(SettingsMutation::Replace(Settings::default())),
                        StateMutation::Notify {
                            source: NotificationSource::System,
                            kind: NotificationKind::Info,
                            message: "Settings reset to default".to_string(),
                        },
                    ],
                    effects: vec![],
                    transition: OverlayTransition::Stay,
                }
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Adjusts the selected row's value forward or backward.
    fn adjust(&mut self, forward: bool) {
        match self.selected {
            ROW_THEME => {
                let themes = Theme::all();
                let i = themes
                    .iter()
                    .position(|t| *t == self.working.theme)
                    .unwrap_or(0);
                let next = if forward {
                    (i + 1) % themes.len()
                } else {
                    (i + themes.len() - 1) % themes.len()
                };
                self.working.theme = themes[next];
            }
            ROW_ALERT_NOTIFICATIONS => {
                self.working.alert_notifications = !self.working.alert_notifications;
            }
            ROW_SYSTEM_NOTIFICATIONS => {
                self.working.system_notifications = !self.working.system_notifications;
            }
            ROW_REFRESH_INTERVAL => {
                let i = REFRESH_CHOICES
                    .iter()
                    .position(|c| *c == self.working.refresh_interval)
                    .unwrap_or(1);
                let next = if forward {
                    (i + 1) % REFRESH_CHOICES.len()
                } else {
                    (i + REFRESH_CHOICES.len() - 1) % REFRESH_CHOICES.len()
                };
                self.working.refresh_interval = REFRESH_CHOICES[next];
            }
            _ => {}
        }
    }

    pub fn render(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(46, 10, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(
                " Settings ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let rows: [(&str, String); ROW_COUNT] = [
            ("Theme", self.working.theme.display_name().to_string()),
            (
                "Alert notifications",
                on_off(self.working.alert_notifications).to_string(),
            ),
            (
                "System notifications",
                on_off(self.working.system_notifications).to_string(),
            ),
            (
                "Refresh interval",
                format!("{}s", self.working.refresh_interval),
            ),
        ];

        let mut lines = Vec::with_capacity(ROW_COUNT + 2);
        for (i, (label, value)) in rows.iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { "> " } else { "  " };
            let label_style = if selected {
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(format!("{label:<22}"), label_style),
                Span::styled(value.clone(), Style::default().fg(palette.accent)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " arrows change · Enter save · r reset · Esc cancel",
            Style::default().fg(palette.dim),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_save_replaces_settings() {
        let mut state = SettingsState::open(Settings::default());
        // theme row selected; Right cycles auto → light
        state.handle_key(key(KeyCode::Right));

        let update = state.handle_key(key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        let replaced = update.mutations.iter().find_map(|m| match m {
            StateMutation::Settings(SettingsMutation::Replace(s)) => Some(s),
            _ => None,
        });
        assert_eq!(replaced.unwrap().theme, Theme::Light);
    }

    #[test]
    fn test_escape_discards_changes() {
        let mut state = SettingsState::open(Settings::default());
        state.handle_key(key(KeyCode::Right));

        let update = state.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_reset_applies_defaults_and_stays_open() {
        let mut state = SettingsState::open(Settings {
            theme: Theme::Dark,
            refresh_interval: 300,
            ..Settings::default()
        });

        let update = state.handle_key(key(KeyCode::Char('r')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        let replaced = update.mutations.iter().find_map(|m| match m {
            StateMutation::Settings(SettingsMutation::Replace(s)) => Some(s),
            _ => None,
        });
        assert_eq!(replaced.unwrap(), &Settings::default());
        assert_eq!(state.working, Settings::default());
    }

    #[test]
    fn test_toggles_flip() {
        let mut state = SettingsState::open(Settings::default());
        state.handle_key(key(KeyCode::Down));
        state.handle_key(key(KeyCode::Right));

        let update = state.handle_key(key(KeyCode::Enter));
        let replaced = update.mutations.iter().find_map(|m| match m {
            StateMutation::Settings(SettingsMutation::Replace(s)) => Some(s),
            _ => None,
        });
        assert!(!replaced.unwrap().alert_notifications);
    }

    #[test]
    fn test_refresh_interval_cycles_choices() {
        let mut state = SettingsState::open(Settings::default());
        for _ in 0..3 {
            state.handle_key(key(KeyCode::Down));
        }
        state.handle_key(key(KeyCode::Right));

        let update = state.handle_key(key(KeyCode::Enter));
        let replaced = update.mutations.iter().find_map(|m| match m {
            StateMutation::Settings(SettingsMutation::Replace(s)) => Some(s),
            _ => None,
        });
        assert_eq!(replaced.unwrap().refresh_interval, 120);
    }
}
