//! Full-screen TUI for the IRENO dashboard.

pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use ireno_core::settings::Settings;
pub use runtime::TuiRuntime;

/// Runs the interactive dashboard loop.
pub async fn run_dashboard(settings: Settings) -> Result<()> {
    // The dashboard requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `ireno chat respond '...'` for non-interactive queries."
        );
    }

    let mut runtime = TuiRuntime::new(settings)?;
    runtime.run()?;

    Ok(())
}
