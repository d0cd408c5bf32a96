//! Runtime execution modes.
//!
//! - `tui`: full-screen interactive dashboard (optional feature)
//! - everything else runs as plain subcommands on stdout

#[cfg(feature = "tui")]
pub use ireno_tui::run_dashboard;

#[cfg(not(feature = "tui"))]
pub async fn run_dashboard(_settings: ireno_core::settings::Settings) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
