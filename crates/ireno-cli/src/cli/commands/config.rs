//! Config command handlers.

use anyhow::{Context, Result};
use ireno_core::settings::{Settings, paths};

pub fn path() {
    println!("{}", paths::settings_path().display());
}

pub fn show() -> Result<()> {
    let settings = Settings::load();
    let json = serde_json::to_string_pretty(&settings).context("serialize settings")?;
    println!("{json}");
    Ok(())
}

pub fn reset() -> Result<()> {
    let settings_path = paths::settings_path();
    Settings::default()
        .save_to(&settings_path)
        .with_context(|| format!("reset settings at {}", settings_path.display()))?;
    println!("Settings reset at {}", settings_path.display());
    Ok(())
}
