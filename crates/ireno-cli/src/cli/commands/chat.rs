//! Chat command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use ireno_core::responses;
use ireno_core::transcript::{Transcript, export_file_name};

pub fn respond(message: &str) {
    println!("{}", responses::resolve(message));
}

/// Writes an export artifact for a fresh session (welcome message only).
/// Mostly useful for scripting and for validating the artifact shape.
pub fn export(out: Option<&Path>) -> Result<()> {
    let transcript = Transcript::new();
    let export = transcript.export();

    let file_name = export_file_name(chrono::Local::now().date_naive());
    let path = match out {
        Some(dir) => dir.join(file_name),
        None => file_name.into(),
    };

    let contents = serde_json::to_string_pretty(&export).context("serialize chat export")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("write chat export to {}", path.display()))?;
    println!("Exported chat to {}", path.display());
    Ok(())
}
