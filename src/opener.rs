use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Hand the document to the platform's default viewer.
pub fn open_document(path: &Path) -> Result<()> {
    let mut command = opener_command(path);
    command.stdout(Stdio::null()).stderr(Stdio::null());

    let status = command
        .status()
        .with_context(|| format!("Failed to launch a viewer for {}", path.display()))?;

    if !status.success() {
        anyhow::bail!("Viewer exited with {} for {}", status, path.display());
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
