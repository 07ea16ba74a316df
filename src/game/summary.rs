//! Append-only game summary files.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::result::RoundSummary;

/// Path of the summary file for a game inside `dir`.
#[must_use]
pub fn summary_path(dir: &Path, game_number: usize) -> PathBuf {
    dir.join(format!("game_summary{game_number}.txt"))
}

/// Appends a round summary, separated by a blank line from any earlier entry.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_round(dir: &Path, game_number: usize, summary: &RoundSummary) -> io::Result<()> {
    let path = summary_path(dir, game_number);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let mut entry = String::new();
    if file.metadata()?.len() > 0 {
        entry.push('\n');
    }
    entry.push_str(&summary.to_string());

    file.write_all(entry.as_bytes())?;
    log::debug!("appended round {} to {}", summary.round, path.display());
    Ok(())
}
