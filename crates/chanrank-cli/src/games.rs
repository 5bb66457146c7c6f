//! Loading the list of games to search for.

use std::path::Path;

use anyhow::Context;

/// Reads the newline-delimited games list.
///
/// Lines are trimmed and blank lines skipped. A missing file or an empty
/// list is fatal: there is nothing to search for, so the run must stop
/// before any provider call is made and before any output file is created.
///
/// # Errors
///
/// Returns an error naming the path when the file is missing, unreadable,
/// or contains no games.
pub(crate) fn load_games(path: &Path) -> anyhow::Result<Vec<String>> {
    if !path.exists() {
        anyhow::bail!("games file not found at {}", path.display());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read games file {}", path.display()))?;

    let games: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if games.is_empty() {
        anyhow::bail!("no games listed in {}; add one game per line", path.display());
    }

    Ok(games)
}
