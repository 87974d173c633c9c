use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File looked up next to the executable when no path is given.
pub const DEFAULT_CSV_NAME: &str = "niigata_univ_dai1_shokudo_nutrition.csv";

/// Resolve the menu CSV path once at startup.
///
/// `explicit` comes from `--csv` or `CAFETERIA_CSV`; otherwise the default
/// file in the executable's directory is used.
pub fn resolve_csv_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(default_csv_in(dir))
}

pub fn default_csv_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_CSV_NAME)
}
