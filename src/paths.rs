//! Locations of the on-disk datasets. A working-tree `data/` directory wins
//! when present (handy while hacking on the datasets); otherwise everything
//! lives under the per-user data directory, `~/.local/share/orthofetch` on
//! Linux.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Application folder under the platform data directory.
const APP_DIR_NAME: &str = "orthofetch";
/// Working-tree override checked before the installed location.
const LOCAL_DATA_DIR: &str = "data";

/// Per-user install directory for the corpus and calendar datasets.
fn install_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.data_dir().join(APP_DIR_NAME))
}

/// Directory holding the per-book corpus documents (`<BOOKID>.json`).
pub fn corpus_dir() -> Result<PathBuf> {
    let local = PathBuf::from(LOCAL_DATA_DIR).join("corpus");
    if local.is_dir() {
        return Ok(local);
    }
    Ok(install_dir()?.join("corpus"))
}

/// Path of the calendar dataset for the given year.
pub fn calendar_path(year: i32) -> Result<PathBuf> {
    let file_name = format!("orthodox_calendar_{year}.txt");
    let local = PathBuf::from(LOCAL_DATA_DIR).join(&file_name);
    if local.is_file() {
        return Ok(local);
    }
    Ok(install_dir()?.join(file_name))
}
