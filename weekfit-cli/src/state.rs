use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$WEEKFIT_HOME`, or `~/.weekfit`
pub fn weekfit_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WEEKFIT_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".weekfit"))
}

pub fn ensure_weekfit_home() -> Result<PathBuf> {
    let dir = weekfit_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
