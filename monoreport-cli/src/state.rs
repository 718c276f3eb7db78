use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn monoreport_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".monoreport"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(monoreport_home()?.join("config.toml"))
}
