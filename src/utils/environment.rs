use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the directory holding history and logs
pub const HOME_VAR: &str = "DOCS_ASSISTANT_HOME";
/// Overrides `[backend] url`
pub const BACKEND_URL_VAR: &str = "DOCS_ASSISTANT_BACKEND_URL";

/// Get the data directory (history and log files live here)
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = env::var(HOME_VAR)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    let base = dirs::data_local_dir().context("Failed to get platform data directory")?;
    Ok(base.join("docs-assistant"))
}
