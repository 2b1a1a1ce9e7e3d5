/*!
 * Environment
 * Variable lookup and working-directory management
 */

use log::{info, trace};
use std::path::{Path, PathBuf};

use super::types::OsResult;

/// Environment variable lookup; absent and non-unicode values read as `None`
pub fn var(key: &str) -> Option<String> {
    let value = std::env::var(key).ok();
    trace!("Env lookup {}: present={}", key, value.is_some());
    value
}

/// Current working directory
pub fn cwd() -> OsResult<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Change the working directory for the whole process
pub fn set_cwd(path: &Path) -> OsResult<()> {
    std::env::set_current_dir(path)?;
    info!("Working directory changed to {}", path.display());
    Ok(())
}
