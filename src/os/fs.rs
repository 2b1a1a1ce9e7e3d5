/*!
 * Filesystem Queries and Mutations
 * Existence and type tests, removal, rename, directory listing
 */

use log::{info, trace};
use std::fs;
use std::path::Path;

use super::types::{OsError, OsResult};

/// Whether `path` names an existing filesystem entry
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Whether `path` names a directory
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

/// Remove a file or an empty directory
pub fn remove(path: &Path) -> OsResult<()> {
    let meta = fs::symlink_metadata(path).map_err(|_| OsError::NotFound(path.to_path_buf()))?;

    if meta.file_type().is_dir() {
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }

    info!("Removed {}", path.display());
    Ok(())
}

/// Rename `from` to `to`, replacing `to` if it exists
pub fn rename(from: &Path, to: &Path) -> OsResult<()> {
    fs::rename(from, to)?;
    info!("Renamed {} -> {}", from.display(), to.display());
    Ok(())
}

/// Entry names under `path`, in directory order
pub fn list_dir(path: &Path) -> OsResult<Vec<String>> {
    if !path.is_dir() {
        return Err(OsError::NotADirectory(path.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    trace!("Listed {} entries under {}", names.len(), path.display());
    Ok(names)
}
