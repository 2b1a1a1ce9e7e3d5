/*!
 * OS Facade Types
 * Result and data types for the pass-through wrappers
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// OS wrapper result
pub type OsResult<T> = Result<T, OsError>;

/// OS wrapper errors
#[derive(Error, Debug)]
pub enum OsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No such path: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Process CPU time, split the way `getrusage` reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuTime {
    pub user: Duration,
    pub system: Duration,
}

impl CpuTime {
    /// Combined user and system time
    pub fn total(&self) -> Duration {
        self.user + self.system
    }
}
