/*!
 * Process Identity
 * Argument vector, executable path, pid, and CPU time
 */

use log::trace;
use nix::sys::resource::{getrusage, UsageWho};
use nix::sys::time::TimeVal;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{CpuTime, OsError, OsResult};

/// Command-line arguments, program name included
pub fn args() -> Vec<String> {
    std::env::args().collect()
}

/// Absolute path of the running executable
pub fn exe_path() -> OsResult<PathBuf> {
    let path = std::env::current_exe()?;
    trace!("Executable path: {}", path.display());
    Ok(path)
}

/// OS process identifier
pub fn pid() -> u32 {
    std::process::id()
}

/// CPU time consumed by this process so far
pub fn cpu_time() -> OsResult<CpuTime> {
    let usage = getrusage(UsageWho::RUSAGE_SELF)
        .map_err(|errno| OsError::Io(std::io::Error::from_raw_os_error(errno as i32)))?;

    Ok(CpuTime {
        user: to_duration(usage.user_time()),
        system: to_duration(usage.system_time()),
    })
}

fn to_duration(tv: TimeVal) -> Duration {
    Duration::new(tv.tv_sec().max(0) as u64, tv.tv_usec().max(0) as u32 * 1_000)
}
