/*!
 * Shell Execution
 * One-shot blocking command execution through the system shell
 */

use log::{debug, info};
use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use super::types::OsResult;

/// Run `command` through `/bin/sh -c`, blocking until it exits.
///
/// Children killed by a signal report the shell convention of 128 + signal.
pub fn run(command: &str) -> OsResult<i32> {
    debug!("Running shell command: {}", command);

    let status = Command::new("/bin/sh").arg("-c").arg(command).status()?;
    let code = match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    };

    info!("Shell command exited with {}", code);
    Ok(code)
}
