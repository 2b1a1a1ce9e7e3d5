/*!
 * OS Facade
 * Thin pass-through wrappers over host OS primitives
 */

pub mod env;
pub mod fs;
pub mod platform;
pub mod process;
pub mod shell;
pub mod types;

// Re-export public API
pub use platform::PlatformInfo;
pub use types::{CpuTime, OsError, OsResult};
