/*!
 * Platform Metadata
 * Static facts about the host: OS family, word size, endianness, limits
 */

use serde::{Deserialize, Serialize};

/// Snapshot of host platform facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Operating system name
    pub os: String,

    /// OS family (unix, windows)
    pub family: String,

    /// CPU architecture
    pub arch: String,

    /// Native pointer width in bits
    pub pointer_width: u32,

    /// Byte order: "little" or "big"
    pub endianness: String,

    /// Facade version string
    pub version: String,
}

impl PlatformInfo {
    /// Get current platform info
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.into(),
            family: std::env::consts::FAMILY.into(),
            arch: std::env::consts::ARCH.into(),
            pointer_width: usize::BITS,
            endianness: endianness().into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Byte order of the host: "little" or "big"
pub fn endianness() -> &'static str {
    if cfg!(target_endian = "big") {
        "big"
    } else {
        "little"
    }
}

/// Upper bound on a single string's byte length
pub fn max_string_bytes() -> usize {
    isize::MAX as usize
}

/// Upper bound on an array's element count
pub fn max_array_len() -> usize {
    isize::MAX as usize
}
