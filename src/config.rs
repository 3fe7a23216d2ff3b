//! Configuration constants for syskit.

/// Default block size in bytes for stream copy operations.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Per-user application data subdirectory on Windows, relative to home.
pub const WINDOWS_DATA_DIR: &str = "AppData/Roaming";

/// Per-user application data subdirectory on macOS, relative to home.
pub const MAC_DATA_DIR: &str = "Library/Application Support";

/// Per-user application data subdirectory on Linux (XDG data home), relative
/// to home.
pub const LINUX_DATA_DIR: &str = ".local/share";

/// Prefix that hides a directory on systems without a dedicated app-data
/// convention.
pub const HIDDEN_DIR_PREFIX: char = '.';
