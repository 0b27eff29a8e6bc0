//! Product-wide constants
//!
//! Centralizes the product-specific path literals so a renamed or forked
//! distribution only needs to touch this module.

/// Vendor directory created below the Windows `ProgramData` known folder.
pub const WINDOWS_VENDOR_DIR: &str = "DiskuvOCaml";

/// Configuration subdirectory below the vendor directory on Windows.
pub const WINDOWS_CONF_SUBDIR: &str = "conf";

/// System-wide configuration root on POSIX-like systems.
pub const POSIX_CONF_DIR: &str = "/etc/diskuv-ocaml";

/// Process exit status when the `ProgramData` known folder cannot be resolved.
pub const KNOWN_FOLDER_FAILURE_STATUS: u8 = 7;
