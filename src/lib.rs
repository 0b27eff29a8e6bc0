//! Administrator-writable configuration directory resolver for the DkML
//! distribution.
//!
//! This library backs the `dkml-confdir` binary, which prints the
//! machine-wide directory where administrator-created DkML configuration
//! lives: the `ProgramData` known folder plus `DiskuvOCaml\conf` on
//! Windows, `/etc/diskuv-ocaml` everywhere else.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dkml_confdir::error::AppError;
//! use dkml_confdir::resolve_config_dir;
//!
//! fn main() -> Result<(), AppError> {
//!     let conf_dir = resolve_config_dir()?;
//!     println!("{}", conf_dir.display());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod confdir;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use confdir::{KnownFolderSource, SystemKnownFolders, resolve_config_dir};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
