//! Resolution of the administrator-writable configuration directory.
//!
//! On Windows the directory lives below the `ProgramData` known folder,
//! which has to be resolved through the OS because its location varies by
//! system configuration. Everywhere else the directory is the fixed
//! system-wide configuration root. No environment variables are consulted:
//! this binary runs during installation staging, where inherited
//! environment is not trustworthy.

mod providers;

pub use providers::{KnownFolderSource, SystemKnownFolders};

use std::path::PathBuf;

use crate::constants::{POSIX_CONF_DIR, WINDOWS_CONF_SUBDIR, WINDOWS_VENDOR_DIR};
use crate::error::AppError;

/// Returns the machine-wide configuration directory used on Windows: the
/// `ProgramData` known folder joined with the product subpath.
///
/// Compiled on every host so the Windows semantics stay testable with an
/// injected [`KnownFolderSource`].
pub fn machine_conf_dir<S: KnownFolderSource>(source: &S) -> Result<PathBuf, AppError> {
    let base = source.program_data()?;
    Ok(base.join(WINDOWS_VENDOR_DIR).join(WINDOWS_CONF_SUBDIR))
}

/// Returns the fixed system-wide configuration directory used on
/// POSIX-like systems. Hardcoded by convention; no OS query occurs.
pub fn system_conf_dir() -> PathBuf {
    PathBuf::from(POSIX_CONF_DIR)
}

/// Resolves the configuration directory for the host platform using the
/// operating system's known-folder service where one exists.
pub fn resolve_config_dir() -> Result<PathBuf, AppError> {
    resolve_with(&SystemKnownFolders)
}

/// Platform dispatch with an injectable known-folder provider.
///
/// The provider is only consulted on Windows; other platforms return the
/// fixed directory regardless of what the provider would report.
pub fn resolve_with<S: KnownFolderSource>(source: &S) -> Result<PathBuf, AppError> {
    if cfg!(windows) {
        machine_conf_dir(source)
    } else {
        Ok(system_conf_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct FixedProgramData(&'static str);

    impl KnownFolderSource for FixedProgramData {
        fn program_data(&self) -> Result<PathBuf, AppError> {
            Ok(PathBuf::from(self.0))
        }
    }

    struct UnavailableProgramData;

    impl KnownFolderSource for UnavailableProgramData {
        fn program_data(&self) -> Result<PathBuf, AppError> {
            Err(AppError::ProgramDataNotFound)
        }
    }

    #[test]
    fn test_machine_conf_dir_appends_product_subpath() {
        let dir = machine_conf_dir(&FixedProgramData(r"C:\ProgramData")).unwrap();
        let expected = Path::new(r"C:\ProgramData").join("DiskuvOCaml").join("conf");
        assert_eq!(dir, expected);
    }

    #[test]
    fn test_machine_conf_dir_keeps_non_ascii_base() {
        // ProgramData can be relocated to a path with non-ASCII characters
        let dir = machine_conf_dir(&FixedProgramData(r"D:\Données d'application")).unwrap();
        let expected = Path::new(r"D:\Données d'application")
            .join("DiskuvOCaml")
            .join("conf");
        assert_eq!(dir, expected);
    }

    #[test]
    fn test_machine_conf_dir_propagates_lookup_failure() {
        let err = machine_conf_dir(&UnavailableProgramData).unwrap_err();
        assert!(matches!(err, AppError::ProgramDataNotFound));
    }

    #[test]
    fn test_system_conf_dir_is_fixed_absolute_path() {
        let dir = system_conf_dir();
        assert_eq!(dir, PathBuf::from("/etc/diskuv-ocaml"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_ignores_provider_off_windows() {
        // The POSIX branch has no failure path, even with a broken provider
        let dir = resolve_with(&UnavailableProgramData).unwrap();
        assert_eq!(dir, system_conf_dir());
    }

    #[cfg(windows)]
    #[test]
    fn test_resolve_consults_provider_on_windows() {
        let dir = resolve_with(&FixedProgramData(r"C:\ProgramData")).unwrap();
        assert_eq!(
            dir,
            Path::new(r"C:\ProgramData").join("DiskuvOCaml").join("conf")
        );

        let err = resolve_with(&UnavailableProgramData).unwrap_err();
        assert!(matches!(err, AppError::ProgramDataNotFound));
    }
}
