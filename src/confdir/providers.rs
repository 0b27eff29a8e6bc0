use std::path::PathBuf;

use crate::error::AppError;

/// Source of the machine-wide Windows known folders consulted by the
/// resolver.
///
/// Wrapping the OS call behind a trait keeps both the success and failure
/// branches of the Windows resolution testable on any host.
pub trait KnownFolderSource {
    /// Returns the absolute path of the `ProgramData` known folder.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The folder as registered with the operating system
    /// * `Err(AppError::ProgramDataNotFound)` - The lookup did not succeed
    fn program_data(&self) -> Result<PathBuf, AppError>;
}

/// Production provider backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemKnownFolders;

#[cfg(windows)]
impl KnownFolderSource for SystemKnownFolders {
    fn program_data(&self) -> Result<PathBuf, AppError> {
        known_folders::get_known_folder_path(known_folders::KnownFolder::ProgramData)
            .ok_or(AppError::ProgramDataNotFound)
    }
}

#[cfg(not(windows))]
impl KnownFolderSource for SystemKnownFolders {
    // Known folders are a Windows concept. The resolver never consults this
    // provider on other platforms.
    fn program_data(&self) -> Result<PathBuf, AppError> {
        Err(AppError::ProgramDataNotFound)
    }
}
