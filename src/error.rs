use thiserror::Error;

use crate::constants::KNOWN_FOLDER_FAILURE_STATUS;

#[derive(Debug, Error)]
pub enum AppError {
    /// The Windows known-folder service could not locate `ProgramData`.
    /// Treated as permanent; there is no point retrying within one run.
    #[error("Failed to find the Windows known folder ProgramData")]
    ProgramDataNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status reported for this error.
    ///
    /// Known-folder resolution failure has a distinct status so installers
    /// calling this binary can tell it apart from an ordinary I/O failure.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::ProgramDataNotFound => KNOWN_FOLDER_FAILURE_STATUS,
            AppError::Io(_) => 1,
        }
    }
}
