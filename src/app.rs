use std::io::Write;

use tracing::debug;

use crate::confdir::{self, KnownFolderSource, SystemKnownFolders};
use crate::error::AppError;

/// Resolves the configuration directory and writes it, followed by a
/// newline, to `out`.
///
/// Nothing is written when resolution fails, so any text that reaches the
/// writer is a complete path line.
pub fn run(out: &mut impl Write) -> Result<(), AppError> {
    run_with(&SystemKnownFolders, out)
}

/// [`run`] with an injectable known-folder provider.
pub fn run_with<S: KnownFolderSource>(source: &S, out: &mut impl Write) -> Result<(), AppError> {
    let conf_dir = confdir::resolve_with(source)?;
    debug!(path = %conf_dir.display(), "resolved configuration directory");
    writeln!(out, "{}", conf_dir.display())?;
    Ok(())
}
