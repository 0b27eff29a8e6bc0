// src/main.rs
use std::io;
use std::process::ExitCode;

use dkml_confdir::{app, logging};

fn main() -> ExitCode {
    // Arguments are deliberately ignored. This binary runs as a staging
    // step during installation and must not expose an input surface.
    logging::init();

    let stdout = io::stdout();
    match app::run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("FATAL: {err}");
            ExitCode::from(err.exit_status())
        }
    }
}
