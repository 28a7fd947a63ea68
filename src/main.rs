mod event;
mod session;
mod view;

use std::io::{self, Write};
use std::process::ExitCode;

use canvas::config::EditorConfig;

use crate::event::HostError;
use crate::session::Session;

fn main() -> ExitCode {
    // stdout carries the render view, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vecsketch failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), HostError> {
    let config = EditorConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid editor config, using defaults");
        EditorConfig::default()
    });
    let mut session = Session::new(config);

    let events = session.drain(io::stdin().lock())?;
    tracing::info!(events, objects = session.engine.doc.len(), "input drained");

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &session.view())?;
    writeln!(out)?;
    Ok(())
}
