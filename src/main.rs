#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod config;
mod gui;

use std::process::ExitCode;

fn main() -> ExitCode {
    match gui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

/// Formats an error with its whole cause chain on one line.
fn report(err: &anyhow::Error) -> String {
    format!("[twilight] {err:#}")
}

#[cfg(test)]
#[path = "../tests/unit/main_report.rs"]
mod tests;
