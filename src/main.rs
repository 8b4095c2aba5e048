//! ADR Viewer - Architecture Decision Records as a single page

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = adr_viewer::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
