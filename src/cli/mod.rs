//! # Command-Line Interface
//!
//! A single command with no subcommands:
//!
//! ```bash
//! adr-viewer                          # doc/adr/*.md -> index.html
//! adr-viewer --adr-path docs/adr --output site/adr.html
//! adr-viewer --serve                  # http://localhost:8000/
//! ```
//!
//! ## Output Formats
//!
//! `--format text` (default) prints plain lines; `--format json` prints one
//! JSON object per line for skipped files and the final summary.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute.

mod app;
mod output;
pub mod serve;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
