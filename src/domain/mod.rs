//! Domain models for ADR Viewer
//!
//! Contains the record types and status rules without any I/O concerns.

mod record;
mod status;

pub use record::{normalize_ref, AdrRecord, ParsedAdr, ProjectConfig};
pub use status::AdrStatus;
