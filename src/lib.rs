//! ADR Viewer - Render Architecture Decision Records as one HTML page
//!
//! Reads a directory of ADR markdown files, works out each record's status
//! from its `## Status` section, points links between records at in-page
//! anchors, and writes (or serves) a single page listing them all.

pub mod domain;
pub mod parser;
pub mod storage;
pub mod render;
pub mod cli;

pub use domain::{AdrRecord, AdrStatus, ParsedAdr, ProjectConfig};
