//! # Storage Layer
//!
//! Read-only access to ADR files and configuration on disk.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | ADRs | Markdown | `doc/adr/*.md` (configurable) |
//! | Project config | TOML | `.adr-viewer.toml` |
//! | Global config | TOML | `~/.config/adr-viewer/config.toml` |
//!
//! ## Key Types
//!
//! - [`AdrStore`] - Discovers and parses the ADRs of one directory
//! - [`Config`] - Layered global, project and command-line settings

mod adr_store;
mod config;

pub use adr_store::{AdrStore, BuildReport};
pub use config::{
    Config, ConfigError, ConfigFile, ServeConfig, ServeFile, DEFAULT_ADR_PATH, DEFAULT_OUTPUT,
    PROJECT_CONFIG_FILE,
};
