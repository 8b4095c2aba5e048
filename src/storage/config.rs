//! Configuration handling for ADR Viewer
//!
//! Settings are layered, later layers winning:
//! built-in defaults, `~/.config/adr-viewer/config.toml` (global),
//! `.adr-viewer.toml` in the working directory (project), then command-line
//! flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Name of the per-project config file
pub const PROJECT_CONFIG_FILE: &str = ".adr-viewer.toml";

/// Default directory holding ADR files
pub const DEFAULT_ADR_PATH: &str = "doc/adr/";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "index.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for `--serve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
        }
    }
}

impl ServeConfig {
    /// Returns `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the URL announced when the server starts
    pub fn url(&self) -> String {
        format!("http://{}/", self.address())
    }
}

/// One config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub adr_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub project_title: Option<String>,
    pub serve: ServeFile,
}

/// `[serve]` table of a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServeFile {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing ADR files
    pub adr_path: PathBuf,

    /// File the page is written to
    pub output: PathBuf,

    /// Overrides the working directory name as page title
    pub project_title: Option<String>,

    pub serve: ServeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adr_path: PathBuf::from(DEFAULT_ADR_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT),
            project_title: None,
            serve: ServeConfig::default(),
        }
    }
}

impl Config {
    /// Loads global and project configuration for a working directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let global = Self::global_config_dir().map(|dir| dir.join("config.toml"));
        Self::load_from(global.as_deref(), project_root)
    }

    /// Loads configuration from an explicit global file and project root
    pub fn load_from(global_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = global_path {
            if let Some(file) = Self::read_file(path)? {
                config.apply(file);
            }
        }

        if let Some(file) = Self::read_file(&project_root.join(PROJECT_CONFIG_FILE))? {
            config.apply(file);
        }

        config.validate()?;
        Ok(config)
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "adr-viewer", "adr-viewer")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Reads a config file, or `None` if it does not exist
    fn read_file(path: &Path) -> Result<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let file = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(Some(file))
    }

    /// Overlays the keys set in a config file
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(adr_path) = file.adr_path {
            self.adr_path = adr_path;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if file.project_title.is_some() {
            self.project_title = file.project_title;
        }
        if let Some(host) = file.serve.host {
            self.serve.host = host;
        }
        if let Some(port) = file.serve.port {
            self.serve.port = port;
        }
    }

    /// Checks values that cannot be expressed in the types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serve.host.trim().is_empty() {
            return Err(ConfigError::Invalid("serve.host must not be empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output must not be empty".to_string()));
        }
        Ok(())
    }

    /// Picks the page title: configured title, else the directory's name
    pub fn project_title_for(&self, working_dir: &Path) -> String {
        self.project_title.clone().unwrap_or_else(|| {
            working_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
