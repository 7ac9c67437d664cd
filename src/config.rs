//! Configuration file support.
//!
//! An optional TOML file supplies defaults for the command line flags:
//!
//! ```toml
//! server_url = "http://127.0.0.1:5000"
//! num_questions = 10
//! mode = "mixed"
//! use_ai = true
//! log_file = "/tmp/quizgen.log"
//! request_timeout_secs = 60
//! ```
//!
//! Precedence is command line, then file, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

use crate::models::GenerationMode;

/// Server used when neither flag nor file names one
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub num_questions: Option<u32>,
    pub mode: Option<GenerationMode>,
    pub use_ai: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the config file for this run.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/quizgen/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quizgen").join("config.toml"))
}

/// `<data_dir>/quizgen/quizgen-tui.log`, or the temp dir if there is none
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("quizgen")
        .join("quizgen-tui.log")
}

/// Check that `raw` is an absolute http(s) URL
pub fn validate_server_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid server URL: {}", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Server URL must use http or https: {}", raw);
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}
