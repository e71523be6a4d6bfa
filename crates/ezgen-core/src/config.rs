//! Optional `ezgen.config.json` settings.
//!
//! Every field has a default, so the file may be absent or partial. Command
//! line flags take precedence over values loaded here.
//!
//! ```json
//! {
//!   "author": "Jane Doe",
//!   "header_file_name": "ez_target_config.h",
//!   "unrecognized_lines": "reject"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EzgenError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "ezgen.config.json";

/// File name of the generated feature header inside the output directory.
pub const DEFAULT_HEADER_FILE_NAME: &str = "ez_target_config.h";

/// What to do with lines that are not `option(...)` directives at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedLines {
    /// Treat them as malformed and abort generation.
    #[default]
    Reject,
    /// Log and ignore them.
    Skip,
}

/// Settings shared by every `ezgen` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EzgenConfig {
    /// Author written into template banners when `--author` is omitted.
    pub author: Option<String>,
    pub header_file_name: String,
    pub unrecognized_lines: UnrecognizedLines,
}

impl Default for EzgenConfig {
    fn default() -> Self {
        Self {
            author: None,
            header_file_name: DEFAULT_HEADER_FILE_NAME.into(),
            unrecognized_lines: UnrecognizedLines::default(),
        }
    }
}

impl EzgenConfig {
    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| EzgenError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| EzgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| EzgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| EzgenError::filesystem(path, e))?;
        Ok(())
    }
}
