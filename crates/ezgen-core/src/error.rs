//! Unified error types for the ezgen toolkit.

use std::path::PathBuf;
use thiserror::Error;

use crate::features::MalformedReason;

/// All errors that can occur during ezgen operations.
#[derive(Error, Debug)]
pub enum EzgenError {
    // --- Configuration ---

    /// The configuration file exists but could not be read.
    #[error("config file could not be read at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Feature header ---

    /// The CMake feature file passed as input does not exist.
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// A non-empty, non-comment line is not a valid `option(...)` directive.
    ///
    /// Generation stops at the offending line; whatever was written before
    /// it stays on disk and the header is left without its closing `#endif`.
    #[error("malformed directive at {}:{line}: {reason} (`{content}`)", .path.display())]
    MalformedDirective {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    // --- Filesystem ---

    /// Opening, writing or removing a known output path failed.
    #[error("filesystem error at {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template destination already exists and `force` was not requested.
    #[error("refusing to overwrite existing file: {0} (use --force)")]
    OutputExists(PathBuf),

    // --- Templates ---

    /// A target, module or file name cannot be used in a generated file.
    #[error("invalid target name '{name}': {reason}")]
    InvalidTargetName { name: String, reason: &'static str },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EzgenError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Alias for `Result<T, EzgenError>`.
pub type Result<T> = std::result::Result<T, EzgenError>;
