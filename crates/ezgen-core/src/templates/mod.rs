//! Template system for easy-embedded file scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! Generators:
//! - [`cmake`]: `CMakeLists.txt` for a library, executable or unit-test target
//! - [`component`]: `<name>.h` / `<name>.c` pair with doxygen skeletons
//! - [`unittest`]: `unittest_<module>.c` with Unity fixture boilerplate
//!
//! ## Template variables
//!
//! Every file starts with a banner rendered from [`Banner`]:
//! - `{{author}}`: author written into the banner
//! - `{{date}}`: generation date, `dd.mm.YYYY`
//!
//! Generator-specific variables (`{{name}}`, `{{module}}`, `{{guard}}`, ...) are listed
//! in each generator module.
//!
//! ## Existing files
//!
//! Generators never append to an existing file. Without `force` they fail with
//! [`EzgenError::OutputExists`]; with `force` the file is truncated and rewritten.
//! Multi-file generators check every destination before writing any of them.

pub mod cmake;
pub mod component;
pub mod embedded;
pub mod renderer;
pub mod unittest;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{EzgenError, Result};

/// Date format used in banners.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Author and date stamped at the top of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub author: String,
    pub date: String,
}

impl Banner {
    /// Banner dated today (local time).
    pub fn new(author: impl Into<String>) -> Self {
        let date = chrono::Local::now().format(DATE_FORMAT).to_string();
        Self::with_date(author, date)
    }

    pub fn with_date(author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
        }
    }

    /// Merge the banner fields into a template data object.
    pub(crate) fn extend(&self, mut data: Value) -> Value {
        if let Value::Object(map) = &mut data {
            map.insert("author".into(), Value::String(self.author.clone()));
            map.insert("date".into(), Value::String(self.date.clone()));
        }
        data
    }
}

/// Check that a target, module or file name can be pasted into CMake and C.
///
/// Special characters beyond these are not checked; CMake and the compiler
/// reject them soon enough.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else if name.contains('-') {
        "name contains '-'"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else {
        return Ok(());
    };

    Err(EzgenError::InvalidTargetName {
        name: name.to_string(),
        reason,
    })
}

/// Fail with [`EzgenError::OutputExists`] if any path exists and `force` is off.
pub(crate) fn ensure_writable(paths: &[PathBuf], force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    match paths.iter().find(|p| p.exists()) {
        Some(existing) => Err(EzgenError::OutputExists(existing.clone())),
        None => Ok(()),
    }
}

/// Write a rendered file, creating the destination directory if needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EzgenError::filesystem(parent, e))?;
    }
    if path.exists() {
        tracing::warn!("overwriting {}", path.display());
    }
    std::fs::write(path, contents).map_err(|e| EzgenError::filesystem(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
