//! `CMakeLists.txt` scaffolding for framework targets.
//!
//! The target is named `<name>_<suffix>` where the suffix depends on the
//! [`CmakeTarget`] kind: `lib`, `exec` or `test`.
//!
//! Template variables: `{{name}}`, `{{suffix}}`, plus the banner fields.

use std::path::{Path, PathBuf};

use serde_json::json;

use super::embedded;
use super::renderer::TemplateRenderer;
use super::{ensure_writable, validate_name, write_file, Banner};
use crate::error::Result;

/// File written into the destination directory.
pub const CMAKE_FILE: &str = "CMakeLists.txt";

/// Kind of CMake target to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmakeTarget {
    /// `add_library(<name>_lib STATIC)` exporting the current directory.
    Library,
    /// `add_executable(<name>_exec)` linked against the framework library.
    Executable,
    /// `add_executable(<name>_test)` built from `unittest_<name>.c`, linked
    /// against Unity and registered with `add_test`.
    Test,
}

impl CmakeTarget {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Library => "lib",
            Self::Executable => "exec",
            Self::Test => "test",
        }
    }

    fn body_template(&self) -> &'static str {
        match self {
            Self::Library => embedded::CMAKE_LIBRARY,
            Self::Executable => embedded::CMAKE_EXECUTABLE,
            Self::Test => embedded::CMAKE_TEST,
        }
    }
}

/// Render the full `CMakeLists.txt` for a target.
pub fn render(
    renderer: &TemplateRenderer,
    target: CmakeTarget,
    name: &str,
    banner: &Banner,
) -> Result<String> {
    validate_name(name)?;
    let data = banner.extend(json!({
        "name": name,
        "suffix": target.suffix(),
    }));

    let mut out = renderer.render(embedded::CMAKE_BANNER, &data)?;
    out.push_str(&renderer.render(target.body_template(), &data)?);
    Ok(out)
}

/// Write `<destination>/CMakeLists.txt` for a target and return its path.
pub fn generate(
    target: CmakeTarget,
    name: &str,
    banner: &Banner,
    destination: &Path,
    force: bool,
) -> Result<PathBuf> {
    tracing::info!("generating cmake for {} target {name}", target.suffix());
    let contents = render(&TemplateRenderer::new(), target, name, banner)?;

    let path = destination.join(CMAKE_FILE);
    ensure_writable(std::slice::from_ref(&path), force)?;
    write_file(&path, &contents)?;
    Ok(path)
}
