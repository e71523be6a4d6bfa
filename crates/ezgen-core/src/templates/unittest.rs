//! Unity test scaffolding: `unittest_<module>.c`.
//!
//! Produces a `TEST_GROUP(<module>)` with empty setup/teardown, a group
//! runner and one placeholder test, wired into `UnityMain`. The matching
//! CMake target is [`CmakeTarget::Test`](super::cmake::CmakeTarget::Test).

use std::path::{Path, PathBuf};

use serde_json::json;

use super::embedded;
use super::renderer::TemplateRenderer;
use super::{ensure_writable, validate_name, write_file, Banner};
use crate::error::Result;

/// File name of the test source for a module.
pub fn file_name(module: &str) -> String {
    format!("unittest_{module}.c")
}

pub fn render(renderer: &TemplateRenderer, module: &str, banner: &Banner) -> Result<String> {
    validate_name(module)?;
    let data = banner.extend(json!({
        "file_name": file_name(module),
        "module": module,
    }));
    let mut out = renderer.render(embedded::C_BANNER, &data)?;
    out.push_str(&renderer.render(embedded::UNITTEST_SOURCE, &data)?);
    Ok(out)
}

/// Write `<destination>/unittest_<module>.c` and return its path.
pub fn generate(
    module: &str,
    banner: &Banner,
    destination: &Path,
    force: bool,
) -> Result<PathBuf> {
    tracing::info!("generating unit test for {module}");
    let contents = render(&TemplateRenderer::new(), module, banner)?;

    let path = destination.join(file_name(module));
    ensure_writable(std::slice::from_ref(&path), force)?;
    write_file(&path, &contents)?;
    Ok(path)
}
