//! C component scaffolding: a `<name>.h` / `<name>.c` pair.
//!
//! The header is wrapped in a `_<NAME>_H` include guard and its contents are
//! compiled only when `<NAME>_ENABLE == 1`, which is the macro the feature
//! header generator emits for `option(ENABLE_<NAME> ...)`.
//!
//! Template variables: `{{module}}`, `{{guard}}` (upper-cased module),
//! `{{file_name}}` (banner only), plus the banner fields.

use std::path::{Path, PathBuf};

use serde_json::json;

use super::embedded;
use super::renderer::TemplateRenderer;
use super::{ensure_writable, validate_name, write_file, Banner};
use crate::error::Result;

/// Rendered header and source of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFiles {
    pub header: String,
    pub source: String,
}

/// Render `<name>.h` and `<name>.c`.
pub fn render(
    renderer: &TemplateRenderer,
    name: &str,
    banner: &Banner,
) -> Result<ComponentFiles> {
    validate_name(name)?;

    let render_file = |extension: &str, body: &str| -> Result<String> {
        let data = banner.extend(json!({
            "file_name": format!("{name}.{extension}"),
            "module": name,
            "guard": name.to_uppercase(),
        }));
        let mut out = renderer.render(embedded::C_BANNER, &data)?;
        out.push_str(&renderer.render(body, &data)?);
        Ok(out)
    };

    Ok(ComponentFiles {
        header: render_file("h", embedded::COMPONENT_HEADER)?,
        source: render_file("c", embedded::COMPONENT_SOURCE)?,
    })
}

/// Write `<destination>/<name>.h` and `<destination>/<name>.c`.
///
/// Both destinations are checked before either file is written.
pub fn generate(
    name: &str,
    banner: &Banner,
    destination: &Path,
    force: bool,
) -> Result<Vec<PathBuf>> {
    tracing::info!("generating component {name}");
    let files = render(&TemplateRenderer::new(), name, banner)?;

    let header_path = destination.join(format!("{name}.h"));
    let source_path = destination.join(format!("{name}.c"));
    let paths = vec![header_path, source_path];
    ensure_writable(&paths, force)?;

    write_file(&paths[0], &files.header)?;
    write_file(&paths[1], &files.source)?;
    Ok(paths)
}
