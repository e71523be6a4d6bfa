use std::path::Path;

use anyhow::Result;

use ezgen_core::config::EzgenConfig;
use ezgen_core::templates::component;

use crate::output;

/// Generate a `<filename>.h` / `<filename>.c` component pair.
pub fn run(
    config: &EzgenConfig,
    filename: &str,
    author: Option<&str>,
    destination: &Path,
    force: bool,
) -> Result<()> {
    output::print_header(&format!("ezgen component: {filename}"));
    let banner = super::banner(config, author)?;
    output::print_setting("Author", &banner.author);
    output::print_path("Destination", destination);

    let paths = component::generate(filename, &banner, destination, force)?;

    for path in &paths {
        output::print_created(path);
    }
    output::print_success(&format!("Component '{filename}' created"));
    Ok(())
}
