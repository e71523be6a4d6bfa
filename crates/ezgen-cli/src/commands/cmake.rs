use std::path::Path;

use anyhow::Result;

use ezgen_core::config::EzgenConfig;
use ezgen_core::templates::cmake::{self, CmakeTarget};

use crate::output;

/// Map the mutually exclusive `--library/--executable/--test` flags.
///
/// clap guarantees exactly one of them is set.
pub fn target_from_flags(library: bool, executable: bool) -> CmakeTarget {
    if library {
        CmakeTarget::Library
    } else if executable {
        CmakeTarget::Executable
    } else {
        CmakeTarget::Test
    }
}

/// Generate `<destination>/CMakeLists.txt` for a framework target.
pub fn run(
    config: &EzgenConfig,
    author: Option<&str>,
    destination: &Path,
    name: &str,
    target: CmakeTarget,
    force: bool,
) -> Result<()> {
    output::print_header(&format!("ezgen cmake: {name}_{}", target.suffix()));
    let banner = super::banner(config, author)?;
    output::print_setting("Author", &banner.author);
    output::print_path("Destination", destination);

    let path = cmake::generate(target, name, &banner, destination, force)?;

    output::print_created(&path);
    output::print_success("CMakeLists.txt created");
    Ok(())
}
