use std::path::Path;

use anyhow::Result;

use ezgen_core::config::EzgenConfig;
use ezgen_core::templates::unittest;

use crate::output;

/// Generate `unittest_<module>.c` for a module.
pub fn run(
    config: &EzgenConfig,
    module: &str,
    author: Option<&str>,
    destination: &Path,
    force: bool,
) -> Result<()> {
    output::print_header(&format!("ezgen unittest: {module}"));
    let banner = super::banner(config, author)?;
    output::print_setting("Author", &banner.author);
    output::print_path("Destination", destination);

    let path = unittest::generate(module, &banner, destination, force)?;

    output::print_created(&path);
    output::print_success(&format!("Unit test for '{module}' created"));
    println!();
    println!("  Next steps:");
    println!(
        "    ezgen cmake --test --name {module} --author \"{}\" --destination {}",
        banner.author,
        destination.display()
    );
    println!();
    Ok(())
}
