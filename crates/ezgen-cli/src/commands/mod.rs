//! CLI command implementations for ezgen.
//!
//! Each module corresponds to a subcommand (`ezgen <command>`).

pub mod cmake;
pub mod component;
pub mod features;
pub mod unittest;

use anyhow::Result;

use ezgen_core::config::EzgenConfig;
use ezgen_core::templates::Banner;

/// Banner for template commands. `--author` wins over the config file.
pub fn banner(config: &EzgenConfig, author: Option<&str>) -> Result<Banner> {
    let author = author
        .map(str::to_string)
        .or_else(|| config.author.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no author given: pass --author or set \"author\" in the config file")
        })?;
    Ok(Banner::new(author))
}
