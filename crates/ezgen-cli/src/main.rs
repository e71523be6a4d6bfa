//! ezgen CLI: code generators for easy-embedded C projects.
//!
//! Provides four commands:
//! `features` (CMake feature options to a C header), `cmake`, `component`
//! and `unittest` (boilerplate scaffolding).
//!
//! Each command delegates to [`ezgen_core`]; this crate only parses arguments,
//! installs the tracing subscriber and decides the exit code.

mod commands;
mod output;

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use ezgen_core::config::EzgenConfig;

#[derive(Parser)]
#[command(
    name = "ezgen",
    about = "Code generators for easy-embedded projects: feature headers, CMake, components, unit tests",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to ezgen.config.json (default: ./ezgen.config.json, optional)
    #[arg(long, global = true, default_value = ezgen_core::config::CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the feature header from a CMake option file
    Features {
        /// CMake file holding option(ENABLE_<NAME> "<description>" ON|OFF) lines
        #[arg(short = 'f', long = "cmake-file", visible_alias = "cmake_file")]
        cmake_file: PathBuf,

        /// Directory the header is written into
        #[arg(short, long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Header file name (default: ez_target_config.h)
        #[arg(long)]
        file_name: Option<String>,

        /// Ignore lines that are not option(...) directives instead of failing
        #[arg(long)]
        skip_unrecognized: bool,

        /// Print the header to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Generate a CMakeLists.txt for a library, executable or unit test
    #[command(group(
        ArgGroup::new("kind")
            .required(true)
            .args(["library", "executable", "test"])
    ))]
    Cmake {
        /// Name of the author written into the banner
        #[arg(short, long)]
        author: Option<String>,

        /// Directory the CMakeLists.txt is written into
        #[arg(short, long)]
        destination: PathBuf,

        /// Name of the library or executable
        #[arg(short, long)]
        name: String,

        /// The target is a library
        #[arg(short, long)]
        library: bool,

        /// The target is an executable
        #[arg(short, long)]
        executable: bool,

        /// The target is a unit test
        #[arg(short, long)]
        test: bool,

        /// Overwrite an existing CMakeLists.txt
        #[arg(long)]
        force: bool,
    },

    /// Generate a C header and source file pair
    Component {
        /// Name of the header and source file without .h or .c
        #[arg(short, long)]
        filename: String,

        /// Name of the author written into the banner
        #[arg(short, long)]
        author: Option<String>,

        /// Directory the files are written into
        #[arg(short, long)]
        destination: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate a Unity unit test skeleton for a module
    Unittest {
        /// Name of the module under test
        #[arg(short, long)]
        module: String,

        /// Name of the author written into the banner
        #[arg(short, long)]
        author: Option<String>,

        /// Directory the test is written into
        #[arg(short, long)]
        destination: PathBuf,

        /// Overwrite an existing test file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EzgenConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Features {
            cmake_file,
            output,
            file_name,
            skip_unrecognized,
            stdout,
        } => {
            commands::features::run(
                &config,
                &cmake_file,
                output.as_deref(),
                file_name.as_deref(),
                skip_unrecognized,
                stdout,
            )?;
        }
        Commands::Cmake {
            author,
            destination,
            name,
            library,
            executable,
            test: _,
            force,
        } => {
            let target = commands::cmake::target_from_flags(library, executable);
            commands::cmake::run(
                &config,
                author.as_deref(),
                &destination,
                &name,
                target,
                force,
            )?;
        }
        Commands::Component {
            filename,
            author,
            destination,
            force,
        } => {
            commands::component::run(
                &config,
                &filename,
                author.as_deref(),
                &destination,
                force,
            )?;
        }
        Commands::Unittest {
            module,
            author,
            destination,
            force,
        } => {
            commands::unittest::run(
                &config,
                &module,
                author.as_deref(),
                &destination,
                force,
            )?;
        }
    }

    Ok(())
}
