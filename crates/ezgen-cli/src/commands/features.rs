use std::path::Path;

use anyhow::Result;

use ezgen_core::config::{EzgenConfig, UnrecognizedLines};
use ezgen_core::error::EzgenError;
use ezgen_core::header::HeaderGenerator;

use crate::output;

/// Generate the feature header from a CMake option file.
///
/// The header is written to `<output_dir>/<file_name>`, replacing any existing
/// file. With `to_stdout` nothing is written to disk and the header is printed
/// instead. A malformed line aborts the run with a non-zero exit code; the
/// header written so far is left on disk without its closing `#endif`.
pub fn run(
    config: &EzgenConfig,
    cmake_file: &Path,
    output_dir: Option<&Path>,
    file_name: Option<&str>,
    skip_unrecognized: bool,
    to_stdout: bool,
) -> Result<()> {
    if !cmake_file.exists() {
        output::print_error(&format!("Path does not exist: {}", cmake_file.display()));
        return Err(EzgenError::InputNotFound(cmake_file.to_path_buf()).into());
    }

    let file_name = file_name.unwrap_or(&config.header_file_name);
    let policy = if skip_unrecognized {
        UnrecognizedLines::Skip
    } else {
        config.unrecognized_lines
    };
    tracing::debug!(file_name, ?policy, "resolved header settings");
    let generator = HeaderGenerator::new().unrecognized_lines(policy);

    if to_stdout {
        let source = std::fs::read_to_string(cmake_file)
            .map_err(|e| EzgenError::filesystem(cmake_file, e))?;
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let (text, _) = generator.render(&source, &stem, cmake_file)?;
        print!("{text}");
        return Ok(());
    }

    let Some(output_dir) = output_dir else {
        anyhow::bail!("--output is required unless --stdout is given");
    };
    let header_path = output_dir.join(file_name);

    output::print_header("ezgen features");
    output::print_path("Input", cmake_file);
    output::print_path("Output", &header_path);

    let report = match generator.generate(cmake_file, &header_path) {
        Ok(report) => report,
        Err(err @ EzgenError::MalformedDirective { .. }) => {
            output::print_error("Invalid format, header left incomplete");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    output::print_success(&format!(
        "Generated {} ({} enabled, {} disabled)",
        report.output.display(),
        report.enabled(),
        report.disabled()
    ));
    if report.skipped > 0 {
        output::print_warning(&format!("Skipped {} unrecognized line(s)", report.skipped));
    }

    Ok(())
}
