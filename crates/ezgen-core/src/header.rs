//! Feature header generation.
//!
//! Turns a CMake feature file into a C header:
//!
//! ```text
//! # Feature toggles                                   #ifndef _EZ_TARGET_CONFIG_H
//! option(ENABLE_EZ_LOGGING "Enable logging" OFF)  ->  #define _EZ_TARGET_CONFIG_H
//!
//!                                                     /* Feature toggles */
//!                                                     #define EZ_LOGGING 0 /* Enable logging */
//!
//!                                                     #endif
//! ```
//!
//! The guard token is `_<STEM>_H` where `STEM` is the upper-cased file stem of
//! the output path.
//!
//! ## Overwrite and abort behavior
//!
//! An existing output file is deleted and recreated on every run, so two runs
//! over the same input produce byte-identical headers. When a malformed line is
//! hit, generation stops right there: the lines before it are already on disk
//! and stay there, but the closing `#endif` is never written and the caller
//! gets [`EzgenError::MalformedDirective`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::UnrecognizedLines;
use crate::error::{EzgenError, Result};
use crate::features::{classify_line, FeatureDirective, LineKind};
use crate::log::{LogSink, TracingSink};

/// Summary of a successful generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Header that was written. Empty for in-memory renders.
    pub output: PathBuf,
    /// Include guard token, e.g. `_EZ_TARGET_CONFIG_H`.
    pub guard: String,
    /// Features in input order.
    pub features: Vec<FeatureDirective>,
    pub comments: usize,
    /// Non-directive lines ignored under [`UnrecognizedLines::Skip`].
    pub skipped: usize,
}

impl GenerationReport {
    pub fn enabled(&self) -> usize {
        self.features.iter().filter(|f| f.enabled).count()
    }

    pub fn disabled(&self) -> usize {
        self.features.len() - self.enabled()
    }
}

/// Include guard token for a header path: `_<UPPER(stem)>_H`.
pub fn guard_name(output: &Path) -> Result<String> {
    let stem = output.file_stem().ok_or_else(|| {
        EzgenError::Other(anyhow::anyhow!(
            "output path has no file name: {}",
            output.display()
        ))
    })?;
    Ok(format!("_{}_H", stem.to_string_lossy().to_uppercase()))
}

/// Generates feature headers, reporting progress through a [`LogSink`].
pub struct HeaderGenerator<L = TracingSink> {
    unrecognized: UnrecognizedLines,
    log: L,
}

impl HeaderGenerator<TracingSink> {
    /// Generator that logs through `tracing` and rejects unrecognized lines.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for HeaderGenerator<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LogSink> HeaderGenerator<L> {
    pub fn with_sink(log: L) -> Self {
        Self {
            unrecognized: UnrecognizedLines::default(),
            log,
        }
    }

    /// Set the policy for lines that are not `option(...)` directives at all.
    pub fn unrecognized_lines(mut self, policy: UnrecognizedLines) -> Self {
        self.unrecognized = policy;
        self
    }

    /// Generate `output` from the feature file at `input`.
    ///
    /// The output's parent directory is created when missing. An existing
    /// output file is replaced.
    pub fn generate(&self, input: &Path, output: &Path) -> Result<GenerationReport> {
        if !input.exists() {
            self.log
                .error(&format!("input path does not exist: {}", input.display()));
            return Err(EzgenError::InputNotFound(input.to_path_buf()));
        }
        self.log.debug(&format!("input = {}", input.display()));
        self.log.debug(&format!("output = {}", output.display()));

        let source =
            std::fs::read_to_string(input).map_err(|e| EzgenError::filesystem(input, e))?;
        let guard = guard_name(output)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EzgenError::filesystem(parent, e))?;
        }
        if output.exists() {
            self.log.warn(&format!(
                "{} exists and will be overwritten",
                output.display()
            ));
            std::fs::remove_file(output).map_err(|e| EzgenError::filesystem(output, e))?;
        }

        let file = File::create(output).map_err(|e| EzgenError::filesystem(output, e))?;
        let mut writer = BufWriter::new(file);
        let mut report = self.write_document(&source, &guard, input, output, &mut writer)?;
        writer
            .flush()
            .map_err(|e| EzgenError::filesystem(output, e))?;

        report.output = output.to_path_buf();
        self.log.info(&format!(
            "generated {} ({} features, {} comments)",
            output.display(),
            report.features.len(),
            report.comments
        ));
        Ok(report)
    }

    /// Render a complete header in memory.
    ///
    /// `origin` is only used to label errors; `stem` picks the guard token.
    pub fn render(
        &self,
        source: &str,
        stem: &str,
        origin: &Path,
    ) -> Result<(String, GenerationReport)> {
        let guard = guard_name(Path::new(stem))?;
        let mut buffer = Vec::new();
        let report = self.write_document(source, &guard, origin, Path::new(stem), &mut buffer)?;
        let text = String::from_utf8(buffer).map_err(|e| EzgenError::Other(e.into()))?;
        Ok((text, report))
    }

    /// Stream the guarded document into `out`. On a malformed line, whatever
    /// was written so far is flushed and the error is returned.
    fn write_document<W: Write>(
        &self,
        source: &str,
        guard: &str,
        origin: &Path,
        dest: &Path,
        out: &mut W,
    ) -> Result<GenerationReport> {
        let io_err = |e: std::io::Error| EzgenError::filesystem(dest, e);
        let mut report = GenerationReport {
            guard: guard.to_string(),
            ..GenerationReport::default()
        };

        write!(out, "#ifndef {guard}\n#define {guard}\n").map_err(io_err)?;

        for (index, line) in source.lines().enumerate() {
            let kind = classify_line(line);
            match &kind {
                LineKind::Empty => {
                    self.log.debug("found an empty line");
                    continue;
                }
                LineKind::Malformed(reason)
                    if reason.is_unrecognized()
                        && self.unrecognized == UnrecognizedLines::Skip =>
                {
                    self.log
                        .warn(&format!("skipping line {}: {line}", index + 1));
                    report.skipped += 1;
                    continue;
                }
                LineKind::Malformed(reason) => {
                    self.log
                        .error(&format!("invalid format at line {}: {reason}", index + 1));
                    out.flush().map_err(io_err)?;
                    return Err(EzgenError::MalformedDirective {
                        path: origin.to_path_buf(),
                        line: index + 1,
                        content: line.to_string(),
                        reason: reason.clone(),
                    });
                }
                LineKind::Comment(_) => report.comments += 1,
                LineKind::Feature(directive) => report.features.push(directive.clone()),
            }

            if let Some(text) = kind.render() {
                self.log.debug(text.trim());
                out.write_all(text.as_bytes()).map_err(io_err)?;
            }
        }

        out.write_all(b"\n#endif\n").map_err(io_err)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::MalformedReason;
    use crate::log::{Level, RecordingSink};

    const EXAMPLE_INPUT: &str = "# Feature toggles\n\
option(ENABLE_EZ_EVENT_NOTIFIER    \"Enable the Event Notifier module\"    ON)\n\
option(ENABLE_EZ_LOGGING    \"Enable logging\"    OFF)\n";

    const EXAMPLE_OUTPUT: &str = "#ifndef _EZ_TARGET_CONFIG_H\n\
#define _EZ_TARGET_CONFIG_H\n\
\n\
/* Feature toggles */\n\
#define EZ_EVENT_NOTIFIER 1 /* Enable the Event Notifier module */\n\
#define EZ_LOGGING 0 /* Enable logging */\n\
\n\
#endif\n";

    fn write_input(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("features.cmake");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_guard_name_uses_upper_stem() {
        assert_eq!(
            guard_name(Path::new("out/ez_target_config.h")).unwrap(),
            "_EZ_TARGET_CONFIG_H"
        );
        assert_eq!(guard_name(Path::new("Config")).unwrap(), "_CONFIG_H");
    }

    #[test]
    fn test_end_to_end_example() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), EXAMPLE_INPUT);
        let output = dir.path().join("ez_target_config.h");

        let report = HeaderGenerator::new().generate(&input, &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), EXAMPLE_OUTPUT);
        assert_eq!(report.output, output);
        assert_eq!(report.guard, "_EZ_TARGET_CONFIG_H");
        assert_eq!(report.comments, 1);
        assert_eq!(report.enabled(), 1);
        assert_eq!(report.disabled(), 1);
    }

    #[test]
    fn test_render_matches_generate() {
        let (text, report) = HeaderGenerator::new()
            .render(EXAMPLE_INPUT, "ez_target_config", Path::new("features.cmake"))
            .unwrap();
        assert_eq!(text, EXAMPLE_OUTPUT);
        assert_eq!(report.features.len(), 2);
        assert_eq!(report.output, PathBuf::new());
    }

    #[test]
    fn test_empty_input_produces_bare_guard() {
        let (text, _) = HeaderGenerator::new()
            .render("", "cfg", Path::new("in"))
            .unwrap();
        assert_eq!(text, "#ifndef _CFG_H\n#define _CFG_H\n\n#endif\n");
    }

    #[test]
    fn test_crlf_input() {
        let (text, _) = HeaderGenerator::new()
            .render("option(ENABLE_A \"a\" ON)\r\n\r\n", "cfg", Path::new("in"))
            .unwrap();
        assert!(text.contains("#define A 1 /* a */\n"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ez_target_config.h");
        let sink = RecordingSink::new();

        let err = HeaderGenerator::with_sink(&sink)
            .generate(&dir.path().join("missing.cmake"), &output)
            .unwrap_err();

        assert!(matches!(err, EzgenError::InputNotFound(_)));
        assert!(!output.exists());
        assert_eq!(sink.messages_at(Level::ERROR).len(), 1);
    }

    #[test]
    fn test_malformed_line_aborts_without_endif() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "option(ENABLE_A \"a\" ON)\noption(ENABLE_X \"desc\" MAYBE)\noption(ENABLE_B \"b\" ON)\n",
        );
        let output = dir.path().join("cfg.h");

        let err = HeaderGenerator::new().generate(&input, &output).unwrap_err();

        match err {
            EzgenError::MalformedDirective {
                line,
                content,
                reason,
                path,
            } => {
                assert_eq!(line, 2);
                assert_eq!(content, "option(ENABLE_X \"desc\" MAYBE)");
                assert_eq!(reason, MalformedReason::InvalidValue("MAYBE".into()));
                assert_eq!(path, input);
            }
            other => panic!("unexpected error: {other}"),
        }

        let partial = std::fs::read_to_string(&output).unwrap();
        assert_eq!(partial, "#ifndef _CFG_H\n#define _CFG_H\n#define A 1 /* a */\n");
        assert!(!partial.contains("#endif"));
    }

    #[test]
    fn test_missing_prefix_is_malformed() {
        let err = HeaderGenerator::new()
            .render("option(EZ_LOGGING \"desc\" ON)", "cfg", Path::new("in"))
            .unwrap_err();
        assert!(matches!(
            err,
            EzgenError::MalformedDirective {
                reason: MalformedReason::MissingPrefix,
                ..
            }
        ));
    }

    #[test]
    fn test_unrecognized_lines_rejected_by_default() {
        let err = HeaderGenerator::new()
            .render("cmake_minimum_required(VERSION 3.20)", "cfg", Path::new("in"))
            .unwrap_err();
        assert!(matches!(
            err,
            EzgenError::MalformedDirective {
                line: 1,
                reason: MalformedReason::NotAnOption,
                ..
            }
        ));
    }

    #[test]
    fn test_unrecognized_lines_skipped_when_lenient() {
        let sink = RecordingSink::new();
        let (text, report) = HeaderGenerator::with_sink(&sink)
            .unrecognized_lines(UnrecognizedLines::Skip)
            .render(
                "cmake_minimum_required(VERSION 3.20)\noption(ENABLE_A \"a\" OFF)\n",
                "cfg",
                Path::new("in"),
            )
            .unwrap();

        assert_eq!(report.skipped, 1);
        assert!(text.contains("#define A 0 /* a */\n"));
        assert_eq!(sink.messages_at(Level::WARN).len(), 1);
    }

    #[test]
    fn test_broken_option_aborts_even_when_lenient() {
        let err = HeaderGenerator::new()
            .unrecognized_lines(UnrecognizedLines::Skip)
            .render("option(ENABLE_A \"a\" ON) trailing", "cfg", Path::new("in"))
            .unwrap_err();
        assert!(matches!(
            err,
            EzgenError::MalformedDirective {
                reason: MalformedReason::BadShape,
                ..
            }
        ));
    }

    #[test]
    fn test_existing_output_is_overwritten_and_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), EXAMPLE_INPUT);
        let output = dir.path().join("ez_target_config.h");
        let stale = "stale contents that are longer than the header itself\n".repeat(50);
        std::fs::write(&output, stale).unwrap();

        let sink = RecordingSink::new();
        HeaderGenerator::with_sink(&sink)
            .generate(&input, &output)
            .unwrap();
        let first = std::fs::read(&output).unwrap();
        assert!(sink
            .messages_at(Level::WARN)
            .iter()
            .any(|m| m.contains("overwritten")));

        HeaderGenerator::new().generate(&input, &output).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, EXAMPLE_OUTPUT.as_bytes());
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), EXAMPLE_INPUT);
        let output = dir.path().join("build/generated/ez_target_config.h");

        HeaderGenerator::new().generate(&input, &output).unwrap();
        assert!(output.exists());
    }
}
