//! Line classifier for CMake feature-option files.
//!
//! Each line of a feature file is classified independently into a [`LineKind`]:
//!
//! ```text
//! # Feature toggles                                          -> Comment
//! option(ENABLE_EZ_LOGGING    "Enable logging"    OFF)       -> Feature
//!                                                            -> Empty
//! set(FOO bar)                                               -> Malformed(NotAnOption)
//! ```
//!
//! The grammar is intentionally tiny: one `option(...)` per line, the name
//! must carry the `ENABLE_` prefix, the description is a single quoted string
//! and the value is `ON` or `OFF`. Whitespace around the name and before the
//! value is ignored; whitespace inside the description is kept verbatim.

use std::fmt;

use thiserror::Error;

/// Prefix every feature option name must start with. It is dropped from the
/// emitted macro name.
pub const FEATURE_PREFIX: &str = "ENABLE_";

/// The CMake command recognized as a feature directive.
const OPTION_KEYWORD: &str = "option";

/// A parsed `option(ENABLE_<NAME> "<description>" ON|OFF)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDirective {
    /// Macro name with [`FEATURE_PREFIX`] removed.
    pub name: String,
    /// Quoted description, untouched.
    pub description: String,
    pub enabled: bool,
}

impl fmt::Display for FeatureDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#define {} {} /* {} */",
            self.name,
            u8::from(self.enabled),
            self.description
        )
    }
}

/// Why a line could not be read as a feature directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line does not start with `option(`.
    #[error("not an option(...) directive")]
    NotAnOption,
    /// Starts with `option` but is not exactly `option(...)` with nothing after `)`.
    #[error("expected `option(...)` with nothing after the closing parenthesis")]
    BadShape,
    /// The arguments do not hold exactly one quoted description.
    #[error("expected NAME \"description\" VALUE inside the parentheses")]
    BadQuoting,
    #[error("option name does not start with `ENABLE_`")]
    MissingPrefix,
    #[error("option name is empty after removing `ENABLE_`")]
    EmptyName,
    #[error("unsupported value `{0}` (expected ON or OFF)")]
    InvalidValue(String),
}

impl MalformedReason {
    /// True when the line is not an `option` directive at all, as opposed to
    /// a broken one. Only these lines may be skipped by a lenient policy.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::NotAnOption)
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#` comment, with the marker and leading whitespace removed.
    Comment(String),
    Feature(FeatureDirective),
    Empty,
    Malformed(MalformedReason),
}

impl LineKind {
    /// Text this line contributes to the generated header, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Comment(text) => Some(format!("\n/* {text} */\n")),
            Self::Feature(directive) => Some(directive.to_string()),
            Self::Empty | Self::Malformed(_) => None,
        }
    }
}

/// Classify one line of a feature file.
///
/// The line is taken as-is: only the comment text and the name/value tokens
/// are trimmed, as described in the module docs.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Empty;
    }

    if let Some(comment) = line.strip_prefix('#') {
        return LineKind::Comment(comment.trim_start().to_string());
    }

    match parse_directive(line) {
        Ok(directive) => LineKind::Feature(directive),
        Err(reason) => LineKind::Malformed(reason),
    }
}

/// Parse `option(ENABLE_<NAME> "<description>" ON|OFF)`.
pub fn parse_directive(line: &str) -> Result<FeatureDirective, MalformedReason> {
    // "option(ENABLE_X  \"desc\"  ON)" -> ["option", "ENABLE_X  \"desc\"  ON", ""]
    let outer: Vec<&str> = line.split(['(', ')']).collect();
    if outer[0] != OPTION_KEYWORD {
        return Err(MalformedReason::NotAnOption);
    }
    let [_, args, rest] = outer[..] else {
        return Err(MalformedReason::BadShape);
    };
    if !rest.is_empty() {
        return Err(MalformedReason::BadShape);
    }

    // "ENABLE_X  \"desc\"  ON" -> ["ENABLE_X  ", "desc", "  ON"]
    let inner: Vec<&str> = args.split('"').collect();
    let [name_part, description, value_part] = inner[..] else {
        return Err(MalformedReason::BadQuoting);
    };

    let name = name_part
        .trim()
        .strip_prefix(FEATURE_PREFIX)
        .ok_or(MalformedReason::MissingPrefix)?;
    if name.is_empty() {
        return Err(MalformedReason::EmptyName);
    }

    let enabled = match value_part.trim_start() {
        "ON" => true,
        "OFF" => false,
        other => return Err(MalformedReason::InvalidValue(other.to_string())),
    };

    Ok(FeatureDirective {
        name: name.to_string(),
        description: description.to_string(),
        enabled,
    })
}
