//! Core library for the ezgen toolkit.
//!
//! Provides the code generators used while developing easy-embedded projects:
//!
//! - [`header`]: turns a CMake feature-option file into a C feature header
//!   (`ez_target_config.h`), built on the line classifier in [`features`]
//! - [`templates`]: CMake, C component and Unity test scaffolding rendered from
//!   embedded Handlebars templates
//!
//! along with shared infrastructure: configuration loading ([`config`]), the error
//! taxonomy ([`error`]) and the logging capability handed to generators ([`log`]).
//!
//! The library never terminates the process and never installs a global logger;
//! both decisions belong to the binary.

pub mod config;
pub mod error;
pub mod features;
pub mod header;
pub mod log;
pub mod templates;
