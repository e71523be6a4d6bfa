//! Terminal output for the ezgen CLI.
//!
//! Status lines go to stdout and errors to stderr, styled with [`console`].
//! Tracing output and headers printed with `--stdout` bypass this module.

use std::path::Path;

use console::style;

/// Print the command title, e.g. `ezgen component: ez_queue`, over a rule.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("-".repeat(text.chars().count())).dim());
}

pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print one indented `key: value` setting line.
pub fn print_setting(key: &str, value: &str) {
    println!("  {:<12} {}", style(format!("{key}:")).dim(), value);
}

/// Like [`print_setting`] for a path value.
pub fn print_path(key: &str, path: &Path) {
    print_setting(key, &path.display().to_string());
}

/// Print a `+ <path>` line for a file that was just written.
pub fn print_created(path: &Path) {
    println!("  {} {}", style("+").green(), path.display());
}
