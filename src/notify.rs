//! User-facing notifications, the CLI stand-in for toast messages.

use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Prints a severity-tagged message. Errors go to stderr.
pub fn notify(severity: Severity, message: &str) {
    match severity {
        Severity::Success => println!("{} {message}", style("✔").green().bold()),
        Severity::Error => eprintln!("{} {message}", style("✖").red().bold()),
    }
}
