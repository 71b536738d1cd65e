//! Status message functions for terminal output.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".if_supports_color(owo_colors::Stream::Stderr, |t| t.green()), message);
}

/// Print a warning message to stderr.
///
/// An empty message prints a blank line.
pub fn warning(message: &str) {
    if message.is_empty() {
        eprintln!();
        return;
    }
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(owo_colors::Stream::Stderr, |t| t.yellow()),
        message.if_supports_color(owo_colors::Stream::Stderr, |t| t.yellow())
    );
}
