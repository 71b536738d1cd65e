//! Terminal status messages.
//!
//! Everything here writes to stderr so that stdout carries only the JSON
//! produced by a command.
//!
//! ```no_run
//! use weft_cli::ui;
//!
//! ui::success("Wrote graph.json");
//! ui::warning("No weft.toml found");
//! ```

mod messages;

pub use messages::{success, warning};

/// Check if color output should be enabled for status messages.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Applies `--no-color` and the environment to every later message.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
