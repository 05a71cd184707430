//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips these colours when stdout
//! is not a terminal.

use owo_colors::OwoColorize;

/// Check mark printed before successful results
pub const CHECK: &str = "✓";

/// Cross printed before failures
pub const CROSS: &str = "✗";

/// Styling shortcuts for CLI messages
pub trait Stylize {
    /// Highlight a value such as a branch name or URL
    fn emphasis(&self) -> String;
    /// De-emphasized secondary text
    fn muted(&self) -> String;
    /// Failure text
    fn error(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn error(&self) -> String {
        self.red().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Red cross
pub fn cross() -> String {
    CROSS.red().to_string()
}
