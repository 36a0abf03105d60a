//! Console colors for CLI output
//!
//! Plain ANSI escape codes; all coloring is disabled when `NO_COLOR` is set
//! so output stays stable in scripts and snapshot tests.

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray color (ANSI 37) - used for descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for success
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow color (ANSI 33) - used for skipped files
    pub const YELLOW: &str = "\x1b[33m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// CLI theme; renders plain text when coloring is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(ansi::YELLOW, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }
}

/// Theme for the current process, honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    Theme::new(std::env::var_os("NO_COLOR").is_none())
}
