//! Styled terminal output.

use std::fmt::Display;

use authwindow_business::{Level, MatchIndicator, Notification};
use console::{Term, style};

/// Writes prefixed, styled lines to stdout. Write errors are ignored.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, line: &str) {
        drop(self.term.write_line(line));
    }

    /// Green checkmark.
    pub fn success(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("✓").green().bold()));
    }

    /// Red cross.
    pub fn error(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("✗").red().bold()));
    }

    pub fn warning(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("⚠").yellow().bold()));
    }

    pub fn info(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("ℹ").blue().bold()));
    }

    pub fn header(&self, message: impl Display) {
        self.line(&style(message).bold().cyan().to_string());
    }

    pub fn dim(&self, message: impl Display) {
        self.line(&style(message).dim().to_string());
    }

    pub fn newline(&self) {
        self.line("");
    }

    /// One notification, every line of a multi-line message under the same
    /// marker.
    pub fn notification(&self, notification: &Notification) {
        let mut lines = notification.text.lines();
        let first = lines.next().unwrap_or_default();
        match notification.level {
            Level::Success => self.success(first),
            Level::Error => self.error(first),
        }
        for rest in lines {
            self.line(&format!("  {rest}"));
        }
    }

    /// Label under the confirmation prompt; nothing while hidden.
    pub fn match_indicator(&self, indicator: MatchIndicator) {
        let Some(label) = indicator.label() else {
            return;
        };
        match indicator {
            MatchIndicator::Match => self.line(&style(label).green().to_string()),
            MatchIndicator::Mismatch | MatchIndicator::Hidden => {
                self.line(&style(label).red().to_string());
            }
        }
    }
}
