//! Verbose console logger with timestamps.

use chrono::Local;

use crate::utilities::printer::{Printer, PrinterColor};

/// Logger with optional verbose output and timestamps.
///
/// Status lines the tool always prints go through [`Printer`] directly; this
/// logger carries the extra detail emitted only under `--verbose`.
#[derive(Debug, Clone)]
pub struct Logger {
    /// Enables verbose logging with timestamps.
    pub verbose: bool,
    /// Default color for log messages.
    pub default_color: PrinterColor,
    printer: Printer,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Logger {
    /// Create a new `Logger`.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            default_color: PrinterColor::BoldYellow,
            printer: Printer::default(),
        }
    }

    /// Log a message with timestamp if verbose mode is enabled.
    ///
    /// # Arguments
    /// * `level` - The log level (e.g., "info", "warning", "error").
    /// * `message` - The message to log.
    /// * `color` - Optional color override for the message.
    pub fn log(&self, level: &str, message: &str, color: Option<PrinterColor>) {
        if self.verbose {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let color = color.unwrap_or(self.default_color);
            let formatted = format!("[{}][{}]: {}", timestamp, level.to_uppercase(), message);
            self.printer.print(&formatted, color);
        }
    }
}
