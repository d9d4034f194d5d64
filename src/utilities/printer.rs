//! Console printer with ANSI color support for user-facing status lines.

/// Colors used for printed status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterColor {
    Green,
    Yellow,
    Cyan,
    BoldRed,
    BoldGreen,
    BoldYellow,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Cyan => "\x1b[36m",
            Self::BoldRed => "\x1b[1;31m",
            Self::BoldGreen => "\x1b[1;32m",
            Self::BoldYellow => "\x1b[1;33m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// Printer for console output with color support.
#[derive(Debug, Clone, Default)]
pub struct Printer;

impl Printer {
    /// Create a new `Printer`.
    pub fn new() -> Self {
        Self
    }

    /// Print a message with the specified color.
    pub fn print(&self, content: &str, color: PrinterColor) {
        println!("{}{}{}", color.ansi_code(), content, RESET);
    }

    /// Print a plain uncolored message.
    pub fn print_plain(&self, content: &str) {
        println!("{}", content);
    }
}
