// Rust guideline compliant 2026-10-12

//! Terminal UI utilities for the Glowbook CLI.
//!
//! This module provides color support, terminal width detection,
//! and status-line printing.

use glowbook_core::{BookingStatus, StatusColor, StatusPalette};
use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation of continuation lines (in spaces)
pub fn wrap_text(text: &str, indent: usize) -> String {
    let available_width = get_terminal_width().saturating_sub(indent);
    if available_width < 10 {
        return text.to_string();
    }

    let indent_str = " ".repeat(indent);
    let mut lines = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > available_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines.join(&format!("\n{}", indent_str))
}

/// Terminal colors for booking statuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPalette;

impl TerminalPalette {
    /// Maps a semantic status color to a terminal color.
    pub fn terminal_color(color: StatusColor) -> Option<Color> {
        match color {
            StatusColor::Warning => Some(Color::Yellow),
            StatusColor::Primary => Some(Color::Blue),
            StatusColor::Success => Some(Color::Green),
            StatusColor::Error => Some(Color::Red),
            StatusColor::Neutral => None,
        }
    }

    /// Renders `status` with its color when `use_color` is set.
    pub fn paint_status(&self, status: BookingStatus, use_color: bool) -> String {
        let color = Self::terminal_color(glowbook_core::DefaultPalette.color(status));
        paint(status.as_str(), color, false, use_color)
    }
}

/// Renders `text` with ANSI color codes when `use_color` is set.
pub fn paint(text: &str, color: Option<Color>, bold: bool, use_color: bool) -> String {
    if !use_color || (color.is_none() && !bold) {
        return text.to_string();
    }
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(color).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Prints a status message with a colored prefix to stderr.
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{} ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    print_status("✗", Color::Red, message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}
