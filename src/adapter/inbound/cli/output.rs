//! Terminal output helpers shared by CLI handlers.
//!
//! Symbols and labels are styled only when stdout supports color, so piped
//! output stays plain.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

fn section_line(title: &str) -> String {
    format!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()))
}

fn field_line(label: &str, value: &str) -> String {
    format!(
        "  {:<14} {value}",
        label.if_supports_color(Stream::Stdout, |l| l.dimmed())
    )
}

fn success_line(message: &str) -> String {
    format!(
        "  {} {message}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )
}

fn warning_line(message: &str) -> String {
    format!(
        "  {} {message}",
        "⚠".if_supports_color(Stream::Stdout, |s| s.yellow())
    )
}

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", section_line(title));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("{}", field_line(label, &value.to_string()));
}

/// Print a success line.
pub fn success(message: &str) {
    println!("{}", success_line(message));
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("{}", warning_line(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_line_keeps_label_and_value() {
        let line = field_line("Database", "storekeep.db");
        assert!(line.starts_with("  "));
        assert!(line.contains("Database"));
        assert!(line.ends_with("storekeep.db"));
    }

    #[test]
    fn status_lines_carry_symbols() {
        assert!(success_line("Fixtures loaded").contains('✓'));
        assert!(success_line("Fixtures loaded").ends_with("Fixtures loaded"));
        assert!(warning_line("not persisted").contains('⚠'));
    }

    #[test]
    fn section_line_contains_title() {
        assert!(section_line("Summary").contains("Summary"));
    }
}
