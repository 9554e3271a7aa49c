//! Formatting helpers for generated code and debug dumps.

use std::fmt;

/// A simple indent-tracking writer for emitted text.
#[derive(Debug)]
pub struct CodeFormatter {
    output: String,
    indent_level: usize,
    indent_str: String,
    at_line_start: bool,
}

impl CodeFormatter {
    /// Create a new formatter with the given indent string.
    pub fn new(indent_str: &str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: indent_str.to_string(),
            at_line_start: true,
        }
    }

    /// Create a formatter with the default two-space indent.
    pub fn default_indent() -> Self {
        Self::new("  ")
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write text, indenting at the start of each line.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.output.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    for _ in 0..self.indent_level {
                        self.output.push_str(&self.indent_str);
                    }
                    self.at_line_start = false;
                }
                self.output.push(c);
            }
        }
    }

    /// Write a line.
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.write("\n");
    }

    /// Get the formatted output.
    pub fn finish(self) -> String {
        self.output
    }
}

impl fmt::Write for CodeFormatter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
