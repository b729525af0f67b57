//! Indentation-aware output buffer.

use tsgen_common::NewLineKind;

/// Accumulates emitted text.
///
/// Indentation is written lazily by the first `write` on each line, so blank
/// lines never carry trailing whitespace.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_unit: String,
    new_line: &'static str,
    indent_level: u32,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(indent_unit: impl Into<String>, new_line: NewLineKind) -> Self {
        SourceWriter {
            output: String::new(),
            indent_unit: indent_unit.into(),
            new_line: new_line.as_str(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Write `text` as is, without indenting a fresh line.
    pub fn write_verbatim(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.output.push_str(text);
        self.at_line_start = false;
    }

    pub fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write(ch.encode_utf8(&mut buf));
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line);
        self.at_line_start = true;
    }

    /// End the current line unless nothing has been written on it.
    pub fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod tests;
