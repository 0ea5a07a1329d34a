//! Line-oriented text buffer used by the declaration renderer.

use csgen_common::NewLineKind;

/// Growable output buffer that terminates lines with a fixed newline kind.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    output: String,
    new_line: &'static str,
}

impl SourceWriter {
    pub fn new(new_line: NewLineKind) -> Self {
        Self {
            output: String::new(),
            new_line: new_line.as_str(),
        }
    }

    /// Write text without a line terminator.
    #[inline]
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Write a line terminator.
    #[inline]
    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line);
    }

    /// Write text followed by a line terminator.
    pub fn write_text_line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}
