#![forbid(unsafe_code)]

//! Greedy word wrapping over grapheme clusters.
//!
//! # Invariants
//!
//! 1. No returned line is wider than `max_columns` unless a single grapheme
//!    is wider than the limit (it then occupies a line of its own).
//! 2. Hard line breaks (`\n`) always start a new line; an empty paragraph
//!    still yields one (empty) line.
//! 3. Whitespace at a soft break is dropped, never carried to the next line.
//! 4. Empty input yields no lines.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One wrapped line and its display width in columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub columns: usize,
}

impl WrappedLine {
    fn new() -> Self {
        Self {
            text: String::new(),
            columns: 0,
        }
    }

    fn push(&mut self, chunk: &str, width: usize) {
        self.text.push_str(chunk);
        self.columns += width;
    }

    fn trim_end(&mut self) {
        let trimmed = self.text.trim_end().len();
        if trimmed != self.text.len() {
            self.text.truncate(trimmed);
            self.columns = UnicodeWidthStr::width(self.text.as_str());
        }
    }
}

/// Wrap `text` into lines of at most `max_columns` display columns.
///
/// A `max_columns` of zero is treated as one.
#[must_use]
pub fn wrap(text: &str, max_columns: usize) -> Vec<WrappedLine> {
    let max_columns = max_columns.max(1);
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, max_columns, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_columns: usize, lines: &mut Vec<WrappedLine>) {
    let mut line = WrappedLine::new();
    let first_line = lines.len();

    for word in paragraph.split_word_bounds() {
        let width = UnicodeWidthStr::width(word);
        let is_space = word.chars().all(char::is_whitespace);

        if line.columns + width <= max_columns {
            // Indentation survives only on the paragraph's first line.
            let wrapped_indent = is_space && line.text.is_empty() && lines.len() > first_line;
            if !wrapped_indent {
                line.push(word, width);
            }
            continue;
        }

        if is_space {
            // Soft break: the space is consumed by the break.
            if line.columns > 0 {
                line.trim_end();
                lines.push(std::mem::replace(&mut line, WrappedLine::new()));
            }
            continue;
        }

        if line.columns > 0 {
            line.trim_end();
            lines.push(std::mem::replace(&mut line, WrappedLine::new()));
        }

        if width <= max_columns {
            line.push(word, width);
            continue;
        }

        // A word longer than the line: break between graphemes.
        for grapheme in word.graphemes(true) {
            let g_width = UnicodeWidthStr::width(grapheme);
            if line.columns > 0 && line.columns + g_width > max_columns {
                lines.push(std::mem::replace(&mut line, WrappedLine::new()));
            }
            line.push(grapheme, g_width);
        }
    }

    line.trim_end();
    lines.push(line);
}
