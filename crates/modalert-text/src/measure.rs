#![forbid(unsafe_code)]

//! Bounding-box measurement of wrapped text.
//!
//! The width constraint decides how many display columns fit on a line;
//! the optional height limit caps the number of visible lines, but never
//! below one, so a label always shows at least its first line.

use modalert_core::Size;
use modalert_style::Font;

use crate::wrap::{WrappedLine, wrap};

/// Options for [`measure`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasureOptions {
    /// Maximum height of the bounding box; `None` is unbounded.
    pub max_height: Option<f32>,
    /// Lower bound for the line height (paragraph minimum line height).
    pub min_line_height: Option<f32>,
    /// Minimum number of lines reported, even for empty text.
    pub min_lines: usize,
}

impl MeasureOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    #[must_use]
    pub fn min_line_height(mut self, height: Option<f32>) -> Self {
        self.min_line_height = height;
        self
    }

    #[must_use]
    pub fn min_lines(mut self, lines: usize) -> Self {
        self.min_lines = lines;
        self
    }
}

/// Result of measuring a string.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    /// Lines after wrapping (before the height limit).
    pub lines: Vec<WrappedLine>,
    /// Lines that fit inside the height limit.
    pub visible_lines: usize,
    /// Effective line height in points.
    pub line_height: f32,
    /// Widest visible line in points.
    pub width: f32,
    /// Height of the visible lines in points (not rounded).
    pub height: f32,
}

impl TextMetrics {
    /// Whether the height limit hid some lines.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.visible_lines < self.lines.len()
    }

    /// Bounding size, rounded up to whole points.
    #[must_use]
    pub fn ceil_size(&self) -> Size {
        Size::new(self.width.ceil(), self.height.ceil())
    }
}

/// Number of display columns that fit in `width` points with `font`.
#[must_use]
pub fn columns_for_width(font: &Font, width: f32) -> usize {
    let advance = font.column_advance();
    if advance <= 0.0 || !width.is_finite() {
        return usize::MAX;
    }
    ((width / advance).floor().max(1.0)) as usize
}

/// Measure `text` wrapped to `max_width` with `font`.
#[must_use]
pub fn measure(text: &str, font: &Font, max_width: f32, options: &MeasureOptions) -> TextMetrics {
    let columns = columns_for_width(font, max_width);
    let lines = wrap(text, columns);
    let line_height = options
        .min_line_height
        .map_or(font.line_height(), |min| font.line_height().max(min));

    let total = lines.len().max(options.min_lines);
    let visible_lines = match options.max_height {
        Some(limit) if line_height > 0.0 => {
            let fit = (limit / line_height).floor().max(1.0) as usize;
            total.min(fit)
        }
        _ => total,
    };

    let advance = font.column_advance();
    let width = lines
        .iter()
        .take(visible_lines)
        .map(|line| line.columns as f32 * advance)
        .fold(0.0_f32, f32::max);

    TextMetrics {
        lines,
        visible_lines,
        line_height,
        width,
        height: visible_lines as f32 * line_height,
    }
}
