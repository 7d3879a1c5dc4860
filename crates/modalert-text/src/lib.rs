#![forbid(unsafe_code)]

//! Text wrapping and measurement for modalert.
//!
//! Measurement is grapheme-aware: widths come from `unicode-width`, break
//! opportunities from `unicode-segmentation` word boundaries.

pub mod measure;
pub mod wrap;

pub use measure::{MeasureOptions, TextMetrics, columns_for_width, measure};
pub use wrap::{WrappedLine, wrap};
