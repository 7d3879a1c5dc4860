#![forbid(unsafe_code)]

//! Style primitives for modalert.
//!
//! This crate provides:
//! - [`Rgba`] packed colors with opacity and brightness helpers
//! - [`FontBook`] for resolving font families, with system-font fallback
//! - [`TextStyle`], [`ButtonStyle`], [`ViewStyle`] immutable style values
//! - [`TextColorTheme`] for the dark/light text recolor

pub mod color;
pub mod error;
pub mod font;
pub mod theme;

pub use color::Rgba;
pub use error::StyleError;
pub use font::{Font, FontBook, FontMetrics, FontWeight, SYSTEM_FONT_FAMILY};
pub use theme::{ButtonStyle, TextColorTheme, TextStyle, ViewStyle};
