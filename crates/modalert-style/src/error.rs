#![forbid(unsafe_code)]

//! Errors from style resolution.

/// Errors from resolving fonts and parsing colors.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// No font family with this name is registered.
    UnknownFont(String),
    /// A font size was zero, negative, or not finite.
    InvalidFontSize(f32),
    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    InvalidColor(String),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFont(name) => write!(f, "unknown font family: {name}"),
            Self::InvalidFontSize(size) => write!(f, "invalid font size: {size}"),
            Self::InvalidColor(input) => write!(f, "invalid color: {input}"),
        }
    }
}

impl std::error::Error for StyleError {}
