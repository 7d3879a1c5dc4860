#![forbid(unsafe_code)]

//! Packed RGBA colors and the small amount of color math the alert needs.

use crate::error::StyleError;

/// A color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0x0000_00FF);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Build from a `0xRRGGBB` literal and a fractional alpha in `[0.0, 1.0]`.
    #[must_use]
    pub fn from_hex(hex: u32, alpha: f32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgba(r, g, b, unit_to_byte(alpha))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex_str(input: &str) -> Result<Self, StyleError> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || StyleError::InvalidColor(input.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self((value << 8) | 0xFF)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Alpha as a fraction.
    #[must_use]
    pub fn alpha(self) -> f32 {
        f32::from(self.a()) / 255.0
    }

    /// Scale the alpha channel by `opacity` (clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let scaled = self.alpha() * opacity.clamp(0.0, 1.0);
        Self::rgba(self.r(), self.g(), self.b(), unit_to_byte(scaled))
    }

    /// Multiply HSB brightness by `amount`, keeping hue, saturation and alpha.
    ///
    /// Brightness saturates at 1.0, so `WHITE.adjust_brightness(1.2)` is
    /// still white.
    #[must_use]
    pub fn adjust_brightness(self, amount: f32) -> Self {
        let max = self.r().max(self.g()).max(self.b());
        if max == 0 {
            return self;
        }
        let brightness = f32::from(max) / 255.0;
        let target = (brightness * amount.max(0.0)).min(1.0);
        let factor = target / brightness;
        let scale = |c: u8| (f32::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self::rgba(scale(self.r()), scale(self.g()), scale(self.b()), self.a())
    }

    /// Perceptual luma (Rec. 709 weights) in `0..=255`.
    #[must_use]
    pub fn luma(self) -> u8 {
        weighted_luma(self.r(), self.g(), self.b())
    }
}

#[inline]
fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn weighted_luma(r: u8, g: u8, b: u8) -> u8 {
    let luma = u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722;
    (luma / 10000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        let c = Rgba::from_hex(0xF18732, 1.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0xF1, 0x87, 0x32, 0xFF));
    }

    #[test]
    fn from_hex_alpha_rounds() {
        assert_eq!(Rgba::from_hex(0x000000, 0.5).a(), 128);
        assert_eq!(Rgba::from_hex(0xFFFFFF, 0.0).a(), 0);
        assert_eq!(Rgba::from_hex(0xFFFFFF, 3.0).a(), 255);
    }

    #[test]
    fn parse_hex_strings() {
        assert_eq!(Rgba::from_hex_str("#4b3c32").unwrap(), Rgba::rgb(0x4B, 0x3C, 0x32));
        assert_eq!(Rgba::from_hex_str("00000080").unwrap(), Rgba::rgba(0, 0, 0, 0x80));
        assert!(matches!(
            Rgba::from_hex_str("#12345"),
            Err(StyleError::InvalidColor(_))
        ));
        assert!(Rgba::from_hex_str("#GG0000").is_err());
        assert!(Rgba::from_hex_str("+12345").is_err());
    }

    #[test]
    fn with_opacity_scales_alpha() {
        let c = Rgba::BLACK.with_opacity(0.5);
        assert_eq!(c.a(), 128);
        assert_eq!(Rgba::BLACK.with_opacity(2.0), Rgba::BLACK);
    }

    #[test]
    fn adjust_brightness_darkens() {
        let base = Rgba::from_hex(0xF2F4F4, 1.0);
        let dim = base.adjust_brightness(0.9);
        assert!(dim.r() < base.r());
        assert_eq!(dim.a(), base.a());
        assert_eq!(Rgba::WHITE.adjust_brightness(1.0), Rgba::WHITE);
    }

    #[test]
    fn adjust_brightness_saturates_and_keeps_black() {
        assert_eq!(Rgba::WHITE.adjust_brightness(1.5), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.adjust_brightness(2.0), Rgba::BLACK);
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(Rgba::BLACK.luma(), 0);
        assert_eq!(Rgba::WHITE.luma(), 255);
    }
}
