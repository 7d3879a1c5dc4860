#![forbid(unsafe_code)]

//! Font descriptors and family resolution.
//!
//! Text is measured from two per-family ratios rather than glyph outlines:
//! the advance of one display column and the line height, both as
//! multiples of the point size. That is enough for the alert's bounding-box
//! layout and keeps measurement deterministic across hosts.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown family | Name not registered | `resolve` errors; `resolve_or_system` falls back |
//! | Bad size | Zero, negative, NaN | `resolve` errors; fallback uses [`DEFAULT_FONT_SIZE`] |

use ahash::AHashMap;

use crate::error::StyleError;

/// Family name reported by the system font.
pub const SYSTEM_FONT_FAMILY: &str = ".SystemUI";

/// Size used when a fallback is needed and the requested size is unusable.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Size-independent metrics of a font face.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    /// Advance of one display column, in ems.
    pub advance: f32,
    /// Line height, in ems.
    pub line_height: f32,
}

impl FontMetrics {
    #[must_use]
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    const fn system(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Light => Self::new(0.50, 1.19),
            FontWeight::Regular => Self::new(0.52, 1.19),
            FontWeight::Medium => Self::new(0.53, 1.19),
            FontWeight::Semibold => Self::new(0.54, 1.19),
            FontWeight::Bold => Self::new(0.55, 1.19),
        }
    }
}

/// A resolved font: family, size, weight and metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    family: String,
    size: f32,
    weight: FontWeight,
    metrics: FontMetrics,
}

impl Font {
    /// The platform system font at `size`.
    #[must_use]
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            family: SYSTEM_FONT_FAMILY.to_string(),
            size,
            weight,
            metrics: FontMetrics::system(weight),
        }
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        self.family == SYSTEM_FONT_FAMILY
    }

    /// Width of one display column in points.
    #[must_use]
    pub fn column_advance(&self) -> f32 {
        self.size * self.metrics.advance
    }

    /// Height of one line in points.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * self.metrics.line_height
    }
}

#[derive(Debug, Clone, Copy)]
struct FontFace {
    weight: FontWeight,
    metrics: FontMetrics,
}

/// Registry of named font families.
///
/// Lookup is by exact family name (PostScript style, e.g. `"HelveticaNeue-Bold"`).
#[derive(Debug, Clone)]
pub struct FontBook {
    faces: AHashMap<String, FontFace>,
}

impl FontBook {
    /// An empty book; only the system font resolves via fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            faces: AHashMap::new(),
        }
    }

    /// A book preloaded with the families a stock mobile platform ships.
    #[must_use]
    pub fn with_platform_fonts() -> Self {
        let mut book = Self::empty();
        let builtin = [
            ("SFUIText-Light", FontWeight::Light, 0.50, 1.19),
            ("SFUIText-Regular", FontWeight::Regular, 0.52, 1.19),
            ("SFUIText-Medium", FontWeight::Medium, 0.53, 1.19),
            ("SFUIText-Semibold", FontWeight::Semibold, 0.54, 1.19),
            ("SFUIText-Bold", FontWeight::Bold, 0.55, 1.19),
            ("HelveticaNeue-Light", FontWeight::Light, 0.49, 1.22),
            ("HelveticaNeue", FontWeight::Regular, 0.50, 1.22),
            ("HelveticaNeue-Medium", FontWeight::Medium, 0.52, 1.22),
            ("HelveticaNeue-Bold", FontWeight::Bold, 0.54, 1.22),
            ("Menlo-Regular", FontWeight::Regular, 0.60, 1.16),
        ];
        for (family, weight, advance, line_height) in builtin {
            book.register(family, weight, FontMetrics::new(advance, line_height));
        }
        book
    }

    /// Register (or replace) a family.
    pub fn register(&mut self, family: impl Into<String>, weight: FontWeight, metrics: FontMetrics) {
        self.faces.insert(family.into(), FontFace { weight, metrics });
    }

    #[must_use]
    pub fn contains(&self, family: &str) -> bool {
        self.faces.contains_key(family)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Resolve `family` at `size`.
    pub fn resolve(&self, family: &str, size: f32) -> Result<Font, StyleError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(StyleError::InvalidFontSize(size));
        }
        let face = self
            .faces
            .get(family)
            .ok_or_else(|| StyleError::UnknownFont(family.to_string()))?;
        Ok(Font {
            family: family.to_string(),
            size,
            weight: face.weight,
            metrics: face.metrics,
        })
    }

    /// Resolve `family`, falling back to the regular system font.
    ///
    /// Never fails: an unusable size is replaced by [`DEFAULT_FONT_SIZE`].
    #[must_use]
    pub fn resolve_or_system(&self, family: &str, size: f32) -> Font {
        match self.resolve(family, size) {
            Ok(font) => font,
            Err(err) => {
                let size = if size.is_finite() && size > 0.0 {
                    size
                } else {
                    DEFAULT_FONT_SIZE
                };
                tracing::warn!(family, size, error = %err, "font fallback to system font");
                Font::system(size, FontWeight::Regular)
            }
        }
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::with_platform_fonts()
    }
}
