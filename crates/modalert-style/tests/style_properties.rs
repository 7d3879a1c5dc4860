//! Property tests for color math and font resolution.

use modalert_style::{FontBook, Rgba, StyleError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn opacity_never_raises_alpha(color in any::<u32>(), opacity in -1.0f32..2.0) {
        let color = Rgba(color);
        let faded = color.with_opacity(opacity);
        prop_assert!(faded.a() <= color.a());
        prop_assert_eq!((faded.r(), faded.g(), faded.b()), (color.r(), color.g(), color.b()));
    }

    #[test]
    fn darkening_keeps_alpha_and_lowers_luma(color in any::<u32>(), amount in 0.0f32..1.0) {
        let color = Rgba(color);
        let darker = color.adjust_brightness(amount);
        prop_assert_eq!(darker.a(), color.a());
        prop_assert!(darker.luma() <= color.luma());
    }

    #[test]
    fn six_digit_hex_is_opaque(value in 0u32..0x0100_0000) {
        let parsed = Rgba::from_hex_str(&format!("#{value:06X}")).unwrap();
        prop_assert_eq!(parsed, Rgba::from_hex(value, 1.0));
    }

    #[test]
    fn resolve_or_system_keeps_usable_sizes(name in "[A-Za-z-]{1,20}", size in 1.0f32..200.0) {
        let font = FontBook::default().resolve_or_system(&name, size);
        prop_assert_eq!(font.size(), size);
    }
}

#[test]
fn bad_hex_strings_are_rejected() {
    for input in ["", "#", "#12345", "#1234567", "#GGGGGG", "red"] {
        assert_eq!(
            Rgba::from_hex_str(input),
            Err(StyleError::InvalidColor(input.to_string())),
            "{input:?}"
        );
    }
    assert_eq!(Rgba::from_hex_str(" #00000080 ").unwrap().a(), 0x80);
}

#[cfg(feature = "serde")]
#[test]
fn styles_round_trip_through_json() {
    use modalert_style::{ButtonStyle, ViewStyle};

    let style = ButtonStyle::default().with_text_color(Rgba::WHITE);
    let json = serde_json::to_string(&style).unwrap();
    let back: ButtonStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, style);

    let view: ViewStyle = serde_json::from_str(&serde_json::to_string(&ViewStyle::default()).unwrap()).unwrap();
    assert_eq!(view, ViewStyle::default());
}
