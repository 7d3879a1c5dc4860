use modalert_style::{Font, FontWeight};
use modalert_text::{MeasureOptions, measure, wrap};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[test]
fn wrap_never_splits_a_grapheme() {
    // a + combining acute, family emoji (ZWJ sequence)
    let text = "a\u{0301}e\u{0301}o\u{0301} \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let lines = wrap(text, 2);

    let rejoined: String = lines.iter().map(|l| l.text.as_str()).collect();
    let expected: String = text.split_whitespace().collect();
    assert_eq!(
        rejoined.graphemes(true).count(),
        expected.graphemes(true).count()
    );
}

#[test]
fn columns_match_unicode_width() {
    let text = "Start \u{1F469}\u{200D}\u{1F680} End";
    for line in wrap(text, 80) {
        assert_eq!(line.columns, UnicodeWidthStr::width(line.text.as_str()));
    }
}

#[test]
fn measured_width_tracks_widest_line() {
    let font = Font::system(10.0, FontWeight::Regular);
    let m = measure("ab\nabcd\nabc", &font, 500.0, &MeasureOptions::new());
    assert_eq!(m.lines.len(), 3);
    assert!((m.width - 4.0 * font.column_advance()).abs() < 1e-3);
}

proptest! {
    #[test]
    fn wrapped_lines_fit(text in "[a-z ]{0,80}", cols in 1usize..30) {
        for line in wrap(&text, cols) {
            prop_assert!(line.columns <= cols);
        }
    }

    #[test]
    fn wrapping_keeps_every_letter(text in "[a-z ]{0,80}", cols in 1usize..30) {
        let letters: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let wrapped: String = wrap(&text, cols)
            .iter()
            .flat_map(|l| l.text.chars())
            .filter(|c| !c.is_whitespace())
            .collect();
        prop_assert_eq!(letters, wrapped);
    }

    #[test]
    fn height_limit_is_respected(lines in 1usize..20, limit in 12.0f32..200.0) {
        let font = Font::system(10.0, FontWeight::Regular);
        let text = vec!["x"; lines].join("\n");
        let m = measure(&text, &font, 100.0, &MeasureOptions::new().max_height(limit));
        prop_assert!(m.visible_lines >= 1);
        prop_assert!(m.height <= limit + 1e-3);
    }
}
