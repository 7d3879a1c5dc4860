#![no_main]

use libfuzzer_sys::fuzz_target;
use modalert_style::{Font, FontWeight};
use modalert_text::{MeasureOptions, measure, wrap};

fuzz_target!(|input: (&str, u16, u8, Option<u16>)| {
    let (text, width, size, limit) = input;
    let font = Font::system(f32::from(size.max(1)), FontWeight::Regular);

    let lines = wrap(text, usize::from(width % 200));
    for line in &lines {
        assert!(!line.text.contains('\n'));
    }

    let mut options = MeasureOptions::new().min_lines(1);
    if let Some(limit) = limit {
        options = options.max_height(f32::from(limit));
    }
    let metrics = measure(text, &font, f32::from(width), &options);
    assert!(metrics.visible_lines >= 1);
    assert!(metrics.height.is_finite());
    if let Some(limit) = limit
        && metrics.visible_lines > 1
    {
        assert!(metrics.height <= f32::from(limit) + 1e-3);
    }
});
