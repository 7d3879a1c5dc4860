//! Property tests for the layout pass and the countdown.

use modalert_core::Rect;
use modalert_style::FontBook;
use modalert_widgets::alert::{
    AlertElements, AlertMetrics, AlertStyle, Countdown, LayoutInput, compute,
    message_content_height,
};
use proptest::prelude::*;
use web_time::{Duration, Instant};

fn element_sets() -> impl Strategy<Value = AlertElements> {
    (0u8..64).prop_map(|bits| {
        let mut elements = AlertElements::from_bits_truncate(bits);
        if !elements.contains(AlertElements::DISMISS_BUTTON) {
            elements.remove(AlertElements::CANCEL_BUTTON);
        }
        elements
    })
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{1,12}|\n| ", 0..80).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn height_is_sum_of_present_elements(
        elements in element_sets(),
        title in text(),
        message in text(),
        seconds in 0u32..1000,
        width in 120.0f32..600.0,
        padding in 0.0f32..40.0,
        title_gap in 0.0f32..20.0,
    ) {
        let metrics = AlertMetrics { width, padding, title_gap, ..AlertMetrics::default() };
        let style = AlertStyle::new(&FontBook::default());
        let timer = seconds.to_string();
        let input = LayoutInput {
            metrics: &metrics,
            style: &style,
            viewport: Rect::new(0.0, 0.0, 800.0, 1200.0),
            elements,
            title: &title,
            message: elements.contains(AlertElements::MESSAGE).then_some(message.as_str()),
            timer: elements.contains(AlertElements::TIMER).then_some(timer.as_str()),
            min_line_height: None,
        };
        let layout = compute(&input);

        let mut expected = metrics.top_inset;
        if elements.contains(AlertElements::ICON) {
            expected += metrics.icon_size + metrics.icon_gap;
        }
        expected += layout.title.height + metrics.title_gap;
        if let Some(message) = layout.message {
            expected += message.frame.height;
        }
        if let Some(timer) = layout.timer {
            expected += timer.height;
        }
        expected += metrics.padding;
        if elements.has_buttons() {
            expected += metrics.button_height;
        }

        prop_assert!((layout.height() - expected).abs() < 1e-3);
        prop_assert_eq!(layout.background.height, layout.height());
        prop_assert_eq!(layout.elements(), elements);
        prop_assert!(layout.title.height <= metrics.title_max_height.max(style.title.font.line_height().ceil()));
    }

    #[test]
    fn message_never_exceeds_max_height(message in text()) {
        let metrics = AlertMetrics::default();
        let style = AlertStyle::default();
        let input = LayoutInput {
            metrics: &metrics,
            style: &style,
            viewport: Rect::new(0.0, 0.0, 320.0, 568.0),
            elements: AlertElements::MESSAGE,
            title: "Title",
            message: Some(message.as_str()),
            timer: None,
            min_line_height: None,
        };
        let frame = compute(&input).message.unwrap();
        let full = message_content_height(&message, &style.message.font, metrics.content_width(), &metrics, None);
        prop_assert!(frame.frame.height <= metrics.message_max_height);
        prop_assert_eq!(frame.content_height, full);
        prop_assert_eq!(frame.scrollable, full > metrics.message_max_height);
    }

    #[test]
    fn countdown_expires_once_after_n_ticks(n in 0u32..50) {
        let t0 = Instant::now();
        let mut countdown = Countdown::start(n, t0);
        let mut expiries = 0;
        let mut ticks = 0;
        for second in 0..=(n as u64 + 5) {
            let step = countdown.advance(t0 + Duration::from_secs(second));
            ticks += step.ticks;
            if step.expired {
                expiries += 1;
                prop_assert_eq!(second, n as u64);
            }
        }
        prop_assert_eq!(expiries, 1);
        prop_assert_eq!(ticks, n);
        prop_assert_eq!(countdown.remaining(), 0);
    }
}
