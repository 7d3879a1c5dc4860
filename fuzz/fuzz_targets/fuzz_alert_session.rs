#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use modalert_core::{Point, PointerEvent, Size};
use modalert_widgets::{AlertConfig, AlertState, AlertView, HostView};
use web_time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
enum Op {
    Tick(u16),
    Down(i16, i16),
    Up(i16, i16),
    Cancel,
    Close,
    Resize(u16, u16),
    Scroll(i16),
    TitleFont(u8),
}

#[derive(Debug, Arbitrary)]
struct Session {
    title: String,
    message: Option<String>,
    no_buttons: bool,
    cancel: bool,
    countdown: Option<u8>,
    delay_ms: Option<u16>,
    ops: Vec<Op>,
}

const FAMILIES: [&str; 3] = ["HelveticaNeue", "Menlo-Regular", "Missing"];

fuzz_target!(|session: Session| {
    let mut host = HostView::new(Size::new(375.0, 667.0));
    let mut config = AlertConfig::new(session.title).no_buttons(session.no_buttons);
    if let Some(message) = session.message {
        config = config.message(message);
    }
    if session.cancel {
        config = config.cancel_button_text("Cancel");
    }
    if let Some(seconds) = session.countdown {
        config = config.countdown(u32::from(seconds));
    }
    if let Some(delay) = session.delay_ms {
        config = config.auto_dismiss(Duration::from_millis(u64::from(delay)));
    }

    let mut now = Instant::now();
    let responder = AlertView::new().show(&mut host, config, now);
    let mut dismissals = 0;

    for op in session.ops {
        match op {
            Op::Tick(ms) => {
                now += Duration::from_millis(u64::from(ms));
                if host.tick(now).is_some() {
                    dismissals += 1;
                }
            }
            Op::Down(x, y) => host.handle_pointer(PointerEvent::Down(point(x, y)), now),
            Op::Up(x, y) => host.handle_pointer(PointerEvent::Up(point(x, y)), now),
            Op::Cancel => host.handle_pointer(PointerEvent::Cancel, now),
            Op::Close => {
                responder.close();
            }
            Op::Resize(w, h) => host.resize(Size::new(f32::from(w), f32::from(h))),
            Op::Scroll(dy) => {
                responder.scroll_message_by(f32::from(dy));
            }
            Op::TitleFont(i) => {
                responder.set_title_font(FAMILIES[usize::from(i) % FAMILIES.len()], None);
            }
        }
        if let Some(layout) = responder.layout() {
            assert_eq!(layout.height(), layout.background.height);
            if let Some(message) = layout.message {
                assert!(message.frame.height <= 274.0);
            }
        }
    }

    assert!(dismissals <= 1);
    if dismissals == 1 {
        assert!(!host.has_overlay());
        assert_eq!(responder.state(), AlertState::Closed);
    }
});

fn point(x: i16, y: i16) -> Point {
    Point::new(f32::from(x), f32::from(y))
}
