#![forbid(unsafe_code)]

//! modalert public facade.
//!
//! Re-exports the crates of the workspace and a [`prelude`] with the types
//! needed to present an alert:
//!
//! ```ignore
//! use modalert::prelude::*;
//!
//! let mut host = HostView::new(Size::new(375.0, 667.0));
//! let responder = AlertView::new().show(
//!     &mut host,
//!     AlertConfig::new("Saved").message("All changes are stored."),
//!     Instant::now(),
//! );
//! responder.add_action(|| println!("confirmed"));
//! ```

pub use modalert_core as core;
pub use modalert_style as style;
pub use modalert_text as text;
pub use modalert_widgets as widgets;

pub use modalert_core::time::{Duration, Instant};
pub use modalert_core::{Point, PointerEvent, Rect, Size};
pub use modalert_style::{
    ButtonStyle, Font, FontBook, FontWeight, Rgba, StyleError, TextColorTheme, TextStyle, ViewStyle,
};
pub use modalert_widgets::{
    AlertConfig, AlertOutcome, AlertResponder, AlertState, AlertView, DismissCause, Dismissal,
    HostView, Image, ModalAnimationConfig, Scene, TextAlignment, Widget,
};

/// Common imports for presenting alerts.
pub mod prelude {
    pub use crate::{
        AlertConfig, AlertResponder, AlertState, AlertView, Duration, HostView, Image, Instant,
        Point, PointerEvent, Rgba, Size, TextAlignment, TextColorTheme,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_presents_an_alert() {
        let mut host = HostView::new(Size::new(320.0, 480.0));
        let t0 = Instant::now();
        let responder = AlertView::new().show(&mut host, AlertConfig::new("Hello"), t0);
        host.tick(t0 + Duration::from_millis(300));
        assert_eq!(responder.state(), AlertState::Open);
        assert!(!host.render().is_empty());
    }
}
