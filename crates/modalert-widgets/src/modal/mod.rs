#![forbid(unsafe_code)]

//! Modal primitives shared by overlay widgets: the dimming backdrop, the
//! backdrop/content hit split, tap tracking, and presentation animation curves.

mod animation;
mod container;

pub use animation::{ModalAnimationConfig, ModalEasing, progress};
pub use container::{Backdrop, BackdropConfig, ModalRegion, TapTracker, classify};
