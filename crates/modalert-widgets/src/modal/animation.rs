#![forbid(unsafe_code)]

//! Presentation and dismissal animation curves for modals.
//!
//! Presentation fades the overlay in; dismissal holds for a settle phase and
//! then fades out. Progress is always computed from explicit timestamps so
//! the same inputs produce the same frame.

use web_time::Duration;

/// Easing function for modal animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModalEasing {
    /// Linear interpolation.
    Linear,
    /// Smooth ease-out (decelerating).
    #[default]
    EaseOut,
    /// Smooth ease-in (accelerating).
    EaseIn,
    /// Smooth S-curve.
    EaseInOut,
}

impl ModalEasing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Progress of `elapsed` through a phase of length `total` (0.0 to 1.0).
///
/// A zero-length phase is always complete.
#[must_use]
pub fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}

/// Animation configuration for a modal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModalAnimationConfig {
    /// Fade-in duration when presenting.
    pub present: Duration,
    /// Easing of the fade-in.
    pub present_easing: ModalEasing,
    /// Hold before the fade-out starts.
    pub settle: Duration,
    /// Fade-out duration when dismissing.
    pub fade_out: Duration,
    /// Easing of the fade-out.
    pub fade_easing: ModalEasing,
}

impl Default for ModalAnimationConfig {
    fn default() -> Self {
        Self {
            present: Duration::from_millis(300),
            present_easing: ModalEasing::EaseOut,
            settle: Duration::from_millis(300),
            fade_out: Duration::from_millis(100),
            fade_easing: ModalEasing::Linear,
        }
    }
}

impl ModalAnimationConfig {
    /// Create a config with no animations: phases complete on the next tick.
    #[must_use]
    pub fn none() -> Self {
        Self {
            present: Duration::ZERO,
            settle: Duration::ZERO,
            fade_out: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Check if animations are effectively disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.present.is_zero() && self.dismiss_duration().is_zero()
    }

    #[must_use]
    pub fn present(mut self, duration: Duration) -> Self {
        self.present = duration;
        self
    }

    #[must_use]
    pub fn settle(mut self, duration: Duration) -> Self {
        self.settle = duration;
        self
    }

    #[must_use]
    pub fn fade_out(mut self, duration: Duration) -> Self {
        self.fade_out = duration;
        self
    }

    /// Total time from a dismissal request to detachment.
    #[must_use]
    pub fn dismiss_duration(&self) -> Duration {
        self.settle + self.fade_out
    }

    /// Overlay opacity `elapsed` into the presentation.
    #[must_use]
    pub fn present_opacity(&self, elapsed: Duration) -> f32 {
        self.present_easing.apply(progress(elapsed, self.present))
    }

    /// Overlay opacity `elapsed` into the dismissal.
    #[must_use]
    pub fn dismiss_opacity(&self, elapsed: Duration) -> f32 {
        if elapsed < self.settle {
            return 1.0;
        }
        let faded = self.fade_easing.apply(progress(elapsed - self.settle, self.fade_out));
        1.0 - faded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_shapes() {
        assert!((ModalEasing::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!(ModalEasing::EaseOut.apply(0.5) > 0.5);
        assert!(ModalEasing::EaseIn.apply(0.5) < 0.5);
        for easing in [
            ModalEasing::Linear,
            ModalEasing::EaseIn,
            ModalEasing::EaseOut,
            ModalEasing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
            assert_eq!(easing.apply(-3.0), 0.0);
        }
    }

    #[test]
    fn zero_length_phase_is_complete() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(progress(Duration::from_millis(150), Duration::from_millis(300)), 0.5);
        assert_eq!(progress(Duration::from_secs(9), Duration::from_millis(300)), 1.0);
    }

    #[test]
    fn default_durations() {
        let config = ModalAnimationConfig::default();
        assert_eq!(config.present, Duration::from_millis(300));
        assert_eq!(config.dismiss_duration(), Duration::from_millis(400));
        assert!(!config.is_disabled());
        assert!(ModalAnimationConfig::none().is_disabled());
    }

    #[test]
    fn dismiss_holds_then_fades() {
        let config = ModalAnimationConfig::default();
        assert_eq!(config.dismiss_opacity(Duration::from_millis(100)), 1.0);
        assert_eq!(config.dismiss_opacity(Duration::from_millis(299)), 1.0);
        let mid = config.dismiss_opacity(Duration::from_millis(350));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(config.dismiss_opacity(Duration::from_millis(400)), 0.0);
    }

    #[test]
    fn present_fades_in() {
        let config = ModalAnimationConfig::default();
        assert_eq!(config.present_opacity(Duration::ZERO), 0.0);
        assert!((config.present_opacity(Duration::from_millis(300)) - 1.0).abs() < 1e-6);
        assert_eq!(ModalAnimationConfig::none().present_opacity(Duration::ZERO), 1.0);
    }
}
