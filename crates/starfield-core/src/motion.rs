//! Ambient float + spin animation parameters.
//!
//! Every marker references the same three keyframe rules; only durations and
//! spin direction vary per marker, so the stylesheet never grows with the
//! number of markers.

use crate::config::ViewportClass;
use crate::constants::{FLOAT_PERIOD_COMPACT, FLOAT_PERIOD_REGULAR, SPIN_PERIOD};
use rand::Rng;

pub const FLOAT_KEYFRAMES: &str = "starfield-float";
pub const SPIN_CW_KEYFRAMES: &str = "starfield-spin-cw";
pub const SPIN_CCW_KEYFRAMES: &str = "starfield-spin-ccw";

/// Keyframe rules injected once per document.
pub const KEYFRAMES_CSS: &str = "\
@keyframes starfield-float {
  0%, 100% { transform: translateY(0px); }
  50% { transform: translateY(-10px); }
}
@keyframes starfield-spin-cw {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}
@keyframes starfield-spin-ccw {
  from { transform: rotate(0deg); }
  to { transform: rotate(-360deg); }
}
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    pub fn degrees_per_period(self) -> f32 {
        match self {
            SpinDirection::Clockwise => 360.0,
            SpinDirection::CounterClockwise => -360.0,
        }
    }

    pub fn keyframes(self) -> &'static str {
        match self {
            SpinDirection::Clockwise => SPIN_CW_KEYFRAMES,
            SpinDirection::CounterClockwise => SPIN_CCW_KEYFRAMES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProfile {
    pub float_period_sec: f32,
    pub spin_period_sec: f32,
    pub spin: SpinDirection,
}

impl MotionProfile {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, viewport: ViewportClass) -> Self {
        let (float_lo, float_hi) = match viewport {
            ViewportClass::Compact => FLOAT_PERIOD_COMPACT,
            ViewportClass::Regular => FLOAT_PERIOD_REGULAR,
        };
        let (spin_lo, spin_hi) = SPIN_PERIOD;
        let spin = if rng.gen_bool(0.5) {
            SpinDirection::Clockwise
        } else {
            SpinDirection::CounterClockwise
        };
        Self {
            float_period_sec: rng.gen_range(float_lo..float_hi),
            spin_period_sec: rng.gen_range(spin_lo..spin_hi),
            spin,
        }
    }

    /// `animation` shorthand for the float layer.
    pub fn float_animation(&self) -> String {
        format!(
            "{} {:.2}s ease-in-out infinite",
            FLOAT_KEYFRAMES, self.float_period_sec
        )
    }

    /// `animation` shorthand for the spin layer.
    pub fn spin_animation(&self) -> String {
        format!(
            "{} {:.2}s linear infinite",
            self.spin.keyframes(),
            self.spin_period_sec
        )
    }
}
