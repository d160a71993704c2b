//! Easing Curves
//!
//! Easing functions reshape a normalized progress value. Everything here is
//! fixed-point: input and output are `0..=1000` (the Visual magnitude
//! convention), intermediates widen to `i64` so the cubic curves cannot
//! overflow.

use serde::{Deserialize, Serialize};

use super::trig::{icos, isin};
use crate::value::UNIT;

/// Named easing curves available to easing nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingCurve {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    SineIn,
    SineOut,
    Smoothstep,
}

/// Apply an easing curve to fixed-point progress `t`.
///
/// Inputs outside `0..=1000` are clamped before easing.
pub fn apply(curve: EasingCurve, t: i32) -> i32 {
    let t = t.clamp(0, UNIT) as i64;
    let unit = UNIT as i64;
    let eased = match curve {
        EasingCurve::Linear => t,
        EasingCurve::QuadIn => t * t / unit,
        EasingCurve::QuadOut => unit - (unit - t) * (unit - t) / unit,
        EasingCurve::QuadInOut => {
            if t < unit / 2 {
                2 * t * t / unit
            } else {
                unit - 2 * (unit - t) * (unit - t) / unit
            }
        }
        EasingCurve::CubicIn => t * t * t / (unit * unit),
        EasingCurve::CubicOut => unit - (unit - t) * (unit - t) * (unit - t) / (unit * unit),
        // Quarter-turn trig ramps: 0..1000 progress maps onto 0..900 angle.
        EasingCurve::SineIn => unit - icos((t * 900 / unit) as i32) as i64,
        EasingCurve::SineOut => isin((t * 900 / unit) as i32) as i64,
        EasingCurve::Smoothstep => t * t * (3 * unit - 2 * t) / (unit * unit),
    };
    eased as i32
}
