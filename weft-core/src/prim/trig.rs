//! Integer Trigonometry and Fixed-Point Helpers
//!
//! The Visual domain works in fixed-point integers: a full turn is
//! [`ANGLE_STEPS`] (3600) angle units and magnitudes are scaled by
//! [`UNIT`] (1000). Sine values come from a table built once on first use,
//! so the per-call cost of a lookup is an index into a static array.
//!
//! The float-domain [`sample`] function serves the audio oscillator, which
//! works with a `[0, 1)` phase accumulator rather than integer angles.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use crate::value::UNIT;

/// Angle units per full turn (tenth-of-a-degree resolution).
pub const ANGLE_STEPS: i32 = 3600;

/// Periodic waveform shapes shared by the audio oscillator and the integer
/// wave transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

fn sin_table() -> &'static [i16; ANGLE_STEPS as usize] {
    static TABLE: OnceLock<[i16; ANGLE_STEPS as usize]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0i16; ANGLE_STEPS as usize];
        for (i, slot) in table.iter_mut().enumerate() {
            let radians = i as f64 / ANGLE_STEPS as f64 * std::f64::consts::TAU;
            *slot = (radians.sin() * UNIT as f64).round() as i16;
        }
        table
    })
}

/// Fixed-point sine: angle in `0..3600` units, result in `-1000..=1000`.
///
/// Angles outside the range wrap around.
pub fn isin(angle: i32) -> i32 {
    sin_table()[angle.rem_euclid(ANGLE_STEPS) as usize] as i32
}

/// Fixed-point cosine, phase-shifted [`isin`].
pub fn icos(angle: i32) -> i32 {
    isin(angle + ANGLE_STEPS / 4)
}

/// Fixed-point waveform of the given shape at the given angle, in
/// `-1000..=1000`.
pub fn iwave(shape: WaveShape, angle: i32) -> i32 {
    let a = angle.rem_euclid(ANGLE_STEPS);
    let half = ANGLE_STEPS / 2;
    match shape {
        WaveShape::Sine => isin(a),
        WaveShape::Square => {
            if a < half {
                UNIT
            } else {
                -UNIT
            }
        }
        WaveShape::Sawtooth => a * 2 * UNIT / ANGLE_STEPS - UNIT,
        WaveShape::Triangle => {
            if a < half {
                -UNIT + a * 2 * UNIT / half
            } else {
                UNIT - (a - half) * 2 * UNIT / half
            }
        }
    }
}

/// Float waveform for the audio oscillator: phase in `[0, 1)`, sample in
/// `[-1.0, 1.0]`.
pub fn sample(shape: WaveShape, phase: f64) -> f32 {
    match shape {
        WaveShape::Sine => (phase * std::f64::consts::TAU).sin() as f32,
        WaveShape::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        WaveShape::Sawtooth => (2.0 * phase - 1.0) as f32,
        WaveShape::Triangle => (1.0 - 4.0 * (phase - 0.5).abs()) as f32,
    }
}

/// Add two fixed-point magnitudes, saturating rather than wrapping.
pub fn wave_add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

/// Multiply two fixed-point magnitudes (1000 × 1000 → 1000).
pub fn wave_mul(a: i32, b: i32) -> i32 {
    (a as i64 * b as i64 / UNIT as i64) as i32
}

/// Linear interpolation between fixed-point magnitudes; `t` is clamped to
/// `0..=1000`.
pub fn imix(a: i32, b: i32, t: i32) -> i32 {
    let t = t.clamp(0, UNIT) as i64;
    a + ((b - a) as i64 * t / UNIT as i64) as i32
}

/// Linearly rescale `v` from `in_lo..in_hi` into `out_lo..out_hi`.
///
/// A degenerate input range maps everything to `out_lo`.
pub fn imap(v: i32, in_lo: i32, in_hi: i32, out_lo: i32, out_hi: i32) -> i32 {
    if in_hi == in_lo {
        return out_lo;
    }
    out_lo + ((v - in_lo) as i64 * (out_hi - out_lo) as i64 / (in_hi - in_lo) as i64) as i32
}

/// Integer square root by Newton iteration. Negative inputs return 0.
pub fn isqrt(v: i64) -> i32 {
    if v <= 0 {
        return 0;
    }
    let mut x = v;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + v / x) / 2;
    }
    x as i32
}

/// Integer atan2: the angle of the vector `(x, y)` in `0..3600` units.
pub fn iangle(y: i32, x: i32) -> i32 {
    if x == 0 && y == 0 {
        return 0;
    }
    let turns = (y as f64).atan2(x as f64) / std::f64::consts::TAU;
    (turns * ANGLE_STEPS as f64).rem_euclid(ANGLE_STEPS as f64) as i32
}
