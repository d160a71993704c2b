//! Hash-Based Noise
//!
//! All noise here is a pure function of its integer arguments: the same
//! `(x, y, frame, seed)` always produces the same value, with no internal
//! state and no RNG. That property is what makes per-pixel evaluation
//! repeatable: a pixel can be re-rendered at any time and match.
//!
//! Two flavors:
//!
//! - **White**: a single avalanche hash per lookup, uniform over `0..=1000`.
//! - **Fractal**: smoothstep-interpolated value noise summed over octaves,
//!   each octave at double frequency and half amplitude.

use serde::{Deserialize, Serialize};

use crate::value::UNIT;

/// The noise algorithm a noise source uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    White,
    Fractal,
}

/// Integer avalanche hash of three coordinates and a seed.
pub fn hash3(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut h = (x as u32)
        .wrapping_mul(0x8da6_b343)
        .wrapping_add((y as u32).wrapping_mul(0xd816_3841))
        .wrapping_add((z as u32).wrapping_mul(0xcb1a_b31f))
        .wrapping_add(seed.wrapping_mul(0x9e37_79b9));
    h ^= h >> 13;
    h = h.wrapping_mul(0x5bd1_e995);
    h ^= h >> 15;
    h
}

/// White noise at a pixel/frame coordinate, uniform over `0..=1000`.
pub fn white(x: i32, y: i32, frame: i32, seed: u32) -> i32 {
    (hash3(x, y, frame, seed) % (UNIT as u32 + 1)) as i32
}

/// Value at an integer lattice point, `0..=1000`.
fn lattice(x: i32, y: i32, seed: u32) -> i64 {
    (hash3(x, y, 0, seed) % (UNIT as u32 + 1)) as i64
}

/// Fixed-point smoothstep: `t` in `0..=1000` → eased `t` in `0..=1000`.
fn smoothstep(t: i64) -> i64 {
    t * t * (3 * UNIT as i64 - 2 * t) / (UNIT as i64 * UNIT as i64)
}

/// Smoothly interpolated value noise: `scale` is the lattice cell size in
/// pixels. Result in `0..=1000`.
pub fn value2(x: i32, y: i32, scale: i32, seed: u32) -> i32 {
    let scale = scale.max(1);
    let cx = x.div_euclid(scale);
    let cy = y.div_euclid(scale);
    let fx = smoothstep(x.rem_euclid(scale) as i64 * UNIT as i64 / scale as i64);
    let fy = smoothstep(y.rem_euclid(scale) as i64 * UNIT as i64 / scale as i64);

    let v00 = lattice(cx, cy, seed);
    let v10 = lattice(cx + 1, cy, seed);
    let v01 = lattice(cx, cy + 1, seed);
    let v11 = lattice(cx + 1, cy + 1, seed);

    let top = v00 + (v10 - v00) * fx / UNIT as i64;
    let bottom = v01 + (v11 - v01) * fx / UNIT as i64;
    (top + (bottom - top) * fy / UNIT as i64) as i32
}

/// Multi-octave value noise. Each octave halves the cell size and the
/// amplitude; the sum renormalizes to `0..=1000`.
pub fn fractal(x: i32, y: i32, octaves: u32, scale: i32, seed: u32) -> i32 {
    let octaves = octaves.clamp(1, 8);
    let mut total: i64 = 0;
    let mut amplitude: i64 = UNIT as i64;
    let mut max_amplitude: i64 = 0;
    let mut cell = scale.max(1);

    for octave in 0..octaves {
        let v = value2(x, y, cell, seed.wrapping_add(octave)) as i64;
        total += v * amplitude / UNIT as i64;
        max_amplitude += amplitude;
        amplitude /= 2;
        cell = (cell / 2).max(1);
    }

    (total * UNIT as i64 / max_amplitude) as i32
}
