//! Color Palettes
//!
//! A palette maps a byte intensity `0..=255` to an RGB triple. Palettes are
//! pure functions; color nodes pick one by name and feed it a normalized
//! input. The formulas are small piecewise ramps and sine blends chosen to
//! read well on both terminal cells and pixel buffers.

use serde::{Deserialize, Serialize};

use super::trig::{icos, isin};

/// Named color palettes available to color nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Plasma,
    Fire,
    Ocean,
    Heatmap,
    Coolwarm,
    Neon,
    Matrix,
    Grayscale,
}

/// Sample a palette at intensity `t`.
pub fn sample(palette: Palette, t: u8) -> (u8, u8, u8) {
    match palette {
        Palette::Plasma => plasma(t),
        Palette::Fire => fire(t),
        Palette::Ocean => ocean(t),
        Palette::Heatmap => heatmap(t),
        Palette::Coolwarm => coolwarm(t),
        Palette::Neon => neon(t),
        Palette::Matrix => matrix(t),
        Palette::Grayscale => grayscale(t),
    }
}

/// Map a fixed-point `-1000..=1000` sine value to a byte channel.
fn channel(wave: i32) -> u8 {
    ((wave + 1000) * 255 / 2000).clamp(0, 255) as u8
}

/// Scale a byte by a numerator/denominator ramp, clamped to a channel.
fn ramp(t: i32, num: i32, den: i32) -> u8 {
    (t * num / den).clamp(0, 255) as u8
}

fn plasma(t: u8) -> (u8, u8, u8) {
    // Three phase-shifted sines through the 0..3600 angle space.
    let a = t as i32 * 3600 / 256;
    (
        channel(isin(a)),
        channel(isin(a + 1200)),
        channel(icos(a)),
    )
}

fn fire(t: u8) -> (u8, u8, u8) {
    // Black → red → orange → yellow → white.
    let t = t as i32;
    (ramp(t, 3, 1), ramp(t - 85, 3, 1), ramp(t - 170, 3, 1))
}

fn ocean(t: u8) -> (u8, u8, u8) {
    let t = t as i32;
    (ramp(t - 170, 3, 1), ramp(t, 2, 3), ramp(t, 1, 1))
}

fn heatmap(t: u8) -> (u8, u8, u8) {
    // Blue → cyan → green → yellow → red.
    let t = t as i32;
    match t {
        0..=63 => (0, ramp(t, 4, 1), 255),
        64..=127 => (0, 255, 255 - ramp(t - 64, 4, 1)),
        128..=191 => (ramp(t - 128, 4, 1), 255, 0),
        _ => (255, 255 - ramp(t - 192, 4, 1), 0),
    }
}

fn coolwarm(t: u8) -> (u8, u8, u8) {
    // Diverging blue → neutral → red.
    let t = t as i32;
    if t < 128 {
        (ramp(t, 2, 1), ramp(t, 2, 1), 255)
    } else {
        (255, 255 - ramp(t - 128, 2, 1), 255 - ramp(t - 128, 2, 1))
    }
}

fn neon(t: u8) -> (u8, u8, u8) {
    // Magenta/cyan interference.
    let a = t as i32 * 3600 / 256;
    (channel(isin(a)), channel(isin(a * 2)), 255 - t / 4)
}

fn matrix(t: u8) -> (u8, u8, u8) {
    (t / 8, t, t / 8)
}

fn grayscale(t: u8) -> (u8, u8, u8) {
    (t, t, t)
}
