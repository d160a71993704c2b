//! Values and Domains
//!
//! Every node in the graph produces a [`Value`] when evaluated, and every
//! value belongs to exactly one [`Domain`]. The domain determines the payload
//! shape and how two values combine:
//!
//! - `Audio` carries a single PCM sample in `[-1.0, 1.0]`.
//! - `Visual` carries fixed-point integers: magnitudes are scaled by 1000
//!   (so `1000` reads as "1.0"), color channels are `0..=255`.
//! - `Control` carries an unrestricted `f64` scalar, usually `0.0..=1.0`.
//!
//! # Coercion
//!
//! When values from different domains meet (e.g. a Visual magnitude added to
//! a Control scalar), both sides are lowered to `Control` through
//! [`Value::to_control`] and the result stays in the Control domain. The
//! inverse direction, [`Value::to_magnitude`], raises a value into the
//! fixed-point Visual convention. Both conversions are total: there is no
//! value that fails to coerce.

use serde::{Deserialize, Serialize};

/// Fixed-point unit for Visual magnitudes: `1000` represents `1.0`.
pub const UNIT: i32 = 1000;

/// The semantic category of a value flowing through the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// PCM audio samples.
    Audio,
    /// Fixed-point magnitudes and RGB colors.
    Visual,
    /// Floating-point control scalars.
    Control,
}

/// A domain-tagged result produced by evaluating a node.
///
/// `Visual` and `Color` are both payload shapes of the Visual domain; a
/// node whose domain is Visual may legitimately produce either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A single audio sample in `[-1.0, 1.0]`.
    Audio(f32),
    /// A fixed-point integer magnitude (1000 = 1.0).
    Visual(i32),
    /// An RGB triple, each channel `0..=255`.
    Color(u8, u8, u8),
    /// A scalar control value.
    Control(f64),
}

impl Value {
    /// The domain this value belongs to.
    pub fn domain(&self) -> Domain {
        match self {
            Value::Audio(_) => Domain::Audio,
            Value::Visual(_) | Value::Color(..) => Domain::Visual,
            Value::Control(_) => Domain::Control,
        }
    }

    /// The zero value for a domain. Used for unconnected inputs, cycle
    /// fallbacks, and reserved node kinds.
    pub fn zero(domain: Domain) -> Value {
        match domain {
            Domain::Audio => Value::Audio(0.0),
            Domain::Visual => Value::Visual(0),
            Domain::Control => Value::Control(0.0),
        }
    }

    /// Lower this value into the Control domain.
    ///
    /// Visual magnitudes divide by the fixed-point unit, colors reduce to
    /// their mean channel in `0.0..=1.0`.
    pub fn to_control(&self) -> f64 {
        match *self {
            Value::Audio(s) => s as f64,
            Value::Visual(m) => m as f64 / UNIT as f64,
            Value::Color(r, g, b) => (r as f64 + g as f64 + b as f64) / (3.0 * 255.0),
            Value::Control(v) => v,
        }
    }

    /// Raise this value into the fixed-point Visual convention.
    pub fn to_magnitude(&self) -> i32 {
        match *self {
            Value::Visual(m) => m,
            Value::Color(r, g, b) => (r as i32 + g as i32 + b as i32) * UNIT / (3 * 255),
            Value::Audio(s) => (s as f64 * UNIT as f64) as i32,
            Value::Control(v) => (v * UNIT as f64) as i32,
        }
    }

    /// The audio sample, if this value is in the Audio domain.
    pub fn audio_sample(&self) -> Option<f32> {
        match self {
            Value::Audio(s) => Some(*s),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Control(0.0)
    }
}
