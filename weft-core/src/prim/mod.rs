//! Procedural Primitives
//!
//! The stateless function library under the graph: integer trigonometry,
//! hash noise, color palettes, and easing curves. Everything in this module
//! is a pure function of integers and floats with no allocation, no I/O,
//! and no hidden state, which is what lets the evaluator call into it once
//! per pixel and once per audio sample.
//!
//! The parameter enums ([`WaveShape`], [`NoiseKind`], [`Palette`],
//! [`EasingCurve`]) live next to the math they select so a node kind can
//! embed them directly.

pub mod easing;
pub mod noise;
pub mod palette;
pub mod trig;

pub use easing::EasingCurve;
pub use noise::NoiseKind;
pub use palette::Palette;
pub use trig::WaveShape;
