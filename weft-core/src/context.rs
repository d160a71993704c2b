//! Evaluation Context
//!
//! A [`Context`] is the caller-supplied bundle of "current coordinates" for
//! one evaluation pass: which pixel is being rendered, which audio sample is
//! being generated, what frame and wall-clock time it is, plus any named
//! scalar inputs the host wants to expose (mouse position, sliders, volume).
//!
//! The engine never mutates a context except to override the coordinate
//! fields in the specialized entry points (`evaluate_for_pixel`,
//! `evaluate_for_audio_sample`). Everything else is read-only per pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-evaluation coordinate, timing, and custom-input bundle.
///
/// All fields are public: hosts construct one per pass and hand it to
/// [`Graph::evaluate`](crate::Graph::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Frame number, monotonically increasing per rendered frame.
    pub frame: u64,
    /// Seconds since the previous frame.
    pub delta_time: f64,
    /// Current pixel x coordinate.
    pub x: i32,
    /// Current pixel y coordinate.
    pub y: i32,
    /// Output buffer width in cells/pixels.
    pub width: i32,
    /// Output buffer height in cells/pixels.
    pub height: i32,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Index of the current audio sample within the stream.
    pub sample_index: u64,
    /// Current time in seconds.
    pub time: f64,
    /// Named external scalar inputs (e.g. "mouseX", "volume").
    pub custom: IndexMap<String, f64>,
}

impl Context {
    /// Create a context with the default frame timing (60 fps), audio rate
    /// (44100 Hz), and buffer size (80×24).
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a named custom input.
    pub fn custom(&self, name: &str) -> Option<f64> {
        self.custom.get(name).copied()
    }

    /// Set a named custom input, replacing any previous value.
    pub fn set_custom(&mut self, name: impl Into<String>, value: f64) {
        self.custom.insert(name.into(), value);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            frame: 0,
            delta_time: 1.0 / 60.0,
            x: 0,
            y: 0,
            width: 80,
            height: 24,
            sample_rate: 44100,
            sample_index: 0,
            time: 0.0,
            custom: IndexMap::new(),
        }
    }
}
