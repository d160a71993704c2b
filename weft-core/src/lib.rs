//! Weft Core
//!
//! This crate provides the universal dataflow engine at the heart of the
//! Weft procedural runtime: a single composable node graph that drives both
//! audio synthesis (one evaluation per PCM sample) and visual generation
//! (one evaluation per pixel/cell) from the same pull-based machinery.
//!
//! # Architecture
//!
//! The crate is organized into a few modules:
//!
//! - `value`: domain-tagged values (Audio / Visual / Control) and coercion
//! - `context`: the caller-supplied coordinate/time/custom-input bundle
//! - `graph`: the node arena, connection management, and the recursive,
//!   cycle-safe, per-pass-memoizing evaluator
//! - `prim`: the stateless procedural primitives underneath (integer trig,
//!   hash noise, palettes, easing)
//!
//! # Example
//!
//! ```rust
//! use weft_core::{Domain, Graph, NodeKind, WaveShape};
//!
//! let mut graph = Graph::new();
//! let osc = graph.add_node(NodeKind::oscillator(WaveShape::Sine, 440.0), Domain::Audio);
//! let out = graph.add_node(NodeKind::AudioOut, Domain::Audio);
//! graph.connect(osc, out);
//!
//! // Called once per PCM frame by the audio device callback.
//! let sample = graph.evaluate_for_audio_sample(0, 0.0);
//! assert_eq!(sample, 0.0); // sine starts at phase 0
//! ```
//!
//! Evaluation is synchronous, single-threaded, and allocation-free in the
//! steady state: safe to call at audio rate.

pub mod context;
pub mod graph;
pub mod prim;
pub mod value;

pub use context::Context;
pub use graph::{Graph, GraphError, MathOp, Node, NodeId, NodeKind, NodeState, PolarOp};
pub use prim::{EasingCurve, NoiseKind, Palette, WaveShape};
pub use value::{Domain, Value};
