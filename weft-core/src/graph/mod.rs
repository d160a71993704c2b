//! Dataflow Graph
//!
//! This module implements the pull-based node graph: output nodes drive
//! computation by recursively demanding values from their inputs, down to
//! source nodes that have none.
//!
//! # Overview
//!
//! - Nodes live in an arena owned by the [`Graph`]; connections are
//!   non-owning ids into that arena.
//! - Evaluation is per-pass memoized: each node computes at most once per
//!   top-level `evaluate` call, and a tri-state per-node flag doubles as the
//!   cycle detector, so arbitrary graph shapes (including accidental
//!   feedback loops in a live-edited patch) always terminate.
//! - Values are domain-tagged (Audio / Visual / Control); the evaluator
//!   coerces across domains where operators allow mixing.
//!
//! # Design Decisions
//!
//! 1. Ids are arena indices rather than pointers or shared references. The
//!    back-references a node keeps to its consumers (`outputs`) exist only
//!    so disconnect can find them; evaluation never follows them, so there
//!    is no ownership cycle to break.
//!
//! 2. Cycle handling is non-fatal by design: a detected cycle yields the
//!    node's domain zero and the rest of the graph evaluates normally. A
//!    live creative-coding graph keeps producing output mid-edit.

mod engine;
mod evaluator;
mod node;

pub use engine::{Graph, GraphError};
pub use node::{MathOp, Node, NodeId, NodeKind, NodeState, PolarOp};
