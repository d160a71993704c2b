//! The Graph
//!
//! The graph owns every node in a single arena (`Vec<Node>`, ids are
//! indices), tracks which nodes are terminal outputs, and exposes the three
//! evaluation entry points. Node↔node connections are non-owning ids into
//! the arena, so there is no shared ownership and no reference cycle to
//! manage even when the *data* graph is cyclic.
//!
//! # Mutation rules
//!
//! - `add_node` always succeeds and never invalidates existing ids.
//! - `connect`/`disconnect` maintain the symmetry invariant: `b` appears in
//!   `a.outputs` exactly when `a` appears in `b.inputs`. Both are updated as
//!   a pair, nowhere else.
//! - Nodes are never removed from the arena; `disconnect_all` severs a node
//!   and leaves it in place so ids stay stable.
//!
//! # Evaluation entry points
//!
//! `evaluate` resets all per-pass node states and evaluates every output
//! node in registration order. `evaluate_for_pixel` and
//! `evaluate_for_audio_sample` override the relevant context coordinates and
//! return the first output, shaped for their caller (a pixel renderer or an
//! audio device callback). All three reuse a scratch output buffer, so the
//! steady-state hot path performs no allocation.

use thiserror::Error;

use super::evaluator;
use super::node::{MathOp, Node, NodeId, NodeKind, NodeState, PolarOp};
use crate::context::Context;
use crate::prim::{EasingCurve, NoiseKind, Palette, WaveShape};
use crate::value::{Domain, Value};

/// Errors from the host-facing configuration setters.
///
/// Evaluation itself never fails; these only guard the mutation surface
/// against stale ids and mismatched kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The id does not name a node in this graph.
    #[error("node {0:?} does not exist in this graph")]
    UnknownNode(NodeId),
    /// The node exists but is not of the kind the setter configures.
    #[error("node {id:?} is a {found} node, expected {expected}")]
    KindMismatch {
        id: NodeId,
        expected: &'static str,
        found: &'static str,
    },
}

/// A dataflow graph: node arena, output list, and evaluation state.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    output_nodes: Vec<NodeId>,
    context: Context,
    evaluation_count: u64,
    /// Scratch buffer reused across passes; one slot per output node.
    last_outputs: Vec<Value>,
}

impl Graph {
    /// Create an empty graph with the default context (60 fps, 44100 Hz,
    /// 80×24 buffer).
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            output_nodes: Vec::new(),
            context: Context::default(),
            evaluation_count: 0,
            last_outputs: Vec::new(),
        }
    }

    /// Add a node and return its id. Output kinds are also registered as
    /// graph outputs. Never fails.
    pub fn add_node(&mut self, kind: NodeKind, domain: Domain) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let is_output = kind.is_output();
        self.nodes.push(Node::new(id, kind, domain));
        if is_output {
            self.output_nodes.push(id);
        }
        id
    }

    /// Connect `source`'s output to the next input slot of `dest`.
    ///
    /// Idempotent: connecting an already-connected pair is a no-op, as is
    /// passing an id that does not exist. Input order is significant: the
    /// first connection into a node becomes operand 0.
    pub fn connect(&mut self, source: NodeId, dest: NodeId) {
        if self.get_node(source).is_none() || self.get_node(dest).is_none() {
            return;
        }
        self.nodes[source.raw()].push_output(dest);
        self.nodes[dest.raw()].push_input(source);
    }

    /// Remove the connection between `source` and `dest`; no-op if absent.
    pub fn disconnect(&mut self, source: NodeId, dest: NodeId) {
        if self.get_node(source).is_none() || self.get_node(dest).is_none() {
            return;
        }
        self.nodes[source.raw()].remove_output(dest);
        self.nodes[dest.raw()].remove_input(source);
    }

    /// Sever every connection touching `node`, leaving the node in the
    /// arena. Callers that want the node gone simply stop referring to it.
    pub fn disconnect_all(&mut self, node: NodeId) {
        if self.get_node(node).is_none() {
            return;
        }
        let inputs = std::mem::take(&mut self.nodes[node.raw()].inputs);
        for source in inputs {
            self.nodes[source.raw()].remove_output(node);
        }
        let outputs = std::mem::take(&mut self.nodes[node.raw()].outputs);
        for dest in outputs {
            self.nodes[dest.raw()].remove_input(node);
        }
    }

    /// Get a reference to a node.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.raw())
    }

    /// Get a mutable reference to a node.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.raw())
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of registered output nodes.
    pub fn output_count(&self) -> usize {
        self.output_nodes.len()
    }

    /// How many top-level evaluation passes have run. Diagnostics only.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluation_count
    }

    /// The context used by the most recent evaluation.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Drop all nodes and outputs and reset the pass counter.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.output_nodes.clear();
        self.last_outputs.clear();
        self.evaluation_count = 0;
    }

    /// Reset every node's per-pass state to `Unprocessed`.
    ///
    /// Runs at the start of each top-level evaluation so memoized values
    /// never leak between passes. Node-owned mutable state (oscillator
    /// phase) is deliberately untouched.
    pub fn reset_node_states(&mut self) {
        for node in &mut self.nodes {
            node.state = NodeState::Unprocessed;
        }
    }

    /// Evaluate every output node against `context`, in registration order.
    ///
    /// Returns one value per output node. The context is retained on the
    /// graph for the coordinate-override entry points.
    pub fn evaluate(&mut self, context: Context) -> &[Value] {
        self.context = context;
        self.run_pass();
        &self.last_outputs
    }

    /// Evaluate at pixel `(x, y)`, reusing the stored context otherwise.
    ///
    /// Returns the first output's value, or `Visual(0)` with no outputs.
    pub fn evaluate_for_pixel(&mut self, x: i32, y: i32) -> Value {
        self.context.x = x;
        self.context.y = y;
        self.run_pass();
        self.last_outputs
            .first()
            .copied()
            .unwrap_or(Value::Visual(0))
    }

    /// Evaluate at an audio sample position, reusing the stored context
    /// otherwise.
    ///
    /// Returns the first output's sample if it is in the Audio domain,
    /// `0.0` otherwise. Shaped for a device callback: one call per frame.
    pub fn evaluate_for_audio_sample(&mut self, sample_index: u64, time: f64) -> f32 {
        self.context.sample_index = sample_index;
        self.context.time = time;
        self.run_pass();
        self.last_outputs
            .first()
            .and_then(|v| v.audio_sample())
            .unwrap_or(0.0)
    }

    fn run_pass(&mut self) {
        self.reset_node_states();
        self.evaluation_count += 1;

        let mut outputs = std::mem::take(&mut self.last_outputs);
        outputs.clear();
        for i in 0..self.output_nodes.len() {
            let id = self.output_nodes[i];
            outputs.push(evaluator::evaluate_node(&mut self.nodes, &self.context, id));
        }
        self.last_outputs = outputs;

        tracing::trace!(
            pass = self.evaluation_count,
            outputs = self.last_outputs.len(),
            "evaluation pass complete"
        );
    }

    // ------------------------------------------------------------------
    // Kind-specific configuration setters
    // ------------------------------------------------------------------

    fn kind_mut(&mut self, id: NodeId) -> Result<&mut NodeKind, GraphError> {
        match self.nodes.get_mut(id.raw()) {
            Some(node) => Ok(&mut node.kind),
            None => Err(GraphError::UnknownNode(id)),
        }
    }

    /// Set a constant node's value.
    pub fn set_constant(&mut self, id: NodeId, value: f64) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Constant { value: slot } => {
                *slot = value;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "constant",
                found: other.name(),
            }),
        }
    }

    /// Set an oscillator's shape and frequency. Phase is preserved.
    pub fn set_oscillator(
        &mut self,
        id: NodeId,
        shape: WaveShape,
        frequency: f64,
    ) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Oscillator {
                shape: shape_slot,
                frequency: freq_slot,
                ..
            } => {
                *shape_slot = shape;
                *freq_slot = frequency;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "oscillator",
                found: other.name(),
            }),
        }
    }

    /// Configure a noise source.
    pub fn set_noise(
        &mut self,
        id: NodeId,
        kind: NoiseKind,
        seed: u32,
        scale: i32,
        octaves: u32,
    ) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Noise {
                kind: kind_slot,
                seed: seed_slot,
                scale: scale_slot,
                octaves: octaves_slot,
            } => {
                *kind_slot = kind;
                *seed_slot = seed;
                *scale_slot = scale;
                *octaves_slot = octaves;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "noise",
                found: other.name(),
            }),
        }
    }

    /// Set a math node's operator and parameters.
    pub fn set_math(&mut self, id: NodeId, op: MathOp, params: &[f64]) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Math {
                op: op_slot,
                params: params_slot,
            } => {
                *op_slot = op;
                *params_slot = [0.0; 4];
                for (slot, p) in params_slot.iter_mut().zip(params) {
                    *slot = *p;
                }
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "math",
                found: other.name(),
            }),
        }
    }

    /// Configure a wave transform.
    pub fn set_wave(
        &mut self,
        id: NodeId,
        shape: WaveShape,
        frequency: i32,
        phase: i32,
    ) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Wave {
                shape: shape_slot,
                frequency: freq_slot,
                phase: phase_slot,
            } => {
                *shape_slot = shape;
                *freq_slot = frequency;
                *phase_slot = phase;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "wave",
                found: other.name(),
            }),
        }
    }

    /// Configure a polar transform.
    pub fn set_polar(
        &mut self,
        id: NodeId,
        op: PolarOp,
        center: (i32, i32),
    ) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Polar {
                op: op_slot,
                center: center_slot,
            } => {
                *op_slot = op;
                *center_slot = center;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "polar",
                found: other.name(),
            }),
        }
    }

    /// Set a color node's palette and input range.
    pub fn set_color(
        &mut self,
        id: NodeId,
        palette: Palette,
        range: (i32, i32),
    ) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Color {
                palette: palette_slot,
                range: range_slot,
            } => {
                *palette_slot = palette;
                *range_slot = range;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "color",
                found: other.name(),
            }),
        }
    }

    /// Set an easing node's curve.
    pub fn set_easing(&mut self, id: NodeId, curve: EasingCurve) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Easing { curve: slot } => {
                *slot = curve;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "easing",
                found: other.name(),
            }),
        }
    }

    /// Set a mix node's blend amount.
    pub fn set_mix_amount(&mut self, id: NodeId, amount: f64) -> Result<(), GraphError> {
        match self.kind_mut(id)? {
            NodeKind::Mix { amount: slot } => {
                *slot = amount;
                Ok(())
            }
            other => Err(GraphError::KindMismatch {
                id,
                expected: "mix",
                found: other.name(),
            }),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
