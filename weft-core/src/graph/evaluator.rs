//! Recursive Evaluation
//!
//! The evaluator turns `(node, context)` into a [`Value`] by pulling from the
//! node's inputs. It is the one piece of the engine with real state-machine
//! semantics:
//!
//! 1. A node seen in the `Processing` state is a cycle: log it, yield the
//!    node's domain zero, and leave its state alone. This bounds every pass
//!    regardless of graph shape.
//! 2. A node in the `Processed` state returns its cached output, so shared
//!    inputs are computed once per pass.
//! 3. Otherwise mark `Processing`, compute per the node's kind, cache, mark
//!    `Processed`.
//!
//! Unconnected inputs are not errors: they read as the consuming rule's
//! domain zero. Unknown configurations fall through to identity/zero rather
//! than failing, so a live, editable graph keeps producing values.
//!
//! # Domain combination
//!
//! Binary math combines same-domain operands natively (Visual magnitudes via
//! the fixed-point helpers, Audio in `f32`, Control in `f64`). Any other
//! pairing lowers both operands through [`Value::to_control`] and produces a
//! Control result. The lowering is uniform across all binary operators.

use super::node::{MathOp, Node, NodeId, NodeKind, NodeState, PolarOp};
use crate::context::Context;
use crate::prim::trig::ANGLE_STEPS;
use crate::prim::{easing, noise, palette, trig, EasingCurve, NoiseKind, Palette};
use crate::value::{Domain, Value, UNIT};

/// Evaluate one node against the context, recursively demanding inputs.
///
/// Ids outside the arena read as an unconnected input (Control zero).
pub(crate) fn evaluate_node(nodes: &mut [Node], ctx: &Context, id: NodeId) -> Value {
    let index = id.raw();
    let Some(node) = nodes.get(index) else {
        return Value::Control(0.0);
    };

    match node.state {
        NodeState::Processing => {
            tracing::warn!(
                node = index,
                kind = node.kind.name(),
                "cycle detected, yielding domain zero"
            );
            return Value::zero(node.domain);
        }
        NodeState::Processed => return node.cached_output,
        NodeState::Unprocessed => {}
    }

    nodes[index].state = NodeState::Processing;
    let result = compute(nodes, ctx, index);
    let node = &mut nodes[index];
    node.cached_output = result;
    node.state = NodeState::Processed;
    result
}

fn compute(nodes: &mut [Node], ctx: &Context, index: usize) -> Value {
    // Sources never recurse and can read their parameters in place.
    match &nodes[index].kind {
        NodeKind::Constant { value } => return Value::Control(*value),
        NodeKind::ContextInput { name } => return context_input(ctx, name),
        NodeKind::Noise {
            kind,
            seed,
            scale,
            octaves,
        } => return noise_value(ctx, *kind, *seed, *scale, *octaves),
        _ => {}
    }

    // The oscillator owns the only cross-pass mutable state in the graph:
    // its phase accumulator. Sample first, then advance.
    if let NodeKind::Oscillator {
        shape,
        frequency,
        phase,
    } = &mut nodes[index].kind
    {
        let sample = trig::sample(*shape, *phase);
        let step = *frequency / ctx.sample_rate.max(1) as f64;
        *phase = (*phase + step).rem_euclid(1.0);
        return Value::Audio(sample);
    }

    // Transforms recurse into the arena, so copy the parameters out first.
    // Every variant reaching this clone carries only Copy data.
    let kind = nodes[index].kind.clone();
    match kind {
        NodeKind::Math { op, params } => math(nodes, ctx, index, op, params),
        NodeKind::Wave {
            shape,
            frequency,
            phase,
        } => {
            let v = input_or(nodes, ctx, index, 0, Domain::Control);
            let angle = match v {
                Value::Visual(m) => m,
                other => (other.to_control() * ANGLE_STEPS as f64) as i32,
            };
            let turned =
                (angle as i64 * frequency as i64 + phase as i64).rem_euclid(ANGLE_STEPS as i64);
            Value::Visual(trig::iwave(shape, turned as i32))
        }
        NodeKind::Polar { op, center } => polar(nodes, ctx, index, op, center),
        NodeKind::Color { palette, range } => color_value(nodes, ctx, index, palette, range),
        NodeKind::Easing { curve } => easing_value(nodes, ctx, index, curve),
        NodeKind::Mix { amount } => mix(nodes, ctx, index, amount),
        NodeKind::AudioOut | NodeKind::VisualOut | NodeKind::ValueOut => {
            let domain = nodes[index].domain;
            input_or(nodes, ctx, index, 0, domain)
        }
        // Reserved kinds: explicitly unimplemented, not an error.
        _ => Value::zero(nodes[index].domain),
    }
}

/// Pull the value connected at `slot`, or `None` if nothing is wired there.
fn input(nodes: &mut [Node], ctx: &Context, index: usize, slot: usize) -> Option<Value> {
    let source = nodes[index].inputs.get(slot).copied()?;
    Some(evaluate_node(nodes, ctx, source))
}

/// Pull the value connected at `slot`, defaulting to the given domain's zero.
fn input_or(nodes: &mut [Node], ctx: &Context, index: usize, slot: usize, domain: Domain) -> Value {
    input(nodes, ctx, index, slot).unwrap_or_else(|| Value::zero(domain))
}

fn context_input(ctx: &Context, name: &str) -> Value {
    match name {
        "x" => Value::Visual(ctx.x),
        "y" => Value::Visual(ctx.y),
        "width" => Value::Visual(ctx.width),
        "height" => Value::Visual(ctx.height),
        "frame" => Value::Control(ctx.frame as f64),
        "time" => Value::Control(ctx.time),
        other => Value::Control(ctx.custom(other).unwrap_or(0.0)),
    }
}

fn noise_value(ctx: &Context, kind: NoiseKind, seed: u32, scale: i32, octaves: u32) -> Value {
    let magnitude = match kind {
        NoiseKind::White => noise::white(ctx.x, ctx.y, ctx.frame as i32, seed),
        NoiseKind::Fractal => noise::fractal(ctx.x, ctx.y, octaves, scale, seed),
    };
    Value::Visual(magnitude)
}

fn math(nodes: &mut [Node], ctx: &Context, index: usize, op: MathOp, params: [f64; 4]) -> Value {
    if nodes[index].inputs.is_empty() {
        return Value::Control(0.0);
    }

    let a = input_or(nodes, ctx, index, 0, Domain::Control);
    if nodes[index].inputs.len() == 1 {
        return math_unary(op, a, params);
    }

    match op {
        // Unary operators ignore operands past the first.
        MathOp::Abs | MathOp::Clamp | MathOp::Map => math_unary(op, a, params),
        MathOp::Add | MathOp::Multiply | MathOp::Lerp => {
            let b = input_or(nodes, ctx, index, 1, Domain::Control);
            let t = if op == MathOp::Lerp {
                match input(nodes, ctx, index, 2) {
                    Some(v) => v.to_control(),
                    None => params[0],
                }
            } else {
                0.0
            };
            math_binary(op, a, b, t)
        }
    }
}

/// Unary math stays in the operand's own domain.
fn math_unary(op: MathOp, v: Value, params: [f64; 4]) -> Value {
    match op {
        MathOp::Abs => match v {
            Value::Audio(s) => Value::Audio(s.abs()),
            Value::Visual(m) => Value::Visual(m.abs()),
            Value::Control(c) => Value::Control(c.abs()),
            color @ Value::Color(..) => color,
        },
        MathOp::Clamp => {
            let (lo, hi) = (params[0], params[1]);
            match v {
                Value::Audio(s) => Value::Audio(s.max(lo as f32).min(hi as f32)),
                Value::Visual(m) => Value::Visual(m.max(lo as i32).min(hi as i32)),
                Value::Control(c) => Value::Control(c.max(lo).min(hi)),
                color @ Value::Color(..) => color,
            }
        }
        MathOp::Map => {
            let [in_lo, in_hi, out_lo, out_hi] = params;
            match v {
                Value::Visual(m) => Value::Visual(trig::imap(
                    m,
                    in_lo as i32,
                    in_hi as i32,
                    out_lo as i32,
                    out_hi as i32,
                )),
                other => {
                    if in_hi == in_lo {
                        Value::Control(out_lo)
                    } else {
                        let c = other.to_control();
                        Value::Control(out_lo + (c - in_lo) * (out_hi - out_lo) / (in_hi - in_lo))
                    }
                }
            }
        }
        // Binary operators applied to a single input pass it through.
        MathOp::Add | MathOp::Multiply | MathOp::Lerp => v,
    }
}

/// Binary math: native arithmetic for same-domain pairs, Control lowering
/// for everything else.
fn math_binary(op: MathOp, a: Value, b: Value, t: f64) -> Value {
    match (a, b) {
        (Value::Visual(a), Value::Visual(b)) => Value::Visual(match op {
            MathOp::Add => trig::wave_add(a, b),
            MathOp::Multiply => trig::wave_mul(a, b),
            MathOp::Lerp => trig::imix(a, b, (t * UNIT as f64) as i32),
            _ => a,
        }),
        (Value::Audio(a), Value::Audio(b)) => Value::Audio(match op {
            MathOp::Add => a + b,
            MathOp::Multiply => a * b,
            MathOp::Lerp => a + (b - a) * t as f32,
            _ => a,
        }),
        (Value::Control(a), Value::Control(b)) => Value::Control(match op {
            MathOp::Add => a + b,
            MathOp::Multiply => a * b,
            MathOp::Lerp => a + (b - a) * t,
            _ => a,
        }),
        (a, b) => {
            let (ac, bc) = (a.to_control(), b.to_control());
            Value::Control(match op {
                MathOp::Add => ac + bc,
                MathOp::Multiply => ac * bc,
                MathOp::Lerp => ac + (bc - ac) * t,
                _ => ac,
            })
        }
    }
}

fn polar(
    nodes: &mut [Node],
    ctx: &Context,
    index: usize,
    op: PolarOp,
    center: (i32, i32),
) -> Value {
    let x = match input(nodes, ctx, index, 0) {
        Some(v) => v.to_magnitude(),
        None => ctx.x,
    };
    let y = match input(nodes, ctx, index, 1) {
        Some(v) => v.to_magnitude(),
        None => ctx.y,
    };
    let dx = (x - center.0) as i64;
    let dy = (y - center.1) as i64;
    match op {
        PolarOp::Distance => Value::Visual(trig::isqrt(dx * dx + dy * dy)),
        PolarOp::Angle => Value::Visual(trig::iangle(dy as i32, dx as i32)),
    }
}

fn color_value(
    nodes: &mut [Node],
    ctx: &Context,
    index: usize,
    palette: Palette,
    range: (i32, i32),
) -> Value {
    let m = input_or(nodes, ctx, index, 0, Domain::Visual).to_magnitude();
    let t = trig::imap(m, range.0, range.1, 0, 255).clamp(0, 255) as u8;
    let (r, g, b) = palette::sample(palette, t);
    Value::Color(r, g, b)
}

fn easing_value(nodes: &mut [Node], ctx: &Context, index: usize, curve: EasingCurve) -> Value {
    let m = input_or(nodes, ctx, index, 0, Domain::Control).to_magnitude();
    Value::Visual(easing::apply(curve, m))
}

fn mix(nodes: &mut [Node], ctx: &Context, index: usize, amount: f64) -> Value {
    if nodes[index].inputs.len() < 2 {
        return Value::Control(0.0);
    }
    let a = input_or(nodes, ctx, index, 0, Domain::Control);
    let b = input_or(nodes, ctx, index, 1, Domain::Control);
    let t = (amount * UNIT as f64) as i32;
    match (a, b) {
        (Value::Visual(a), Value::Visual(b)) => Value::Visual(trig::imix(a, b, t)),
        (Value::Color(r0, g0, b0), Value::Color(r1, g1, b1)) => Value::Color(
            trig::imix(r0 as i32, r1 as i32, t) as u8,
            trig::imix(g0 as i32, g1 as i32, t) as u8,
            trig::imix(b0 as i32, b1 as i32, t) as u8,
        ),
        (a, b) => {
            let (ac, bc) = (a.to_control(), b.to_control());
            Value::Control(ac + (bc - ac) * amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use crate::prim::{EasingCurve, NoiseKind, Palette, WaveShape};
    use crate::value::{Domain, Value};
    use crate::Context;

    use super::super::node::{MathOp, NodeKind, PolarOp};

    fn graph() -> Graph {
        Graph::new()
    }

    #[test]
    fn constant_ignores_context() {
        let mut g = graph();
        let c = g.add_node(NodeKind::Constant { value: 3.14 }, Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(c, out);

        let mut ctx = Context::new();
        ctx.x = 17;
        ctx.time = 99.0;
        assert_eq!(g.evaluate(ctx), &[Value::Control(3.14)]);
    }

    #[test]
    fn context_inputs_resolve_known_names() {
        let mut g = graph();
        let x = g.add_node(
            NodeKind::ContextInput { name: "x".into() },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::ValueOut, Domain::Visual);
        g.connect(x, out);

        assert_eq!(g.evaluate_for_pixel(7, 3), Value::Visual(7));
    }

    #[test]
    fn context_inputs_fall_back_to_custom() {
        let mut g = graph();
        let vol = g.add_node(
            NodeKind::ContextInput {
                name: "volume".into(),
            },
            Domain::Control,
        );
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(vol, out);

        let mut ctx = Context::new();
        ctx.set_custom("volume", 0.8);
        assert_eq!(g.evaluate(ctx), &[Value::Control(0.8)]);

        // Absent custom names read as zero, not an error.
        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.0)]);
    }

    #[test]
    fn mixed_domain_add_lowers_to_control() {
        let mut g = graph();
        let x = g.add_node(
            NodeKind::ContextInput { name: "x".into() },
            Domain::Visual,
        );
        let c = g.add_node(NodeKind::Constant { value: 0.5 }, Domain::Control);
        let add = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(x, add);
        g.connect(c, add);
        g.connect(add, out);

        // x = 500 -> Visual(500) -> 0.5 + 0.5 = Control(1.0)
        let mut ctx = Context::new();
        ctx.x = 500;
        assert_eq!(g.evaluate(ctx), &[Value::Control(1.0)]);
    }

    #[test]
    fn same_domain_control_add_stays_control() {
        let mut g = graph();
        let a = g.add_node(NodeKind::Constant { value: 0.25 }, Domain::Control);
        let b = g.add_node(NodeKind::Constant { value: 0.5 }, Domain::Control);
        let add = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, add);
        g.connect(b, add);
        g.connect(add, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.75)]);
    }

    #[test]
    fn math_with_no_inputs_yields_control_zero() {
        let mut g = graph();
        let add = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(add, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.0)]);
    }

    #[test]
    fn unary_abs_and_clamp_stay_in_domain() {
        let mut g = graph();
        let c = g.add_node(NodeKind::Constant { value: -0.75 }, Domain::Control);
        let abs = g.add_node(NodeKind::math(MathOp::Abs, &[]), Domain::Control);
        let clamp = g.add_node(NodeKind::math(MathOp::Clamp, &[0.0, 0.5]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(c, abs);
        g.connect(abs, clamp);
        g.connect(clamp, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.5)]);
    }

    #[test]
    fn lerp_takes_t_from_params() {
        let mut g = graph();
        let a = g.add_node(NodeKind::Constant { value: 0.0 }, Domain::Control);
        let b = g.add_node(NodeKind::Constant { value: 1.0 }, Domain::Control);
        let lerp = g.add_node(NodeKind::math(MathOp::Lerp, &[0.25]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, lerp);
        g.connect(b, lerp);
        g.connect(lerp, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.25)]);
    }

    #[test]
    fn lerp_prefers_t_from_third_input() {
        let mut g = graph();
        let a = g.add_node(NodeKind::Constant { value: 0.0 }, Domain::Control);
        let b = g.add_node(NodeKind::Constant { value: 1.0 }, Domain::Control);
        let t = g.add_node(NodeKind::Constant { value: 0.75 }, Domain::Control);
        let lerp = g.add_node(NodeKind::math(MathOp::Lerp, &[0.25]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, lerp);
        g.connect(b, lerp);
        g.connect(t, lerp);
        g.connect(lerp, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.75)]);
    }

    #[test]
    fn cycle_yields_domain_zero_without_hanging() {
        let mut g = graph();
        let a = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let b = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, b);
        g.connect(b, a);
        g.connect(b, out);

        // Terminates and produces the domain zero for the cycle members.
        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.0)]);
    }

    #[test]
    fn shared_input_evaluates_once_per_pass() {
        // The oscillator advances its phase once per evaluation. If the
        // memoization failed, two consumers would advance it twice.
        let mut g = graph();
        let osc = g.add_node(
            NodeKind::oscillator(WaveShape::Sine, 4410.0),
            Domain::Audio,
        );
        let left = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let right = g.add_node(NodeKind::math(MathOp::Add, &[]), Domain::Control);
        let mix = g.add_node(NodeKind::Mix { amount: 0.5 }, Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(osc, left);
        g.connect(osc, right);
        g.connect(left, mix);
        g.connect(right, mix);
        g.connect(mix, out);

        // Step = 4410/44100 = 0.1 per pass. After 3 passes phase is 0.3;
        // double-advancing would leave 0.6 instead.
        for _ in 0..3 {
            g.evaluate(Context::new());
        }
        let NodeKind::Oscillator { phase, .. } = g.get_node(osc).unwrap().kind() else {
            panic!("expected oscillator");
        };
        assert!((phase - 0.3).abs() < 1e-9, "phase was {phase}");
    }

    #[test]
    fn oscillator_samples_before_advancing() {
        let mut g = graph();
        let osc = g.add_node(
            NodeKind::oscillator(WaveShape::Sine, 440.0),
            Domain::Audio,
        );
        let out = g.add_node(NodeKind::AudioOut, Domain::Audio);
        g.connect(osc, out);

        // First sample reads phase 0 exactly.
        assert_eq!(g.evaluate_for_audio_sample(0, 0.0), 0.0);
    }

    #[test]
    fn wave_converts_control_input_to_angle() {
        let mut g = graph();
        let c = g.add_node(NodeKind::Constant { value: 0.25 }, Domain::Control);
        let wave = g.add_node(
            NodeKind::Wave {
                shape: WaveShape::Sine,
                frequency: 1,
                phase: 0,
            },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(c, wave);
        g.connect(wave, out);

        // 0.25 turns = angle 900 = sine peak.
        assert_eq!(g.evaluate(Context::new()), &[Value::Visual(1000)]);
    }

    #[test]
    fn polar_distance_from_context_coordinates() {
        let mut g = graph();
        let polar = g.add_node(
            NodeKind::Polar {
                op: PolarOp::Distance,
                center: (0, 0),
            },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(polar, out);

        assert_eq!(g.evaluate_for_pixel(3, 4), Value::Visual(5));
    }

    #[test]
    fn polar_angle_of_axes() {
        let mut g = graph();
        let polar = g.add_node(
            NodeKind::Polar {
                op: PolarOp::Angle,
                center: (0, 0),
            },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(polar, out);

        assert_eq!(g.evaluate_for_pixel(10, 0), Value::Visual(0));
        assert_eq!(g.evaluate_for_pixel(0, 10), Value::Visual(900));
    }

    #[test]
    fn color_normalizes_input_through_palette() {
        let mut g = graph();
        let c = g.add_node(NodeKind::Constant { value: 1.0 }, Domain::Control);
        let color = g.add_node(
            NodeKind::Color {
                palette: Palette::Grayscale,
                range: (0, 1000),
            },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(c, color);
        g.connect(color, out);

        // Control 1.0 -> magnitude 1000 -> top of range -> white.
        assert_eq!(g.evaluate(Context::new()), &[Value::Color(255, 255, 255)]);
    }

    #[test]
    fn easing_scales_control_input() {
        let mut g = graph();
        let c = g.add_node(NodeKind::Constant { value: 0.5 }, Domain::Control);
        let ease = g.add_node(
            NodeKind::Easing {
                curve: EasingCurve::QuadIn,
            },
            Domain::Visual,
        );
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(c, ease);
        g.connect(ease, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Visual(250)]);
    }

    #[test]
    fn mix_requires_two_inputs() {
        let mut g = graph();
        let a = g.add_node(NodeKind::Constant { value: 1.0 }, Domain::Control);
        let mix = g.add_node(NodeKind::Mix { amount: 0.5 }, Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, mix);
        g.connect(mix, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.0)]);
    }

    #[test]
    fn mix_lerps_control_pair() {
        let mut g = graph();
        let a = g.add_node(NodeKind::Constant { value: 0.0 }, Domain::Control);
        let b = g.add_node(NodeKind::Constant { value: 1.0 }, Domain::Control);
        let mix = g.add_node(NodeKind::Mix { amount: 0.25 }, Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Control);
        g.connect(a, mix);
        g.connect(b, mix);
        g.connect(mix, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.25)]);
    }

    #[test]
    fn outputs_pass_through_or_default() {
        let mut g = graph();
        let out = g.add_node(NodeKind::AudioOut, Domain::Audio);
        assert_eq!(g.evaluate(Context::new()), &[Value::Audio(0.0)]);

        let c = g.add_node(NodeKind::Constant { value: 0.5 }, Domain::Control);
        g.connect(c, out);
        assert_eq!(g.evaluate(Context::new()), &[Value::Control(0.5)]);
    }

    #[test]
    fn reserved_kinds_yield_domain_zero() {
        let mut g = graph();
        let filter = g.add_node(NodeKind::Filter, Domain::Audio);
        let c = g.add_node(NodeKind::Constant { value: 0.9 }, Domain::Control);
        let out = g.add_node(NodeKind::ValueOut, Domain::Audio);
        g.connect(c, filter);
        g.connect(filter, out);

        assert_eq!(g.evaluate(Context::new()), &[Value::Audio(0.0)]);
    }

    #[test]
    fn white_noise_is_pure_over_coordinates() {
        let mut g = graph();
        let n = g.add_node(NodeKind::noise(NoiseKind::White, 42), Domain::Visual);
        let out = g.add_node(NodeKind::VisualOut, Domain::Visual);
        g.connect(n, out);

        let first = g.evaluate_for_pixel(5, 5);
        let second = g.evaluate_for_pixel(5, 5);
        assert_eq!(first, second);

        let Value::Visual(m) = first else {
            panic!("expected a visual magnitude");
        };
        assert!((0..=1000).contains(&m));
    }
}
