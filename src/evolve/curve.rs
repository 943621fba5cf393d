use crate::scene::config::RenderConfig;

/// Hard floor for the base primitive size, in both modes.
pub const MIN_PRIMITIVE_SIZE: f64 = 2.0;
/// Lower per-frame budget clamp: guarantees forward progress every frame.
pub const MIN_PRIMITIVES_PER_FRAME: u32 = 1;
/// Upper per-frame budget clamp: bounds worst-case frame cost.
pub const MAX_PRIMITIVES_PER_FRAME: u32 = 600;

/// Per-frame drawing budget computed from session progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBudget {
    /// Base primitive size in pixels, before per-draw modulation.
    pub base_size: f64,
    /// Number of sample+draw iterations for the frame.
    pub count: u32,
}

/// Map session progress in [0, 1] to the frame's size/count budget.
///
/// Evolution mode shrinks the base size from ~140 toward 4 over the first
/// part of the timeline (shrink limit 0.4 for sessions of two minutes or
/// longer, 0.6 otherwise) and derives the count from an inverse power law of
/// the size: smaller primitives must land far more densely to keep visual
/// coverage. Manual mode maps the abstraction slider linearly onto [5, 80]
/// and uses `paint_speed` as the count directly.
///
/// Pure function: no hidden state, identical inputs give identical outputs.
pub fn frame_budget(progress: f64, config: &RenderConfig) -> FrameBudget {
    let progress = progress.clamp(0.0, 1.0);

    let (size, count) = if config.evolution_mode {
        let shrink_limit = if config.duration_ms >= 120_000 { 0.4 } else { 0.6 };
        let sp = (progress / shrink_limit).min(1.0);
        let size = 40.0 * (3.5 * (1.0 - sp) + 0.1 * sp);
        let count = (f64::from(config.paint_speed) / 10.0) * (150.0 / size).powf(1.5) * 0.5;
        (size, count.floor())
    } else {
        let size = linear_map(f64::from(config.abstraction), 1.0, 100.0, 5.0, 80.0);
        (size, f64::from(config.paint_speed))
    };

    FrameBudget {
        base_size: size.max(MIN_PRIMITIVE_SIZE),
        count: count.clamp(
            f64::from(MIN_PRIMITIVES_PER_FRAME),
            f64::from(MAX_PRIMITIVES_PER_FRAME),
        ) as u32,
    }
}

/// Linear map of `v` from [a, b] onto [c, d].
pub fn linear_map(v: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    c + ((v - a) / (b - a)) * (d - c)
}

#[cfg(test)]
#[path = "../../tests/unit/evolve/curve.rs"]
mod tests;
