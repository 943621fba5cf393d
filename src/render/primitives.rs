use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::scene::config::ShapeKind;
use kurbo::Shape as _;
use rand::Rng;
use std::f64::consts::PI;

// Brighter pixels render measurably larger, adding perceptual depth; jitter
// avoids visually uniform grids.
const BRIGHTNESS_BASE: f64 = 0.8;
const BRIGHTNESS_GAIN: f64 = 0.4;
const JITTER_MIN: f64 = 0.6;
const JITTER_SPAN: f64 = 0.8;

// Equilateral-triangle height approximation (sqrt(3)/2).
const TRIANGLE_HEIGHT: f64 = 0.866;

/// Modulate the frame's base size for one draw: brightness scaling plus a
/// uniform jitter in [0.6, 1.4).
pub(crate) fn modulated_size<R: Rng>(base_size: f64, brightness: f64, rng: &mut R) -> f64 {
    let jitter = JITTER_MIN + rng.random::<f64>() * JITTER_SPAN;
    base_size * (BRIGHTNESS_BASE + brightness * BRIGHTNESS_GAIN) * jitter
}

/// Paint one primitive at (x, y) into the frame context.
///
/// Each call is a pure side-effecting paint; no state survives between
/// draws. Fill color is the exact sampled RGB, fully opaque.
pub(crate) fn draw_primitive<R: Rng>(
    ctx: &mut vello_cpu::RenderContext,
    shape: ShapeKind,
    x: f64,
    y: f64,
    size: f64,
    rgb: [u8; 3],
    rng: &mut R,
) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgb[0], rgb[1], rgb[2], 255,
    ));
    match shape {
        ShapeKind::Circle => {
            ctx.set_transform(affine_to_cpu(Affine::translate((x, y))));
            ctx.fill_path(&path_to_cpu(&circle_path(size)));
        }
        ShapeKind::Square => {
            let rot = rng.random::<f64>() * PI * 0.2;
            ctx.set_transform(affine_to_cpu(Affine::translate((x, y)) * Affine::rotate(rot)));
            ctx.fill_rect(&rect_to_cpu(centered_square(size)));
        }
        ShapeKind::Triangle => {
            let rot = rng.random::<f64>() * PI * 0.5;
            ctx.set_transform(affine_to_cpu(Affine::translate((x, y)) * Affine::rotate(rot)));
            ctx.fill_path(&path_to_cpu(&triangle_path(size)));
        }
        ShapeKind::Line => {
            let rot = rng.random::<f64>() * PI * 2.0;
            ctx.set_transform(affine_to_cpu(Affine::translate((x, y)) * Affine::rotate(rot)));
            ctx.fill_rect(&rect_to_cpu(line_rect(size)));
        }
    }
}

/// Filled disk of diameter `size`, centered at the origin.
pub(crate) fn circle_path(size: f64) -> BezPath {
    kurbo::Circle::new(Point::ORIGIN, size / 2.0).to_path(0.1)
}

/// Centered square of side `size`.
pub(crate) fn centered_square(size: f64) -> Rect {
    let half = size / 2.0;
    Rect::new(-half, -half, half, half)
}

/// Centered isosceles triangle, apex up, height `size * 0.866`.
pub(crate) fn triangle_path(size: f64) -> BezPath {
    let h = size * TRIANGLE_HEIGHT;
    let mut p = BezPath::new();
    p.move_to((0.0, -h / 2.0));
    p.line_to((-size / 2.0, h / 2.0));
    p.line_to((size / 2.0, h / 2.0));
    p.close_path();
    p
}

/// Axis-aligned body of a butt-capped line segment: length `2 * size`,
/// width `max(1, size / 4)`. Orientation comes from the draw transform.
pub(crate) fn line_rect(size: f64) -> Rect {
    let half_w = f64::max(1.0, size / 4.0) / 2.0;
    Rect::new(-size, -half_w, size, half_w)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn path_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
