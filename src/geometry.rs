//! Fractal segment generation
//!
//! Pure geometry: each generator maps its parameters to an ordered list of
//! line segments and touches nothing else. Where the segments land is the
//! studio's business; rasterization lives in `canvas`.
//!
//! Every pattern stops on a depth budget and, except for the Koch snowflake,
//! on a minimum feature size, so degenerate inputs converge instead of
//! recursing away.

use crate::config::{FractalKind, DEPTH_MAX, DEPTH_MIN, SIZE_MAX, SIZE_MIN};
use crossterm::style::Color;

/// Branch length floor for tree and fern growth
const LENGTH_FLOOR: f64 = 2.0;
/// Radius floor for spiral arcs
const RADIUS_FLOOR: f64 = 3.0;
/// Straight sub-segments per quarter-circle arc
const ARC_STEPS: u32 = 40;

/// A position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project `length` along `angle_deg` (degrees, 0 = +x, counter-clockwise).
    /// The y component is negated: the surface has y growing downward.
    pub fn project(self, length: f64, angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            x: self.x + length * rad.cos(),
            y: self.y - length * rad.sin(),
        }
    }
}

/// A single straight-line draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub width: u32,
}

/// Parameters for one generation, as read from the studio controls.
/// `angle` only matters for Tree and Fern; Spiral and Koch ignore it.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest {
    pub origin: Point,
    pub size: f64,
    pub angle: f64,
    pub depth: u32,
    pub color: Color,
}

impl GenerationRequest {
    /// Build a request with depth and size clamped to the control ranges
    pub fn new(origin: Point, size: f64, angle: f64, depth: u32, color: Color) -> Self {
        Self {
            origin,
            size: size.clamp(SIZE_MIN, SIZE_MAX),
            angle,
            depth: depth.clamp(DEPTH_MIN, DEPTH_MAX),
            color,
        }
    }
}

/// Generate the segment list for one fractal at one spot
pub fn generate(kind: FractalKind, request: &GenerationRequest) -> Vec<Segment> {
    match kind {
        FractalKind::Tree => tree(
            request.origin,
            request.size,
            request.angle,
            request.depth,
            request.color,
        ),
        FractalKind::Spiral => spiral(request.origin, request.size, request.depth, request.color),
        FractalKind::Koch => {
            koch_snowflake(request.origin, request.size, request.depth, request.color)
        }
        FractalKind::Fern => fern(
            request.origin,
            request.size,
            request.angle,
            request.depth,
            request.color,
        ),
    }
}

/// Recursive binary tree: each branch forks into two children rotated
/// ±20° with 0.7x the length. Strokes thin out toward the tips.
pub fn tree(origin: Point, length: f64, angle: f64, depth: u32, color: Color) -> Vec<Segment> {
    let mut out = Vec::new();
    tree_into(&mut out, origin, length, angle, depth, color);
    out
}

fn tree_into(
    out: &mut Vec<Segment>,
    origin: Point,
    length: f64,
    angle: f64,
    depth: u32,
    color: Color,
) {
    if depth == 0 || length < LENGTH_FLOOR {
        return;
    }

    let tip = origin.project(length, angle);
    out.push(Segment {
        start: origin,
        end: tip,
        color,
        width: (2 * depth / 3).max(1),
    });

    tree_into(out, tip, length * 0.7, angle + 20.0, depth - 1, color);
    tree_into(out, tip, length * 0.7, angle - 20.0, depth - 1, color);
}

/// Nested quarter-circle arcs with shrinking radius. Each layer restarts
/// its sweep at angle 0 rather than continuing the previous arc, so the
/// result is a stack of arcs sharing a start axis, not a continuous
/// spiral. That is the intended look.
pub fn spiral(center: Point, radius: f64, depth: u32, color: Color) -> Vec<Segment> {
    let mut out = Vec::new();
    spiral_into(&mut out, center, radius, depth, color);
    out
}

fn spiral_into(out: &mut Vec<Segment>, center: Point, radius: f64, depth: u32, color: Color) {
    if depth == 0 || radius < RADIUS_FLOOR {
        return;
    }

    let sweep = std::f64::consts::FRAC_PI_2;
    let mut prev = Point::new(center.x + radius, center.y);
    for i in 1..=ARC_STEPS {
        let a = f64::from(i) / f64::from(ARC_STEPS) * sweep;
        let next = Point::new(center.x + radius * a.cos(), center.y + radius * a.sin());
        out.push(Segment {
            start: prev,
            end: next,
            color,
            width: 2,
        });
        prev = next;
    }

    spiral_into(out, center, radius * 0.75, depth - 1, color);
}

/// Koch snowflake: an equilateral triangle outline whose every edge is a
/// Koch curve. Depth 0 is the raw triangle.
pub fn koch_snowflake(center: Point, size: f64, depth: u32, color: Color) -> Vec<Segment> {
    let mut out = Vec::new();

    let h = size * 3f64.sqrt() / 2.0;
    let left = Point::new(center.x - size / 2.0, center.y + h / 3.0);
    let right = Point::new(center.x + size / 2.0, center.y + h / 3.0);
    let apex = Point::new(center.x, center.y - 2.0 * h / 3.0);

    koch_edge(&mut out, left, right, depth, color);
    koch_edge(&mut out, right, apex, depth, color);
    koch_edge(&mut out, apex, left, depth, color);
    out
}

fn koch_edge(out: &mut Vec<Segment>, p1: Point, p2: Point, depth: u32, color: Color) {
    if depth == 0 {
        out.push(Segment {
            start: p1,
            end: p2,
            color,
            width: 2,
        });
        return;
    }

    let dx = (p2.x - p1.x) / 3.0;
    let dy = (p2.y - p1.y) / 3.0;

    let a = p1;
    let b = Point::new(p1.x + dx, p1.y + dy);
    let d = Point::new(p1.x + 2.0 * dx, p1.y + 2.0 * dy);
    let e = p2;

    // Bump apex: one third-length from B, rotated -60° off the edge direction
    let angle = (d.y - b.y).atan2(d.x - b.x) - std::f64::consts::FRAC_PI_3;
    let len = (dx * dx + dy * dy).sqrt();
    let c = Point::new(b.x + len * angle.cos(), b.y + len * angle.sin());

    koch_edge(out, a, b, depth - 1, color);
    koch_edge(out, b, c, depth - 1, color);
    koch_edge(out, c, d, depth - 1, color);
    koch_edge(out, d, e, depth - 1, color);
}

/// Fern frond: a stem that keeps growing at the same angle plus a pair of
/// short leaves rotated ±30° at every joint.
pub fn fern(origin: Point, length: f64, angle: f64, depth: u32, color: Color) -> Vec<Segment> {
    let mut out = Vec::new();
    fern_into(&mut out, origin, length, angle, depth, color);
    out
}

fn fern_into(
    out: &mut Vec<Segment>,
    origin: Point,
    length: f64,
    angle: f64,
    depth: u32,
    color: Color,
) {
    if depth == 0 || length < LENGTH_FLOOR {
        return;
    }

    let tip = origin.project(length, angle);
    out.push(Segment {
        start: origin,
        end: tip,
        color,
        width: (depth / 2).max(1),
    });

    fern_into(out, tip, length * 0.8, angle, depth - 1, color);
    fern_into(out, tip, length * 0.4, angle + 30.0, depth - 1, color);
    fern_into(out, tip, length * 0.4, angle - 30.0, depth - 1, color);
}
