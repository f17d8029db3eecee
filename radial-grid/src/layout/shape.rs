//! Pure geometry helpers for the radial layout.
//!
//! These are free functions so presentation code (overlays, inspectors)
//! can reuse the exact math the placement engine runs.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::config::{Axis, ChildAlignment, ChildAlignmentOrder, Padding, RadialLayoutConfig, RadialShape};
use crate::error::{LayoutError, Result};

/// Spacing and padding are scaled down by this before entering the math.
const OFFSET_SCALE: f32 = 10.0;

/// Size of a full row of `count` cells with a unit gap between neighbours.
pub fn total_size(cell: Vec2, count: usize) -> Vec2 {
    let n = count as f32;
    Vec2::new(cell.x * n + (n - 1.0), cell.y * n + (n - 1.0))
}

/// -1 for left-to-right, +1 for right-to-left.
pub fn direction(order: ChildAlignmentOrder) -> f32 {
    match order {
        ChildAlignmentOrder::LeftToRight => -1.0,
        ChildAlignmentOrder::RightToLeft => 1.0,
    }
}

/// Signed circumference of the ring a child at (`row`, `col`) sits on.
pub fn circumference(cfg: &RadialLayoutConfig, total: Vec2, row: usize, col: usize) -> Result<f32> {
    let r = &cfg.radial;
    let spacing = Vec2::new(row as f32 * cfg.grid.spacing.x, col as f32 * cfg.grid.spacing.y) / OFFSET_SCALE;

    let along_axis = |factor: Vec2| match cfg.grid.start_axis {
        Axis::Horizontal => total.x * factor.x,
        Axis::Vertical => total.y * factor.y,
    };

    let c = match r.radial_shape {
        RadialShape::Circular => {
            let factor = Vec2::splat((row + 1) as f32 * r.radius_multiplier) + spacing;
            along_axis(factor)
        }
        RadialShape::Spiral => {
            let turns = ((row + 1) + (col + 1)) as f32 * PI.to_radians();
            let factor = Vec2::splat(turns * r.radius_multiplier) + spacing;
            along_axis(factor) * TAU
        }
        RadialShape::Parabolic => return Err(LayoutError::UnsupportedShape(RadialShape::Parabolic)),
    };

    Ok(c * direction(r.child_alignment_order))
}

pub fn radius(circumference: f32) -> f32 {
    circumference / TAU
}

/// Unit direction (plus offsets) for `angle` degrees, before scaling by the radius.
pub fn axis_vector(cfg: &RadialLayoutConfig, angle: f32) -> Vec3 {
    let r = &cfg.radial;
    let cos = (angle + r.rotate_y).to_radians().cos() + r.offset_x;
    let sin = (angle + r.rotate_z).to_radians().sin() + r.offset_y;
    match cfg.grid.start_axis {
        Axis::Horizontal => Vec3::new(cos, sin, 0.0),
        Axis::Vertical => Vec3::new(sin, cos, 0.0),
    }
}

/// Normalized pivot for a 3x3 alignment.
pub fn alignment_pivot(alignment: ChildAlignment) -> Vec2 {
    use ChildAlignment::*;
    let x = match alignment {
        UpperLeft | MiddleLeft | LowerLeft => 0.0,
        UpperCenter | MiddleCenter | LowerCenter => 0.5,
        UpperRight | MiddleRight | LowerRight => 1.0,
    };
    let y = match alignment {
        UpperLeft | UpperCenter | UpperRight => 0.0,
        MiddleLeft | MiddleCenter | MiddleRight => 0.5,
        LowerLeft | LowerCenter | LowerRight => 1.0,
    };
    Vec2::new(x, y)
}

/// Alignment pivot shifted by the padding imbalance.
pub fn pivot(alignment: ChildAlignment, padding: Padding) -> Vec2 {
    let shift = Vec2::new(
        (padding.left - padding.right) as f32,
        (padding.bottom - padding.top) as f32,
    ) / OFFSET_SCALE;
    alignment_pivot(alignment) + shift
}
