// Angle/geometry planning.
//
// Turns the element count and constraint into a grid shape and the angular
// step between neighbours. Divisors are floored at 1, so a plan never
// divides by zero no matter how the configuration is set.

use super::config::{Constraint, RadialLayoutConfig, RadialShape};

/// Spans wider than this distribute over `n` slots instead of `n - 1`,
/// so a full circle doesn't put the first and last child on top of each other.
pub const FULL_CIRCLE_THRESHOLD: f32 = 315.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridPlan {
    pub row_count: usize,
    pub column_count: usize,
    /// Resolved constraint count: element count when flexible, floored at 1.
    pub constraint_count: usize,
    /// Divisor applied to the angular span.
    pub divisor: usize,
    /// Degrees between neighbouring children.
    pub angle_per_child: f32,
}

/// Constraint count after flexible substitution and the floor at 1.
pub fn resolve_constraint_count(cfg: &RadialLayoutConfig, element_count: usize) -> usize {
    match cfg.grid.constraint {
        Constraint::Flexible => element_count.max(1),
        _ => usize::try_from(cfg.grid.constraint_count).unwrap_or(0).max(1),
    }
}

fn wraps_full_circle(span: f32) -> bool {
    span.abs() > FULL_CIRCLE_THRESHOLD
}

/// `n` when `use_full` holds, else `n - 1`, never below 1.
fn pick_divisor(column_count: usize, use_full: bool) -> usize {
    let d = if use_full { column_count } else { column_count.saturating_sub(1) };
    d.max(1)
}

/// Angle divisor for a given mode and shape.
///
/// Fixed row count deliberately skips the small-count shortcut the other
/// modes apply.
pub fn angle_divisor(
    constraint: Constraint,
    shape: RadialShape,
    constraint_count: usize,
    column_count: usize,
    span: f32,
) -> usize {
    let small = constraint_count <= 2;
    match constraint {
        Constraint::FixedColumnCount => pick_divisor(column_count, small || wraps_full_circle(span)),
        Constraint::FixedRowCount => pick_divisor(column_count, wraps_full_circle(span)),
        Constraint::Flexible => match shape {
            RadialShape::Spiral => pick_divisor(column_count, small),
            RadialShape::Circular => pick_divisor(column_count, small || wraps_full_circle(span)),
            RadialShape::Parabolic => pick_divisor(column_count, true),
        },
    }
}

/// Derive rows, columns and the angular step for `element_count` children.
pub fn plan_grid(cfg: &RadialLayoutConfig, element_count: usize) -> GridPlan {
    let constraint_count = resolve_constraint_count(cfg, element_count);
    let span = cfg.angle_span();

    let (row_count, column_count) = match cfg.grid.constraint {
        Constraint::FixedColumnCount => (element_count.div_ceil(constraint_count), constraint_count),
        Constraint::FixedRowCount => (constraint_count, element_count.div_ceil(constraint_count)),
        Constraint::Flexible => (1, element_count),
    };

    let divisor = angle_divisor(
        cfg.grid.constraint,
        cfg.radial.radial_shape,
        constraint_count,
        column_count,
        span,
    );
    debug_assert!(divisor >= 1, "angle divisor must be positive");

    GridPlan {
        row_count,
        column_count,
        constraint_count,
        divisor,
        angle_per_child: span / divisor as f32,
    }
}
