// Placement engine.
//
// Walks the planned grid and produces one placement per active child.
// Two strategies:
// - row-major (fixed row count, flexible): columns outer, rows inner, the
//   angle advances once per column.
// - column-major (fixed column count): rows outer, columns inner, the angle
//   advances per child and resets to the start angle on every row. A
//   remainder pass then places anything the primary pass didn't reach.
//
// Placements are computed completely before anything is written back, so a
// failing pass leaves every child untouched.

use glam::{Vec2, Vec3};
use tracing::trace;

use super::config::{Constraint, RadialLayoutConfig};
use super::planner::GridPlan;
use super::shape;
use crate::error::Result;

/// Where one active child goes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Position within the active child set.
    pub slot: usize,
    pub row: usize,
    pub column: usize,
    /// Accumulator value in degrees when the child was placed.
    pub angle: f32,
    pub local_position: Vec3,
    /// Applied to the pivot and to both anchors.
    pub pivot: Vec2,
    /// `None` when children keep their own size.
    pub size: Option<Vec2>,
}

/// Per-pass values shared by every child.
struct PassContext<'a> {
    cfg: &'a RadialLayoutConfig,
    total: Vec2,
    pivot: Vec2,
    size: Option<Vec2>,
}

impl<'a> PassContext<'a> {
    fn new(cfg: &'a RadialLayoutConfig, plan: &GridPlan) -> Self {
        Self {
            cfg,
            total: shape::total_size(cfg.effective_cell_size(), plan.constraint_count),
            pivot: shape::pivot(cfg.grid.child_alignment, cfg.grid.padding),
            size: (!cfg.radial.ignore_cell_size).then_some(cfg.grid.cell_size),
        }
    }

    /// `circumference_row` differs from `row` only in the remainder pass.
    fn place(&self, slot: usize, row: usize, circumference_row: usize, column: usize, angle: f32) -> Result<Placement> {
        let c = shape::circumference(self.cfg, self.total, circumference_row, column)?;
        let radius = shape::radius(c);
        let local_position = shape::axis_vector(self.cfg, angle) * radius;
        trace!(slot, row, column, angle, radius, "placed child");
        Ok(Placement {
            slot,
            row,
            column,
            angle,
            local_position,
            pivot: self.pivot,
            size: self.size,
        })
    }
}

/// Compute placements for `element_count` active children.
pub fn compute_placements(cfg: &RadialLayoutConfig, plan: &GridPlan, element_count: usize) -> Result<Vec<Placement>> {
    let start_angle = cfg.clamped_start_angle();
    match cfg.grid.constraint {
        Constraint::FixedColumnCount => place_column_major(cfg, plan, element_count, start_angle),
        Constraint::FixedRowCount | Constraint::Flexible => place_row_major(cfg, plan, element_count, start_angle),
    }
}

/// Columns outer, rows inner; one angle step per column.
pub fn place_row_major(
    cfg: &RadialLayoutConfig,
    plan: &GridPlan,
    element_count: usize,
    start_angle: f32,
) -> Result<Vec<Placement>> {
    let ctx = PassContext::new(cfg, plan);
    let mut out = Vec::with_capacity(element_count);
    let mut angle = start_angle;

    for col in 0..plan.column_count {
        for row in 0..plan.row_count {
            if out.len() >= element_count {
                break;
            }
            out.push(ctx.place(out.len(), row, row, col, angle)?);
        }
        angle += plan.angle_per_child;
    }
    Ok(out)
}

/// Rows outer, columns inner; one angle step per child, reset each row.
/// Leftovers go through the remainder pass.
pub fn place_column_major(
    cfg: &RadialLayoutConfig,
    plan: &GridPlan,
    element_count: usize,
    start_angle: f32,
) -> Result<Vec<Placement>> {
    let ctx = PassContext::new(cfg, plan);
    let mut out = Vec::with_capacity(element_count);

    for row in 0..plan.row_count {
        let mut angle = start_angle;
        for col in 0..plan.column_count {
            if out.len() >= element_count {
                break;
            }
            out.push(ctx.place(out.len(), row, row, col, angle)?);
            angle += plan.angle_per_child;
        }
    }

    let leftover = element_count - out.len();
    if leftover == 0 || plan.column_count == 0 {
        return Ok(out);
    }

    // Remainder: extra rows past the last primary row, sized to hold the
    // leftovers. Circumference stays on the last primary row.
    let last_row = plan.row_count.saturating_sub(1);
    let extra_rows = leftover.div_ceil(plan.column_count);
    let mut angle = start_angle;
    for col in 0..plan.column_count {
        for row in (last_row + 1)..(last_row + 1 + extra_rows) {
            if out.len() >= element_count {
                break;
            }
            out.push(ctx.place(out.len(), row, last_row, col, angle)?);
        }
        angle += plan.angle_per_child;
    }
    Ok(out)
}
