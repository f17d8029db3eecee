//! Debug overlay: reference angle lines drawn from the layout center.
//!
//! Purely visual. Nothing here feeds back into placement.

use glam::Vec3;
use serde::Serialize;

use super::config::{Axis, Constraint, RadialLayoutConfig};

/// Tolerance so the last line at `max_angle` survives float drift.
const ANGLE_EPSILON: f32 = 1e-3;

/// Upper bound on lines per fan.
pub const MAX_FAN_LINES: usize = 720;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GizmoColor {
    /// The min..max fan.
    Green,
    /// The same fan shifted by the start angle.
    Yellow,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GizmoLine {
    pub from: Vec3,
    pub to: Vec3,
    pub color: GizmoColor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GizmoDrawing {
    pub lines: Vec<GizmoLine>,
}

/// Angles `min, min + step, ..` up to and including `max`.
fn fan_angles(min: f32, max: f32, step: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| min + i as f32 * step)
        .take_while(move |&a| a <= max + ANGLE_EPSILON)
        .take(MAX_FAN_LINES)
}

/// Build the overlay for a layout centered at `center`.
pub fn debug_overlay(cfg: &RadialLayoutConfig, element_count: usize, center: Vec3) -> GizmoDrawing {
    let r = &cfg.radial;
    let count = match cfg.grid.constraint {
        Constraint::Flexible => element_count as i64,
        _ => i64::from(cfg.grid.constraint_count),
    };
    let step = if count > 1 { (r.max_angle - r.min_angle) / (count - 1) as f32 } else { 0.0 };

    if step == 0.0 || !step.is_finite() {
        return GizmoDrawing {
            lines: vec![GizmoLine { from: center, to: center, color: GizmoColor::Green }],
        };
    }
    // A negative step means an inverted range; `min..=max` is empty then.
    if step < 0.0 {
        return GizmoDrawing::default();
    }

    let radius = r.distance;
    let mut lines = Vec::new();

    for angle in fan_angles(r.min_angle, r.max_angle, step) {
        let rad = angle.to_radians();
        let point = center + Vec3::new(rad.cos(), rad.sin(), 0.0) * radius;
        lines.push(GizmoLine { from: center, to: point, color: GizmoColor::Green });
    }

    for angle in fan_angles(r.min_angle, r.max_angle, step) {
        let rad = (angle + r.start_angle).to_radians();
        let dir = match cfg.grid.start_axis {
            Axis::Horizontal => Vec3::new(rad.cos(), rad.sin(), 0.0),
            Axis::Vertical => Vec3::new(rad.sin(), rad.cos(), 0.0),
        };
        lines.push(GizmoLine { from: center, to: center + dir * radius, color: GizmoColor::Yellow });
    }

    GizmoDrawing { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn config(min: f32, max: f32) -> RadialLayoutConfig {
        let mut cfg = RadialLayoutConfig::default();
        cfg.radial.min_angle = min;
        cfg.radial.max_angle = max;
        cfg.radial.distance = 10.0;
        cfg
    }

    #[test]
    fn test_single_element_draws_point() {
        let drawing = debug_overlay(&config(0.0, 180.0), 1, Vec3::ONE);
        assert_eq!(drawing.lines.len(), 1);
        assert_eq!(drawing.lines[0].from, drawing.lines[0].to);
    }

    #[test]
    fn test_zero_span_draws_point() {
        let drawing = debug_overlay(&config(90.0, 90.0), 5, Vec3::ZERO);
        assert_eq!(drawing.lines.len(), 1);
    }

    #[test]
    fn test_two_fans() {
        let mut cfg = config(0.0, 180.0);
        cfg.radial.start_angle = 90.0;
        let drawing = debug_overlay(&cfg, 3, Vec3::ZERO);
        let green: Vec<_> = drawing.lines.iter().filter(|l| l.color == GizmoColor::Green).collect();
        let yellow: Vec<_> = drawing.lines.iter().filter(|l| l.color == GizmoColor::Yellow).collect();
        assert_eq!(green.len(), 3);
        assert_eq!(yellow.len(), 3);

        assert_abs_diff_eq!(green[0].to.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(green[2].to.x, -10.0, epsilon = 1e-4);
        // Shifted by the start angle.
        assert_abs_diff_eq!(yellow[0].to.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fixed_constraint_uses_configured_count() {
        let mut cfg = config(0.0, 90.0);
        cfg.grid.constraint = Constraint::FixedColumnCount;
        cfg.grid.constraint_count = 4;
        let drawing = debug_overlay(&cfg, 100, Vec3::ZERO);
        assert_eq!(drawing.lines.len(), 8);
    }

    #[test]
    fn test_huge_constraint_count_is_capped() {
        let mut cfg = config(0.0, 360.0);
        cfg.grid.constraint = Constraint::FixedRowCount;
        cfg.grid.constraint_count = i32::MAX;
        let drawing = debug_overlay(&cfg, 0, Vec3::ZERO);
        assert_eq!(drawing.lines.len(), 2 * MAX_FAN_LINES);
    }

    #[test]
    fn test_inverted_range_terminates() {
        let drawing = debug_overlay(&config(180.0, 0.0), 4, Vec3::ZERO);
        assert!(drawing.lines.is_empty());
    }
}
