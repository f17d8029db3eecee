//! Layout configuration.
//!
//! `RadialLayoutConfig` is read-only input to every stage of a layout pass.
//! The host owns it and mutates it only between passes. Everything derives
//! serde so the host can persist it; missing fields fall back to defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Which axis the first trig component maps to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Which of rows/columns is fixed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    #[default]
    Flexible,
    FixedColumnCount,
    FixedRowCount,
}

/// One of the nine anchor positions of a 3x3 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildAlignment {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Formula family used to turn (row, column) into a circumference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialShape {
    #[default]
    Circular,
    Spiral,
    /// Reserved. No circumference formula exists for it yet.
    Parabolic,
}

/// Sign of the circumference, i.e. which way children wind around the center.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildAlignmentOrder {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Four-sided integer offsets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Padding {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Fields shared with a plain grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub padding: Padding,
    pub cell_size: Vec2,
    pub spacing: Vec2,
    pub start_axis: Axis,
    pub child_alignment: ChildAlignment,
    pub constraint: Constraint,
    /// Column count or row count depending on `constraint`. Ignored when flexible.
    pub constraint_count: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            cell_size: Vec2::new(100.0, 100.0),
            spacing: Vec2::ZERO,
            start_axis: Axis::Horizontal,
            child_alignment: ChildAlignment::UpperLeft,
            constraint: Constraint::Flexible,
            constraint_count: 2,
        }
    }
}

/// Fields specific to the radial arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialSettings {
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Leave children at their own size and use `distance` in place of the cell size.
    pub ignore_cell_size: bool,
    pub distance: f32,
    pub radial_shape: RadialShape,
    pub child_alignment_order: ChildAlignmentOrder,
    /// Inspector range 0..=100.
    pub radius_multiplier: f32,
    /// Degrees, inspector range 0..=360. `min_angle <= max_angle` is assumed, not checked.
    pub min_angle: f32,
    pub max_angle: f32,
    /// Clamped into `[min_angle, max_angle]` before use.
    pub start_angle: f32,
}

impl Default for RadialSettings {
    fn default() -> Self {
        Self {
            rotate_y: 0.0,
            rotate_z: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            ignore_cell_size: false,
            distance: 0.0,
            radial_shape: RadialShape::Circular,
            child_alignment_order: ChildAlignmentOrder::LeftToRight,
            radius_multiplier: 1.0,
            min_angle: 0.0,
            max_angle: 0.0,
            start_angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialLayoutConfig {
    pub grid: GridSettings,
    pub radial: RadialSettings,
}

impl RadialLayoutConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(LayoutError::InvalidConfig)
    }

    /// Angular span in degrees. Negative when the range is inverted.
    pub fn angle_span(&self) -> f32 {
        self.radial.max_angle - self.radial.min_angle
    }

    /// Start angle clamped into the configured range.
    ///
    /// The lower bound is checked first, so on an inverted range anything
    /// below `min_angle` becomes `min_angle` and anything above it becomes
    /// `max_angle`. `f32::clamp` would panic there.
    pub fn clamped_start_angle(&self) -> f32 {
        let r = &self.radial;
        if r.start_angle < r.min_angle {
            r.min_angle
        } else if r.start_angle > r.max_angle {
            r.max_angle
        } else {
            r.start_angle
        }
    }

    /// Cell size used in circumference math: the configured cell size, or
    /// `distance` on both axes when children keep their own size.
    pub fn effective_cell_size(&self) -> Vec2 {
        if self.radial.ignore_cell_size {
            Vec2::splat(self.radial.distance)
        } else {
            self.grid.cell_size
        }
    }
}
