// Radial grid layout.
//
// Arranges a flat list of rectangular children around a center point.
//
// Goals:
// - Deterministic: output depends only on the config and the enabled children
// - Pure: placements are computed first, then written back in one sweep
// - Never faults: divisors are floored at 1, errors stay inside the pass
//
// Submodules:
// - config: layout parameters
// - children: active-child collection and a plain rect element
// - planner: rows, columns and angle step
// - shape: circumference, radius, axis and pivot math
// - placement: row-major and column-major strategies
// - radial: the layout group tying it together
// - gizmo: debug overlay lines

use glam::{Vec2, Vec3};

pub mod children;
pub mod config;
pub mod gizmo;
pub mod placement;
pub mod planner;
pub mod radial;
pub mod shape;

pub use children::{ActiveChildSet, RectNode, collect_active};
pub use config::{
    Axis, ChildAlignment, ChildAlignmentOrder, Constraint, GridSettings, Padding, RadialLayoutConfig,
    RadialSettings, RadialShape,
};
pub use gizmo::{GizmoColor, GizmoDrawing, GizmoLine, debug_overlay};
pub use placement::{Placement, compute_placements};
pub use planner::{GridPlan, plan_grid};
pub use radial::RadialLayout;

/// A rectangular child the layout can position.
pub trait LayoutElement {
    fn is_enabled(&self) -> bool;
    fn set_local_position(&mut self, position: Vec3);
    fn set_size(&mut self, size: Vec2);
    fn set_pivot(&mut self, pivot: Vec2);
    fn set_anchors(&mut self, min: Vec2, max: Vec2);
}

/// Layout capability the host drives during its layout cycle.
///
/// The host calls the `calculate_*` methods first, then the `set_*`
/// methods. Hosts serialize calls; a pass never overlaps another.
pub trait LayoutGroup {
    fn calculate_layout_input_horizontal<C: LayoutElement>(&mut self, children: &mut [C]);
    fn calculate_layout_input_vertical<C: LayoutElement>(&mut self, children: &mut [C]);
    fn set_layout_horizontal<C: LayoutElement>(&mut self, children: &mut [C]);
    fn set_layout_vertical<C: LayoutElement>(&mut self, children: &mut [C]);
}
