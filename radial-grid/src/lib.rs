//! Radial grid layout.
//!
//! Places rectangular children on circular or spiral rings around a center
//! point, as a drop-in alternative to a plain grid layout group.

pub mod error;
pub mod inspector;
pub mod layout;
pub mod output;
pub mod wasm;

pub use error::{LayoutError, Result};
pub use layout::{
    Axis, ChildAlignment, ChildAlignmentOrder, Constraint, LayoutElement, LayoutGroup, Padding, RadialLayout,
    RadialLayoutConfig, RadialShape, RectNode,
};
