//! Output types for the JS host.
//!
//! These structs are serialized to JSON and handed back across the wasm
//! boundary after a layout pass.

use serde::Serialize;

use crate::layout::{GridPlan, RectNode};

/// Grid shape the pass settled on.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub rows: usize,
    pub columns: usize,
    /// Degrees between neighbouring children.
    pub angle_step: f32,
}

impl From<GridPlan> for PlanOutput {
    fn from(plan: GridPlan) -> Self {
        Self {
            rows: plan.row_count,
            columns: plan.column_count,
            angle_step: plan.angle_per_child,
        }
    }
}

/// The combined output sent to the host
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    /// Every child, in input order, with results written in.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RectNode>,
    pub element_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LayoutOutput {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            children: vec![],
            element_count: 0,
            plan: None,
            error: Some(message.into()),
        }
    }
}
