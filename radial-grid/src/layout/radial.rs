// Radial layout group.
//
// Composes the configuration with the per-pass pipeline:
// collect active children -> plan the grid -> compute placements -> apply.
//
// A pass never fails outward. Errors are logged and the children keep
// whatever values they had before the pass.

use tracing::{debug, warn};

use super::children::collect_active;
use super::config::RadialLayoutConfig;
use super::placement::{Placement, compute_placements};
use super::planner::{GridPlan, plan_grid};
use super::{LayoutElement, LayoutGroup};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RadialLayout {
    pub config: RadialLayoutConfig,
    element_count: usize,
    has_collected: bool,
}

impl RadialLayout {
    pub fn new(config: RadialLayoutConfig) -> Self {
        Self { config, element_count: 0, has_collected: false }
    }

    /// Active child count seen by the last pass.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Whether a collection has run at least once.
    pub fn has_collected(&self) -> bool {
        self.has_collected
    }

    /// Host enabled the layout.
    pub fn on_enable<C: LayoutElement>(&mut self, children: &mut [C]) {
        self.calculate_radial(children);
    }

    /// Host edited the configuration.
    pub fn on_validate<C: LayoutElement>(&mut self, children: &mut [C]) {
        self.calculate_radial(children);
    }

    /// Run one pass without touching the children.
    ///
    /// Returns the plan and the placements in active-child order, or `None`
    /// in the plan slot when there are no active children.
    pub fn compute<C: LayoutElement>(&mut self, children: &[C]) -> Result<(Option<GridPlan>, Vec<Placement>)> {
        let active = collect_active(children);
        self.has_collected = true;
        self.element_count = active.len();

        if active.is_empty() {
            debug!("no active children, skipping radial pass");
            return Ok((None, Vec::new()));
        }

        let plan = plan_grid(&self.config, active.len());
        debug!(
            element_count = active.len(),
            rows = plan.row_count,
            columns = plan.column_count,
            step = plan.angle_per_child,
            constraint = ?self.config.grid.constraint,
            "radial pass"
        );
        let placements = compute_placements(&self.config, &plan, active.len())?;
        Ok((Some(plan), placements))
    }

    /// Collect, plan, place and write back. Never fails outward.
    pub fn calculate_radial<C: LayoutElement>(&mut self, children: &mut [C]) {
        let placements = match self.compute(children) {
            Ok((_, placements)) => placements,
            Err(e) => {
                warn!(error = %e, "radial layout pass failed, children left unchanged");
                return;
            }
        };

        Self::apply(children, &placements);
    }

    /// Write placements onto the active children they were computed for.
    pub fn apply<C: LayoutElement>(children: &mut [C], placements: &[Placement]) {
        let active = collect_active(children);
        for p in placements {
            let Some(index) = active.get(p.slot) else {
                continue;
            };
            apply_placement(&mut children[index], p);
        }
    }
}

fn apply_placement<C: LayoutElement>(child: &mut C, p: &Placement) {
    if let Some(size) = p.size {
        child.set_size(size);
    }
    child.set_local_position(p.local_position);
    child.set_pivot(p.pivot);
    child.set_anchors(p.pivot, p.pivot);
}

impl LayoutGroup for RadialLayout {
    fn calculate_layout_input_horizontal<C: LayoutElement>(&mut self, children: &mut [C]) {
        self.calculate_radial(children);
    }

    fn calculate_layout_input_vertical<C: LayoutElement>(&mut self, children: &mut [C]) {
        self.calculate_radial(children);
    }

    // Positions are already written while computing the input.
    fn set_layout_horizontal<C: LayoutElement>(&mut self, _children: &mut [C]) {}

    fn set_layout_vertical<C: LayoutElement>(&mut self, _children: &mut [C]) {}
}
