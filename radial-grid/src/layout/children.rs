// Active-child collection.
//
// Filters the host's child list down to the enabled elements, keeping tree
// order. The result is a list of indices into the host slice, rebuilt from
// scratch every pass so it can never hold stale references.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::LayoutElement;

/// Ordered indices of the enabled children for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveChildSet {
    indices: Vec<usize>,
}

impl ActiveChildSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index into the host slice of the `n`th active child.
    pub fn get(&self, n: usize) -> Option<usize> {
        self.indices.get(n).copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Collect the enabled children in tree order.
pub fn collect_active<C: LayoutElement>(children: &[C]) -> ActiveChildSet {
    let indices = children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_enabled())
        .map(|(i, _)| i)
        .collect();
    ActiveChildSet { indices }
}

/// A plain rectangle the layout can write into.
///
/// Used at the JS boundary and by hosts that keep their tree elsewhere and
/// copy results back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectNode {
    pub enabled: bool,
    pub local_position: Vec3,
    pub size: Vec2,
    pub pivot: Vec2,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
}

impl Default for RectNode {
    fn default() -> Self {
        Self {
            enabled: true,
            local_position: Vec3::ZERO,
            size: Vec2::new(100.0, 100.0),
            pivot: Vec2::splat(0.5),
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
        }
    }
}

impl RectNode {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

impl LayoutElement for RectNode {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.local_position = position;
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    fn set_anchors(&mut self, min: Vec2, max: Vec2) {
        self.anchor_min = min;
        self.anchor_max = max;
    }
}
