//! Inspector adapter.
//!
//! Describes which configuration fields a property panel should show for a
//! given config, in display order. Fields that don't apply to the current
//! settings are left out.

use serde::Serialize;

use crate::layout::{Constraint, RadialLayoutConfig};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Padding,
    CellSize,
    Spacing,
    StartAxis,
    ChildAlignment,
    Constraint,
    ConstraintCount,
    RotateY,
    RotateZ,
    OffsetX,
    OffsetY,
    IgnoreCellSize,
    Distance,
    RadialShape,
    ChildAlignmentOrder,
    RadiusMultiplier,
    MinAngle,
    MaxAngle,
    StartAngle,
    ElementCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectorField {
    pub id: FieldId,
    /// Nesting depth under the previous field.
    pub indent: u8,
    /// Slider bounds, when the field has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f32, f32)>,
}

impl InspectorField {
    fn plain(id: FieldId) -> Self {
        Self { id, indent: 0, range: None }
    }

    fn ranged(id: FieldId, min: f32, max: f32) -> Self {
        Self { id, indent: 0, range: Some((min, max)) }
    }
}

/// Fields to display for `cfg`, top to bottom.
pub fn visible_fields(cfg: &RadialLayoutConfig) -> Vec<InspectorField> {
    let ignore = cfg.radial.ignore_cell_size;
    let mut fields = vec![InspectorField::plain(FieldId::Padding)];

    if !ignore {
        fields.push(InspectorField::plain(FieldId::CellSize));
    }
    fields.extend(
        [FieldId::Spacing, FieldId::StartAxis, FieldId::ChildAlignment, FieldId::Constraint]
            .map(InspectorField::plain),
    );
    if matches!(cfg.grid.constraint, Constraint::FixedColumnCount | Constraint::FixedRowCount) {
        fields.push(InspectorField { indent: 1, ..InspectorField::plain(FieldId::ConstraintCount) });
    }
    fields.extend(
        [FieldId::RotateY, FieldId::RotateZ, FieldId::OffsetX, FieldId::OffsetY, FieldId::IgnoreCellSize]
            .map(InspectorField::plain),
    );
    if ignore {
        fields.push(InspectorField::plain(FieldId::Distance));
    }
    fields.push(InspectorField::plain(FieldId::RadialShape));
    fields.push(InspectorField::plain(FieldId::ChildAlignmentOrder));
    fields.push(InspectorField::ranged(FieldId::RadiusMultiplier, 0.0, 100.0));
    for id in [FieldId::MinAngle, FieldId::MaxAngle, FieldId::StartAngle] {
        fields.push(InspectorField::ranged(id, 0.0, 360.0));
    }
    fields.push(InspectorField::plain(FieldId::ElementCount));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cfg: &RadialLayoutConfig) -> Vec<FieldId> {
        visible_fields(cfg).into_iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_default_hides_count_and_distance() {
        let ids = ids(&RadialLayoutConfig::default());
        assert!(ids.contains(&FieldId::CellSize));
        assert!(!ids.contains(&FieldId::ConstraintCount));
        assert!(!ids.contains(&FieldId::Distance));
        assert_eq!(ids.first(), Some(&FieldId::Padding));
        assert_eq!(ids.last(), Some(&FieldId::ElementCount));
    }

    #[test]
    fn test_ignore_cell_size_swaps_fields() {
        let mut cfg = RadialLayoutConfig::default();
        cfg.radial.ignore_cell_size = true;
        let ids = ids(&cfg);
        assert!(!ids.contains(&FieldId::CellSize));
        let ignore = ids.iter().position(|&f| f == FieldId::IgnoreCellSize).unwrap();
        assert_eq!(ids[ignore + 1], FieldId::Distance);
    }

    #[test]
    fn test_fixed_constraint_shows_indented_count() {
        let mut cfg = RadialLayoutConfig::default();
        cfg.grid.constraint = Constraint::FixedRowCount;
        let fields = visible_fields(&cfg);
        let pos = fields.iter().position(|f| f.id == FieldId::ConstraintCount).unwrap();
        assert_eq!(fields[pos - 1].id, FieldId::Constraint);
        assert_eq!(fields[pos].indent, 1);
    }

    #[test]
    fn test_angle_ranges() {
        let fields = visible_fields(&RadialLayoutConfig::default());
        let max = fields.iter().find(|f| f.id == FieldId::MaxAngle).unwrap();
        assert_eq!(max.range, Some((0.0, 360.0)));
        let mult = fields.iter().find(|f| f.id == FieldId::RadiusMultiplier).unwrap();
        assert_eq!(mult.range, Some((0.0, 100.0)));
    }
}
