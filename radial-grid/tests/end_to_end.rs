//! End-to-end layout passes through the public API.

use std::f32::consts::TAU;

use approx::assert_abs_diff_eq;
use glam::{Vec2, Vec3};
use radial_grid::{
    ChildAlignment, ChildAlignmentOrder, Constraint, LayoutGroup, RadialLayout, RadialLayoutConfig, RadialShape,
    RectNode,
};

fn full_circle() -> RadialLayoutConfig {
    let mut cfg = RadialLayoutConfig::default();
    cfg.grid.constraint = Constraint::Flexible;
    cfg.grid.cell_size = Vec2::new(10.0, 10.0);
    cfg.radial.radial_shape = RadialShape::Circular;
    cfg.radial.min_angle = 0.0;
    cfg.radial.max_angle = 360.0;
    cfg.radial.start_angle = 0.0;
    cfg.radial.radius_multiplier = 1.0;
    cfg
}

#[test]
fn eight_children_on_a_full_circle() {
    let mut layout = RadialLayout::new(full_circle());
    let mut children = vec![RectNode::default(); 8];
    layout.calculate_layout_input_horizontal(&mut children);

    // 8 cells of 10 plus 7 unit gaps; left-to-right winds with a negative radius.
    let radius = -87.0 / TAU;
    for (k, child) in children.iter().enumerate() {
        let angle = (45.0 * k as f32).to_radians();
        assert_abs_diff_eq!(child.local_position.x, radius * angle.cos(), epsilon = 1e-3);
        assert_abs_diff_eq!(child.local_position.y, radius * angle.sin(), epsilon = 1e-3);
        assert_eq!(child.local_position.z, 0.0);
        assert_abs_diff_eq!(child.local_position.length(), radius.abs(), epsilon = 1e-3);
        assert_eq!(child.size, Vec2::new(10.0, 10.0));
    }

    for i in 0..children.len() {
        for j in (i + 1)..children.len() {
            let d = children[i].local_position.distance(children[j].local_position);
            assert!(d > 1.0, "children {i} and {j} overlap");
        }
    }
}

#[test]
fn right_to_left_mirrors_through_center() {
    let mut ltr = RadialLayout::new(full_circle());
    let mut rtl_cfg = full_circle();
    rtl_cfg.radial.child_alignment_order = ChildAlignmentOrder::RightToLeft;
    let mut rtl = RadialLayout::new(rtl_cfg);

    let mut a = vec![RectNode::default(); 5];
    let mut b = vec![RectNode::default(); 5];
    ltr.calculate_radial(&mut a);
    rtl.calculate_radial(&mut b);
    for (x, y) in a.iter().zip(&b) {
        assert_abs_diff_eq!(x.local_position.x, -y.local_position.x, epsilon = 1e-4);
        assert_abs_diff_eq!(x.local_position.y, -y.local_position.y, epsilon = 1e-4);
    }
}

#[test]
fn fixed_columns_build_concentric_rings() {
    let mut cfg = full_circle();
    cfg.grid.constraint = Constraint::FixedColumnCount;
    cfg.grid.constraint_count = 4;
    cfg.grid.child_alignment = ChildAlignment::LowerRight;
    let mut layout = RadialLayout::new(cfg);
    let mut children = vec![RectNode::default(); 10];
    layout.calculate_radial(&mut children);

    // total = 4 * 10 + 3 = 43; ring r has factor r + 1.
    let ring = |n: f32| 43.0 * n / TAU;
    for (k, child) in children.iter().enumerate() {
        let expected = ring((k / 4 + 1) as f32);
        assert_abs_diff_eq!(child.local_position.length(), expected, epsilon = 1e-3);
        assert_eq!(child.pivot, Vec2::new(1.0, 1.0));
        assert_eq!(child.anchor_min, child.anchor_max);
    }
}

#[test]
fn ignore_cell_size_keeps_child_sizes() {
    let mut cfg = full_circle();
    cfg.radial.ignore_cell_size = true;
    cfg.radial.distance = 20.0;
    let mut layout = RadialLayout::new(cfg);
    let mut children = vec![
        RectNode { size: Vec2::new(3.0, 4.0), ..RectNode::default() },
        RectNode { size: Vec2::new(5.0, 6.0), ..RectNode::default() },
    ];
    layout.calculate_radial(&mut children);
    assert_eq!(children[0].size, Vec2::new(3.0, 4.0));
    assert_eq!(children[1].size, Vec2::new(5.0, 6.0));
    // 2 * 20 + 1 = 41
    assert_abs_diff_eq!(children[0].local_position.length(), 41.0 / TAU, epsilon = 1e-3);
    assert_ne!(children[0].local_position, Vec3::ZERO);
}

#[test]
fn json_boundary_round() {
    let out = radial_grid::wasm::run_layout(
        r#"{"grid": {"cell_size": [10.0, 10.0]}, "radial": {"max_angle": 360.0}}"#,
        &serde_json::to_string(&vec![RectNode::default(); 8]).unwrap(),
    );
    let plan = out.plan.unwrap();
    assert_eq!((plan.rows, plan.columns), (1, 8));
    assert_abs_diff_eq!(plan.angle_step, 45.0, epsilon = 1e-5);
}
