//! Integration tests for prism-math.

use prism_math::{Aabb, Axis, EulerRot, Quat, Transform, Vec3};
use proptest::prelude::*;

fn unit_box_at(center: Vec3) -> Aabb {
    Aabb::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5))
}

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn overlapping_boxes() {
    let a = unit_box_at(Vec3::ZERO);
    let b = unit_box_at(Vec3::new(0.5, 0.0, 0.0));
    assert!(a.overlaps(&b));
}

#[test]
fn separated_boxes() {
    let a = unit_box_at(Vec3::ZERO);
    let b = unit_box_at(Vec3::new(3.0, 0.0, 0.0));
    assert!(!a.overlaps(&b));
    assert!(!a.overlaps_on(&b, Axis::X));
    assert!(a.overlaps_on(&b, Axis::Y));
    assert!(a.overlaps_on(&b, Axis::Z));
}

#[test]
fn touching_faces_overlap() {
    let a = unit_box_at(Vec3::ZERO);
    let b = unit_box_at(Vec3::new(1.0, 0.0, 0.0));
    assert!(a.overlaps(&b));
}

#[test]
fn from_points_empty_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn from_single_point_collapses() {
    let p = Vec3::new(1.0, -2.0, 3.0);
    let aabb = Aabb::from_points([p]).unwrap();
    assert_eq!(aabb.min, p);
    assert_eq!(aabb.max, p);
    assert_eq!(aabb.volume(), 0.0);
}

#[test]
fn union_and_volume() {
    let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
    let u = a.union(&b);
    assert_eq!(u.min, Vec3::ZERO);
    assert_eq!(u.max, Vec3::splat(3.0));
    assert!((u.volume() - 27.0).abs() < 1e-6);
    assert!(u.contains_aabb(&a));
    assert!(u.contains_aabb(&b));
}

#[test]
fn array_layout() {
    let a = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(a.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(Aabb::from_array(a.to_array()), a);
}

#[test]
fn axis_components() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let picked: Vec<f32> = Axis::ALL.iter().map(|a| a.of(v)).collect();
    assert_eq!(picked, vec![1.0, 2.0, 3.0]);
    assert_eq!(Axis::Z.index(), 2);
}

// ─── Transform Tests ──────────────────────────────────────────

#[test]
fn transform_applies_scale_then_rotation_then_translation() {
    let t = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))
        .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2))
        .with_scale(2.0);
    let p = t.transform_point(Vec3::X);
    assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);
}

#[test]
fn affine_matches_transform_point() {
    let t = Transform::from_translation(Vec3::new(0.3, -1.0, 2.0))
        .with_rotation(Quat::from_euler(EulerRot::XYZ, 0.4, 1.1, -0.7))
        .with_scale(0.25);
    let affine = t.to_affine();
    let p = Vec3::new(0.5, 0.6, -0.7);
    assert!((affine.transform_point3(p) - t.transform_point(p)).length() < 1e-5);
}

#[test]
fn compose_applies_inner_first() {
    let outer = Transform::IDENTITY.with_rotation(Quat::from_rotation_y(0.8));
    let inner = Transform::from_translation(Vec3::new(2.0, 0.0, 0.0)).with_scale(0.5);
    let composed = outer.compose(&inner);
    let p = Vec3::new(1.0, 1.0, 1.0);
    let expected = outer.transform_point(inner.transform_point(p));
    assert!((composed.transform_point(p) - expected).length() < 1e-5);
}

#[test]
fn transform_serialization() {
    let t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0)).with_scale(4.0);
    let json = serde_json::to_string(&t).unwrap();
    let recovered: Transform = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, t);
}

// ─── Properties ───────────────────────────────────────────────

fn arb_box() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-10.0f32..10.0),
        prop::array::uniform3(0.0f32..5.0),
    )
        .prop_map(|(min, size)| {
            let min = Vec3::from_array(min);
            Aabb::new(min, min + Vec3::from_array(size))
        })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn union_contains_both(a in arb_box(), b in arb_box()) {
        let u = a.union(&b);
        prop_assert!(u.contains_aabb(&a));
        prop_assert!(u.contains_aabb(&b));
    }
}
