//! Integration tests for prism-contact.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use prism_contact::broad::{BroadPhase, BruteForceBroadPhase, CandidatePair};
use prism_contact::bvh::{check_node_collision, Bvh, BvhNode};
use prism_contact::collider::Collider;
use prism_contact::collision_pipeline::CollisionPipeline;
use prism_contact::contact::{CollisionMode, CollisionPair};
use prism_contact::narrow::{AabbNarrowPhase, BvhNarrowPhase, NarrowPhase};
use prism_contact::sweep_prune::SweepAndPrune;
use prism_contact::triangle::{point_plane_side, triangles_intersect};
use prism_math::{Aabb, Affine3A, Axis, Quat, Transform, Vec3};
use prism_mesh::generators::{cuboid, octahedron, tetrahedron};
use prism_mesh::TriangleMesh;
use prism_types::ObjectId;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unit_cube_at(translation: Vec3, rotation: Quat) -> Collider {
    let transform = Transform::from_translation(translation).with_rotation(rotation);
    Collider::new(&cuboid(Vec3::splat(0.5)), &transform.to_affine()).unwrap()
}

fn tilt() -> Quat {
    Quat::from_rotation_y(0.3) * Quat::from_rotation_z(0.2)
}

fn cube_box(center: Vec3, half: f32) -> Aabb {
    Aabb::new(center - Vec3::splat(half), center + Vec3::splat(half))
}

fn random_boxes(rng: &mut StdRng, n: usize, spread: f32) -> Vec<Aabb> {
    (0..n)
        .map(|_| {
            let c = Vec3::new(
                rng.random_range(-spread..spread),
                rng.random_range(-spread..spread),
                rng.random_range(-spread..spread),
            );
            let h = Vec3::new(
                rng.random_range(0.05..0.5),
                rng.random_range(0.05..0.5),
                rng.random_range(0.05..0.5),
            );
            Aabb::new(c - h, c + h)
        })
        .collect()
}

fn pairs_of(broad: &dyn BroadPhase) -> Vec<CandidatePair> {
    let mut out = Vec::new();
    broad.query_pairs(&mut out);
    out
}

/// Narrow phase that counts invocations and accepts everything.
struct CountingNarrowPhase {
    calls: Arc<AtomicUsize>,
}

impl NarrowPhase for CountingNarrowPhase {
    fn collide(&self, _a: &Collider, _b: &Collider) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// One small triangle per centroid. The vertex offsets cancel exactly,
/// so each world-space centroid equals the given point.
fn triangles_at(centroids: &[Vec3]) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(centroids.len() * 3, centroids.len());
    for &c in centroids {
        let a = mesh.push_vertex(c + Vec3::new(0.5, 0.0, 0.0));
        let b = mesh.push_vertex(c + Vec3::new(-0.5, 0.0, 0.0));
        let d = mesh.push_vertex(c + Vec3::new(0.0, 1.0, 0.0));
        mesh.indices.extend_from_slice(&[a, b, d]);
    }
    mesh
}

/// Sorted triangle ids of every leaf below `idx`.
fn leaf_triangles(bvh: &Bvh, idx: usize) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = vec![idx];
    while let Some(i) = stack.pop() {
        match bvh.node(i) {
            BvhNode::Leaf { triangle, .. } => out.push(triangle.0),
            BvhNode::Internal { left, right, .. } => stack.extend([*left, *right]),
        }
    }
    out.sort_unstable();
    out
}

fn root_children(bvh: &Bvh) -> (usize, usize) {
    match bvh.node(bvh.root()) {
        BvhNode::Internal { left, right, .. } => (*left, *right),
        BvhNode::Leaf { .. } => panic!("root is a leaf"),
    }
}

// ─── Triangle Tests ───────────────────────────────────────────

#[test]
fn crossing_triangles_intersect() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let t2 = [
        Vec3::new(0.5, 0.5, -1.0),
        Vec3::new(0.5, 0.5, 1.0),
        Vec3::new(1.5, -0.5, 0.5),
    ];
    assert!(triangles_intersect(&t1, &t2));
    assert!(triangles_intersect(&t2, &t1));
}

#[test]
fn piercing_triangle_intersects() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let t2 = [
        Vec3::new(0.2, 0.2, -1.0),
        Vec3::new(0.6, 0.2, 1.0),
        Vec3::new(0.4, 0.8, 0.5),
    ];
    assert!(triangles_intersect(&t1, &t2));
}

#[test]
fn coplanar_triangles_report_no_intersection() {
    let t1 = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let t2 = [Vec3::new(0.5, 0.5, 0.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    assert!(!triangles_intersect(&t1, &t2));
    assert!(!triangles_intersect(&t2, &t1));
}

#[test]
fn parallel_planes_do_not_intersect() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let t2 = t1.map(|p| p + Vec3::Z);
    assert!(!triangles_intersect(&t1, &t2));
}

#[test]
fn disjoint_along_plane_intersection_line() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let t2 = [
        Vec3::new(3.0, -0.5, -1.0),
        Vec3::new(3.0, 0.5, 1.0),
        Vec3::new(4.0, 0.0, 0.5),
    ];
    assert!(!triangles_intersect(&t1, &t2));
}

#[test]
fn vertex_touching_plane_is_not_a_crossing() {
    let t1 = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let t2 = [
        Vec3::new(0.5, 0.5, -1.0),
        Vec3::new(0.5, 0.5, 1.0),
        Vec3::new(1.5, -0.5, 0.0),
    ];
    assert!(!triangles_intersect(&t1, &t2));
}

#[test]
fn point_plane_side_sign() {
    assert!(point_plane_side(Vec3::Z, Vec3::ZERO, Vec3::new(3.0, 1.0, 0.5)) > 0.0);
    assert!(point_plane_side(Vec3::Z, Vec3::ZERO, Vec3::new(3.0, 1.0, -0.5)) < 0.0);
    assert_eq!(point_plane_side(Vec3::Z, Vec3::ZERO, Vec3::new(3.0, 1.0, 0.0)), 0.0);
}

#[test]
fn triangle_test_is_symmetric_on_random_pairs() {
    let mut rng = StdRng::seed_from_u64(11);
    let random_tri = |rng: &mut StdRng| {
        [(); 3].map(|_| {
            Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
    };
    let mut hits = 0;
    for _ in 0..2000 {
        let a = random_tri(&mut rng);
        let b = random_tri(&mut rng);
        let ab = triangles_intersect(&a, &b);
        assert_eq!(ab, triangles_intersect(&b, &a));
        hits += ab as u32;
    }
    assert!(hits > 0);
}

// ─── BVH Tests ────────────────────────────────────────────────

#[test]
fn bvh_has_one_leaf_per_triangle() {
    let mesh = cuboid(Vec3::splat(0.5));
    let bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    assert_eq!(bvh.leaf_count(), 12);
    assert_eq!(bvh.node_count(), 23);
    assert!(bvh.depth() <= 5);
}

#[test]
fn bvh_parents_enclose_children() {
    let mesh = octahedron(1.0);
    let bvh = Bvh::build(&mesh, &Affine3A::from_rotation_y(0.7)).unwrap();
    for (idx, node) in bvh.nodes().iter().enumerate() {
        if let BvhNode::Internal { aabb, left, right } = node {
            assert!(*left > idx && *right > idx, "children follow parent");
            assert!(aabb.contains_aabb(bvh.node(*left).aabb()));
            assert!(aabb.contains_aabb(bvh.node(*right).aabb()));
        }
    }
}

#[test]
fn bvh_root_matches_world_bounds() {
    let mesh = tetrahedron(1.0);
    let affine = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))
        .with_rotation(tilt())
        .to_affine();
    let bvh = Bvh::build(&mesh, &affine).unwrap();
    let bounds = mesh.world_bounds(&affine).unwrap();
    assert!((bvh.root_aabb().min - bounds.min).length() < 1e-5);
    assert!((bvh.root_aabb().max - bounds.max).length() < 1e-5);
}

#[test]
fn bvh_refresh_matches_rebuild() {
    let mesh = cuboid(Vec3::new(0.5, 0.25, 1.0));
    let mut bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    let moved = Transform::from_translation(Vec3::new(-2.0, 0.5, 4.0))
        .with_rotation(tilt())
        .to_affine();
    bvh.refresh(&mesh, &moved);
    let bounds = mesh.world_bounds(&moved).unwrap();
    assert!((bvh.root_aabb().min - bounds.min).length() < 1e-5);
    assert!((bvh.root_aabb().max - bounds.max).length() < 1e-5);

    for node in bvh.nodes() {
        if let BvhNode::Leaf { aabb, triangle, vertices } = node {
            let expected = mesh.world_triangle(triangle.index(), &moved);
            assert_eq!(*vertices, expected);
            for v in vertices {
                assert!(aabb.contains_point(*v));
            }
        }
    }
}

#[test]
fn bvh_splits_on_axis_of_largest_spread() {
    // Spread: x 1.0, y 4.0, z 0.0.
    let mesh = triangles_at(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.5, 3.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.2, 2.0, 0.0),
        Vec3::new(0.3, 4.0, 0.0),
    ]);
    let bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    let (left, right) = root_children(&bvh);

    // Sorted by y: 0, 2, 3, 1, 4. Left half holds floor(5 / 2) = 2.
    assert_eq!(leaf_triangles(&bvh, left), vec![0, 2]);
    assert_eq!(leaf_triangles(&bvh, right), vec![1, 3, 4]);
    assert!(bvh.node(left).aabb().max.y <= bvh.node(right).aabb().min.y);
}

#[test]
fn bvh_spread_tie_splits_on_lowest_axis() {
    // Spread 3.0 on both x and z; y is flat. The x order and z order
    // put different triangles in the lower half.
    let mesh = triangles_at(&[
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(3.0, 0.0, 1.0),
    ]);
    let bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    let (left, right) = root_children(&bvh);
    assert_eq!(leaf_triangles(&bvh, left), vec![0, 1]);
    assert_eq!(leaf_triangles(&bvh, right), vec![2, 3]);
}

#[test]
fn bvh_median_split_keeps_input_order_on_ties() {
    // All centroids share x; the stable sort keeps index order.
    let mesh = triangles_at(&[
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ]);
    let bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    let (left, right) = root_children(&bvh);
    assert_eq!(leaf_triangles(&bvh, left), vec![0, 1, 2]);
    assert_eq!(leaf_triangles(&bvh, right), vec![3, 4, 5, 6]);
    assert_eq!(bvh.leaf_count(), 7);
}

proptest! {
    #[test]
    fn bvh_refresh_is_exact_union_and_idempotent(
        x in -5.0f32..5.0,
        z in -5.0f32..5.0,
        yaw in 0.0f32..6.28,
        roll in 0.0f32..6.28,
        scale in 0.1f32..3.0,
    ) {
        let mesh = octahedron(1.0);
        let mut bvh = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
        let affine = Transform::from_translation(Vec3::new(x, 0.5, z))
            .with_rotation(Quat::from_rotation_y(yaw) * Quat::from_rotation_z(roll))
            .with_scale(scale)
            .to_affine();

        bvh.refresh(&mesh, &affine);
        let first: Vec<Aabb> = bvh.nodes().iter().map(|n| *n.aabb()).collect();
        for node in bvh.nodes() {
            if let BvhNode::Internal { aabb, left, right } = node {
                let union = bvh.node(*left).aabb().union(bvh.node(*right).aabb());
                prop_assert_eq!(*aabb, union);
            }
        }

        bvh.refresh(&mesh, &affine);
        let second: Vec<Aabb> = bvh.nodes().iter().map(|n| *n.aabb()).collect();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn bvh_descent_on_distinct_roots() {
    let mesh = cuboid(Vec3::splat(0.5));
    let a = Bvh::build(&mesh, &Affine3A::IDENTITY).unwrap();
    let far = Bvh::build(&mesh, &Affine3A::from_translation(Vec3::new(3.0, 0.0, 0.0))).unwrap();
    assert!(!check_node_collision(&a, a.root(), &far, far.root()));
    assert!(!a.intersects(&far));
}

// ─── Sweep & Prune Tests ──────────────────────────────────────

#[test]
fn sap_sorts_each_axis_by_min() {
    let mut rng = StdRng::seed_from_u64(3);
    let boxes = random_boxes(&mut rng, 40, 4.0);
    let mut sap = SweepAndPrune::new();
    sap.update(&boxes);
    for axis in Axis::ALL {
        let sorted = sap.sorted(axis);
        assert_eq!(sorted.len(), 40);
        for w in sorted.windows(2) {
            assert!(boxes[w[0] as usize].min_on(axis) <= boxes[w[1] as usize].min_on(axis));
        }
    }
}

#[test]
fn sap_resort_of_sorted_list_is_single_pass() {
    let mut rng = StdRng::seed_from_u64(5);
    let boxes = random_boxes(&mut rng, 25, 3.0);
    let mut sap = SweepAndPrune::new();
    sap.update(&boxes);
    sap.update(&boxes);
    assert_eq!(sap.sort_swaps(), 0);
    let before = sap.sorted(Axis::Y).to_vec();
    let stats = sap.resort(Axis::Y);
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.swaps, 0);
    assert_eq!(sap.sorted(Axis::Y), before.as_slice());
    let again = sap.resort(Axis::Y);
    assert_eq!(again, stats);
    assert_eq!(sap.sorted(Axis::Y), before.as_slice());
}

#[test]
fn sap_small_motion_needs_few_swaps() {
    let boxes: Vec<Aabb> = (0..10)
        .map(|i| cube_box(Vec3::new(i as f32, 0.0, 0.0), 0.1))
        .collect();
    let mut sap = SweepAndPrune::new();
    sap.update(&boxes);

    let mut moved = boxes.clone();
    // Swap the order of objects 4 and 5 along X only.
    moved[4] = cube_box(Vec3::new(5.5, 0.0, 0.0), 0.1);
    sap.update(&moved);
    assert_eq!(sap.sort_swaps(), 1);
}

#[test]
fn sap_touching_boxes_are_candidates() {
    let boxes = [cube_box(Vec3::ZERO, 0.5), cube_box(Vec3::new(1.0, 0.0, 0.0), 0.5)];
    let mut sap = SweepAndPrune::new();
    sap.update(&boxes);
    assert_eq!(pairs_of(&sap), vec![CandidatePair::new(0, 1)]);
}

#[test]
fn sap_requires_overlap_on_all_axes() {
    let boxes = [
        cube_box(Vec3::ZERO, 0.5),
        // Overlaps on X and Y only.
        cube_box(Vec3::new(0.2, 0.2, 3.0), 0.5),
    ];
    let mut sap = SweepAndPrune::new();
    sap.update(&boxes);
    assert!(sap.matrix(Axis::X).get(0, 1));
    assert!(sap.matrix(Axis::Y).get(1, 0));
    assert!(!sap.matrix(Axis::Z).get(0, 1));
    assert!(pairs_of(&sap).is_empty());
}

#[test]
fn sap_matches_brute_force_across_steps() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut boxes = random_boxes(&mut rng, 60, 3.0);
    let mut sap = SweepAndPrune::new();
    let mut brute = BruteForceBroadPhase::new();

    for _ in 0..20 {
        sap.update(&boxes);
        brute.update(&boxes);
        assert_eq!(pairs_of(&sap), pairs_of(&brute));

        for b in &mut boxes {
            let d = Vec3::new(
                rng.random_range(-0.2..0.2),
                rng.random_range(-0.2..0.2),
                rng.random_range(-0.2..0.2),
            );
            *b = Aabb::new(b.min + d, b.max + d);
        }
    }
}

#[test]
fn sap_handles_object_count_change() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut sap = SweepAndPrune::new();
    let mut brute = BruteForceBroadPhase::new();
    for n in [5, 12, 3, 0, 7] {
        let boxes = random_boxes(&mut rng, n, 1.5);
        sap.update(&boxes);
        brute.update(&boxes);
        assert_eq!(sap.len(), n);
        assert_eq!(pairs_of(&sap), pairs_of(&brute));
    }
}

#[test]
fn candidate_pair_is_canonical() {
    let p = CandidatePair::new(2, 7);
    assert_eq!(p.a, ObjectId(7));
    assert_eq!(p.b, ObjectId(2));
    assert_eq!(p, CandidatePair::new(7, 2));
}

proptest! {
    #[test]
    fn sap_equals_brute_force(
        raw in prop::collection::vec(
            (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0, 0.01f32..1.5),
            0..40,
        )
    ) {
        let boxes: Vec<Aabb> = raw
            .iter()
            .map(|&(x, y, z, h)| cube_box(Vec3::new(x, y, z), h))
            .collect();
        let mut sap = SweepAndPrune::new();
        let mut brute = BruteForceBroadPhase::new();
        sap.update(&boxes);
        brute.update(&boxes);
        let pairs = pairs_of(&sap);
        prop_assert_eq!(&pairs, &pairs_of(&brute));
        for p in &pairs {
            prop_assert!(p.a > p.b);
        }
    }

    #[test]
    fn sap_axis_matrix_equals_brute_force_per_axis(
        raw in prop::collection::vec(
            (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0, 0.01f32..1.5, 0.01f32..1.5),
            0..40,
        )
    ) {
        let boxes: Vec<Aabb> = raw
            .iter()
            .map(|&(x, y, z, hx, hyz)| {
                let c = Vec3::new(x, y, z);
                let h = Vec3::new(hx, hyz, hyz * 0.5);
                Aabb::new(c - h, c + h)
            })
            .collect();
        let mut sap = SweepAndPrune::new();
        sap.update(&boxes);
        for axis in Axis::ALL {
            let matrix = sap.matrix(axis);
            for i in 0..boxes.len() {
                for j in 0..boxes.len() {
                    if i == j {
                        continue;
                    }
                    prop_assert_eq!(
                        matrix.get(i, j),
                        boxes[i].overlaps_on(&boxes[j], axis),
                        "axis {} pair ({}, {})", axis.name(), i, j
                    );
                }
            }
        }
    }
}

// ─── Narrow Phase Tests ───────────────────────────────────────

#[test]
fn tilted_overlapping_cubes_collide() {
    let a = unit_cube_at(Vec3::ZERO, Quat::IDENTITY);
    let b = unit_cube_at(Vec3::new(0.5, 0.0, 0.0), tilt());
    assert!(BvhNarrowPhase.collide(&a, &b));
    assert!(BvhNarrowPhase.collide(&b, &a));
    assert!(AabbNarrowPhase.collide(&a, &b));
}

#[test]
fn aligned_overlapping_cubes_have_no_strict_crossing() {
    // Every face pair is coplanar or meets only along edges, which the
    // triangle test treats as disjoint.
    let a = unit_cube_at(Vec3::ZERO, Quat::IDENTITY);
    let b = unit_cube_at(Vec3::new(0.5, 0.0, 0.0), Quat::IDENTITY);
    assert!(AabbNarrowPhase.collide(&a, &b));
    assert!(!BvhNarrowPhase.collide(&a, &b));
}

#[test]
fn nested_object_is_not_a_surface_collision() {
    let outer = unit_cube_at(Vec3::ZERO, Quat::IDENTITY);
    let inner_transform = Transform::IDENTITY
        .with_rotation(Quat::from_rotation_x(0.3) * Quat::from_rotation_y(0.2))
        .with_scale(0.4);
    let inner = Collider::new(&cuboid(Vec3::splat(0.5)), &inner_transform.to_affine()).unwrap();
    assert!(AabbNarrowPhase.collide(&outer, &inner));
    assert!(!BvhNarrowPhase.collide(&outer, &inner));
}

#[test]
fn separated_cubes_do_not_collide() {
    let a = unit_cube_at(Vec3::ZERO, Quat::IDENTITY);
    let b = unit_cube_at(Vec3::new(3.0, 0.0, 0.0), tilt());
    assert!(!AabbNarrowPhase.collide(&a, &b));
    assert!(!BvhNarrowPhase.collide(&a, &b));
}

#[test]
fn collider_update_moves_bounds() {
    let mesh = cuboid(Vec3::splat(0.5));
    let mut collider = Collider::new(&mesh, &Affine3A::IDENTITY).unwrap();
    collider
        .update(&mesh, &Affine3A::from_translation(Vec3::new(10.0, 0.0, 0.0)))
        .unwrap();
    assert_eq!(collider.aabb().min, Vec3::new(9.5, -0.5, -0.5));
    assert_eq!(collider.bvh().root_aabb(), collider.aabb());
}

#[test]
fn collider_rejects_invalid_mesh() {
    let mut mesh = cuboid(Vec3::splat(0.5));
    mesh.indices.push(99);
    assert!(Collider::new(&mesh, &Affine3A::IDENTITY).is_err());
}

// ─── Collision Mode Tests ─────────────────────────────────────

#[test]
fn collision_mode_default_is_bvh() {
    assert_eq!(CollisionMode::default(), CollisionMode::Bvh);
}

#[test]
fn collision_mode_parse_and_serde() {
    assert_eq!("AABB".parse::<CollisionMode>().unwrap(), CollisionMode::Aabb);
    assert_eq!("bvh".parse::<CollisionMode>().unwrap(), CollisionMode::Bvh);
    assert!("sphere".parse::<CollisionMode>().is_err());
    let json = serde_json::to_string(&CollisionMode::Aabb).unwrap();
    assert_eq!(json, "\"aabb\"");
    assert_eq!(CollisionMode::Bvh.narrow_phase().name(), "bvh");
}

// ─── Pipeline Tests ───────────────────────────────────────────

#[test]
fn pipeline_flags_tilted_pair() {
    let colliders = vec![
        unit_cube_at(Vec3::ZERO, Quat::IDENTITY),
        unit_cube_at(Vec3::new(0.5, 0.0, 0.0), tilt()),
        unit_cube_at(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY),
    ];
    let mut pipeline = CollisionPipeline::for_mode(CollisionMode::Bvh);
    let result = pipeline.step(&colliders);
    assert_eq!(result.candidate_pairs, 1);
    assert_eq!(result.confirmed_pairs, 1);
    assert_eq!(result.colliding_objects, 2);
    assert_eq!(pipeline.flags(), &[true, true, false]);
    assert_eq!(
        pipeline.pairs(),
        &[CollisionPair { a: ObjectId(1), b: ObjectId(0) }]
    );
}

#[test]
fn pipeline_modes_differ_on_aligned_cubes() {
    let colliders = vec![
        unit_cube_at(Vec3::ZERO, Quat::IDENTITY),
        unit_cube_at(Vec3::new(0.5, 0.0, 0.0), Quat::IDENTITY),
    ];
    let mut aabb = CollisionPipeline::for_mode(CollisionMode::Aabb);
    let mut bvh = CollisionPipeline::for_mode(CollisionMode::Bvh);
    aabb.step(&colliders);
    bvh.step(&colliders);
    assert_eq!(aabb.flags(), &[true, true]);
    assert_eq!(bvh.flags(), &[false, false]);
}

#[test]
fn broad_phase_prunes_before_narrow_phase() {
    let colliders: Vec<Collider> = (0..5)
        .map(|i| unit_cube_at(Vec3::new(i as f32 * 3.0, 0.0, 0.0), Quat::IDENTITY))
        .collect();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pipeline = CollisionPipeline::new(
        Box::new(SweepAndPrune::new()),
        Box::new(CountingNarrowPhase { calls: Arc::clone(&calls) }),
    );
    let result = pipeline.step(&colliders);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.narrow_tests, 0);
    assert!(pipeline.flags().iter().all(|f| !f));
}

#[test]
fn flags_are_recomputed_each_step() {
    let mut colliders = vec![
        unit_cube_at(Vec3::ZERO, Quat::IDENTITY),
        unit_cube_at(Vec3::new(0.5, 0.0, 0.0), tilt()),
    ];
    let mut pipeline = CollisionPipeline::for_mode(CollisionMode::Bvh);
    pipeline.step(&colliders);
    assert_eq!(pipeline.flags(), &[true, true]);

    let mesh = cuboid(Vec3::splat(0.5));
    let away = Transform::from_translation(Vec3::new(5.0, 0.0, 0.0))
        .with_rotation(tilt())
        .to_affine();
    colliders[1].update(&mesh, &away).unwrap();
    pipeline.step(&colliders);
    assert_eq!(pipeline.flags(), &[false, false]);
    assert!(pipeline.pairs().is_empty());
}

#[test]
fn empty_and_single_object_scenes() {
    let mut pipeline = CollisionPipeline::for_mode(CollisionMode::Bvh);
    let none: Vec<Collider> = Vec::new();
    let result = pipeline.step(&none);
    assert_eq!(result.candidate_pairs, 0);
    assert!(pipeline.flags().is_empty());

    let one = vec![unit_cube_at(Vec3::ZERO, Quat::IDENTITY)];
    let result = pipeline.step(&one);
    assert_eq!(result.candidate_pairs, 0);
    assert_eq!(pipeline.flags(), &[false]);
}
