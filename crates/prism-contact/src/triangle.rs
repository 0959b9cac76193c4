//! Exact triangle-triangle intersection (separating plane method).
//!
//! 1. Reject if all vertices of one triangle lie strictly on one side of
//!    the other triangle's plane (tested both ways).
//! 2. Clip each triangle against the other's plane: the edges whose
//!    endpoints strictly straddle the plane give two crossing points.
//! 3. Project both crossing segments onto the line where the planes meet
//!    and report an intersection iff the two intervals overlap.
//!
//! Coplanar triangles never straddle, so they are reported as disjoint.
//! Touching along an edge or at a vertex is also reported as disjoint.

use prism_math::Vec3;
use prism_types::constants::PARALLEL_EPSILON;

/// Three world-space vertices.
pub type Triangle = [Vec3; 3];

/// Unit normal of `tri`, or zero for a degenerate triangle.
#[inline]
pub fn triangle_normal(tri: &Triangle) -> Vec3 {
    (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero()
}

/// Signed distance of `p` to the plane through `plane_point` with unit `normal`.
#[inline]
pub fn point_plane_side(normal: Vec3, plane_point: Vec3, p: Vec3) -> f32 {
    normal.dot(p - plane_point)
}

/// Point where segment `p1 → p2` meets the plane, with the parameter clamped to `[0, 1]`.
///
/// Returns `None` when the segment is parallel to the plane.
pub fn segment_plane_intersection(
    p1: Vec3,
    p2: Vec3,
    normal: Vec3,
    plane_point: Vec3,
) -> Option<Vec3> {
    let dir = p2 - p1;
    let d = normal.dot(dir);
    if d.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (normal.dot(plane_point - p1) / d).clamp(0.0, 1.0);
    Some(p1 + dir * t)
}

#[inline]
fn same_strict_side(dist: &[f32; 3]) -> bool {
    dist.iter().all(|&d| d > 0.0) || dist.iter().all(|&d| d < 0.0)
}

/// Crossing points of `tri`'s edges with a plane, given the signed
/// distances `dist` of its vertices. `None` unless exactly two edges cross.
fn crossing_segment(
    tri: &Triangle,
    dist: &[f32; 3],
    normal: Vec3,
    plane_point: Vec3,
) -> Option<[Vec3; 2]> {
    let mut points = [Vec3::ZERO; 3];
    let mut count = 0;
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        if dist[i] * dist[j] < 0.0 {
            if let Some(p) = segment_plane_intersection(tri[i], tri[j], normal, plane_point) {
                points[count] = p;
                count += 1;
            }
        }
    }
    (count == 2).then_some([points[0], points[1]])
}

#[inline]
fn interval_on(line: Vec3, segment: &[Vec3; 2]) -> (f32, f32) {
    let a = line.dot(segment[0]);
    let b = line.dot(segment[1]);
    (a.min(b), a.max(b))
}

/// Returns true if the two triangles intersect.
///
/// Symmetric in its arguments.
pub fn triangles_intersect(t1: &Triangle, t2: &Triangle) -> bool {
    let n1 = triangle_normal(t1);
    let d2_to_1 = t2.map(|p| point_plane_side(n1, t1[0], p));
    if same_strict_side(&d2_to_1) {
        return false;
    }

    let n2 = triangle_normal(t2);
    let d1_to_2 = t1.map(|p| point_plane_side(n2, t2[0], p));
    if same_strict_side(&d1_to_2) {
        return false;
    }

    let line = n1.cross(n2).normalize_or_zero();

    let Some(seg1) = crossing_segment(t1, &d1_to_2, n2, t2[0]) else {
        return false;
    };
    let Some(seg2) = crossing_segment(t2, &d2_to_1, n1, t1[0]) else {
        return false;
    };

    let (min1, max1) = interval_on(line, &seg1);
    let (min2, max2) = interval_on(line, &seg2);
    !(max1 < min2 || max2 < min1)
}
