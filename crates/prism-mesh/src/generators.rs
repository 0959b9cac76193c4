//! Procedural polyhedra.
//!
//! Every shape is centered on the origin with a normalised size of 1
//! unless a size is given; objects scale them through their transform.
//! Winding is counter-clockwise seen from outside.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::mesh::TriangleMesh;

/// The fixed set of procedural shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned box, half-extent 1.
    Cuboid,
    /// Regular tetrahedron with its apex on +Y.
    Tetrahedron,
    /// Regular octahedron with vertices on the axes.
    Octahedron,
    /// Double-sided equilateral triangle in the XY plane.
    Triangle,
}

impl ShapeKind {
    /// Returns all shape kinds.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Cuboid,
            ShapeKind::Tetrahedron,
            ShapeKind::Octahedron,
            ShapeKind::Triangle,
        ]
    }

    /// Closed solids drawn from when populating a random scene.
    pub fn solids() -> &'static [ShapeKind] {
        &[ShapeKind::Cuboid, ShapeKind::Tetrahedron, ShapeKind::Octahedron]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cuboid => "cuboid",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Builds the normalised mesh for this kind.
    pub fn build(&self) -> TriangleMesh {
        match self {
            ShapeKind::Cuboid => cuboid(Vec3::ONE),
            ShapeKind::Tetrahedron => tetrahedron(1.0),
            ShapeKind::Octahedron => octahedron(1.0),
            ShapeKind::Triangle => equilateral_triangle(1.0),
        }
    }
}

fn from_parts(vertices: &[Vec3], indices: &[u32]) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(vertices.len(), indices.len() / 3);
    for &v in vertices {
        mesh.push_vertex(v);
    }
    mesh.indices.extend_from_slice(indices);
    mesh
}

/// Generates a box spanning `[-half, half]` on each axis.
///
/// # Example
/// ```
/// use prism_mesh::generators::cuboid;
/// use prism_math::Vec3;
/// let mesh = cuboid(Vec3::splat(0.5));
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cuboid(half: Vec3) -> TriangleMesh {
    let (x, y, z) = (half.x, half.y, half.z);
    let vertices = [
        Vec3::new(-x, -y, -z),
        Vec3::new(x, -y, -z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, -z),
        Vec3::new(-x, -y, z),
        Vec3::new(x, -y, z),
        Vec3::new(x, y, z),
        Vec3::new(-x, y, z),
    ];
    #[rustfmt::skip]
    let indices = [
        0, 2, 1,  0, 3, 2, // back
        0, 1, 5,  0, 5, 4, // bottom
        4, 5, 6,  4, 6, 7, // front
        2, 3, 7,  2, 7, 6, // top
        1, 2, 6,  1, 6, 5, // right
        0, 4, 7,  0, 7, 3, // left
    ];
    from_parts(&vertices, &indices)
}

/// Generates a tetrahedron with apex `(0, size, 0)` and its base at `y = -size/2`.
pub fn tetrahedron(size: f32) -> TriangleMesh {
    let h = size * 3.0_f32.sqrt() / 2.0;
    let vertices = [
        Vec3::new(0.0, size, 0.0),
        Vec3::new(0.0, -size / 2.0, h),
        Vec3::new(-h, -size / 2.0, -size / 2.0),
        Vec3::new(h, -size / 2.0, -size / 2.0),
    ];
    let indices = [0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2];
    from_parts(&vertices, &indices)
}

/// Generates an octahedron with its six vertices on the axes at distance `size`.
pub fn octahedron(size: f32) -> TriangleMesh {
    let vertices = [
        Vec3::new(0.0, size, 0.0),
        Vec3::new(-size, 0.0, 0.0),
        Vec3::new(0.0, 0.0, size),
        Vec3::new(size, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -size),
        Vec3::new(0.0, -size, 0.0),
    ];
    #[rustfmt::skip]
    let indices = [
        0, 1, 2,  0, 2, 3,  0, 3, 4,  0, 4, 1,
        5, 1, 4,  5, 4, 3,  5, 3, 2,  5, 2, 1,
    ];
    from_parts(&vertices, &indices)
}

/// Generates an equilateral triangle of circumradius `size` in `z = 0`,
/// emitted twice with opposite winding so it is visible from both sides.
pub fn equilateral_triangle(size: f32) -> TriangleMesh {
    let h = size * 3.0_f32.sqrt() / 2.0;
    let vertices = [
        Vec3::new(size, 0.0, 0.0),
        Vec3::new(-size / 2.0, h, 0.0),
        Vec3::new(-size / 2.0, -h, 0.0),
    ];
    let indices = [0, 1, 2, 0, 2, 1];
    from_parts(&vertices, &indices)
}
