//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Meshes are local-space and never mutated once built; objects share
//! them read-only and carry their own world transform.

use serde::{Deserialize, Serialize};

use prism_math::{Aabb, Affine3A, Vec3};
use prism_types::{PrismError, PrismResult};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// Triangle indices — each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the local-space position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Iterates over all local-space vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.vertex_count()).map(move |i| self.position(i))
    }

    /// Returns the vertices of triangle `t` transformed into world space.
    ///
    /// # Panics
    /// Panics if `t` or one of its indices is out of range; call
    /// [`TriangleMesh::validate`] before handing a mesh to the collision code.
    #[inline]
    pub fn world_triangle(&self, t: usize, transform: &Affine3A) -> [Vec3; 3] {
        self.triangle(t)
            .map(|v| transform.transform_point3(self.position(v as usize)))
    }

    /// World-space axis-aligned bounds of every vertex under `transform`.
    ///
    /// Visits all vertices. A single-vertex mesh yields a point box; an
    /// empty mesh is an error rather than a degenerate box.
    pub fn world_bounds(&self, transform: &Affine3A) -> PrismResult<Aabb> {
        Aabb::from_points(self.positions().map(|p| transform.transform_point3(p))).ok_or_else(
            || PrismError::InvalidMesh("Cannot bound a mesh with no vertices".into()),
        )
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        index
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length, and there is at least one vertex
    /// - Index count is a non-zero multiple of 3
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> PrismResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(PrismError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if n == 0 {
            return Err(PrismError::InvalidMesh("Mesh has no vertices".into()));
        }

        if self.indices.len() % 3 != 0 {
            return Err(PrismError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }
        if self.indices.is_empty() {
            return Err(PrismError::InvalidMesh("Mesh has no triangles".into()));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(PrismError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(PrismError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout and validates.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> PrismResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(PrismError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.push_vertex(Vec3::new(p[0], p[1], p[2]));
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
