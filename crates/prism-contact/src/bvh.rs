//! Per-object bounding volume hierarchy over triangles.
//!
//! Nodes live in a flat arena in pre-order: a parent is always stored
//! before its children, so a reverse sweep visits children first. Leaves
//! hold exactly one triangle and cache its world-space vertices.

use prism_math::{Aabb, Affine3A, Axis, Vec3};
use prism_mesh::TriangleMesh;
use prism_types::{PrismError, PrismResult, TriangleId};

use crate::triangle::{triangles_intersect, Triangle};

/// A node of the hierarchy.
#[derive(Debug, Clone)]
pub enum BvhNode {
    /// Exactly one triangle.
    Leaf {
        aabb: Aabb,
        triangle: TriangleId,
        vertices: Triangle,
    },
    /// Two children whose boxes are enclosed by `aabb`.
    Internal { aabb: Aabb, left: usize, right: usize },
}

impl BvhNode {
    /// World-space bounds of the node.
    pub fn aabb(&self) -> &Aabb {
        match self {
            BvhNode::Leaf { aabb, .. } | BvhNode::Internal { aabb, .. } => aabb,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }
}

/// Binary tree over one object's triangles, in world space.
#[derive(Debug, Clone)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
}

fn triangle_bounds(vertices: &Triangle) -> Aabb {
    let mut aabb = Aabb::from_point(vertices[0]);
    aabb.grow(vertices[1]);
    aabb.grow(vertices[2]);
    aabb
}

/// Axis along which the centroids have the largest spread.
/// Ties resolve to the lowest axis.
fn split_axis(items: &[(TriangleId, Vec3)]) -> Axis {
    let mut lo = Vec3::splat(f32::INFINITY);
    let mut hi = Vec3::splat(f32::NEG_INFINITY);
    for &(_, c) in items {
        lo = lo.min(c);
        hi = hi.max(c);
    }
    let spread = hi - lo;

    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if axis.of(spread) > best.of(spread) {
            best = axis;
        }
    }
    best
}

impl Bvh {
    /// Builds the hierarchy for `mesh` placed by `transform`.
    ///
    /// Triangles are partitioned recursively by world-space centroid along
    /// the axis of largest spread, splitting at the median.
    pub fn build(mesh: &TriangleMesh, transform: &Affine3A) -> PrismResult<Self> {
        let count = mesh.triangle_count();
        if count == 0 {
            return Err(PrismError::InvalidMesh(
                "Cannot build a BVH over a mesh with no triangles".into(),
            ));
        }

        let mut items: Vec<(TriangleId, Vec3)> = (0..count)
            .map(|t| {
                let v = mesh.world_triangle(t, transform);
                (TriangleId(t as u32), (v[0] + v[1] + v[2]) / 3.0)
            })
            .collect();

        let mut bvh = Self {
            nodes: Vec::with_capacity(2 * count - 1),
        };
        bvh.build_recursive(&mut items, mesh, transform);
        Ok(bvh)
    }

    fn build_recursive(
        &mut self,
        items: &mut [(TriangleId, Vec3)],
        mesh: &TriangleMesh,
        transform: &Affine3A,
    ) -> usize {
        let idx = self.nodes.len();

        if let [(triangle, _)] = items {
            let vertices = mesh.world_triangle(triangle.index(), transform);
            self.nodes.push(BvhNode::Leaf {
                aabb: triangle_bounds(&vertices),
                triangle: *triangle,
                vertices,
            });
            return idx;
        }

        let axis = split_axis(items);
        items.sort_by(|a, b| axis.of(a.1).total_cmp(&axis.of(b.1)));
        let mid = items.len() / 2;

        // Reserve the parent slot so children land after it.
        self.nodes.push(BvhNode::Internal {
            aabb: Aabb::default(),
            left: 0,
            right: 0,
        });
        let (lower, upper) = items.split_at_mut(mid);
        let left = self.build_recursive(lower, mesh, transform);
        let right = self.build_recursive(upper, mesh, transform);
        let aabb = self.nodes[left].aabb().union(self.nodes[right].aabb());
        self.nodes[idx] = BvhNode::Internal { aabb, left, right };
        idx
    }

    /// Recomputes every box for a new placement of the same mesh,
    /// keeping the tree shape.
    ///
    /// # Panics
    /// Panics if `mesh` is not the mesh the hierarchy was built from.
    pub fn refresh(&mut self, mesh: &TriangleMesh, transform: &Affine3A) {
        for idx in (0..self.nodes.len()).rev() {
            let refreshed = match &self.nodes[idx] {
                BvhNode::Leaf { triangle, .. } => {
                    let vertices = mesh.world_triangle(triangle.index(), transform);
                    BvhNode::Leaf {
                        aabb: triangle_bounds(&vertices),
                        triangle: *triangle,
                        vertices,
                    }
                }
                &BvhNode::Internal { left, right, .. } => BvhNode::Internal {
                    aabb: self.nodes[left].aabb().union(self.nodes[right].aabb()),
                    left,
                    right,
                },
            };
            self.nodes[idx] = refreshed;
        }
    }

    /// Index of the root node.
    #[inline]
    pub fn root(&self) -> usize {
        0
    }

    pub fn node(&self, idx: usize) -> &BvhNode {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// Bounds of the whole object.
    pub fn root_aabb(&self) -> &Aabb {
        self.nodes[0].aabb()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, idx: usize) -> usize {
        match self.nodes[idx] {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Internal { left, right, .. } => {
                1 + self.depth_from(left).max(self.depth_from(right))
            }
        }
    }

    /// Returns true if any triangle of `self` intersects any triangle of `other`.
    pub fn intersects(&self, other: &Bvh) -> bool {
        check_node_collision(self, self.root(), other, other.root())
    }
}

/// Simultaneous descent of two hierarchies.
///
/// Prunes on box overlap, tests triangles at leaf-leaf pairs, and otherwise
/// descends into `a` when it is internal and either `b` is a leaf or `a`'s
/// box has strictly larger volume; else descends into `b`.
pub fn check_node_collision(a: &Bvh, node_a: usize, b: &Bvh, node_b: usize) -> bool {
    let na = a.node(node_a);
    let nb = b.node(node_b);
    if !na.aabb().overlaps(nb.aabb()) {
        return false;
    }

    match (na, nb) {
        (BvhNode::Leaf { vertices: ta, .. }, BvhNode::Leaf { vertices: tb, .. }) => {
            triangles_intersect(ta, tb)
        }
        (&BvhNode::Internal { aabb, left, right }, _)
            if nb.is_leaf() || aabb.volume() > nb.aabb().volume() =>
        {
            check_node_collision(a, left, b, node_b) || check_node_collision(a, right, b, node_b)
        }
        (_, &BvhNode::Internal { left, right, .. }) => {
            check_node_collision(a, node_a, b, left) || check_node_collision(a, node_a, b, right)
        }
        _ => false,
    }
}
