//! Collision representation of one object.

use prism_math::{Aabb, Affine3A};
use prism_mesh::TriangleMesh;
use prism_types::PrismResult;

use crate::bvh::Bvh;

/// World-space AABB plus triangle BVH of one placed mesh.
#[derive(Debug, Clone)]
pub struct Collider {
    aabb: Aabb,
    bvh: Bvh,
}

impl Collider {
    /// Validates `mesh` and builds its bounds and hierarchy at `transform`.
    pub fn new(mesh: &TriangleMesh, transform: &Affine3A) -> PrismResult<Self> {
        mesh.validate()?;
        Ok(Self {
            aabb: mesh.world_bounds(transform)?,
            bvh: Bvh::build(mesh, transform)?,
        })
    }

    /// Moves the collider to a new placement of the same mesh.
    pub fn update(&mut self, mesh: &TriangleMesh, transform: &Affine3A) -> PrismResult<()> {
        self.aabb = mesh.world_bounds(transform)?;
        self.bvh.refresh(mesh, transform);
        Ok(())
    }

    /// Tight world-space box over all transformed vertices.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }
}

impl AsRef<Collider> for Collider {
    fn as_ref(&self) -> &Collider {
        self
    }
}
