//! One simulated object.

use std::sync::Arc;

use prism_contact::Collider;
use prism_math::{Aabb, Affine3A};
use prism_mesh::{ShapeKind, ShapeLibrary, TriangleMesh};
use prism_types::{ObjectId, PrismResult};

use crate::kinematics::Kinematics;

/// A rigid body: shared shape, owned motion, owned collider.
///
/// The collider's BVH is built once here and only refreshed afterwards.
pub struct Body {
    id: ObjectId,
    kind: Option<ShapeKind>,
    shape: Arc<TriangleMesh>,
    kinematics: Box<dyn Kinematics>,
    collider: Collider,
    collision: bool,
}

impl Body {
    /// Places `shape` with `kinematics` and builds its AABB then BVH.
    ///
    /// Fails with `InvalidMesh` if the shape is malformed.
    pub fn new(
        id: ObjectId,
        shape: Arc<TriangleMesh>,
        kinematics: Box<dyn Kinematics>,
    ) -> PrismResult<Self> {
        let collider = Collider::new(&shape, &kinematics.world_transform())?;
        Ok(Self {
            id,
            kind: None,
            shape,
            kinematics,
            collider,
            collision: false,
        })
    }

    /// Body using the library's shared mesh for `kind`.
    pub fn from_kind(
        id: ObjectId,
        kind: ShapeKind,
        library: &ShapeLibrary,
        kinematics: Box<dyn Kinematics>,
    ) -> PrismResult<Self> {
        let mut body = Self::new(id, library.get(kind), kinematics)?;
        body.kind = Some(kind);
        Ok(body)
    }

    /// Advances kinematics and refreshes the AABB and BVH for the new placement.
    pub fn advance(&mut self, elapsed: f32) -> PrismResult<()> {
        self.kinematics.advance(elapsed);
        let transform = self.kinematics.world_transform();
        self.collider.update(&self.shape, &transform)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Procedural kind, if the body was made from the shape library.
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    pub fn shape(&self) -> &Arc<TriangleMesh> {
        &self.shape
    }

    pub fn kinematics(&self) -> &dyn Kinematics {
        self.kinematics.as_ref()
    }

    pub fn transform(&self) -> Affine3A {
        self.kinematics.world_transform()
    }

    /// Current world-space AABB.
    pub fn aabb(&self) -> &Aabb {
        self.collider.aabb()
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// True if the body took part in a confirmed pair in the last step.
    pub fn collision(&self) -> bool {
        self.collision
    }

    pub(crate) fn set_collision(&mut self, collision: bool) {
        self.collision = collision;
    }
}

impl AsRef<Collider> for Body {
    fn as_ref(&self) -> &Collider {
        &self.collider
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("kinematics", &self.kinematics.name())
            .field("aabb", self.collider.aabb())
            .field("collision", &self.collision)
            .finish()
    }
}
