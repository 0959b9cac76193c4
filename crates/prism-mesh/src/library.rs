//! Shared shape storage.
//!
//! One mesh is built per [`ShapeKind`] and handed out as `Arc` clones,
//! so every object of a kind points at the same immutable data.

use std::sync::Arc;

use crate::generators::ShapeKind;
use crate::mesh::TriangleMesh;

/// One shared mesh per shape kind.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    shapes: Vec<(ShapeKind, Arc<TriangleMesh>)>,
}

impl ShapeLibrary {
    /// Builds every kind in [`ShapeKind::all`].
    pub fn new() -> Self {
        let shapes = ShapeKind::all()
            .iter()
            .map(|&kind| (kind, Arc::new(kind.build())))
            .collect();
        Self { shapes }
    }

    /// Shared handle to the mesh of `kind`.
    pub fn get(&self, kind: ShapeKind) -> Arc<TriangleMesh> {
        self.shapes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, mesh)| Arc::clone(mesh))
            .unwrap_or_else(|| Arc::new(kind.build()))
    }

    /// Number of distinct meshes held.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the library holds no meshes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::new()
    }
}
