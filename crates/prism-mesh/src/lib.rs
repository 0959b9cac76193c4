//! # prism-mesh
//!
//! Immutable triangle meshes in local object space, stored in
//! Structure-of-Arrays layout, plus the procedural polyhedra that
//! scene objects are built from.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — SoA vertex channels and a flat triangle index list.
//! - [`ShapeKind`] — the fixed set of procedural shapes.
//! - [`ShapeLibrary`] — one shared mesh per kind, handed out as `Arc`s.

pub mod generators;
pub mod library;
pub mod mesh;

pub use generators::ShapeKind;
pub use library::ShapeLibrary;
pub use mesh::TriangleMesh;
