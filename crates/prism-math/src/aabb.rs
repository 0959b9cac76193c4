//! Axis-aligned bounding boxes.
//!
//! Overlap is inclusive: boxes that merely touch on a face, edge or
//! corner are reported as overlapping.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Axis-aligned bounding box defined by componentwise min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Bottom/left/far corner.
    pub min: Vec3,
    /// Top/right/near corner.
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::from_point(Vec3::ZERO)
    }
}

impl Aabb {
    /// Creates a box from its corners. Callers guarantee `min <= max`.
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A zero-volume box around a single point.
    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Tightest box around `points`, or `None` when the iterator is empty.
    ///
    /// Visits every point; there is no early exit.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb.grow(p);
        }
        Some(aabb)
    }

    /// Expands the box to include `p`.
    #[inline]
    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns true if the boxes overlap on all three axes.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        Axis::ALL.iter().all(|&axis| self.overlaps_on(other, axis))
    }

    /// Returns true if the projections of both boxes onto `axis` overlap.
    #[inline]
    pub fn overlaps_on(&self, other: &Aabb, axis: Axis) -> bool {
        axis.of(self.min) <= axis.of(other.max) && axis.of(self.max) >= axis.of(other.min)
    }

    /// Returns true if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.min.cmple(p).all() && p.cmple(self.max).all()
    }

    /// Returns true if `other` lies entirely inside this box.
    #[inline]
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Side lengths.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Product of the side lengths.
    #[inline]
    pub fn volume(&self) -> f32 {
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f32 {
        axis.of(self.min)
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn max_on(&self, axis: Axis) -> f32 {
        axis.of(self.max)
    }

    /// Flat `[min.x, min.y, min.z, max.x, max.y, max.z]`.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }

    /// Inverse of [`Aabb::to_array`].
    pub fn from_array(a: [f32; 6]) -> Self {
        Self {
            min: Vec3::new(a[0], a[1], a[2]),
            max: Vec3::new(a[3], a[4], a[5]),
        }
    }
}
