//! Axis-aligned bounding box in grid units.

use glam::Vec3;

use super::OctreeNode;
use crate::types::{Face, Sign};

/// Axis-aligned bounding box.
///
/// Degenerate (zero-thickness) boxes are allowed: a cube face is an `Aabb3`
/// with `min == max` along its normal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  /// Minimum corner (inclusive).
  pub min: Vec3,
  /// Maximum corner (inclusive).
  pub max: Vec3,
}

impl Aabb3 {
  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.cmple(max).all(),
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Cube covered by a node: `[position, position + size]`.
  pub fn from_node(node: &OctreeNode) -> Self {
    Self {
      min: node.position.as_vec3(),
      max: node.max_corner().as_vec3(),
    }
  }

  /// The face of this box pointing towards `face`, as a flat box.
  pub fn face_rect(&self, face: Face) -> Self {
    let axis = face.axis().index();
    let plane = match face.sign() {
      Sign::Negative => self.min[axis],
      Sign::Positive => self.max[axis],
    };
    let mut min = self.min;
    let mut max = self.max;
    min[axis] = plane;
    max[axis] = plane;
    Self { min, max }
  }

  /// Adjacency test with tolerance.
  ///
  /// Per axis: `other.min - eps <= self.max && other.max + eps >= self.min`.
  /// With `eps = 0.5` on an integer grid, boxes that only touch at a face,
  /// edge or corner count as intersecting.
  #[inline]
  pub fn intersects_with_tolerance(&self, other: &Aabb3, eps: f32) -> bool {
    (other.min - Vec3::splat(eps)).cmple(self.max).all()
      && (other.max + Vec3::splat(eps)).cmpge(self.min).all()
  }

  /// Strict interior overlap: the boxes share volume, not just a boundary.
  pub fn overlaps_open(&self, other: &Aabb3) -> bool {
    self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }
}
