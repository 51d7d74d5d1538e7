//! OctreeNode - one record in the flat node arena.
//!
//! Parent/child relations are plain indices into the arena: `came_from`
//! points up, `child_index_start` points at the first of 8 contiguous
//! children. There is no ownership between nodes; the arena owns them all.

use std::ops::Range;

use glam::{IVec3, Vec3};

use super::Aabb3;
use crate::constants::{CHILD_COUNT, NO_INDEX, OCTANT_OFFSETS};
use crate::types::{Axis, Sign};

/// Which eighth of its parent a node occupies.
///
/// Direction code bits: bit 0 = X half, bit 1 = Y half, bit 2 = Z half.
/// A set bit means the high half along that axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
  pub const ALL: [Octant; 8] = [
    Octant(0),
    Octant(1),
    Octant(2),
    Octant(3),
    Octant(4),
    Octant(5),
    Octant(6),
    Octant(7),
  ];

  /// `None` for codes outside `0..8`.
  pub const fn new(code: u8) -> Option<Self> {
    if (code as usize) < CHILD_COUNT {
      Some(Self(code))
    } else {
      None
    }
  }

  #[inline]
  pub const fn code(self) -> u8 {
    self.0
  }

  /// Unit offset of this octant's min corner within the parent.
  #[inline]
  pub fn offset(self) -> IVec3 {
    IVec3::from_array(OCTANT_OFFSETS[self.0 as usize])
  }

  /// True when this octant is the high half along `axis`.
  #[inline]
  pub const fn is_high(self, axis: Axis) -> bool {
    self.0 & axis.octant_bit() != 0
  }

  /// True when this octant touches the parent's face in direction
  /// `sign` along `axis`, i.e. a step that way leaves the parent.
  #[inline]
  pub const fn on_side(self, axis: Axis, sign: Sign) -> bool {
    match sign {
      Sign::Positive => self.is_high(axis),
      Sign::Negative => !self.is_high(axis),
    }
  }

  /// Mirror across the parent's mid-plane on `axis`.
  #[inline]
  pub const fn flip(self, axis: Axis) -> Self {
    Self(self.0 ^ axis.octant_bit())
  }
}

/// A node in the build arena.
///
/// Every field except `child_index_start` is final once the node is
/// appended. `child_index_start` is written exactly once, right after the
/// node's 8 children have been appended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeNode {
  /// Slot in the arena.
  pub index: usize,
  /// Depth from the root (root = 0).
  pub depth: u8,
  /// Edge length in grid units: `root_size >> depth`.
  pub size: i32,
  /// Integer min corner in grid space.
  pub position: IVec3,
  /// Midpoint in grid space.
  pub center: Vec3,
  /// Midpoint offset by the chunk origin.
  pub world_center: Vec3,
  /// Octant within the parent, `None` for the root.
  pub child_direction: Option<Octant>,
  /// Parent slot, `None` for the root.
  pub came_from: Option<usize>,
  /// First of 8 contiguous child slots, `None` for an unsubdivided node.
  pub child_index_start: Option<usize>,
  /// Smallest sample in the inclusive window `[position, position + size]`.
  pub min_density: f32,
  /// Largest sample in the same window.
  pub max_density: f32,
  /// Whole window lies below the obstacle threshold.
  pub is_obstacle: bool,
}

impl OctreeNode {
  /// Root node at the grid origin.
  pub fn root(size: i32, chunk_origin: Vec3) -> Self {
    Self::new(0, 0, size, IVec3::ZERO, None, None, chunk_origin)
  }

  /// Child of `self` in `octant`, stored at arena slot `index`.
  pub fn child(&self, octant: Octant, index: usize, chunk_origin: Vec3) -> Self {
    let size = self.size / 2;
    let position = self.position + octant.offset() * size;
    Self::new(
      index,
      self.depth + 1,
      size,
      position,
      Some(octant),
      Some(self.index),
      chunk_origin,
    )
  }

  fn new(
    index: usize,
    depth: u8,
    size: i32,
    position: IVec3,
    child_direction: Option<Octant>,
    came_from: Option<usize>,
    chunk_origin: Vec3,
  ) -> Self {
    let center = position.as_vec3() + Vec3::splat(size as f32 * 0.5);
    Self {
      index,
      depth,
      size,
      position,
      center,
      world_center: center + chunk_origin,
      child_direction,
      came_from,
      child_index_start: None,
      min_density: 0.0,
      max_density: 0.0,
      is_obstacle: false,
    }
  }

  #[inline]
  pub fn is_root(&self) -> bool {
    self.came_from.is_none()
  }

  /// Unsubdivided node.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.child_index_start.is_none()
  }

  /// Arena slot of the child in `octant`, `None` for a leaf.
  #[inline]
  pub fn child_index(&self, octant: Octant) -> Option<usize> {
    self
      .child_index_start
      .map(|start| start + octant.code() as usize)
  }

  /// Slots of all 8 children, `None` for a leaf.
  pub fn children(&self) -> Option<Range<usize>> {
    self
      .child_index_start
      .map(|start| start..start + CHILD_COUNT)
  }

  /// Exclusive max corner.
  #[inline]
  pub fn max_corner(&self) -> IVec3 {
    self.position + IVec3::splat(self.size)
  }

  pub fn bounds(&self) -> Aabb3 {
    Aabb3::from_node(self)
  }

  /// Surface may pass through this node's window: `min < iso < max`.
  #[inline]
  pub fn straddles(&self, iso_threshold: f32) -> bool {
    self.min_density < iso_threshold && self.max_density > iso_threshold
  }

  /// Half-open containment test on the integer cube.
  pub fn contains(&self, p: IVec3) -> bool {
    p.cmpge(self.position).all() && p.cmplt(self.max_corner()).all()
  }

  /// `came_from` in the flat integer encoding (`-1` for the root).
  pub fn raw_came_from(&self) -> i32 {
    self.came_from.map_or(NO_INDEX, |i| i as i32)
  }

  /// `child_index_start` in the flat integer encoding (`-1` for a leaf).
  pub fn raw_child_index_start(&self) -> i32 {
    self.child_index_start.map_or(NO_INDEX, |i| i as i32)
  }

  /// `child_direction` in the flat integer encoding (`-1` for the root).
  pub fn raw_child_direction(&self) -> i32 {
    self.child_direction.map_or(NO_INDEX, |o| o.code() as i32)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
