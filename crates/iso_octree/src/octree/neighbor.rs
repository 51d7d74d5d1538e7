//! Neighbor finding over the node arena.
//!
//! There are no adjacency pointers. Every query starts from an arena index
//! and moves only through `came_from` (up) and `child_index_start` (down).
//!
//! # Ancestor Walk
//!
//! To step from a node in direction `+X`, climb while the current node is
//! the high-X child of its parent (the step would leave the parent). The
//! first ancestor that is a low-X child has its neighbor right next to it:
//! the sibling with the X bit flipped. Descend again from that sibling,
//! mirroring the octants climbed on the way up:
//!
//! ```text
//!   +-------+-------+
//!   |       | s     |     q = query, high-X child of A
//!   |   A   |   B   |     A = low-X child of P, so B = A.flip(X)
//!   |     q | n     |     n = B's child at q's octant with X flipped
//!   +-------+-------+
//!           ^ shared plane
//! ```
//!
//! The walk stops early at a terminal node, so the result is never smaller
//! than the query and is coarser only where the build pruned the tree.
//!
//! Edges and corners use the same walk with several axes in flight: every
//! pending axis flips at each level and resolves at the first level where
//! the node sits on the near side along it.
//!
//! # Terminal Nodes
//!
//! The face queries enumerate *terminal* nodes (`child_index_start ==
//! None`), which covers both surface leaves and pruned homogeneous nodes.
//! Together they tile the root cube without overlap.

use smallvec::{smallvec, SmallVec};

use super::{Octant, OctreeNode};
use crate::error::QueryError;
use crate::types::{Axis, Direction, Face, Sign};

/// Octants recorded on the way up. Paths are at most `MAX_DEPTH` long.
type OctantPath = SmallVec<[Octant; 16]>;

/// Read-only neighbor queries over an arena.
///
/// Holds only a shared slice, so a locator can be copied into any number of
/// threads once the build is finished.
#[derive(Clone, Copy, Debug)]
pub struct NeighborLocator<'a> {
  nodes: &'a [OctreeNode],
}

impl<'a> NeighborLocator<'a> {
  pub fn new(nodes: &'a [OctreeNode]) -> Self {
    Self { nodes }
  }

  pub fn nodes(&self) -> &'a [OctreeNode] {
    self.nodes
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Node at `index`, or a contract error.
  pub fn node(&self, index: usize) -> Result<&'a OctreeNode, QueryError> {
    self.nodes.get(index).ok_or(QueryError::IndexOutOfRange {
      index,
      len: self.nodes.len(),
    })
  }

  /// Same-size-or-larger neighbor across `face`.
  ///
  /// `Ok(None)` when the face lies on the boundary of the root cube.
  pub fn find_neighbor(&self, index: usize, face: Face) -> Result<Option<usize>, QueryError> {
    self.find_neighbor_in_direction(index, face.direction())
  }

  pub fn find_neighbor_axis(
    &self,
    index: usize,
    axis: Axis,
    sign: Sign,
  ) -> Result<Option<usize>, QueryError> {
    self.find_neighbor(index, Face::new(axis, sign))
  }

  /// Same-size-or-larger neighbor across a face, edge, or corner.
  pub fn find_neighbor_in_direction(
    &self,
    index: usize,
    direction: Direction,
  ) -> Result<Option<usize>, QueryError> {
    self.node(index)?;

    let mut pending = Axis::ALL.map(|axis| direction.component(axis));
    let mut path = OctantPath::new();
    let mut current = index;

    while pending.iter().any(Option::is_some) {
      let node = &self.nodes[current];
      let (Some(octant), Some(parent)) = (node.child_direction, node.came_from) else {
        // Ran out of ancestors with axes still pending.
        return Ok(None);
      };

      let mut mirrored = octant;
      for axis in Axis::ALL {
        if let Some(sign) = pending[axis.index()] {
          mirrored = mirrored.flip(axis);
          if !octant.on_side(axis, sign) {
            pending[axis.index()] = None;
          }
        }
      }
      path.push(mirrored);
      current = parent;
    }

    for &octant in path.iter().rev() {
      match self.nodes[current].child_index(octant) {
        Some(child) => current = child,
        None => break,
      }
    }
    Ok(Some(current))
  }

  /// Terminal nodes of `neighbor` that touch the face shared with a query
  /// looking in direction `face`.
  ///
  /// The shared face is `neighbor`'s `face.opposite()` side. A terminal
  /// neighbor yields itself. Sorted ascending.
  pub fn find_face_neighbor_leaves(&self, neighbor: usize, face: Face) -> Result<Vec<usize>, QueryError> {
    self.find_direction_neighbor_leaves(neighbor, face.direction())
  }

  /// Terminal nodes of `neighbor` that touch the face, edge, or corner
  /// shared with a query looking in `direction`.
  ///
  /// At every subdivided node only the children on the near side of every
  /// moving axis are kept: 4 for a face, 2 for an edge, 1 for a corner.
  pub fn find_direction_neighbor_leaves(
    &self,
    neighbor: usize,
    direction: Direction,
  ) -> Result<Vec<usize>, QueryError> {
    self.node(neighbor)?;

    let near: SmallVec<[Octant; 4]> = Octant::ALL
      .into_iter()
      .filter(|octant| faces_back(*octant, direction))
      .collect();

    let mut found = Vec::new();
    let mut worklist: SmallVec<[usize; 32]> = smallvec![neighbor];
    while let Some(current) = worklist.pop() {
      let node = &self.nodes[current];
      match node.child_index_start {
        None => found.push(current),
        Some(_) => worklist.extend(near.iter().filter_map(|&octant| node.child_index(octant))),
      }
    }
    found.sort_unstable();
    Ok(found)
  }

  /// Every terminal node across `face` of `index`, sorted ascending.
  ///
  /// Empty at the boundary of the root cube.
  pub fn face_neighbor_leaves(&self, index: usize, face: Face) -> Result<Vec<usize>, QueryError> {
    match self.find_neighbor(index, face)? {
      Some(neighbor) => self.find_face_neighbor_leaves(neighbor, face),
      None => Ok(Vec::new()),
    }
  }

  /// Every terminal node across a face, edge, or corner of `index`.
  pub fn direction_neighbor_leaves(
    &self,
    index: usize,
    direction: Direction,
  ) -> Result<Vec<usize>, QueryError> {
    match self.find_neighbor_in_direction(index, direction)? {
      Some(neighbor) => self.find_direction_neighbor_leaves(neighbor, direction),
      None => Ok(Vec::new()),
    }
  }
}

/// True when `octant` lies against the side of its parent that faces back
/// towards a query travelling in `direction`.
fn faces_back(octant: Octant, direction: Direction) -> bool {
  Axis::ALL.into_iter().all(|axis| match direction.component(axis) {
    Some(sign) => octant.on_side(axis, sign.flip()),
    None => true,
  })
}

#[cfg(test)]
#[path = "neighbor_test.rs"]
mod neighbor_test;
