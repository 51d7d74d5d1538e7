//! Per-leaf seam classification.
//!
//! A surface leaf meshed in isolation cracks wherever its neighbor across a
//! face has a different size. For every leaf this module records, per face,
//! whether the other side is finer (the mesher must stitch a T-junction),
//! coarser (the leaf must snap to the coarse edge), or outside the root
//! cube.
//!
//! ```text
//!   +-------+---+---+
//!   |       | f | f |    leaf L: +X neighbor subdivided -> finer
//!   |   L   +---+---+
//!   |       | f | f |
//!   +-------+---+---+
//! ```
//!
//! Queries are read-only, so leaves are classified in parallel.

use rayon::prelude::*;

use super::{NeighborLocator, OctreeBuild};
use crate::error::QueryError;
use crate::types::Face;

/// One bit per [`Face`], bit index = [`Face::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SeamMask(u8);

impl SeamMask {
  pub const EMPTY: SeamMask = SeamMask(0);
  pub const ALL: SeamMask = SeamMask(0b11_1111);

  #[inline]
  pub const fn bits(self) -> u8 {
    self.0
  }

  /// Mask from raw bits; bits above the sixth are dropped.
  pub const fn from_bits_truncate(bits: u8) -> Self {
    Self(bits & Self::ALL.0)
  }

  #[inline]
  pub fn insert(&mut self, face: Face) {
    self.0 |= 1 << face.index();
  }

  #[inline]
  pub fn contains(self, face: Face) -> bool {
    self.0 & (1 << face.index()) != 0
  }

  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  pub fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  /// Faces whose bit is set, in [`Face::ALL`] order.
  pub fn faces(self) -> impl Iterator<Item = Face> {
    Face::ALL.into_iter().filter(move |&face| self.contains(face))
  }
}

impl FromIterator<Face> for SeamMask {
  fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
    let mut mask = SeamMask::EMPTY;
    for face in iter {
      mask.insert(face);
    }
    mask
  }
}

/// Seam classification of one surface leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafSeams {
  /// Arena slot of the leaf.
  pub index: usize,
  /// Faces whose neighbor is subdivided below this leaf's depth.
  pub finer_faces: SeamMask,
  /// Faces whose neighbor is a terminal node above this leaf's depth.
  pub coarser_faces: SeamMask,
  /// Faces on the boundary of the root cube.
  pub boundary_faces: SeamMask,
}

impl LeafSeams {
  /// True when every face meets a neighbor of the same size or the domain
  /// boundary.
  pub fn is_uniform(&self) -> bool {
    self.finer_faces.is_empty() && self.coarser_faces.is_empty()
  }
}

/// Classify the faces of the node at `index`.
pub fn leaf_seams(locator: &NeighborLocator<'_>, index: usize) -> Result<LeafSeams, QueryError> {
  let depth = locator.node(index)?.depth;
  let mut seams = LeafSeams {
    index,
    finer_faces: SeamMask::EMPTY,
    coarser_faces: SeamMask::EMPTY,
    boundary_faces: SeamMask::EMPTY,
  };

  for face in Face::ALL {
    let Some(neighbor) = locator.find_neighbor(index, face)? else {
      seams.boundary_faces.insert(face);
      continue;
    };
    let neighbor = locator.node(neighbor)?;
    if !neighbor.is_leaf() {
      seams.finer_faces.insert(face);
    } else if neighbor.depth < depth {
      seams.coarser_faces.insert(face);
    }
  }
  Ok(seams)
}

/// Classify every surface leaf of `build`, in [`OctreeBuild::leaf_indices`]
/// order.
#[tracing::instrument(skip_all, name = "octree::analyze_seams", fields(leaves = build.leaf_count()))]
pub fn analyze_seams(build: &OctreeBuild) -> Result<Vec<LeafSeams>, QueryError> {
  let locator = build.locator();
  let seams: Vec<LeafSeams> = build
    .leaf_indices()
    .par_iter()
    .map(|&index| leaf_seams(&locator, index))
    .collect::<Result<_, _>>()?;

  let stitched = seams.iter().filter(|s| !s.is_uniform()).count();
  tracing::debug!(leaves = seams.len(), stitched, "seam analysis complete");
  Ok(seams)
}

#[cfg(test)]
#[path = "seams_test.rs"]
mod seams_test;
