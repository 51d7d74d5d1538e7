//! OctreeBuild - the node arena and leaf set produced by one build.
//!
//! The tree structure is explicit: every node is stored, and parent/child
//! relationships are indices into the same `Vec`. Leaves are a subset of
//! that index space, so a leaf handed out by the builder can be passed
//! straight to a neighbor query.

use std::ops::Index;

use super::{BuildConfig, BuildStats, NeighborLocator, OctreeNode};
use crate::types::GridDims;

/// Immutable result of a build.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeBuild {
  pub(crate) nodes: Vec<OctreeNode>,
  pub(crate) leaves: Vec<usize>,
  pub(crate) config: BuildConfig,
  pub(crate) dims: GridDims,
  pub(crate) stats: BuildStats,
}

impl OctreeBuild {
  /// Every node in creation (breadth-first) order.
  pub fn nodes(&self) -> &[OctreeNode] {
    &self.nodes
  }

  /// Number of nodes in the arena.
  pub fn total_nodes(&self) -> usize {
    self.nodes.len()
  }

  /// Arena slots of the surface leaves, in creation order.
  pub fn leaf_indices(&self) -> &[usize] {
    &self.leaves
  }

  /// Surface leaves in creation order.
  pub fn leaf_nodes(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
    self.leaves.iter().map(move |&i| &self.nodes[i])
  }

  pub fn leaf_count(&self) -> usize {
    self.leaves.len()
  }

  /// The root node. A build always has at least the root.
  pub fn root(&self) -> &OctreeNode {
    &self.nodes[0]
  }

  pub fn node(&self, index: usize) -> Option<&OctreeNode> {
    self.nodes.get(index)
  }

  pub fn root_size(&self) -> i32 {
    self.root().size
  }

  pub fn config(&self) -> &BuildConfig {
    &self.config
  }

  pub fn dims(&self) -> GridDims {
    self.dims
  }

  pub fn stats(&self) -> &BuildStats {
    &self.stats
  }

  /// Neighbor queries over this arena.
  pub fn locator(&self) -> NeighborLocator<'_> {
    NeighborLocator::new(&self.nodes)
  }

  /// Hand the arena and leaf set to the caller.
  pub fn into_parts(self) -> (Vec<OctreeNode>, Vec<usize>) {
    (self.nodes, self.leaves)
  }
}

impl Index<usize> for OctreeBuild {
  type Output = OctreeNode;

  fn index(&self, index: usize) -> &OctreeNode {
    &self.nodes[index]
  }
}
