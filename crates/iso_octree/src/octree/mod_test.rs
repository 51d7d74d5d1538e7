use glam::IVec3;

use super::*;
use crate::constants::NO_INDEX;
use crate::density::PlaneSampler;
use crate::types::GridDims;

fn plane_tree() -> OctreeBuild {
  build(&PlaneSampler::new(5.5), GridDims::cube(11), &BuildConfig::default()).unwrap()
}

// =========================================================================
// Arena access
// =========================================================================

#[test]
fn test_build_is_send_and_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<OctreeBuild>();
  assert_send_sync::<NeighborLocator<'static>>();
}

#[test]
fn test_accessors() {
  let tree = plane_tree();
  assert_eq!(tree.root().index, 0);
  assert_eq!(tree.root_size(), 8);
  assert_eq!(tree.dims(), GridDims::cube(11));
  assert_eq!(tree.node(0), Some(tree.root()));
  assert_eq!(tree.node(tree.total_nodes()), None);
  assert_eq!(tree[1].depth, 1);
  assert_eq!(tree.leaf_nodes().count(), tree.leaf_count());
  assert_eq!(tree.locator().len(), tree.total_nodes());
}

#[test]
fn test_into_parts_keeps_index_space() {
  let tree = plane_tree();
  let expected_leaves = tree.leaf_indices().to_vec();
  let (nodes, leaves) = tree.into_parts();
  assert_eq!(leaves, expected_leaves);
  for &leaf in &leaves {
    assert_eq!(nodes[leaf].index, leaf);
  }

  // A locator over the bare arena answers the same queries.
  let locator = NeighborLocator::new(&nodes);
  let leaf = leaves[0];
  assert!(locator.find_neighbor(leaf, crate::types::Face::PosY).unwrap().is_some());
}

// =========================================================================
// Flat integer encoding
// =========================================================================

#[test]
fn test_raw_encoding_round_trips_links() {
  let tree = plane_tree();
  for node in tree.nodes() {
    match node.came_from {
      None => assert_eq!(node.raw_came_from(), NO_INDEX),
      Some(parent) => {
        let raw = node.raw_came_from();
        assert_eq!(raw as usize, parent);
        let parent = &tree[parent];
        let start = parent.raw_child_index_start();
        assert_eq!(node.index as i32 - start, node.raw_child_direction());
      }
    }
    if node.is_leaf() {
      assert_eq!(node.raw_child_index_start(), NO_INDEX);
    }
  }
}

#[test]
fn test_breadth_first_order() {
  let tree = plane_tree();
  let depths: Vec<u8> = tree.nodes().iter().map(|n| n.depth).collect();
  assert!(depths.windows(2).all(|w| w[0] <= w[1]), "depth never decreases");

  let first_depth_3 = tree.nodes().iter().position(|n| n.depth == 3).unwrap();
  assert_eq!(tree[first_depth_3].position, IVec3::new(0, 4, 0));
}
