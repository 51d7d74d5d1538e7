use glam::{IVec3, Vec3};

use super::*;
use crate::density::{PlaneSampler, SphereSampler};
use crate::octree::{build, BuildConfig};
use crate::types::GridDims;

// =========================================================================
// SeamMask
// =========================================================================

#[test]
fn test_mask_insert_and_contains() {
  let mut mask = SeamMask::EMPTY;
  assert!(mask.is_empty());
  mask.insert(Face::PosY);
  mask.insert(Face::NegX);
  assert!(mask.contains(Face::PosY));
  assert!(mask.contains(Face::NegX));
  assert!(!mask.contains(Face::NegY));
  assert_eq!(mask.len(), 2);
  assert_eq!(mask.bits(), 0b00_1001);
}

#[test]
fn test_mask_faces_in_order() {
  let mask: SeamMask = [Face::PosZ, Face::NegX, Face::PosY].into_iter().collect();
  let faces: Vec<_> = mask.faces().collect();
  assert_eq!(faces, vec![Face::NegX, Face::PosY, Face::PosZ]);
  assert_eq!(SeamMask::ALL.faces().count(), 6);
}

#[test]
fn test_mask_truncates_high_bits() {
  assert_eq!(SeamMask::from_bits_truncate(0xFF), SeamMask::ALL);
}

// =========================================================================
// Leaf classification
// =========================================================================

/// `y - 5.5`: every leaf sits in the y = 5 layer under pruned size-2 nodes,
/// so +Y is always coarser and -Y always matches.
#[test]
fn test_plane_leaves_see_coarser_above() {
  let tree = build(&PlaneSampler::new(5.5), GridDims::cube(11), &BuildConfig::default()).unwrap();
  let seams = analyze_seams(&tree).unwrap();
  assert_eq!(seams.len(), 64);

  for seam in &seams {
    let node = &tree[seam.index];
    assert_eq!(seam.coarser_faces.faces().collect::<Vec<_>>(), vec![Face::PosY]);
    assert!(seam.finer_faces.is_empty());
    assert!(!seam.is_uniform());

    assert_eq!(seam.boundary_faces.contains(Face::NegX), node.position.x == 0);
    assert_eq!(seam.boundary_faces.contains(Face::PosX), node.position.x == 7);
    assert_eq!(seam.boundary_faces.contains(Face::NegZ), node.position.z == 0);
    assert_eq!(seam.boundary_faces.contains(Face::PosZ), node.position.z == 7);
    assert!(!seam.boundary_faces.contains(Face::PosY));
    assert!(!seam.boundary_faces.contains(Face::NegY));
  }
}

#[test]
fn test_order_follows_leaf_indices() {
  let tree = build(&PlaneSampler::new(5.5), GridDims::cube(11), &BuildConfig::default()).unwrap();
  let seams = analyze_seams(&tree).unwrap();
  let order: Vec<usize> = seams.iter().map(|s| s.index).collect();
  assert_eq!(order, tree.leaf_indices());
}

/// A subdivided neighbor shows up as a finer face.
#[test]
fn test_pruned_node_sees_finer_neighbor() {
  let tree = build(&PlaneSampler::new(5.5), GridDims::cube(11), &BuildConfig::default()).unwrap();
  let low = tree
    .nodes()
    .iter()
    .position(|n| n.position == IVec3::ZERO && n.size == 4)
    .unwrap();

  let seams = leaf_seams(&tree.locator(), low).unwrap();
  assert!(seams.finer_faces.contains(Face::PosY));
  assert!(seams.coarser_faces.is_empty());
  assert!(seams.boundary_faces.contains(Face::NegY));
}

#[test]
fn test_masks_agree_with_face_leaves() {
  let field = SphereSampler::new(6.3).with_center(Vec3::new(7.6, 8.2, 9.1));
  let tree = build(&field, GridDims::cube(19), &BuildConfig::new().with_max_depth(4)).unwrap();
  let locator = tree.locator();

  for seam in analyze_seams(&tree).unwrap() {
    let depth = tree[seam.index].depth;
    for face in Face::ALL {
      let leaves = locator.face_neighbor_leaves(seam.index, face).unwrap();
      let finer = leaves.iter().any(|&i| tree[i].depth > depth);
      let coarser = leaves.len() == 1 && tree[leaves[0]].depth < depth;
      assert_eq!(seam.boundary_faces.contains(face), leaves.is_empty());
      assert_eq!(seam.finer_faces.contains(face), finer);
      assert_eq!(seam.coarser_faces.contains(face), coarser);
    }
  }
}

#[test]
fn test_out_of_range_leaf() {
  let tree = build(&PlaneSampler::new(5.5), GridDims::cube(11), &BuildConfig::default()).unwrap();
  let len = tree.total_nodes();
  assert_eq!(
    leaf_seams(&tree.locator(), len),
    Err(QueryError::IndexOutOfRange { index: len, len })
  );
}
