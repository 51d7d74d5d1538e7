//! Mesh extraction interface.
//!
//! The octree only decides *where* to triangulate. Turning the surface
//! leaves into triangles is left to a [`MeshExtractor`], which receives the
//! finished build, the density field it was built from and the threshold.

use crate::density::DensityField;
use crate::octree::OctreeBuild;

/// Triangle mesh produced by an extractor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
  /// Vertex positions in world space.
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub triangles: Vec<u32>,

  /// Per-vertex RGBA colors. Empty when the extractor does not color.
  pub colors: Vec<[f32; 4]>,
}

impl MeshData {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.triangles.clear();
    self.colors.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len() / 3
  }
}

/// Surface extraction over the leaves of a build.
pub trait MeshExtractor {
  fn extract(&self, build: &OctreeBuild, field: &dyn DensityField, iso_threshold: f32) -> MeshData;
}

/// Grey ramp from black at the root to white at `max_depth`.
///
/// Handy for coloring debug geometry by refinement level.
pub fn depth_color(depth: u8, max_depth: u8) -> [f32; 4] {
  let t = if max_depth == 0 {
    1.0
  } else {
    (depth.min(max_depth) as f32) / (max_depth as f32)
  };
  [t, t, t, 1.0]
}

#[cfg(test)]
mod tests {
  use glam::IVec3;

  use super::*;
  use crate::density::PlaneSampler;
  use crate::octree::{build, BuildConfig};
  use crate::types::GridDims;

  /// One vertex per surface leaf, snapped to the leaf center.
  struct LeafCenters;

  impl MeshExtractor for LeafCenters {
    fn extract(&self, build: &OctreeBuild, field: &dyn DensityField, iso_threshold: f32) -> MeshData {
      let mut mesh = MeshData::new();
      for leaf in build.leaf_nodes() {
        let corner = field.sample(leaf.position);
        if corner < iso_threshold {
          mesh.vertices.push(leaf.world_center.to_array());
          mesh.colors.push(depth_color(leaf.depth, build.config().max_depth));
        }
      }
      mesh
    }
  }

  #[test]
  fn test_extractor_sees_build_and_field() {
    let field = PlaneSampler::new(5.5);
    let tree = build(&field, GridDims::cube(11), &BuildConfig::default()).unwrap();
    let mesh = LeafCenters.extract(&tree, &field, 0.0);

    assert_eq!(mesh.vertices.len(), 64);
    assert_eq!(mesh.colors.len(), 64);
    assert!(mesh.colors.iter().all(|c| *c == [1.0, 1.0, 1.0, 1.0]));
    assert_eq!(mesh.triangle_count(), 0);
    assert!(!mesh.is_empty());
  }

  #[test]
  fn test_closure_field_through_trait_object() {
    let field = |p: IVec3| p.y as f32 - 5.5;
    let tree = build(&field, GridDims::cube(11), &BuildConfig::default()).unwrap();
    let mesh = LeafCenters.extract(&tree, &field, 0.0);
    assert_eq!(mesh.vertices.len(), 64);
  }

  #[test]
  fn test_mesh_data_clear() {
    let mut mesh = MeshData {
      vertices: vec![[0.0; 3]; 3],
      triangles: vec![0, 1, 2],
      colors: vec![[1.0; 4]; 3],
    };
    assert_eq!(mesh.triangle_count(), 1);
    mesh.clear();
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
  }

  #[test]
  fn test_depth_color_ramp() {
    assert_eq!(depth_color(0, 4), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(depth_color(2, 4), [0.5, 0.5, 0.5, 1.0]);
    assert_eq!(depth_color(4, 4), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(depth_color(0, 0), [1.0, 1.0, 1.0, 1.0]);
  }
}
