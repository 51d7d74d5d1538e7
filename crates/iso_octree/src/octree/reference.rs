//! Brute-force adjacency by bounding-box descent.
//!
//! Slower than the ancestor walk but independent of it: nothing here looks
//! at octant codes or `came_from`. Used as ground truth for the walk and by
//! callers that need every terminal node near an arbitrary box.

use smallvec::{smallvec, SmallVec};

use super::{Aabb3, NeighborLocator};
use crate::constants::TOUCH_EPSILON;
use crate::error::QueryError;
use crate::types::{Face, Sign};

impl<'a> NeighborLocator<'a> {
  /// Terminal nodes whose bounds meet `query` within `eps`, sorted ascending.
  ///
  /// Descends from the root and skips any subtree whose bounds fail the
  /// tolerance test.
  pub fn intersecting_leaves(&self, query: &Aabb3, eps: f32) -> Vec<usize> {
    let mut found = Vec::new();
    if self.is_empty() {
      return found;
    }

    let nodes = self.nodes();
    let mut worklist: SmallVec<[usize; 64]> = smallvec![0];
    while let Some(current) = worklist.pop() {
      let node = &nodes[current];
      if !query.intersects_with_tolerance(&node.bounds(), eps) {
        continue;
      }
      match node.children() {
        Some(children) => worklist.extend(children),
        None => found.push(current),
      }
    }
    found.sort_unstable();
    found
  }

  /// Terminal nodes across `face` of `index`, by brute force.
  ///
  /// Runs [`Self::intersecting_leaves`] on the face rectangle, then keeps
  /// only nodes on the outer side of the plane whose contact with the face
  /// has positive area. The half-cell tolerance alone would also admit
  /// nodes touching only along an edge of the face.
  pub fn reference_face_leaves(&self, index: usize, face: Face) -> Result<Vec<usize>, QueryError> {
    let rect = self.node(index)?.bounds().face_rect(face);
    let normal = face.axis().index();
    let plane = rect.min[normal];
    let nodes = self.nodes();

    let found = self
      .intersecting_leaves(&rect, TOUCH_EPSILON)
      .into_iter()
      .filter(|&candidate| {
        let bounds = nodes[candidate].bounds();
        let outer = match face.sign() {
          Sign::Positive => bounds.min[normal] == plane,
          Sign::Negative => bounds.max[normal] == plane,
        };
        let area = (0..3)
          .filter(|&t| t != normal)
          .all(|t| bounds.min[t] < rect.max[t] && bounds.max[t] > rect.min[t]);
        outer && area
      })
      .collect();
    Ok(found)
  }
}
