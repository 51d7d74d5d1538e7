//! Counters collected while building an octree.

/// Statistics from one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Nodes appended to the arena, root included.
  pub nodes_created: usize,
  /// Nodes taken off the worklist and classified.
  pub nodes_visited: usize,
  /// Terminal nodes that straddle the iso-surface.
  pub leaf_count: usize,
  /// Density samples read while scanning windows.
  ///
  /// Shared boundary planes are read once per node that owns them.
  pub samples_scanned: usize,
  /// Deepest level that was created.
  pub max_depth_reached: u8,
  /// Nodes flagged as obstacles.
  pub obstacle_count: usize,
  /// Wall-clock build time in microseconds.
  pub elapsed_us: u64,
}

impl BuildStats {
  /// Nodes that were split into 8 children.
  #[inline]
  pub fn subdivided_count(&self) -> usize {
    self.nodes_created.saturating_sub(1) / 8
  }

  /// Fraction of arena nodes that ended up as surface leaves.
  pub fn leaf_ratio(&self) -> f32 {
    if self.nodes_created == 0 {
      return 0.0;
    }
    self.leaf_count as f32 / self.nodes_created as f32
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_zeroed() {
    let stats = BuildStats::default();
    assert_eq!(stats.nodes_created, 0);
    assert_eq!(stats.subdivided_count(), 0);
    assert_eq!(stats.leaf_ratio(), 0.0);
  }

  #[test]
  fn test_subdivided_count_from_arena_size() {
    let stats = BuildStats {
      nodes_created: 1 + 8 + 8,
      ..Default::default()
    };
    assert_eq!(stats.subdivided_count(), 2);
  }

  #[test]
  fn test_leaf_ratio() {
    let stats = BuildStats {
      nodes_created: 9,
      leaf_count: 3,
      ..Default::default()
    };
    assert!((stats.leaf_ratio() - 1.0 / 3.0).abs() < 1e-6);
  }
}
