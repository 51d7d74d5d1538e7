//! Sparse octree over a density field, stored as a flat arena.
//!
//! # Arena Convention
//!
//! All nodes of one build live in a single `Vec<OctreeNode>`, appended in
//! breadth-first order and never removed. Relations are indices:
//!
//! ```text
//!   nodes[i].came_from          -> parent slot (None for the root)
//!   nodes[i].child_index_start  -> first of 8 child slots (None if terminal)
//!   child in octant d           =  child_index_start + d
//! ```
//!
//! Depth 0 is the root. A node at depth `d` has edge length
//! `root_size >> d`.
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` record and `Octant` direction codes
//! - [`config`]: `BuildConfig` thresholds, depth and margin
//! - [`builder`]: breadth-first build with min/max pruning
//! - [`arena`]: `OctreeBuild`, the finished arena plus leaf set
//! - [`neighbor`]: ancestor-walk neighbor queries
//! - [`reference`]: brute-force bounding-box adjacency
//! - [`seams`]: per-leaf finer/coarser face classification

pub mod arena;
pub mod bounds;
pub mod builder;
pub mod config;
pub mod neighbor;
pub mod node;
pub mod reference;
pub mod seams;
pub mod stats;

// Re-exports
pub use arena::OctreeBuild;
pub use bounds::Aabb3;
pub use builder::{build, build_from_grid, scan_window};
pub use config::BuildConfig;
pub use neighbor::NeighborLocator;
pub use node::{Octant, OctreeNode};
pub use seams::{analyze_seams, leaf_seams, LeafSeams, SeamMask};
pub use stats::BuildStats;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
