//! iso_octree - sparse iso-surface octree over dense density grids
//!
//! This crate decomposes a 3D scalar density field into a depth-bounded
//! octree whose leaves mark where an iso-surface crosses, so that a mesh
//! extraction stage only has to look near the surface.
//!
//! # Features
//!
//! - **Pruned breadth-first build**: nodes whose sampled min/max window does
//!   not straddle the iso-threshold are never subdivided
//! - **Flat arena**: every node lives in one `Vec`, parent/child links are
//!   plain indices, finished builds are shared read-only across threads
//! - **Neighbor finding**: same-size-or-larger neighbors by ancestor walk,
//!   and every leaf behind a shared face, edge or corner by descent
//! - **Seam analysis**: per-leaf finer/coarser faces for crack stitching
//! - **Parallel sampling and chunk builds** with rayon
//!
//! # Example
//!
//! ```ignore
//! use iso_octree::{build, BuildConfig, Face, GridDims, PlaneSampler};
//!
//! let config = BuildConfig::default(); // 8³ root, depth 3
//! let tree = build(&PlaneSampler::new(5.5), GridDims::cube(11), &config)?;
//!
//! let locator = tree.locator();
//! for &leaf in tree.leaf_indices() {
//!     let above = locator.face_neighbor_leaves(leaf, Face::PosY)?;
//!     println!("leaf {} touches {} nodes above", leaf, above.len());
//! }
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{MAX_DEPTH, NO_INDEX, TOUCH_EPSILON};
pub use error::{BuildError, QueryError};
pub use types::{Axis, Direction, Face, GridDims, Sign};

// Density sources and dense grids
pub mod density;
pub use density::{
  DensityField, DensityGrid, HeightmapSampler, PlaneSampler, SphereSampler, TerrainSampler,
};

// Octree build and neighbor queries
pub mod octree;
pub use octree::{
  analyze_seams, build, build_from_grid, Aabb3, BuildConfig, BuildStats, LeafSeams,
  NeighborLocator, Octant, OctreeBuild, OctreeNode, SeamMask,
};

// Mesh extraction interface
pub mod extract;
pub use extract::{MeshData, MeshExtractor};

// Independent parallel chunk builds
pub mod chunks;
pub use chunks::{build_chunks, ChunkBuild, ChunkRequest};
