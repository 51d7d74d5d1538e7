//! Grid layout and octree limits.
//!
//! # Sample Window
//!
//! A node of edge length `size` at `position` reads every sample in the
//! inclusive window `[position, position + size]` on each axis, so sibling
//! windows share their boundary plane:
//!
//! ```text
//!   sample:   0   1   2   3   4   5   6   7   8   9  10
//!             │               │               │
//!             └── child 0 ────┘               │
//!                             └── child 1 ────┘
//!             └──────────── root (size 8) ────┘   └─┴── margin
//! ```
//!
//! The grid therefore needs at least `root_size + 1` samples per axis. The
//! default margin of 3 leaves room for consumers (gradient estimation in the
//! mesh stage) that look one or two samples past the far boundary.
//!
//! # Memory Layout
//!
//! ```text
//! index = x + y * W + z * W * H
//! ```
//!
//! X is the fastest-varying axis.

/// Default extra samples beyond the root cube on each axis.
pub const DEFAULT_MARGIN_SAMPLES: i32 = 3;

/// Smallest margin that still covers the inclusive far boundary sample.
pub const MIN_MARGIN_SAMPLES: i32 = 1;

/// Deepest supported subdivision level.
///
/// `1 << 10` = 1024 samples per axis is already a ~4 GiB `f32` grid.
pub const MAX_DEPTH: u8 = 10;

/// Default subdivision depth (8³ root cube).
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Flat encoding of "no index" for `came_from`, `child_index_start` and
/// `child_direction` when an arena is exported as plain integers.
pub const NO_INDEX: i32 = -1;

/// Tolerance used by the brute-force adjacency test, in grid units.
///
/// Half a cell lets face-touching cubes count as adjacent without
/// requiring overlap.
pub const TOUCH_EPSILON: f32 = 0.5;

/// Number of children per subdivided node.
pub const CHILD_COUNT: usize = 8;

/// Unit offsets of the 8 octants, indexed by direction code.
///
/// Direction code bits: bit 0 = X half, bit 1 = Y half, bit 2 = Z half.
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (0,1,0)
/// - 3 = (1,1,0)
/// - 4 = (0,0,1)
/// - 5 = (1,0,1)
/// - 6 = (0,1,1)
/// - 7 = (1,1,1)
pub const OCTANT_OFFSETS: [[i32; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [0, 1, 0],
  [1, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [0, 1, 1],
  [1, 1, 1],
];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
