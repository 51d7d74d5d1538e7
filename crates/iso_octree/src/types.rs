//! Core value types shared by the builder and neighbor queries.

use glam::IVec3;

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  /// Component index (0, 1, 2).
  #[inline]
  pub const fn index(self) -> usize {
    match self {
      Axis::X => 0,
      Axis::Y => 1,
      Axis::Z => 2,
    }
  }

  /// Axis from a component index, `None` outside 0..3.
  pub const fn from_index(index: usize) -> Option<Self> {
    match index {
      0 => Some(Axis::X),
      1 => Some(Axis::Y),
      2 => Some(Axis::Z),
      _ => None,
    }
  }

  /// Bit this axis occupies in an octant direction code.
  #[inline]
  pub const fn octant_bit(self) -> u8 {
    1 << self.index()
  }
}

/// Direction of travel along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  #[inline]
  pub const fn as_i32(self) -> i32 {
    match self {
      Sign::Negative => -1,
      Sign::Positive => 1,
    }
  }

  /// `None` for zero.
  pub const fn from_i32(value: i32) -> Option<Self> {
    if value < 0 {
      Some(Sign::Negative)
    } else if value > 0 {
      Some(Sign::Positive)
    } else {
      None
    }
  }

  pub const fn flip(self) -> Self {
    match self {
      Sign::Negative => Sign::Positive,
      Sign::Positive => Sign::Negative,
    }
  }
}

/// One of the six faces of a cube, named by its outward direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
  NegX,
  PosX,
  NegY,
  PosY,
  NegZ,
  PosZ,
}

impl Face {
  /// Faces in bit order (`-X, +X, -Y, +Y, -Z, +Z`).
  pub const ALL: [Face; 6] = [
    Face::NegX,
    Face::PosX,
    Face::NegY,
    Face::PosY,
    Face::NegZ,
    Face::PosZ,
  ];

  pub const fn new(axis: Axis, sign: Sign) -> Self {
    match (axis, sign) {
      (Axis::X, Sign::Negative) => Face::NegX,
      (Axis::X, Sign::Positive) => Face::PosX,
      (Axis::Y, Sign::Negative) => Face::NegY,
      (Axis::Y, Sign::Positive) => Face::PosY,
      (Axis::Z, Sign::Negative) => Face::NegZ,
      (Axis::Z, Sign::Positive) => Face::PosZ,
    }
  }

  pub const fn axis(self) -> Axis {
    match self {
      Face::NegX | Face::PosX => Axis::X,
      Face::NegY | Face::PosY => Axis::Y,
      Face::NegZ | Face::PosZ => Axis::Z,
    }
  }

  pub const fn sign(self) -> Sign {
    match self {
      Face::NegX | Face::NegY | Face::NegZ => Sign::Negative,
      Face::PosX | Face::PosY | Face::PosZ => Sign::Positive,
    }
  }

  pub const fn opposite(self) -> Self {
    Face::new(self.axis(), self.sign().flip())
  }

  /// Position in [`Face::ALL`], also the bit index in a seam mask.
  #[inline]
  pub const fn index(self) -> usize {
    self.axis().index() * 2
      + match self.sign() {
        Sign::Negative => 0,
        Sign::Positive => 1,
      }
  }

  pub fn offset(self) -> IVec3 {
    let mut offset = IVec3::ZERO;
    offset[self.axis().index()] = self.sign().as_i32();
    offset
  }

  pub fn direction(self) -> Direction {
    Direction(self.offset())
  }
}

/// A face, edge, or corner direction: a non-zero offset in `{-1, 0, 1}³`.
///
/// There are 26 of them: 6 faces, 12 edges, 8 corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction(IVec3);

impl Direction {
  /// Validate an offset. Every component must be in `-1..=1` and at least
  /// one must be non-zero.
  pub fn new(offset: IVec3) -> Option<Self> {
    let in_range = offset.cmpge(IVec3::NEG_ONE).all() && offset.cmple(IVec3::ONE).all();
    if in_range && offset != IVec3::ZERO {
      Some(Self(offset))
    } else {
      None
    }
  }

  pub fn offset(self) -> IVec3 {
    self.0
  }

  /// Sign of travel along `axis`, `None` if this direction does not move
  /// along it.
  pub fn component(self, axis: Axis) -> Option<Sign> {
    Sign::from_i32(self.0[axis.index()])
  }

  /// Number of axes this direction moves along (1 face, 2 edge, 3 corner).
  pub fn arity(self) -> usize {
    Axis::ALL
      .iter()
      .filter(|&&axis| self.component(axis).is_some())
      .count()
  }

  /// All 26 directions, faces first, then edges, then corners.
  pub fn all() -> impl Iterator<Item = Direction> {
    let mut dirs: Vec<Direction> = Vec::with_capacity(26);
    for z in -1..=1 {
      for y in -1..=1 {
        for x in -1..=1 {
          if let Some(dir) = Direction::new(IVec3::new(x, y, z)) {
            dirs.push(dir);
          }
        }
      }
    }
    dirs.sort_by_key(|dir| dir.arity());
    dirs.into_iter()
  }
}

impl From<Face> for Direction {
  fn from(face: Face) -> Self {
    face.direction()
  }
}

/// Dense grid dimensions in samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl GridDims {
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  /// Cube with `n` samples per axis.
  pub const fn cube(n: i32) -> Self {
    Self { x: n, y: n, z: n }
  }

  pub fn axis(&self, axis: Axis) -> i32 {
    match axis {
      Axis::X => self.x,
      Axis::Y => self.y,
      Axis::Z => self.z,
    }
  }

  /// Total sample count (0 for degenerate dimensions).
  pub fn len(&self) -> usize {
    if self.x <= 0 || self.y <= 0 || self.z <= 0 {
      return 0;
    }
    self.x as usize * self.y as usize * self.z as usize
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Per-axis minimum: the region both dimensions cover.
  pub fn intersect(self, other: GridDims) -> Self {
    Self {
      x: self.x.min(other.x),
      y: self.y.min(other.y),
      z: self.z.min(other.z),
    }
  }

  #[inline]
  pub fn contains(&self, p: IVec3) -> bool {
    p.x >= 0 && p.y >= 0 && p.z >= 0 && p.x < self.x && p.y < self.y && p.z < self.z
  }

  /// Row-major flat index, X fastest: `x + y * W + z * W * H`.
  #[inline]
  pub fn flatten(&self, p: IVec3) -> usize {
    let w = self.x as usize;
    let h = self.y as usize;
    p.x as usize + p.y as usize * w + p.z as usize * w * h
  }

  /// Inverse of [`GridDims::flatten`].
  #[inline]
  pub fn unflatten(&self, index: usize) -> IVec3 {
    let w = self.x as usize;
    let h = self.y as usize;
    let z = index / (w * h);
    let rem = index - z * w * h;
    let y = rem / w;
    let x = rem % w;
    IVec3::new(x as i32, y as i32, z as i32)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
