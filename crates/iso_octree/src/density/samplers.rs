//! Simple density samplers for testing and debugging.
//!
//! These implement deterministic mathematical fields whose surfaces are easy
//! to predict, so builder and neighbor tests can assert exact leaf placement
//! without noise in the way. [`TerrainSampler`] and [`HeightmapSampler`] add
//! value noise for realistic, irregular trees.
//!
//! Convention: positive density above/outside the surface, negative
//! below/inside.

use glam::{IVec3, Vec3};

use super::noise::value_noise_3d;
use super::DensityField;

/// Horizontal plane: `density = y - height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneSampler {
  pub height: f32,
}

impl PlaneSampler {
  pub fn new(height: f32) -> Self {
    Self { height }
  }
}

impl DensityField for PlaneSampler {
  #[inline]
  fn sample(&self, p: IVec3) -> f32 {
    p.y as f32 - self.height
  }
}

/// Sphere: `density = |p - center| - radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSampler {
  pub center: Vec3,
  pub radius: f32,
}

impl Default for SphereSampler {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      radius: 4.0,
    }
  }
}

impl SphereSampler {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }
}

impl DensityField for SphereSampler {
  #[inline]
  fn sample(&self, p: IVec3) -> f32 {
    p.as_vec3().distance(self.center) - self.radius
  }
}

/// Noise terrain.
///
/// The grid coordinate is scaled and offset into world space, then
/// `density = world.y + amplitude * |noise(world * noise_scale)|`.
/// The absolute value folds the noise into ridges that raise the ground
/// plane unevenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSampler {
  /// Grid-to-world scale.
  pub scale: f32,
  /// World-space offset applied after scaling.
  pub offset: Vec3,
  /// Frequency of the noise lookup.
  pub noise_scale: f32,
  pub amplitude: f32,
  pub seed: u32,
}

impl Default for TerrainSampler {
  fn default() -> Self {
    Self {
      scale: 1.0,
      offset: Vec3::ZERO,
      noise_scale: 0.2,
      amplitude: 1.0,
      seed: 0,
    }
  }
}

impl TerrainSampler {
  pub fn new(seed: u32) -> Self {
    Self {
      seed,
      ..Self::default()
    }
  }

  pub fn with_scale(mut self, scale: f32) -> Self {
    self.scale = scale;
    self
  }

  pub fn with_offset(mut self, offset: Vec3) -> Self {
    self.offset = offset;
    self
  }

  pub fn with_noise_scale(mut self, noise_scale: f32) -> Self {
    self.noise_scale = noise_scale;
    self
  }

  pub fn with_amplitude(mut self, amplitude: f32) -> Self {
    self.amplitude = amplitude;
    self
  }
}

impl DensityField for TerrainSampler {
  fn sample(&self, p: IVec3) -> f32 {
    let world = p.as_vec3() * self.scale + self.offset;
    let n = (world * self.noise_scale).as_dvec3();
    let noise = value_noise_3d(n.x, n.y, n.z, self.seed) as f32;
    world.y + self.amplitude * noise.abs()
  }
}

/// 2D heightmap terrain: `density = y - height(x, z)`.
///
/// `height(x, z)` is value noise remapped to `[0, 1]` and multiplied by
/// `max_height`, so the surface stays inside `[0, max_height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightmapSampler {
  pub frequency: f32,
  pub max_height: f32,
  pub seed: u32,
}

impl Default for HeightmapSampler {
  fn default() -> Self {
    Self {
      frequency: 0.1,
      max_height: 8.0,
      seed: 0,
    }
  }
}

impl HeightmapSampler {
  pub fn new(max_height: f32, seed: u32) -> Self {
    Self {
      max_height,
      seed,
      ..Self::default()
    }
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  /// Surface height above column `(x, z)`.
  pub fn height_at(&self, x: i32, z: i32) -> f32 {
    let f = self.frequency as f64;
    let n = value_noise_3d(x as f64 * f, 0.0, z as f64 * f, self.seed);
    ((n * 0.5 + 0.5) as f32) * self.max_height
  }
}

impl DensityField for HeightmapSampler {
  #[inline]
  fn sample(&self, p: IVec3) -> f32 {
    p.y as f32 - self.height_at(p.x, p.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plane_sign() {
    let plane = PlaneSampler::new(5.0);
    assert!(plane.sample(IVec3::new(0, 4, 0)) < 0.0);
    assert_eq!(plane.sample(IVec3::new(3, 5, 9)), 0.0);
    assert!(plane.sample(IVec3::new(0, 6, 0)) > 0.0);
  }

  #[test]
  fn test_sphere_distance() {
    let sphere = SphereSampler::new(3.0).with_center(Vec3::splat(4.0));
    assert_eq!(sphere.sample(IVec3::splat(4)), -3.0);
    assert_eq!(sphere.sample(IVec3::new(7, 4, 4)), 0.0);
    assert!(sphere.sample(IVec3::ZERO) > 0.0);
  }

  #[test]
  fn test_terrain_never_below_ground_plane() {
    // |noise| >= 0, so density >= world.y
    let terrain = TerrainSampler::new(3).with_amplitude(2.0);
    for y in 0..6 {
      for x in 0..6 {
        let p = IVec3::new(x, y, x + y);
        assert!(terrain.sample(p) >= y as f32);
      }
    }
  }

  #[test]
  fn test_heightmap_within_bounds() {
    let hm = HeightmapSampler::new(10.0, 11);
    for x in -5..5 {
      for z in -5..5 {
        let h = hm.height_at(x, z);
        assert!((0.0..=10.0).contains(&h), "height {} at ({}, {})", h, x, z);
      }
    }
  }
}
