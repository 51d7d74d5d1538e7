//! Hashed value noise.
//!
//! Deterministic, seedable, and allocation free. Good enough to drive
//! terrain-like test fields; not a replacement for gradient noise.

/// 3D value noise in `[-1, 1]`.
///
/// Hashes the 8 corners of the containing unit cell and blends them with a
/// smoothstep-weighted trilinear interpolation.
pub fn value_noise_3d(x: f64, y: f64, z: f64, seed: u32) -> f64 {
  // Integer cell coordinates
  let ix = x.floor() as i32;
  let iy = y.floor() as i32;
  let iz = z.floor() as i32;

  let ux = smoothstep(x - x.floor());
  let uy = smoothstep(y - y.floor());
  let uz = smoothstep(z - z.floor());

  let c000 = hash_to_float(hash_3d(ix, iy, iz, seed));
  let c100 = hash_to_float(hash_3d(ix + 1, iy, iz, seed));
  let c010 = hash_to_float(hash_3d(ix, iy + 1, iz, seed));
  let c110 = hash_to_float(hash_3d(ix + 1, iy + 1, iz, seed));
  let c001 = hash_to_float(hash_3d(ix, iy, iz + 1, seed));
  let c101 = hash_to_float(hash_3d(ix + 1, iy, iz + 1, seed));
  let c011 = hash_to_float(hash_3d(ix, iy + 1, iz + 1, seed));
  let c111 = hash_to_float(hash_3d(ix + 1, iy + 1, iz + 1, seed));

  let x00 = lerp(c000, c100, ux);
  let x10 = lerp(c010, c110, ux);
  let x01 = lerp(c001, c101, ux);
  let x11 = lerp(c011, c111, ux);

  let y0 = lerp(x00, x10, uy);
  let y1 = lerp(x01, x11, uy);

  lerp(y0, y1, uz)
}

#[inline]
fn smoothstep(t: f64) -> f64 {
  t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
  a + (b - a) * t
}

#[inline]
fn hash_3d(x: i32, y: i32, z: i32, seed: u32) -> u32 {
  let mut h = seed;
  h ^= x as u32;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= y as u32;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= z as u32;
  h = h.wrapping_mul(0x27d4_eb2d);
  h ^= h >> 15;
  h
}

/// Map a hash to `[-1, 1]`.
#[inline]
fn hash_to_float(h: u32) -> f64 {
  (h as f64 / u32::MAX as f64) * 2.0 - 1.0
}
