//! Pure transforms between world space, signed grid coordinates, and
//! octant store indices.
//!
//! World → grid quantizes to the nearest cell center, row first: the row
//! decides whether the brick offset applies to the column. Grid → store
//! folds signed coordinates into one of 8 octants so storage indices are
//! always non-negative:
//!
//! ```text
//!   signed:    ... -3 -2 -1 | 0 1 2 ...
//!   unsigned:  ...  2  1  0 | 0 1 2 ...      (per axis, per octant)
//! ```
//!
//! The per-axis mapping `c >= 0 -> c`, `c < 0 -> -(c + 1)` is a bijection
//! and round-trips exactly for every `i32`, including `i32::MIN`.

use glam::{IVec3, Vec3};

use crate::constants::{X_PITCH, Y_PITCH, Z_PITCH};
use crate::types::{Octant, StoreIndex};

/// Column index for a world x coordinate.
///
/// `offset` applies the odd-row half-cell shift before quantizing.
#[inline]
pub fn col_index(x: f32, offset: bool) -> i32 {
  if offset {
    (0.5 * (x - X_PITCH) / X_PITCH).round() as i32
  } else {
    (0.5 * x / X_PITCH).round() as i32
  }
}

/// Row index for a world y coordinate.
#[inline]
pub fn row_index(y: f32) -> i32 {
  (y / Y_PITCH).round() as i32
}

/// Layer index for a world z coordinate.
#[inline]
pub fn layer_index(z: f32) -> i32 {
  (z / Z_PITCH).round() as i32
}

/// Quantize a world position to its grid cell.
///
/// The row is computed first; odd rows (negative ones included) shift the
/// column lattice by half a cell.
pub fn world_to_grid(world: Vec3) -> IVec3 {
  let y = row_index(world.y);
  let offset = y % 2 != 0;
  IVec3::new(col_index(world.x, offset), y, layer_index(world.z))
}

/// World position of a grid cell's center.
///
/// The coordinate is interpreted relative to `origin`: it is shifted by
/// `world_to_grid(origin)` before conversion.
pub fn grid_to_world(space: IVec3, origin: Vec3) -> Vec3 {
  let space = space + world_to_grid(origin);
  let mut pos = Vec3::new(
    space.x as f32 * 2.0 * X_PITCH,
    space.y as f32 * Y_PITCH,
    space.z as f32 * Z_PITCH,
  );
  if space.y % 2 != 0 {
    pos.x += X_PITCH;
  }
  pos
}

/// Snap a world position to the center of its cell. Idempotent.
pub fn snap_to_grid(world: Vec3) -> Vec3 {
  grid_to_world(world_to_grid(world), Vec3::ZERO)
}

/// Fold a signed grid coordinate into its octant store index.
pub fn grid_to_store(space: IVec3) -> StoreIndex {
  let octant = Octant::from_signs(space.x < 0, space.y < 0, space.z < 0);
  StoreIndex::new(
    octant,
    fold_axis(space.x),
    fold_axis(space.y),
    fold_axis(space.z),
  )
}

/// Unfold a store index back to its signed grid coordinate. Exact inverse
/// of [`grid_to_store`].
pub fn store_to_grid(index: StoreIndex) -> IVec3 {
  IVec3::new(
    unfold_axis(index.x, index.octant.x_negative()),
    unfold_axis(index.y, index.octant.y_negative()),
    unfold_axis(index.z, index.octant.z_negative()),
  )
}

/// Store index of the cell containing a world position.
pub fn world_to_store(world: Vec3) -> StoreIndex {
  grid_to_store(world_to_grid(world))
}

/// World position of a store index's cell center.
pub fn store_to_world(index: StoreIndex) -> Vec3 {
  grid_to_world(store_to_grid(index), Vec3::ZERO)
}

// `-(c + 1)` on the signed side keeps i32::MIN in range.
#[inline]
fn fold_axis(c: i32) -> u32 {
  if c < 0 {
    (-(c + 1)) as u32
  } else {
    c as u32
  }
}

#[inline]
fn unfold_axis(u: u32, negative: bool) -> i32 {
  if negative {
    -(u as i32) - 1
  } else {
    u as i32
  }
}

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;
