//! Per-object footprint tracker.
//!
//! A [`TileOccupier`] records which cells an object covers relative to
//! its own anchor, plus the world position its footprint was last indexed
//! at. Index maintenance is a remove-then-add pair: stale cells from the
//! last indexed position come out, fresh cells at the new position go in.

use glam::{IVec3, Vec3};

use crate::grid::TileGrid;
use crate::types::TileItem;

/// Footprint tracker for one occupant object.
///
/// The footprint is never empty: an occupant always covers at least the
/// cell at its own anchor.
pub struct TileOccupier {
  spaces: Vec<IVec3>,
  last_position: Vec3,
}

impl TileOccupier {
  /// Create a tracker with the default single-cell footprint at the
  /// relative origin.
  pub fn new() -> Self {
    Self {
      spaces: vec![IVec3::ZERO],
      last_position: Vec3::ZERO,
    }
  }

  /// Add a relative cell to the footprint. A no-op when already present.
  pub fn add_cell(&mut self, space: IVec3) {
    if !self.spaces.contains(&space) {
      self.spaces.push(space);
    }
  }

  /// Remove a relative cell from the footprint. Removing the last cell
  /// resets the footprint to the single-cell default.
  pub fn remove_cell(&mut self, space: IVec3) {
    self.spaces.retain(|s| *s != space);
    if self.spaces.is_empty() {
      self.spaces.push(IVec3::ZERO);
    }
  }

  /// The relative cells this occupant covers.
  pub fn tile_spaces(&self) -> &[IVec3] {
    &self.spaces
  }

  /// The world position the footprint was last indexed at.
  pub fn last_position(&self) -> Vec3 {
    self.last_position
  }

  /// First-time registration: index the footprint at `pos` and record it.
  pub fn attach(&mut self, grid: &mut TileGrid, item: TileItem, pos: Vec3) {
    grid.add_all(item, &self.spaces, pos);
    self.last_position = pos;
  }

  /// Position change: unindex at the last recorded position, reindex at
  /// the new one, and record it.
  pub fn moved(&mut self, grid: &mut TileGrid, item: TileItem, new_pos: Vec3) {
    grid.remove_all(&self.spaces, self.last_position, &[item]);
    grid.add_all(item, &self.spaces, new_pos);
    self.last_position = new_pos;
  }

  /// Unregistration: unindex the footprint at the last recorded position.
  pub fn detach(&mut self, grid: &mut TileGrid, item: TileItem) {
    grid.remove_all(&self.spaces, self.last_position, &[item]);
  }
}

impl Default for TileOccupier {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "occupier_test.rs"]
mod occupier_test;
