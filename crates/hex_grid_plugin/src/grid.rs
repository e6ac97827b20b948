//! The public occupancy index over the octant store.
//!
//! Operations come in three forms: world position (sugar for a zero
//! coordinate with the position as origin), a single signed coordinate
//! plus origin, and a batch of coordinates plus origin. The origin lets
//! callers express footprints relative to an anchor: every coordinate is
//! shifted by `world_to_grid(origin)` before touching the store.
//!
//! All operations are total. Out-of-bounds reads are empty, out-of-bounds
//! writes grow the store, removing an absent tag reports "nothing
//! removed", and duplicate adds are no-ops.

use glam::{IVec3, Vec3};

use crate::coords::{grid_to_store, store_to_grid, world_to_grid};
use crate::store::OctantStore;
use crate::types::{GridBounds, Octant, StoreIndex, TileItem, TileSpace};

/// Occupancy index mapping the unbounded signed hex grid to the set of
/// occupant tags in each cell.
pub struct TileGrid {
  store: OctantStore,
}

impl TileGrid {
  /// Create an empty grid at the default allocation.
  pub fn new() -> Self {
    Self {
      store: OctantStore::new(),
    }
  }

  /// Drop every occupant and reset the store to its default shape.
  pub fn clear(&mut self) {
    self.store.reset();
  }

  // ===========================================================================
  // Add
  // ===========================================================================

  /// Register `item` in the cell containing a world position.
  pub fn add_at(&mut self, item: TileItem, pos: Vec3) {
    self.add(item, IVec3::ZERO, pos);
  }

  /// Register `item` in the cell at `space` (shifted by the origin's
  /// grid position). A no-op when already present.
  pub fn add(&mut self, item: TileItem, space: IVec3, origin: Vec3) {
    let index = grid_to_store(space + world_to_grid(origin));
    let cell = self.store.cell_mut(index);
    if !cell.contains(&item) {
      cell.push(item);
    }
  }

  /// Register `item` in every listed cell, e.g. a multi-cell footprint.
  pub fn add_all(&mut self, item: TileItem, spaces: &[IVec3], origin: Vec3) {
    for space in spaces {
      self.add(item, *space, origin);
    }
  }

  // ===========================================================================
  // Query
  // ===========================================================================

  /// Copy of the cell at a world position; empty when unoccupied or out
  /// of bounds.
  pub fn get_at(&self, pos: Vec3) -> TileSpace {
    self.get(IVec3::ZERO, pos)
  }

  /// Copy of the cell at `space`; empty when unoccupied or out of bounds.
  pub fn get(&self, space: IVec3, origin: Vec3) -> TileSpace {
    let index = grid_to_store(space + world_to_grid(origin));
    self.store.cell(index).cloned().unwrap_or_default()
  }

  /// Direct read of a store location; `None` when out of the allocated
  /// bounds.
  pub fn at(&self, index: StoreIndex) -> Option<&TileSpace> {
    self.store.cell(index)
  }

  /// Whether the cell containing a world position holds any tag not in
  /// `allowed`.
  pub fn occupied_at(&self, pos: Vec3, allowed: &[TileItem]) -> bool {
    self.occupied(IVec3::ZERO, pos, allowed)
  }

  /// Whether the cell at `space` holds any tag not in `allowed`.
  ///
  /// Passing an occupant's own tags in `allowed` lets it test a candidate
  /// placement without colliding with itself. Out-of-bounds cells are
  /// never occupied.
  pub fn occupied(&self, space: IVec3, origin: Vec3, allowed: &[TileItem]) -> bool {
    let index = grid_to_store(space + world_to_grid(origin));
    match self.store.cell(index) {
      Some(cell) => cell.iter().any(|item| !allowed.contains(item)),
      None => false,
    }
  }

  /// Indices into `spaces` whose cells are occupied by a tag not in
  /// `allowed`.
  pub fn occupied_all(&self, spaces: &[IVec3], origin: Vec3, allowed: &[TileItem]) -> Vec<usize> {
    spaces
      .iter()
      .enumerate()
      .filter(|(_, space)| self.occupied(**space, origin, allowed))
      .map(|(i, _)| i)
      .collect()
  }

  // ===========================================================================
  // Remove
  // ===========================================================================

  /// Remove tags from the cell containing a world position.
  pub fn remove_at(&mut self, pos: Vec3, items: &[TileItem]) -> bool {
    self.remove(IVec3::ZERO, pos, items)
  }

  /// Remove tags from the cell at `space`.
  ///
  /// An empty `items` clears the whole cell. Otherwise each listed tag is
  /// removed independently. Returns whether anything was removed.
  pub fn remove(&mut self, space: IVec3, origin: Vec3, items: &[TileItem]) -> bool {
    let index = grid_to_store(space + world_to_grid(origin));
    if !self.store.in_bounds(index) {
      return false;
    }
    let cell = self.store.cell_mut(index);

    if items.is_empty() {
      let had_any = !cell.is_empty();
      cell.clear();
      return had_any;
    }

    let mut removed = false;
    for item in items {
      removed |= remove_from(cell, *item);
    }
    removed
  }

  /// Remove a single tag from the cell at `space`; the
  /// [`TileItem::NONE`] sentinel clears the whole cell.
  pub fn remove_item(&mut self, space: IVec3, origin: Vec3, item: TileItem) -> bool {
    if item.is_none() {
      self.remove(space, origin, &[])
    } else {
      self.remove(space, origin, &[item])
    }
  }

  /// Remove tags from every listed cell. Returns the indices into
  /// `spaces` where something was removed.
  pub fn remove_all(&mut self, spaces: &[IVec3], origin: Vec3, items: &[TileItem]) -> Vec<usize> {
    let mut removed = Vec::new();
    for (i, space) in spaces.iter().enumerate() {
      if self.remove(*space, origin, items) {
        removed.push(i);
      }
    }
    removed
  }

  // ===========================================================================
  // Region and whole-store scans
  // ===========================================================================

  /// Every non-empty cell inside the axis-aligned box spanned by two
  /// world points. Endpoints may be given in any order per axis.
  pub fn bounded_set(&self, point1: Vec3, point2: Vec3) -> Vec<TileSpace> {
    let a = world_to_grid(point1);
    let b = world_to_grid(point2);
    let min = a.min(b);
    let max = a.max(b);

    let mut set = Vec::new();
    for z in min.z..=max.z {
      for y in min.y..=max.y {
        for x in min.x..=max.x {
          let Some(cell) = self.store.cell(grid_to_store(IVec3::new(x, y, z))) else {
            continue;
          };
          if !cell.is_empty() {
            set.push(cell.clone());
          }
        }
      }
    }
    set
  }

  /// Copies of every cell containing `item`.
  pub fn spaces_with_item(&self, item: TileItem) -> Vec<TileSpace> {
    let mut spaces = Vec::new();
    self.store.for_each_cell(|_, cell| {
      if cell.contains(&item) {
        spaces.push(cell.clone());
      }
    });
    spaces
  }

  /// Grid coordinates of every cell containing `item`.
  pub fn cells_with_item(&self, item: TileItem) -> Vec<IVec3> {
    let mut cells = Vec::new();
    self.store.for_each_cell(|index, cell| {
      if cell.contains(&item) {
        cells.push(store_to_grid(index));
      }
    });
    cells
  }

  /// Replace every occurrence of `old` with `new`, only in cells where
  /// `old` is present. Cells already holding `new` just drop `old`.
  pub fn retag(&mut self, old: TileItem, new: TileItem) {
    self.store.for_each_cell_mut(|_, cell| {
      let Some(pos) = cell.iter().position(|item| *item == old) else {
        return;
      };
      if cell.contains(&new) {
        cell.remove(pos);
      } else {
        cell[pos] = new;
      }
    });
  }

  // ===========================================================================
  // Extents (diagnostics)
  // ===========================================================================

  /// Min/max grid coordinates over occupied cells, zero-seeded.
  pub fn occupied_bounds(&self) -> GridBounds {
    let mut bounds = GridBounds::default();
    self.store.for_each_cell(|index, cell| {
      if !cell.is_empty() {
        let pos = store_to_grid(index);
        bounds.min = bounds.min.min(pos);
        bounds.max = bounds.max.max(pos);
      }
    });
    bounds
  }

  /// Highest allocated layer coordinate.
  pub fn max_layer(&self) -> i32 {
    let mut max = 0;
    for octant in Octant::ALL {
      if octant.z_negative() {
        continue;
      }
      max = max.max(self.store.layer_count(octant) as i32 - 1);
    }
    max
  }

  /// Lowest allocated layer coordinate.
  pub fn min_layer(&self) -> i32 {
    let mut min = 0;
    for octant in Octant::ALL {
      if !octant.z_negative() {
        continue;
      }
      min = min.min(-(self.store.layer_count(octant) as i32));
    }
    min
  }

  /// Highest allocated row coordinate.
  pub fn max_y(&self) -> i32 {
    let mut max = 0;
    for octant in Octant::ALL {
      if octant.y_negative() {
        continue;
      }
      for z in 0..self.store.layer_count(octant) {
        max = max.max(self.store.row_count(octant, z) as i32 - 1);
      }
    }
    max
  }

  /// Lowest allocated row coordinate.
  pub fn min_y(&self) -> i32 {
    let mut min = 0;
    for octant in Octant::ALL {
      if !octant.y_negative() {
        continue;
      }
      for z in 0..self.store.layer_count(octant) {
        min = min.min(-(self.store.row_count(octant, z) as i32));
      }
    }
    min
  }

  /// Highest allocated cell coordinate.
  pub fn max_x(&self) -> i32 {
    let mut max = 0;
    for octant in Octant::ALL {
      if octant.x_negative() {
        continue;
      }
      for z in 0..self.store.layer_count(octant) {
        for y in 0..self.store.row_count(octant, z) {
          max = max.max(self.store.cell_count(octant, z, y) as i32 - 1);
        }
      }
    }
    max
  }

  /// Lowest allocated cell coordinate.
  pub fn min_x(&self) -> i32 {
    let mut min = 0;
    for octant in Octant::ALL {
      if !octant.x_negative() {
        continue;
      }
      for z in 0..self.store.layer_count(octant) {
        for y in 0..self.store.row_count(octant, z) {
          min = min.min(-(self.store.cell_count(octant, z, y) as i32));
        }
      }
    }
    min
  }
}

impl Default for TileGrid {
  fn default() -> Self {
    Self::new()
  }
}

fn remove_from(cell: &mut TileSpace, item: TileItem) -> bool {
  match cell.iter().position(|it| *it == item) {
    Some(pos) => {
      cell.remove(pos);
      true
    }
    None => false,
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
