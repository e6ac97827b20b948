//! Growable per-octant cell storage.
//!
//! Each octant holds a layer (z) → row (y) → cell (x) nesting of
//! [`TileSpace`]s. A fresh store pre-allocates the default extent in
//! every dimension; writes past the current bounds grow the affected
//! arrays with padding so that clustered writes don't re-grow per cell.
//! Reads never grow.

use crate::constants::{DEFAULT_GRID_EXTENT, GROW_PAD, OCTANT_COUNT};
use crate::types::{Octant, StoreIndex, TileSpace};

type Row = Vec<TileSpace>;
type Layer = Vec<Row>;
type OctantCells = Vec<Layer>;

/// The backing store of the occupancy grid: 8 octants of nested cell
/// arrays, indexed by [`StoreIndex`].
///
/// Growth never shrinks and never discards occupants. The store knows
/// nothing about footprints or scenes; it only hands out cells.
pub struct OctantStore {
  octants: [OctantCells; OCTANT_COUNT],
}

impl OctantStore {
  /// Create a store with every octant at the default extent, all cells
  /// empty.
  pub fn new() -> Self {
    Self {
      octants: std::array::from_fn(|_| default_octant()),
    }
  }

  /// Reset to the default shape, discarding all occupants.
  pub fn reset(&mut self) {
    for octant in &mut self.octants {
      *octant = default_octant();
    }
  }

  /// Whether the index falls inside the currently allocated bounds.
  pub fn in_bounds(&self, index: StoreIndex) -> bool {
    let octant = &self.octants[index.octant.index()];
    let Some(layer) = octant.get(index.z as usize) else {
      return false;
    };
    let Some(row) = layer.get(index.y as usize) else {
      return false;
    };
    (index.x as usize) < row.len()
  }

  /// Grow the octant so the index is in bounds, outermost dimension
  /// first. Each dimension is padded past the requested index; newly
  /// created layers and rows are pre-sized to the default extent.
  pub fn ensure_capacity(&mut self, index: StoreIndex) {
    let octant = &mut self.octants[index.octant.index()];
    let (x, y, z) = (index.x as usize, index.y as usize, index.z as usize);

    if z >= octant.len() {
      let new_len = z + GROW_PAD;
      tracing::debug!(
        octant = index.octant.index(),
        from = octant.len(),
        to = new_len,
        "growing layer array"
      );
      octant.resize_with(new_len, default_layer);
    }

    let layer = &mut octant[z];
    if y >= layer.len() {
      let new_len = y + GROW_PAD;
      tracing::debug!(
        octant = index.octant.index(),
        layer = z,
        from = layer.len(),
        to = new_len,
        "growing row array"
      );
      layer.resize_with(new_len, default_row);
    }

    let row = &mut layer[y];
    if x >= row.len() {
      let new_len = x + GROW_PAD;
      tracing::debug!(
        octant = index.octant.index(),
        layer = z,
        row = y,
        from = row.len(),
        to = new_len,
        "growing cell array"
      );
      row.resize_with(new_len, TileSpace::new);
    }
  }

  /// Read a cell. `None` when the index is out of the allocated bounds;
  /// never grows.
  pub fn cell(&self, index: StoreIndex) -> Option<&TileSpace> {
    self
      .octants
      .get(index.octant.index())?
      .get(index.z as usize)?
      .get(index.y as usize)?
      .get(index.x as usize)
  }

  /// Mutable access to a cell, growing the store first if needed.
  pub fn cell_mut(&mut self, index: StoreIndex) -> &mut TileSpace {
    self.ensure_capacity(index);
    &mut self.octants[index.octant.index()][index.z as usize][index.y as usize][index.x as usize]
  }

  /// Allocated layer count of an octant.
  pub fn layer_count(&self, octant: Octant) -> usize {
    self.octants[octant.index()].len()
  }

  /// Allocated row count of a layer, 0 when the layer is unallocated.
  pub fn row_count(&self, octant: Octant, z: usize) -> usize {
    self.octants[octant.index()]
      .get(z)
      .map_or(0, |layer| layer.len())
  }

  /// Allocated cell count of a row, 0 when unallocated.
  pub fn cell_count(&self, octant: Octant, z: usize, y: usize) -> usize {
    self.octants[octant.index()]
      .get(z)
      .and_then(|layer| layer.get(y))
      .map_or(0, |row| row.len())
  }

  /// Visit every allocated cell.
  pub fn for_each_cell(&self, mut f: impl FnMut(StoreIndex, &TileSpace)) {
    for octant in Octant::ALL {
      for (z, layer) in self.octants[octant.index()].iter().enumerate() {
        for (y, row) in layer.iter().enumerate() {
          for (x, cell) in row.iter().enumerate() {
            f(StoreIndex::new(octant, x as u32, y as u32, z as u32), cell);
          }
        }
      }
    }
  }

  /// Visit every allocated cell mutably.
  pub fn for_each_cell_mut(&mut self, mut f: impl FnMut(StoreIndex, &mut TileSpace)) {
    for octant in Octant::ALL {
      for (z, layer) in self.octants[octant.index()].iter_mut().enumerate() {
        for (y, row) in layer.iter_mut().enumerate() {
          for (x, cell) in row.iter_mut().enumerate() {
            f(StoreIndex::new(octant, x as u32, y as u32, z as u32), cell);
          }
        }
      }
    }
  }
}

impl Default for OctantStore {
  fn default() -> Self {
    Self::new()
  }
}

fn default_row() -> Row {
  vec![TileSpace::new(); DEFAULT_GRID_EXTENT]
}

fn default_layer() -> Layer {
  std::iter::repeat_with(default_row)
    .take(DEFAULT_GRID_EXTENT)
    .collect()
}

fn default_octant() -> OctantCells {
  std::iter::repeat_with(default_layer)
    .take(DEFAULT_GRID_EXTENT)
    .collect()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
