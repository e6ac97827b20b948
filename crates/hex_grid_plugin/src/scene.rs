//! Scene synchronization driver.
//!
//! The host scene graph forwards its component and transform events here
//! as plain method calls: [`SceneSync::on_attached`],
//! [`SceneSync::on_detached`], [`SceneSync::on_moved`], and
//! [`SceneSync::on_scene_changed`]. The driver owns the grid and a
//! scene-scoped registry of occupiers, so a scene switch can never leave
//! stale entries behind: the whole store and registry are dropped, then
//! the new scene's population is re-attached.

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::coords::world_to_grid;
use crate::grid::TileGrid;
use crate::occupier::TileOccupier;
use crate::types::{NodeId, TileItem};

/// Difference between an occupier's expected cells (footprint shifted by
/// its last indexed position) and the cells actually holding its tag.
///
/// Produced by [`SceneSync::check_occupier`]; a non-clean diff means a
/// move notification was missed or the index was mutated behind the
/// tracker's back. Test diagnostic, not used by operations.
#[derive(Clone, Debug, Default)]
pub struct FootprintDiff {
  /// Expected cells the tag is missing from.
  pub missing: Vec<IVec3>,
  /// Cells holding the tag that the footprint doesn't explain.
  pub unexpected: Vec<IVec3>,
}

impl FootprintDiff {
  /// Whether the store exactly matches the tracker's expectation.
  pub fn is_clean(&self) -> bool {
    self.missing.is_empty() && self.unexpected.is_empty()
  }
}

/// Owns the grid and the per-scene occupier registry, and translates host
/// scene events into index maintenance.
pub struct SceneSync {
  grid: TileGrid,
  occupiers: HashMap<NodeId, TileOccupier>,
}

impl SceneSync {
  /// Create a driver with an empty grid and registry.
  pub fn new() -> Self {
    Self {
      grid: TileGrid::new(),
      occupiers: HashMap::new(),
    }
  }

  /// The grid, for queries by other systems.
  pub fn grid(&self) -> &TileGrid {
    &self.grid
  }

  /// Mutable grid access, for host tooling that edits cells directly.
  pub fn grid_mut(&mut self) -> &mut TileGrid {
    &mut self.grid
  }

  /// The registered occupier for a node, if any.
  pub fn occupier(&self, id: NodeId) -> Option<&TileOccupier> {
    self.occupiers.get(&id)
  }

  /// Mutable occupier access, for footprint shape edits.
  pub fn occupier_mut(&mut self, id: NodeId) -> Option<&mut TileOccupier> {
    self.occupiers.get_mut(&id)
  }

  /// Number of registered occupiers.
  pub fn len(&self) -> usize {
    self.occupiers.len()
  }

  /// Whether no occupier is registered.
  pub fn is_empty(&self) -> bool {
    self.occupiers.is_empty()
  }

  /// An occupant component appeared on a node: register it with the
  /// default footprint and index it at the node's position.
  pub fn on_attached(&mut self, id: NodeId, pos: Vec3) {
    self.on_attached_with(id, TileOccupier::new(), pos);
  }

  /// Like [`SceneSync::on_attached`], with a pre-shaped footprint.
  /// Re-attaching an id detaches the previous registration first.
  pub fn on_attached_with(&mut self, id: NodeId, mut occupier: TileOccupier, pos: Vec3) {
    if let Some(previous) = self.occupiers.get_mut(&id) {
      previous.detach(&mut self.grid, TileItem::from_node(id));
    }
    tracing::trace!(node = id, "occupier attached");
    occupier.attach(&mut self.grid, TileItem::from_node(id), pos);
    self.occupiers.insert(id, occupier);
  }

  /// The occupant component was removed from a node: unindex and forget
  /// it. Unknown ids are ignored.
  pub fn on_detached(&mut self, id: NodeId) {
    if let Some(mut occupier) = self.occupiers.remove(&id) {
      tracing::trace!(node = id, "occupier detached");
      occupier.detach(&mut self.grid, TileItem::from_node(id));
    }
  }

  /// A node's transform changed: reindex its footprint at the new
  /// position. Nodes without a registered occupier are ignored.
  pub fn on_moved(&mut self, id: NodeId, pos: Vec3) {
    if let Some(occupier) = self.occupiers.get_mut(&id) {
      occupier.moved(&mut self.grid, TileItem::from_node(id), pos);
    }
  }

  /// Drop all grid and registry state from the previous scene.
  pub fn reset(&mut self) {
    self.grid.clear();
    self.occupiers.clear();
  }

  /// The owning scene changed: forget everything, then run the attach
  /// sequence for every occupant present in the new scene.
  pub fn on_scene_changed<I>(&mut self, occupants: I)
  where
    I: IntoIterator<Item = (NodeId, TileOccupier, Vec3)>,
  {
    self.reset();
    let mut count = 0;
    for (id, occupier, pos) in occupants {
      self.on_attached_with(id, occupier, pos);
      count += 1;
    }
    tracing::debug!(occupiers = count, "rebuilt grid for new scene");
  }

  /// Recompute the cells implied by a node's footprint and last indexed
  /// position and diff them against the store contents. `None` for
  /// unregistered ids.
  pub fn check_occupier(&self, id: NodeId) -> Option<FootprintDiff> {
    let occupier = self.occupiers.get(&id)?;
    let item = TileItem::from_node(id);

    let shift = world_to_grid(occupier.last_position());
    let expected: Vec<IVec3> = occupier
      .tile_spaces()
      .iter()
      .map(|space| *space + shift)
      .collect();
    let actual = self.grid.cells_with_item(item);

    Some(FootprintDiff {
      missing: expected
        .iter()
        .filter(|cell| !actual.contains(cell))
        .copied()
        .collect(),
      unexpected: actual
        .iter()
        .filter(|cell| !expected.contains(cell))
        .copied()
        .collect(),
    })
  }
}

impl Default for SceneSync {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;
