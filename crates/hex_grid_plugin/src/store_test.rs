use crate::types::TileItem;

use super::*;

fn index(octant: Octant, x: u32, y: u32, z: u32) -> StoreIndex {
  StoreIndex::new(octant, x, y, z)
}

const POS: Octant = Octant::ALL[0];

#[test]
fn fresh_store_has_default_extents_everywhere() {
  let store = OctantStore::new();
  for octant in Octant::ALL {
    assert_eq!(store.layer_count(octant), DEFAULT_GRID_EXTENT);
    assert_eq!(store.row_count(octant, 0), DEFAULT_GRID_EXTENT);
    assert_eq!(
      store.cell_count(octant, DEFAULT_GRID_EXTENT - 1, DEFAULT_GRID_EXTENT - 1),
      DEFAULT_GRID_EXTENT
    );
  }
}

#[test]
fn in_bounds_edges() {
  let store = OctantStore::new();
  let edge = (DEFAULT_GRID_EXTENT - 1) as u32;
  assert!(store.in_bounds(index(POS, 0, 0, 0)));
  assert!(store.in_bounds(index(POS, edge, edge, edge)));
  assert!(!store.in_bounds(index(POS, edge + 1, 0, 0)));
  assert!(!store.in_bounds(index(POS, 0, edge + 1, 0)));
  assert!(!store.in_bounds(index(POS, 0, 0, edge + 1)));
}

#[test]
fn out_of_bounds_read_is_none_and_does_not_grow() {
  let store = OctantStore::new();
  assert!(store.cell(index(POS, 1000, 0, 0)).is_none());
  assert_eq!(store.layer_count(POS), DEFAULT_GRID_EXTENT);
}

#[test]
fn growth_pads_past_the_request() {
  let mut store = OctantStore::new();
  let target = index(POS, 100, 50, 40);
  store.ensure_capacity(target);

  assert_eq!(store.layer_count(POS), 40 + GROW_PAD);
  assert_eq!(store.row_count(POS, 40), 50 + GROW_PAD);
  assert_eq!(store.cell_count(POS, 40, 50), 100 + GROW_PAD);
  assert!(store.in_bounds(target));
}

#[test]
fn new_layers_get_default_rows_and_cells() {
  let mut store = OctantStore::new();
  store.ensure_capacity(index(POS, 0, 0, 60));

  // A layer created by the grow is pre-sized to the default extents.
  assert_eq!(store.row_count(POS, 59), DEFAULT_GRID_EXTENT);
  assert_eq!(store.cell_count(POS, 59, 0), DEFAULT_GRID_EXTENT);
}

#[test]
fn growth_preserves_existing_cells() {
  let mut store = OctantStore::new();
  let a = TileItem::new(1);
  store.cell_mut(index(POS, 0, 0, 0)).push(a);

  store.ensure_capacity(index(POS, 1000, 1000, 1000));
  assert_eq!(store.cell(index(POS, 0, 0, 0)).unwrap().as_slice(), &[a]);
}

#[test]
fn growth_within_bounds_is_a_no_op() {
  let mut store = OctantStore::new();
  store.ensure_capacity(index(POS, 5, 5, 5));
  assert_eq!(store.layer_count(POS), DEFAULT_GRID_EXTENT);
  assert_eq!(store.row_count(POS, 5), DEFAULT_GRID_EXTENT);
}

#[test]
fn octants_grow_independently() {
  let mut store = OctantStore::new();
  let neg = Octant::ALL[0b111];
  store.ensure_capacity(index(neg, 0, 0, 80));

  assert_eq!(store.layer_count(neg), 80 + GROW_PAD);
  assert_eq!(store.layer_count(POS), DEFAULT_GRID_EXTENT);
}

#[test]
fn cell_mut_grows_on_demand() {
  let mut store = OctantStore::new();
  let far = index(POS, 200, 3, 3);
  store.cell_mut(far).push(TileItem::new(9));
  assert_eq!(store.cell(far).unwrap().len(), 1);
}

#[test]
fn reset_restores_default_shape_and_drops_occupants() {
  let mut store = OctantStore::new();
  store.cell_mut(index(POS, 300, 0, 0)).push(TileItem::new(1));

  store.reset();
  assert_eq!(store.cell_count(POS, 0, 0), DEFAULT_GRID_EXTENT);
  assert!(store.cell(index(POS, 0, 0, 0)).unwrap().is_empty());
  assert!(store.cell(index(POS, 300, 0, 0)).is_none());
}

#[test]
fn for_each_cell_visits_occupied_cells() {
  let mut store = OctantStore::new();
  let target = index(Octant::ALL[3], 2, 4, 6);
  store.cell_mut(target).push(TileItem::new(7));

  let mut found = Vec::new();
  store.for_each_cell(|idx, cell| {
    if !cell.is_empty() {
      found.push(idx);
    }
  });
  assert_eq!(found, vec![target]);
}
