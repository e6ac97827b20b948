use super::*;

#[test]
fn tile_item_equality_is_by_value() {
  assert_eq!(TileItem::new(5), TileItem::new(5));
  assert_ne!(TileItem::new(5), TileItem::new(6));
}

#[test]
fn tile_item_default_is_sentinel() {
  assert!(TileItem::default().is_none());
  assert_eq!(TileItem::default(), TileItem::NONE);
  assert!(!TileItem::new(0).is_none());
}

#[test]
fn tile_item_from_node_preserves_id() {
  let item = TileItem::from_node(42);
  assert_eq!(item.raw(), 42);
  assert!(!item.is_none());
}

#[test]
fn octant_sign_bits() {
  let octant = Octant::from_signs(true, false, true);
  assert!(octant.x_negative());
  assert!(!octant.y_negative());
  assert!(octant.z_negative());
  assert_eq!(octant.index(), 0b101);

  assert_eq!(Octant::from_signs(false, false, false).index(), 0);
}

#[test]
fn octant_all_covers_every_sign_combination() {
  for (i, octant) in Octant::ALL.iter().enumerate() {
    assert_eq!(octant.index(), i);
    let rebuilt = Octant::from_signs(
      octant.x_negative(),
      octant.y_negative(),
      octant.z_negative(),
    );
    assert_eq!(rebuilt, *octant);
  }
}

#[test]
fn tile_space_stays_inline_for_small_cells() {
  let mut cell = TileSpace::new();
  for i in 0..4 {
    cell.push(TileItem::new(i));
  }
  assert!(!cell.spilled());
}

#[test]
fn grid_bounds_default_is_origin() {
  let bounds = GridBounds::default();
  assert_eq!(bounds.min, IVec3::ZERO);
  assert_eq!(bounds.max, IVec3::ZERO);
}
