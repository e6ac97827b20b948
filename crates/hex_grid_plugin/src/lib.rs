//! hex_grid_plugin - engine independent hex tile occupancy index
//!
//! This crate maps a conceptually unbounded 3D hex grid of signed integer
//! coordinates to the set of occupant tags placed in each cell, and keeps
//! that index synchronized as objects move. The hex layout is an offset
//! "brick" grid: odd rows shift half a cell along +X.
//!
//! # Features
//!
//! - **Coordinate transforms**: world ↔ grid ↔ octant-partitioned store
//!   indices, all pure functions
//! - **Octant store**: dense per-octant nested arrays with padded
//!   grow-on-demand, so the infinite signed grid backs onto unsigned
//!   indices
//! - **Occupancy operations**: add/remove/query/region-scan with batch
//!   forms for multi-cell footprints and self-exclusion for collision
//!   tests during drags
//! - **Footprint tracking**: per-object relative footprints with
//!   move-aware remove-then-add index maintenance
//! - **Scene sync**: explicit per-event driver API the host engine calls;
//!   scene switches rebuild the index from the new scene's population
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use hex_grid_plugin::{SceneSync, TileItem};
//!
//! let mut sync = SceneSync::new();
//! sync.on_attached(7, Vec3::new(1.7, 1.4, 0.0));
//!
//! // The drag tool asks: can node 7 sit here, ignoring itself?
//! let blocked = sync
//!   .grid()
//!   .occupied_at(Vec3::new(1.7, 1.4, 0.0), &[TileItem::from_node(7)]);
//! assert!(!blocked);
//!
//! sync.on_moved(7, Vec3::new(3.5, 3.0, 0.0));
//! assert!(sync.check_occupier(7).unwrap().is_clean());
//! ```

pub mod constants;
pub mod coords;
pub mod grid;
pub mod occupier;
pub mod scene;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use constants::{DEFAULT_GRID_EXTENT, GROW_PAD, OCTANT_COUNT, X_PITCH, Y_PITCH, Z_PITCH};
pub use coords::{grid_to_store, grid_to_world, snap_to_grid, store_to_grid, world_to_grid};
pub use grid::TileGrid;
pub use occupier::TileOccupier;
pub use scene::{FootprintDiff, SceneSync};
pub use store::OctantStore;
pub use types::{GridBounds, NodeId, Octant, StoreIndex, TileItem, TileSpace};
