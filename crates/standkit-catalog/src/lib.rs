//! # Standkit Catalog
//!
//! Reference data for the hardware the configurator can specify: truss
//! models, LED processors, pixel pitch densities and cabinet formats.
//! Figures come from manufacturer datasheets and each entry records its
//! source.
//!
//! Truss and controller lookups fail fast on unknown identifiers. Pitch
//! lookups fall back to a derived density so the metrics engine stays
//! total over any pitch value.

pub mod controller;
pub mod pitch;
pub mod tile;
pub mod truss;

pub use controller::{all_controllers, controller, ControllerSpec};
pub use pitch::{all_pitches, pixels_per_500mm, PitchEntry};
pub use tile::{tile_spec, TileSize, TileSpec};
pub use truss::{all_trusses, truss, BasePlate, LoadCapacity, TrussFamily, TrussSpec};
