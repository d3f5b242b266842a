//! # Standkit Engine
//!
//! The derivation core: editable configuration in, every displayed figure
//! out. [`compute`] turns the LED and structure sections into
//! [`ComputedValues`], and [`GeometryParams::derive`] flattens the result
//! into the metre-space geometry the scene and the sheets are built from.
//! Both passes are pure; nothing here touches the filesystem.

pub mod compute;
pub mod config;
pub mod projector;

pub use compute::{compute, compute_values, ComputedValues, NetworkSchema, PowerSchema};
pub use config::{
    ClampType, LedConfig, LegConfig, MountType, StructureConfig, TubeConfig, WallShape,
};
pub use projector::GeometryParams;

// Catalog types that appear in the engine's own API.
pub use standkit_catalog::TrussFamily;
