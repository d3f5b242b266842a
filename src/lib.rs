//! # Standkit
//!
//! A configurator for ground-supported LED wall stands: describe the wall
//! and its structure, get every derived figure (cabinets, weights, power,
//! network, leg layout) plus annotated orthographic shop drawings.
//!
//! ## Architecture
//!
//! Standkit is organized as a workspace with multiple crates:
//!
//! 1. **standkit-core** - Errors, unit formatting, physical constants
//! 2. **standkit-catalog** - Truss, controller, pitch and cabinet reference data
//! 3. **standkit-engine** - Config sections, derived figures, geometry parameters
//! 4. **standkit-scene** - The stand assembled as positioned primitives
//! 5. **standkit-drafting** - Orthographic sheets: projection, dimensioning, raster output
//! 6. **standkit-project** - Documents, editing store, settings, drawing package export
//! 7. **standkit** - The command line binary that ties everything together
//!
//! ## Features
//!
//! - **Derived figures**: cabinet grid, resolution, LED and structure weight,
//!   16 A power lines, ethernet port plan, leg and tube layout
//! - **Reference catalogs**: Prolyte-style truss sections, NovaStar senders,
//!   Uniview cabinet formats and pixel pitches
//! - **Shop drawings**: front, rear, side and plan sheets with dimension
//!   chains, data panel and title block at print resolution
//! - **Project files**: validated JSON documents that merge over defaults
//!   and are recomputed on every load
//! - **Drawing package**: one folder with four PNGs, the document copy and
//!   a standalone HTML viewer

// Re-export modules for main.rs
pub use standkit_core::units;

pub use standkit_core::{
    CatalogError, DraftingError, Error, ExportError, ProjectError, Result,
};

pub use standkit_catalog::{
    all_controllers, all_pitches, all_trusses, controller, pixels_per_500mm, tile_spec, truss,
    BasePlate, ControllerSpec, LoadCapacity, PitchEntry, TileSize, TileSpec, TrussFamily,
    TrussSpec,
};

pub use standkit_engine::{
    compute, compute_values, ClampType, ComputedValues, GeometryParams, LedConfig, LegConfig,
    MountType, NetworkSchema, PowerSchema, StructureConfig, TubeConfig, WallShape,
};

pub use standkit_scene::{assemble, Axis, Bounds, Element, Material, Scene, Shape};

pub use standkit_drafting::{
    annotate, render_view, scale_label, DataPanel, PanelSection, SheetMeta, SheetViewport,
    ViewKind,
};

pub use standkit_project::{
    build_panel, export_project, sheet_meta, AppSettings, EventInfo, EventPatch, ExportArtifacts,
    ExportSettings, LedPatch, LegsPatch, Project, ProjectDefaults, ProjectStore, StructurePatch,
    TubesPatch, FILE_FORMAT_VERSION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
