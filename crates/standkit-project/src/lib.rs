//! # Standkit Project
//!
//! The document layer: the on-disk JSON project format with
//! validate-merge-recompute loading, a thread-safe editing store, the
//! application settings file, and the drawing package export that turns
//! a document into four PNG sheets, a JSON copy and an HTML viewer.
//!
//! ```text
//! settings.toml --> AppSettings ----.
//!                                   v
//! *.json --> Project --> ProjectStore --> export_project --> <name>/
//! ```

pub mod document;
pub mod export;
pub mod settings;
pub mod store;

pub use document::{EventInfo, Project, FILE_FORMAT_VERSION};
pub use export::{build_panel, export_project, sheet_meta, ExportArtifacts};
pub use settings::{AppSettings, ExportSettings, ProjectDefaults};
pub use store::{EventPatch, LedPatch, LegsPatch, ProjectStore, StructurePatch, TubesPatch};
