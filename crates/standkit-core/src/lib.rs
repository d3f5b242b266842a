//! # Standkit Core
//!
//! Core error types, unit helpers and physical constants for Standkit.
//! Everything downstream builds on these: catalog lookups, the metrics
//! engine, scene assembly, drafting and the project shell.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{CatalogError, DraftingError, Error, ExportError, ProjectError, Result};
