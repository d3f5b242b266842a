//! Error handling for Standkit
//!
//! Provides error types for all layers of the application:
//! - Catalog errors (reference data lookups)
//! - Project errors (document validation and persistence)
//! - Export errors (drawing package generation)
//! - Drafting errors (sheet rasterization)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Catalog error type
///
/// Represents failed lookups against the reference databases for trusses,
/// LED controllers, pixel pitches and cabinet formats.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// Truss model not present in the truss database
    #[error("Unknown truss model: {model}")]
    TrussNotFound {
        /// The truss model identifier that was looked up.
        model: String,
    },

    /// Controller not present in the controller database
    #[error("Unknown controller: {id}")]
    ControllerNotFound {
        /// The controller identifier that was looked up.
        id: String,
    },

    /// Cabinet format string did not match a known tile size
    #[error("Unknown tile size: {label}")]
    TileSizeNotFound {
        /// The tile size label that failed to parse.
        label: String,
    },

    /// Generic catalog error
    #[error("Catalog error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Project error type
///
/// Represents errors in the project document lifecycle: loading, validating,
/// merging over defaults and saving.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// Project name is empty or missing
    #[error("Project name is required")]
    MissingName,

    /// A physical dimension is missing, non-finite or out of range
    #[error("Invalid value for {field}: {value}")]
    InvalidDimension {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Mount type string did not match a known mounting style
    #[error("Unknown mount type: {mount}")]
    UnknownMountType {
        /// The rejected mount type string.
        mount: String,
    },

    /// Project file could not be parsed
    #[error("Failed to parse project file: {reason}")]
    Parse {
        /// The reason the file failed to parse.
        reason: String,
    },

    /// Project document could not be serialized
    #[error("Failed to serialize project: {reason}")]
    Serialize {
        /// The reason serialization failed.
        reason: String,
    },

    /// Generic project error
    #[error("Project error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Export error type
///
/// Represents errors raised while producing the drawing package
/// (PNG sheets, project JSON and HTML viewer).
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The mounting style has no drawing package
    ///
    /// Raised before any sheet is rendered or any file is written.
    #[error("Export is only available for ground-mounted structures (mount type: {mount})")]
    UnsupportedMount {
        /// The mount type that was requested.
        mount: String,
    },

    /// Output directory could not be prepared
    #[error("Failed to prepare output directory {path}: {reason}")]
    OutputDir {
        /// The directory that could not be created.
        path: String,
        /// The reason the directory could not be created.
        reason: String,
    },

    /// Generic export error
    #[error("Export error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Drafting error type
///
/// Represents errors raised while rasterizing an orthographic sheet.
#[derive(Error, Debug, Clone)]
pub enum DraftingError {
    /// Raster canvas could not be allocated
    #[error("Failed to allocate {width}x{height} canvas")]
    Canvas {
        /// The requested canvas width in pixels.
        width: u32,
        /// The requested canvas height in pixels.
        height: u32,
    },

    /// Encoding the finished sheet to an image file failed
    #[error("Failed to encode sheet: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },

    /// Generic drafting error
    #[error("Drafting error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for Standkit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Project error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Drafting error
    #[error(transparent)]
    Drafting(#[from] DraftingError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a failed catalog lookup
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is the export precondition on mounting style
    pub fn is_unsupported_mount(&self) -> bool {
        matches!(self, Error::Export(ExportError::UnsupportedMount { .. }))
    }

    /// Check if this is a project validation failure
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::Project(
                ProjectError::MissingName
                    | ProjectError::InvalidDimension { .. }
                    | ProjectError::UnknownMountType { .. }
            )
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

// Conversions between error types are automatic via `from` implementations
