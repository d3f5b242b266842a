//! # Standkit Drafting
//!
//! Turns an assembled scene into annotated orthographic shop drawings.
//! Four fixed sheets cover a stand: front, rear, side and plan, each with
//! its own dimension set, a data panel and a title block.
//!
//! ## Pipeline
//!
//! ```text
//! Scene (world metres)
//!   ├── ViewKind (axis mapping + painter order)
//!   ├── SheetViewport (fit into the drawing area)
//!   ├── annotate (dimension plan in sheet pixels)
//!   └── render_view (tiny-skia raster + rusttype lettering)
//! ```
//!
//! Lettering uses whatever sans-serif face the host system offers; on a
//! machine without fonts the sheets still carry geometry and lines.

pub mod dimension;
pub mod font;
pub mod layout;
pub mod render;
pub mod view;
pub mod viewport;

pub use dimension::{annotate, DimAxis, DimLine, DimStyle, Tick, ViewAnnotations};
pub use layout::{panel_height, scale_label, DataPanel, PanelSection, SheetMeta};
pub use render::render_view;
pub use view::{Projected, ViewKind};
pub use viewport::SheetViewport;
