//! Sheet layout constants and annotation furniture
//!
//! All sheets share one fixed A-series-like raster layout: a page header
//! band, a framed drawing area on the left, a data panel column on the
//! right and a title block in the bottom-right corner.

/// Sheet raster size in pixels.
pub const SHEET_W: u32 = 2800;
pub const SHEET_H: u32 = 2000;

/// Outer margin of the drawing frame.
pub const MARGIN: f32 = 100.0;

/// Base offset between geometry and the first dimension line.
pub const DIM_OFFSET: f32 = 50.0;
/// Dimension arrowhead length along the line.
pub const ARROW_LEN: f32 = 12.0;
/// Dimension arrowhead half-base across the line.
pub const ARROW_W: f32 = 5.0;

/// Data panel column, top-right of the sheet.
pub const PANEL_X: f32 = 2300.0;
pub const PANEL_Y: f32 = 80.0;
pub const PANEL_W: f32 = 400.0;
/// Horizontal room reserved for the panel column when fitting views.
pub const PANEL_CLEARANCE: f32 = 440.0;

pub const PANEL_LINE_H: f32 = 24.0;
pub const PANEL_PAD_X: f32 = 14.0;
pub const PANEL_PAD_Y: f32 = 10.0;
pub const PANEL_HEADER_H: f32 = 28.0;

/// Page header band height.
pub const HEADER_H: f32 = 56.0;

/// Title block, bottom-right inside the frame.
pub const TITLE_W: f32 = 360.0;
pub const TITLE_H: f32 = 90.0;
pub const TITLE_X: f32 = 2340.0;
pub const TITLE_Y: f32 = 1860.0;

/// One titled group of label/value rows in the data panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSection {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// The technical data column drawn on every sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPanel {
    pub sections: Vec<PanelSection>,
}

impl DataPanel {
    pub fn push(&mut self, title: impl Into<String>, rows: Vec<(String, String)>) {
        self.sections.push(PanelSection {
            title: title.into(),
            rows,
        });
    }
}

/// Sheet identification drawn in the header and title block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetMeta {
    pub project_name: String,
    pub client: String,
    pub date: String,
    pub designer: String,
    pub revision: u32,
}

/// Total panel height for the given sections.
///
/// ```text
/// pad + sum(header + 4 + rows * line_h + 8) + pad
/// ```
pub fn panel_height(panel: &DataPanel) -> f32 {
    let body: f32 = panel
        .sections
        .iter()
        .map(|s| PANEL_HEADER_H + 4.0 + s.rows.len() as f32 * PANEL_LINE_H + 8.0)
        .sum();
    PANEL_PAD_Y + body + PANEL_PAD_Y
}

/// Nominal print scale for the title block, assuming 96 dpi output.
///
/// One sheet pixel is 25.4/96 mm on paper; `px_per_m` pixels stand for
/// 1000 mm of structure. The ratio is rounded to the nearest 5.
pub fn scale_label(px_per_m: f32) -> String {
    let mm_per_px = 1000.0 / px_per_m.max(f32::EPSILON);
    let ratio = mm_per_px / (25.4 / 96.0);
    let rounded = ((ratio / 5.0).round() * 5.0).max(1.0);
    format!("1:{}", rounded as i64)
}
