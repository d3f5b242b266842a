//! World-to-sheet mapping for a single orthographic view

use glam::Vec2;
use tiny_skia::Transform;

/// Clearance added around the projected geometry before fitting, in metres.
const FIT_PADDING_M: f32 = 0.2;
/// Fraction of the drawing area actually used, leaving room for dimensions.
const FIT_FACTOR: f32 = 0.82;
/// Drawing area inside the frame, to the left of the data panel column.
const DRAW_W: f32 = 2160.0;
const DRAW_H: f32 = 1800.0;
/// Left edge of the drawing area on the sheet.
const ORIGIN_X: f32 = 160.0;
/// Top edge of the band the drawing is centered in, below the page header.
const TOP_Y: f32 = 120.0;

/// Maps padded world extents (metres, v up) onto sheet pixels (y down).
///
/// ```text
/// pixel_x = origin_x + (u - u_min) * scale
/// pixel_y = origin_y + (v_max - v) * scale
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SheetViewport {
    scale: f32,
    u_min: f32,
    v_max: f32,
    origin_x: f32,
    origin_y: f32,
    render_w: f32,
    render_h: f32,
}

impl SheetViewport {
    /// Fit the view extents into the drawing area.
    ///
    /// The extents are padded by [`FIT_PADDING_M`] on every side, scaled
    /// uniformly to fill [`FIT_FACTOR`] of the area, and centered vertically.
    pub fn fit(min: Vec2, max: Vec2) -> Self {
        let u_min = min.x - FIT_PADDING_M;
        let v_min = min.y - FIT_PADDING_M;
        let u_max = max.x + FIT_PADDING_M;
        let v_max = max.y + FIT_PADDING_M;

        // Degenerate or inverted extents would blow the scale up.
        let extent_u = (u_max - u_min).max(0.001);
        let extent_v = (v_max - v_min).max(0.001);

        let scale = (DRAW_W / extent_u).min(DRAW_H / extent_v) * FIT_FACTOR;
        let render_w = (extent_u * scale).floor();
        let render_h = (extent_v * scale).floor();

        Self {
            scale,
            u_min,
            v_max,
            origin_x: ORIGIN_X,
            origin_y: TOP_Y + (DRAW_H - render_h) / 2.0,
            render_w,
            render_h,
        }
    }

    /// Sheet x of a world u coordinate.
    pub fn x_px(&self, u: f32) -> f32 {
        self.origin_x + (u - self.u_min) * self.scale
    }

    /// Sheet y of a world v coordinate. World v grows up, sheet y grows down.
    pub fn y_px(&self, v: f32) -> f32 {
        self.origin_y + (self.v_max - v) * self.scale
    }

    /// Transform applying the full world-to-sheet mapping, for path drawing.
    pub fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, -self.scale).post_translate(
            self.origin_x - self.u_min * self.scale,
            self.origin_y + self.v_max * self.scale,
        )
    }

    /// Pixels per world metre.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    pub fn render_w(&self) -> f32 {
        self.render_w
    }

    pub fn render_h(&self) -> f32 {
        self.render_h
    }

    /// Sheet y of the padded bottom edge.
    pub fn bottom_y(&self) -> f32 {
        self.origin_y + self.render_h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_vertically() {
        // A wide flat extent is width-bound and floats mid-band.
        let vp = SheetViewport::fit(Vec2::new(0.0, 0.0), Vec2::new(5.0, 2.1));
        let expected_scale = DRAW_W / 5.4 * FIT_FACTOR;
        assert!((vp.scale() - expected_scale).abs() < 1e-3);
        assert_eq!(vp.origin_x(), ORIGIN_X);
        let band_gap = (DRAW_H - vp.render_h()) / 2.0;
        assert!((vp.origin_y() - (TOP_Y + band_gap)).abs() < 1e-3);
    }

    #[test]
    fn test_pixel_mapping_flips_y() {
        let vp = SheetViewport::fit(Vec2::new(0.0, 0.0), Vec2::new(5.0, 2.1));
        // Left pad edge lands on the origin column.
        assert!((vp.x_px(-0.2) - ORIGIN_X).abs() < 1e-3);
        // Higher world points sit higher on the sheet (smaller y).
        assert!(vp.y_px(2.1) < vp.y_px(0.0));
        assert!((vp.y_px(-0.2) - vp.bottom_y()).abs() < 1.0);
    }

    #[test]
    fn test_transform_matches_pixel_mapping() {
        let vp = SheetViewport::fit(Vec2::new(-1.0, 0.5), Vec2::new(4.0, 3.0));
        let ts = vp.transform();
        let mut pt = [tiny_skia::Point::from_xy(2.0, 1.5)];
        ts.map_points(&mut pt);
        assert!((pt[0].x - vp.x_px(2.0)).abs() < 1e-3);
        assert!((pt[0].y - vp.y_px(1.5)).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_extent_does_not_explode() {
        let vp = SheetViewport::fit(Vec2::ZERO, Vec2::ZERO);
        assert!(vp.scale().is_finite());
        assert!(vp.render_w() > 0.0);
    }
}
