//! Dimension planning for each sheet
//!
//! Dimensions are planned in sheet pixels from the resolved geometry, then
//! drawn by the renderer. Each sheet carries its own complete set so a
//! single printed page stands on its own: the front sheet measures the
//! wall, the rear sheet the leg run and tube heights, the side sheet the
//! depth chain and the plan sheet the footprint.

use crate::layout::DIM_OFFSET;
use crate::view::ViewKind;
use crate::viewport::SheetViewport;
use standkit_core::units::format_mm;
use standkit_engine::GeometryParams;

/// Second dimension row, for sub-measures next to the main row.
const SUB_OFFSET: f32 = 100.0;
/// Depth chain row on the side sheet.
const CHAIN_OFFSET: f32 = 110.0;
/// Per-gap row under the leg span on the rear sheet.
const LEG_GAP_OFFSET: f32 = 160.0;
/// Horizontal step between stacked tube-height dimensions.
const TUBE_STACK_STEP: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimAxis {
    Horizontal,
    Vertical,
}

/// Ink weights for dimension lines and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimStyle {
    /// Main measure of the sheet.
    Ink,
    /// Highlighted sub-measure.
    Accent,
    /// Secondary chained measure.
    Muted,
}

/// One dimension between two pixel anchors.
///
/// `offset` is the distance from the anchors to the dimension line:
/// positive draws below (horizontal) or left (vertical) of the anchors,
/// negative draws on the opposite side.
#[derive(Debug, Clone, PartialEq)]
pub struct DimLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub offset: f32,
    pub label: String,
    pub axis: DimAxis,
    pub small: bool,
    pub style: DimStyle,
}

/// Vertical reference mark dropped from a leg centreline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub x: f32,
    pub y_top: f32,
    pub y_bottom: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewAnnotations {
    pub dims: Vec<DimLine>,
    pub ticks: Vec<Tick>,
}

impl ViewAnnotations {
    fn horizontal(
        &mut self,
        vp: &SheetViewport,
        u1: f32,
        u2: f32,
        v: f32,
        offset: f32,
        value_m: f32,
        small: bool,
        style: DimStyle,
    ) {
        self.dims.push(DimLine {
            x1: vp.x_px(u1),
            y1: vp.y_px(v),
            x2: vp.x_px(u2),
            y2: vp.y_px(v),
            offset,
            label: format_mm(value_m as f64),
            axis: DimAxis::Horizontal,
            small,
            style,
        });
    }

    fn vertical(
        &mut self,
        vp: &SheetViewport,
        u: f32,
        v1: f32,
        v2: f32,
        offset: f32,
        value_m: f32,
        small: bool,
        style: DimStyle,
    ) {
        self.dims.push(DimLine {
            x1: vp.x_px(u),
            y1: vp.y_px(v1),
            x2: vp.x_px(u),
            y2: vp.y_px(v2),
            offset,
            label: format_mm(value_m as f64),
            axis: DimAxis::Vertical,
            small,
            style,
        });
    }
}

/// Plan the dimension set of one sheet.
pub fn annotate(
    view: ViewKind,
    geo: &GeometryParams,
    has_plates: bool,
    vp: &SheetViewport,
) -> ViewAnnotations {
    match view {
        ViewKind::Front => front(geo, vp),
        ViewKind::Rear => rear(geo, vp),
        ViewKind::Side => side(geo, vp),
        ViewKind::Plan => plan(geo, has_plates, vp),
    }
}

fn front(geo: &GeometryParams, vp: &SheetViewport) -> ViewAnnotations {
    let mut out = ViewAnnotations::default();
    let total_h = geo.total_height();

    out.horizontal(
        vp,
        0.0,
        geo.led_w,
        0.0,
        DIM_OFFSET,
        geo.led_w,
        false,
        DimStyle::Ink,
    );
    out.vertical(vp, 0.0, 0.0, total_h, DIM_OFFSET, total_h, false, DimStyle::Ink);

    // Bar and LED splits only when the bar is tall enough to read.
    if geo.bottom_bar > 0.0 && geo.bottom_bar * vp.scale() > 20.0 {
        out.vertical(
            vp,
            0.0,
            0.0,
            geo.bottom_bar,
            SUB_OFFSET,
            geo.bottom_bar,
            true,
            DimStyle::Accent,
        );
        out.vertical(
            vp,
            0.0,
            geo.bottom_bar,
            total_h,
            SUB_OFFSET,
            geo.led_h,
            true,
            DimStyle::Accent,
        );
    }

    out
}

fn rear(geo: &GeometryParams, vp: &SheetViewport) -> ViewAnnotations {
    let mut out = ViewAnnotations::default();
    let total_h = geo.total_height();
    // The rear view mirrors x, so the wall spans u in [-led_w, 0].
    let left_u = -geo.led_w;

    out.horizontal(
        vp,
        left_u,
        0.0,
        0.0,
        DIM_OFFSET,
        geo.led_w,
        false,
        DimStyle::Ink,
    );
    out.vertical(vp, left_u, 0.0, total_h, DIM_OFFSET, total_h, false, DimStyle::Ink);

    for (i, &ty) in geo.tube_y.iter().enumerate() {
        out.vertical(
            vp,
            left_u,
            0.0,
            ty,
            SUB_OFFSET + TUBE_STACK_STEP * i as f32,
            ty,
            true,
            DimStyle::Accent,
        );
    }

    if geo.leg_x.len() >= 2 {
        let first = geo.leg_x[0];
        let last = geo.leg_x[geo.leg_x.len() - 1];
        out.horizontal(
            vp,
            -last,
            -first,
            0.0,
            SUB_OFFSET,
            last - first,
            false,
            DimStyle::Accent,
        );

        let ground = vp.y_px(0.0);
        let reach = if geo.leg_x.len() > 2 {
            LEG_GAP_OFFSET
        } else {
            SUB_OFFSET
        };
        for &lx in &geo.leg_x {
            out.ticks.push(Tick {
                x: vp.x_px(-lx),
                y_top: ground + 4.0,
                y_bottom: ground + reach + 6.0,
            });
        }

        if geo.leg_x.len() > 2 {
            for pair in geo.leg_x.windows(2) {
                out.horizontal(
                    vp,
                    -pair[1],
                    -pair[0],
                    0.0,
                    LEG_GAP_OFFSET,
                    pair[1] - pair[0],
                    true,
                    DimStyle::Muted,
                );
            }
        }
    }

    out
}

fn side(geo: &GeometryParams, vp: &SheetViewport) -> ViewAnnotations {
    let mut out = ViewAnnotations::default();
    let total_h = geo.total_height();
    let total_d = geo.total_depth();
    let s = vp.scale();

    out.horizontal(vp, 0.0, total_d, 0.0, DIM_OFFSET, total_d, false, DimStyle::Ink);

    // Depth chain: cabinet, air gap, truss section, stabiliser arm. Pieces
    // too thin to letter at this scale are left off the chain.
    if geo.cab_d * s > 30.0 {
        out.horizontal(
            vp,
            0.0,
            geo.cab_d,
            0.0,
            CHAIN_OFFSET,
            geo.cab_d,
            true,
            DimStyle::Accent,
        );
    }
    if (geo.z_truss_front - geo.cab_d) * s > 20.0 {
        out.horizontal(
            vp,
            geo.cab_d,
            geo.z_truss_front,
            0.0,
            CHAIN_OFFSET,
            geo.z_truss_front - geo.cab_d,
            true,
            DimStyle::Muted,
        );
    }
    if geo.truss_depth * s > 20.0 {
        out.horizontal(
            vp,
            geo.z_truss_front,
            geo.z_truss_back,
            0.0,
            CHAIN_OFFSET,
            geo.truss_depth,
            true,
            DimStyle::Muted,
        );
    }
    if geo.leg_arm > 0.0 && geo.leg_arm * s > 20.0 {
        out.horizontal(
            vp,
            geo.z_truss_back,
            total_d,
            0.0,
            CHAIN_OFFSET,
            geo.leg_arm,
            true,
            DimStyle::Muted,
        );
    }

    out.vertical(vp, 0.0, 0.0, total_h, DIM_OFFSET, total_h, false, DimStyle::Ink);
    if geo.bottom_bar > 0.0 && geo.bottom_bar * s > 20.0 {
        out.vertical(
            vp,
            0.0,
            geo.bottom_bar,
            total_h,
            SUB_OFFSET,
            geo.led_h,
            true,
            DimStyle::Accent,
        );
    }

    out
}

fn plan(geo: &GeometryParams, has_plates: bool, vp: &SheetViewport) -> ViewAnnotations {
    let mut out = ViewAnnotations::default();
    let total_d = geo.total_depth();

    out.horizontal(
        vp,
        0.0,
        geo.led_w,
        0.0,
        DIM_OFFSET,
        geo.led_w,
        false,
        DimStyle::Ink,
    );
    out.vertical(vp, 0.0, 0.0, total_d, DIM_OFFSET, total_d, false, DimStyle::Ink);

    // Footprint of the first base plate, drawn past the plate tail.
    if has_plates && !geo.leg_x.is_empty() {
        let lx = geo.leg_x[0];
        let plate_front = geo.z_truss_front - geo.base_plate_inset;
        let plate_back = plate_front + geo.base_plate_d;
        out.horizontal(
            vp,
            lx - geo.base_plate_w / 2.0,
            lx + geo.base_plate_w / 2.0,
            plate_back,
            -(DIM_OFFSET - 10.0),
            geo.base_plate_w,
            true,
            DimStyle::Accent,
        );
        if geo.base_plate_inset * vp.scale() > 12.0 {
            out.vertical(
                vp,
                lx - geo.base_plate_w / 2.0,
                plate_front,
                geo.z_truss_front,
                DIM_OFFSET - 10.0,
                geo.base_plate_inset,
                true,
                DimStyle::Muted,
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use standkit_engine::{compute, LedConfig, StructureConfig};

    fn default_geo() -> GeometryParams {
        let led = LedConfig::default();
        let structure = StructureConfig::default();
        let computed = compute(&led, &structure).unwrap();
        GeometryParams::derive(&led, &structure, &computed)
    }

    #[test]
    fn test_front_measures_the_wall() {
        let geo = default_geo();
        let vp = SheetViewport::fit(Vec2::new(0.0, 0.0), Vec2::new(5.0, 2.1));
        let ann = annotate(ViewKind::Front, &geo, true, &vp);

        assert_eq!(ann.dims.len(), 4);
        assert!(ann.ticks.is_empty());
        let labels: Vec<&str> = ann.dims.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["5.000 mm", "2.100 mm", "100 mm", "2.000 mm"]);

        let width = &ann.dims[0];
        assert_eq!(width.axis, DimAxis::Horizontal);
        assert!((width.x1 - vp.x_px(0.0)).abs() < 1e-3);
        assert!((width.y1 - vp.y_px(0.0)).abs() < 1e-3);
        assert_eq!(width.offset, DIM_OFFSET);
        assert_eq!(width.style, DimStyle::Ink);
    }

    #[test]
    fn test_rear_measures_the_leg_run() {
        let geo = default_geo();
        let vp = SheetViewport::fit(Vec2::new(-5.0, 0.0), Vec2::new(0.0, 2.1));
        let ann = annotate(ViewKind::Rear, &geo, true, &vp);

        // Width, height, three tubes, span, three gaps.
        assert_eq!(ann.dims.len(), 9);
        assert_eq!(ann.ticks.len(), 4);

        // Mirrored x keeps anchors ordered left to right.
        let width = &ann.dims[0];
        assert!(width.x1 < width.x2);
        assert!((width.x1 - vp.x_px(-5.0)).abs() < 1e-3);

        let span = ann
            .dims
            .iter()
            .find(|d| d.label == "4.000 mm")
            .unwrap();
        assert_eq!(span.style, DimStyle::Accent);

        let gaps: Vec<&DimLine> = ann.dims.iter().filter(|d| d.label == "1.333 mm").collect();
        assert_eq!(gaps.len(), 3);
        assert!(gaps.iter().all(|d| d.small && d.style == DimStyle::Muted));

        // Ticks reach past the gap row and sit on mirrored leg centres.
        let ground = vp.y_px(0.0);
        for tick in &ann.ticks {
            assert!((tick.y_top - (ground + 4.0)).abs() < 1e-3);
            assert!((tick.y_bottom - (ground + 166.0)).abs() < 1e-3);
        }
        assert!((ann.ticks[0].x - vp.x_px(-0.5)).abs() < 1e-3);
    }

    #[test]
    fn test_side_chain_is_contiguous() {
        let geo = default_geo();
        let vp = SheetViewport::fit(Vec2::new(0.0, 0.0), Vec2::new(1.05, 2.1));
        let ann = annotate(ViewKind::Side, &geo, true, &vp);

        // Total depth, four chain pieces, total height, LED height.
        assert_eq!(ann.dims.len(), 7);
        let chain: Vec<&DimLine> = ann
            .dims
            .iter()
            .filter(|d| d.axis == DimAxis::Horizontal && d.offset == 110.0)
            .collect();
        assert_eq!(chain.len(), 4);
        for pair in chain.windows(2) {
            assert!((pair[0].x2 - pair[1].x1).abs() < 1e-3);
        }
        // The chain covers the whole depth.
        assert!((chain[0].x1 - ann.dims[0].x1).abs() < 1e-3);
        assert!((chain[3].x2 - ann.dims[0].x2).abs() < 1e-3);
    }

    #[test]
    fn test_plan_plate_dimensions_follow_the_plates() {
        let geo = default_geo();
        let vp = SheetViewport::fit(Vec2::new(0.0, 0.0), Vec2::new(5.0, 1.05));

        let with = annotate(ViewKind::Plan, &geo, true, &vp);
        assert_eq!(with.dims.len(), 4);
        let plate = with.dims.iter().find(|d| d.label == "320 mm").unwrap();
        assert!(plate.offset < 0.0, "plate width reads past the plate tail");
        assert!(with.dims.iter().any(|d| d.label == "70 mm"));

        let without = annotate(ViewKind::Plan, &geo, false, &vp);
        assert_eq!(without.dims.len(), 2);
    }

    #[test]
    fn test_direct_mount_rear_skips_tube_rows() {
        let led = LedConfig::default();
        let mut structure = StructureConfig::default();
        structure.horizontal_tubes.count = 0;
        let computed = compute(&led, &structure).unwrap();
        let geo = GeometryParams::derive(&led, &structure, &computed);

        let vp = SheetViewport::fit(Vec2::new(-5.0, 0.0), Vec2::new(0.0, 2.1));
        let ann = annotate(ViewKind::Rear, &geo, true, &vp);
        // Width, height, span, three gaps; no tube stack.
        assert_eq!(ann.dims.len(), 6);
    }
}
