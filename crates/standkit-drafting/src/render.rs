//! Sheet renderer
//!
//! Draws one orthographic view of the assembled stand onto a fixed-size
//! raster sheet using tiny-skia: geometry first, then dimensions, then the
//! page furniture (header band, data panel, title block, border frames).
//! Geometry is drawn in world metres through the viewport transform;
//! annotations and furniture are drawn directly in sheet pixels.

use crate::dimension::{annotate, DimAxis, DimLine, DimStyle, Tick, ViewAnnotations};
use crate::font::{measure_text, sheet_font};
use crate::layout::{
    panel_height, scale_label, DataPanel, SheetMeta, ARROW_LEN, ARROW_W, HEADER_H, MARGIN,
    PANEL_HEADER_H, PANEL_LINE_H, PANEL_PAD_X, PANEL_PAD_Y, PANEL_W, PANEL_X, PANEL_Y, SHEET_H,
    SHEET_W, TITLE_H, TITLE_W, TITLE_X, TITLE_Y,
};
use crate::view::{Projected, ViewKind};
use crate::viewport::SheetViewport;
use glam::Vec2;
use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Font, Scale};
use standkit_core::DraftingError;
use standkit_engine::{GeometryParams, TrussFamily};
use standkit_scene::{Material, Scene};
use std::cmp::Ordering;
use tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};
use tracing::debug;

fn paper_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}
fn canvas_color() -> Color {
    Color::from_rgba8(240, 242, 245, 255)
}
fn canvas_frame_color() -> Color {
    Color::from_rgba8(204, 204, 204, 255)
}
fn ink_color() -> Color {
    Color::from_rgba8(26, 26, 26, 255)
}
fn dim_line_color() -> Color {
    Color::from_rgba8(51, 51, 51, 255)
}
fn ext_line_color() -> Color {
    Color::from_rgba8(136, 136, 136, 255)
}
fn tick_color() -> Color {
    Color::from_rgba8(204, 68, 68, 255)
}
fn accent_color() -> Color {
    Color::from_rgba8(0, 102, 204, 255)
}
fn muted_color() -> Color {
    Color::from_rgba8(85, 85, 85, 255)
}
fn header_bg_color() -> Color {
    Color::from_rgba8(26, 35, 50, 255)
}
fn header_fg_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}
fn header_accent_color() -> Color {
    Color::from_rgba8(136, 204, 255, 255)
}
fn panel_bg_color() -> Color {
    Color::from_rgba8(244, 246, 248, 255)
}
fn panel_border_color() -> Color {
    Color::from_rgba8(208, 212, 216, 255)
}
fn panel_row_color() -> Color {
    Color::from_rgba8(224, 228, 232, 255)
}
fn panel_label_color() -> Color {
    Color::from_rgba8(85, 85, 85, 255)
}
fn panel_value_color() -> Color {
    Color::from_rgba8(17, 17, 17, 255)
}
fn title_bg_color() -> Color {
    Color::from_rgba8(248, 249, 250, 255)
}
fn title_text_color() -> Color {
    Color::from_rgba8(34, 34, 34, 255)
}
fn frame_inner_color() -> Color {
    Color::from_rgba8(153, 153, 153, 255)
}

/// Fill colour of a scene material, shaded by truss family.
fn material_color(material: Material, family: TrussFamily) -> Color {
    let flat = family.is_flat();
    match material {
        Material::Chord if flat => Color::from_rgba8(0x70, 0x80, 0x90, 255),
        Material::Chord => Color::from_rgba8(0x60, 0x70, 0x90, 255),
        Material::DiagLine if flat => Color::from_rgba8(0x55, 0x60, 0x70, 255),
        Material::DiagLine => Color::from_rgba8(0x45, 0x5a, 0x64, 255),
        Material::LedOn => Color::from_rgba8(0x1a, 0x6f, 0xce, 255),
        Material::LedOff => Color::from_rgba8(0x2c, 0x3e, 0x50, 255),
        Material::Frame => Color::from_rgba8(0x11, 0x11, 0x11, 255),
        Material::Bar => Color::from_rgba8(0x78, 0x90, 0x9c, 255),
        Material::Tube => Color::from_rgba8(0xc0, 0x39, 0x2b, 255),
        Material::Clamp => Color::from_rgba8(0x27, 0xae, 0x60, 255),
        Material::Base => Color::from_rgba8(0x44, 0x44, 0x55, 255),
        Material::PlateBlack => Color::from_rgba8(0x1a, 0x1a, 0x1a, 255),
    }
}

/// Render one annotated sheet of the stand.
pub fn render_view(
    view: ViewKind,
    scene: &Scene,
    geo: &GeometryParams,
    meta: &SheetMeta,
    panel: &DataPanel,
) -> Result<RgbImage, DraftingError> {
    let Some(mut pixmap) = Pixmap::new(SHEET_W, SHEET_H) else {
        return Err(DraftingError::Canvas {
            width: SHEET_W,
            height: SHEET_H,
        });
    };
    pixmap.fill(paper_color());

    let (min, max) = if scene.bounds.is_empty() {
        (Vec2::ZERO, Vec2::ONE)
    } else {
        view.view_bounds(&scene.bounds)
    };
    let vp = SheetViewport::fit(min, max);

    draw_canvas_backdrop(&mut pixmap, &vp);
    draw_scene(&mut pixmap, view, scene, geo, &vp);

    let has_plates = scene
        .elements
        .iter()
        .any(|e| matches!(e.material, Material::Base | Material::PlateBlack));
    let annotations = annotate(view, geo, has_plates, &vp);
    draw_annotations(&mut pixmap, &annotations);

    draw_page_header(&mut pixmap, view, meta);
    draw_panel(&mut pixmap, view, panel);
    draw_title_block(&mut pixmap, view, meta, &scale_label(vp.scale()));
    draw_frame(&mut pixmap);

    debug!(
        view = %view,
        elements = scene.elements.len(),
        px_per_m = vp.scale(),
        "sheet rendered"
    );

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    Ok(RgbImage::from_fn(SHEET_W, SHEET_H, |x, y| {
        let idx = ((y * SHEET_W + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

fn draw_canvas_backdrop(pixmap: &mut Pixmap, vp: &SheetViewport) {
    if let Some(r) = Rect::from_xywh(vp.origin_x(), vp.origin_y(), vp.render_w(), vp.render_h()) {
        let path = PathBuilder::from_rect(r);
        let mut paint = Paint::default();
        paint.set_color(canvas_color());
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        paint.set_color(canvas_frame_color());
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_scene(
    pixmap: &mut Pixmap,
    view: ViewKind,
    scene: &Scene,
    geo: &GeometryParams,
    vp: &SheetViewport,
) {
    let transform = vp.transform();
    let s = vp.scale();

    // Painter's order: farthest first. The sort is stable so elements at
    // the same depth keep assembly order, which layers cabinet frames
    // over their faces.
    let mut order: Vec<usize> = (0..scene.elements.len()).collect();
    order.sort_by(|&a, &b| {
        let da = view.depth_of(scene.elements[a].position);
        let db = view.depth_of(scene.elements[b].position);
        db.partial_cmp(&da).unwrap_or(Ordering::Equal)
    });

    for idx in order {
        let element = &scene.elements[idx];
        let mut paint = Paint::default();
        paint.set_color(material_color(element.material, geo.family));
        paint.anti_alias = true;

        match view.project_element(element) {
            Projected::Rect {
                center,
                half_w,
                half_h,
            } => {
                let rect = Rect::from_xywh(
                    center.x - half_w,
                    center.y - half_h,
                    half_w * 2.0,
                    half_h * 2.0,
                );
                if let Some(r) = rect {
                    let path = PathBuilder::from_rect(r);
                    if element.material == Material::Frame {
                        let stroke = Stroke {
                            width: 1.0 / s,
                            ..Default::default()
                        };
                        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
                    } else {
                        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                    }
                }
            }
            Projected::Disc { center, radius } => {
                if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
                    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                }
            }
            Projected::Segment { a, b } => {
                let mut pb = PathBuilder::new();
                pb.move_to(a.x, a.y);
                pb.line_to(b.x, b.y);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width: (geo.diag_r * 2.0).max(0.8 / s),
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
                }
            }
        }
    }
}

fn dim_style_colors(style: DimStyle) -> (Color, Color) {
    match style {
        DimStyle::Ink => (dim_line_color(), ink_color()),
        DimStyle::Accent => (accent_color(), accent_color()),
        DimStyle::Muted => (ext_line_color(), muted_color()),
    }
}

fn draw_annotations(pixmap: &mut Pixmap, annotations: &ViewAnnotations) {
    for tick in &annotations.ticks {
        draw_tick(pixmap, tick);
    }
    for dim in &annotations.dims {
        match dim.axis {
            DimAxis::Horizontal => draw_horizontal_dim(pixmap, dim),
            DimAxis::Vertical => draw_vertical_dim(pixmap, dim),
        }
    }
}

fn draw_tick(pixmap: &mut Pixmap, tick: &Tick) {
    let mut pb = PathBuilder::new();
    pb.move_to(tick.x, tick.y_top);
    pb.line_to(tick.x, tick.y_bottom);
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(tick_color());
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_horizontal_dim(pixmap: &mut Pixmap, dim: &DimLine) {
    let (line_color, label_color) = dim_style_colors(dim.style);
    let dir = dim.offset.signum();
    let anchor_y = if dim.offset > 0.0 {
        dim.y1.max(dim.y2)
    } else {
        dim.y1.min(dim.y2)
    };
    let line_y = anchor_y + dim.offset;
    let (x1, x2) = if dim.x1 <= dim.x2 {
        (dim.x1, dim.x2)
    } else {
        (dim.x2, dim.x1)
    };

    draw_extension_line(pixmap, dim.x1, dim.y1 + 4.0 * dir, dim.x1, line_y + 6.0 * dir);
    draw_extension_line(pixmap, dim.x2, dim.y2 + 4.0 * dir, dim.x2, line_y + 6.0 * dir);

    if x2 - x1 > ARROW_LEN * 2.0 {
        draw_solid_line(pixmap, x1 + ARROW_LEN, line_y, x2 - ARROW_LEN, line_y, line_color);
        draw_arrowhead(pixmap, x1, line_y, std::f32::consts::PI, line_color);
        draw_arrowhead(pixmap, x2, line_y, 0.0, line_color);
    } else {
        draw_solid_line(pixmap, x1, line_y, x2, line_y, line_color);
    }

    let size = if dim.small { 18.0 } else { 22.0 };
    if let Some(font) = sheet_font(true) {
        let tx = (x1 + x2) / 2.0;
        let tw = measure_text(font, &dim.label, size);
        fill_rect(
            pixmap,
            tx - tw / 2.0 - 4.0,
            line_y - 22.0,
            tw + 8.0,
            20.0,
            paper_color(),
        );
        draw_text_centered(pixmap, font, &dim.label, tx, line_y - 11.0, size, label_color);
    }
}

fn draw_vertical_dim(pixmap: &mut Pixmap, dim: &DimLine) {
    let (line_color, label_color) = dim_style_colors(dim.style);
    let dir = dim.offset.signum();
    let anchor_x = if dim.offset > 0.0 {
        dim.x1.min(dim.x2)
    } else {
        dim.x1.max(dim.x2)
    };
    let line_x = anchor_x - dim.offset;
    let (y1, y2) = if dim.y1 <= dim.y2 {
        (dim.y1, dim.y2)
    } else {
        (dim.y2, dim.y1)
    };

    draw_extension_line(pixmap, dim.x1 - 4.0 * dir, dim.y1, line_x - 6.0 * dir, dim.y1);
    draw_extension_line(pixmap, dim.x2 - 4.0 * dir, dim.y2, line_x - 6.0 * dir, dim.y2);

    if y2 - y1 > ARROW_LEN * 2.0 {
        draw_solid_line(pixmap, line_x, y1 + ARROW_LEN, line_x, y2 - ARROW_LEN, line_color);
        draw_arrowhead(pixmap, line_x, y1, -std::f32::consts::FRAC_PI_2, line_color);
        draw_arrowhead(pixmap, line_x, y2, std::f32::consts::FRAC_PI_2, line_color);
    } else {
        draw_solid_line(pixmap, line_x, y1, line_x, y2, line_color);
    }

    let size = if dim.small { 18.0 } else { 22.0 };
    if let Some(font) = sheet_font(true) {
        let ax = line_x - 10.0;
        let ay = (y1 + y2) / 2.0;
        let tw = measure_text(font, &dim.label, size);
        fill_rect(
            pixmap,
            ax - 12.0,
            ay - tw / 2.0 - 4.0,
            20.0,
            tw + 8.0,
            paper_color(),
        );
        draw_text_rotated(pixmap, font, &dim.label, ax, ay, size, label_color);
    }
}

fn draw_extension_line(pixmap: &mut Pixmap, x1: f32, y1: f32, x2: f32, y2: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x1, y1);
    pb.line_to(x2, y2);
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(ext_line_color());
        paint.anti_alias = true;
        let mut stroke = Stroke {
            width: 0.8,
            ..Default::default()
        };
        stroke.dash = StrokeDash::new(vec![4.0, 3.0], 0.0);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_solid_line(pixmap: &mut Pixmap, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
    let mut pb = PathBuilder::new();
    pb.move_to(x1, y1);
    pb.line_to(x2, y2);
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.5,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Filled arrowhead with the tip at (x, y), pointing along `angle`.
fn draw_arrowhead(pixmap: &mut Pixmap, x: f32, y: f32, angle: f32, color: Color) {
    let (sin, cos) = angle.sin_cos();
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    pb.line_to(
        x - ARROW_LEN * cos + ARROW_W * sin,
        y - ARROW_LEN * sin - ARROW_W * cos,
    );
    pb.line_to(
        x - ARROW_LEN * cos - ARROW_W * sin,
        y - ARROW_LEN * sin + ARROW_W * cos,
    );
    pb.close();
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_page_header(pixmap: &mut Pixmap, view: ViewKind, meta: &SheetMeta) {
    fill_rect(pixmap, 0.0, 0.0, SHEET_W as f32, HEADER_H, header_bg_color());
    fill_rect(pixmap, 0.0, HEADER_H, SHEET_W as f32, 3.0, accent_color());

    if let Some(bold) = sheet_font(true) {
        draw_text_vcenter(
            pixmap,
            bold,
            view.label(),
            MARGIN,
            HEADER_H / 2.0,
            36.0,
            header_fg_color(),
        );
        let tw = measure_text(bold, &meta.project_name, 20.0);
        draw_text_vcenter(
            pixmap,
            bold,
            &meta.project_name,
            SHEET_W as f32 - MARGIN - tw,
            HEADER_H / 2.0,
            20.0,
            header_accent_color(),
        );
    }
}

fn draw_panel(pixmap: &mut Pixmap, view: ViewKind, panel: &DataPanel) {
    let x = PANEL_X;
    let y = PANEL_Y;
    let w = PANEL_W;
    let total_h = panel_height(panel);

    if let Some(path) = rounded_rect_path(x, y, w, total_h, 8.0) {
        let mut paint = Paint::default();
        paint.set_color(panel_bg_color());
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        paint.set_color(panel_border_color());
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    let regular = sheet_font(false);
    let bold = sheet_font(true);

    let mut cy = y + PANEL_PAD_Y;
    for (i, section) in panel.sections.iter().enumerate() {
        let header_bg = if i == 0 {
            header_bg_color()
        } else {
            accent_color()
        };
        fill_rect(pixmap, x + 2.0, cy, w - 4.0, PANEL_HEADER_H, header_bg);
        if let Some(font) = bold {
            draw_text_vcenter(
                pixmap,
                font,
                &section.title,
                x + PANEL_PAD_X,
                cy + PANEL_HEADER_H / 2.0,
                16.0,
                header_fg_color(),
            );
        }
        cy += PANEL_HEADER_H + 4.0;

        for (j, (label, value)) in section.rows.iter().enumerate() {
            if let Some(font) = regular {
                draw_text_vcenter(
                    pixmap,
                    font,
                    label,
                    x + PANEL_PAD_X,
                    cy + PANEL_LINE_H / 2.0,
                    17.0,
                    panel_label_color(),
                );
            }
            if let Some(font) = bold {
                let tw = measure_text(font, value, 17.0);
                draw_text_vcenter(
                    pixmap,
                    font,
                    value,
                    x + w - PANEL_PAD_X - tw,
                    cy + PANEL_LINE_H / 2.0,
                    17.0,
                    panel_value_color(),
                );
            }
            if j + 1 < section.rows.len() {
                fill_rect(
                    pixmap,
                    x + 10.0,
                    cy + PANEL_LINE_H - 0.5,
                    w - 20.0,
                    0.5,
                    panel_row_color(),
                );
            }
            cy += PANEL_LINE_H;
        }
        cy += 8.0;
    }

    // Sheet caption under the panel.
    if let Some(font) = bold {
        draw_text_centered_x(
            pixmap,
            font,
            view.label(),
            x + w / 2.0,
            y + total_h + 20.0,
            20.0,
            accent_color(),
        );
    }
}

fn draw_title_block(pixmap: &mut Pixmap, view: ViewKind, meta: &SheetMeta, scale: &str) {
    let tx = TITLE_X;
    let ty = TITLE_Y;

    fill_rect(pixmap, tx, ty, TITLE_W, TITLE_H, title_bg_color());
    stroke_rect(pixmap, tx, ty, TITLE_W, TITLE_H, 2.0, dim_line_color());
    fill_rect(pixmap, tx + 1.0, ty + 1.0, TITLE_W - 2.0, 29.0, header_bg_color());
    draw_solid_line(pixmap, tx, ty + 30.0, tx + TITLE_W, ty + 30.0, dim_line_color());

    if let Some(bold) = sheet_font(true) {
        draw_text_vcenter(
            pixmap,
            bold,
            "STANDKIT TECNICI",
            tx + 10.0,
            ty + 15.0,
            15.0,
            header_fg_color(),
        );
        let tw = measure_text(bold, view.file_tag(), 15.0);
        draw_text_vcenter(
            pixmap,
            bold,
            view.file_tag(),
            tx + TITLE_W - 10.0 - tw,
            ty + 15.0,
            15.0,
            header_accent_color(),
        );
    }

    if let Some(font) = sheet_font(false) {
        let rows = [
            (
                format!("Progetto: {}", meta.project_name),
                format!("Scala: {scale}"),
            ),
            (
                format!("Data: {}", meta.date),
                format!("Progettista: {}", meta.designer),
            ),
            (
                format!("Rev: {}", meta.revision),
                format!("Cliente: {}", meta.client),
            ),
        ];
        for (i, (left, right)) in rows.iter().enumerate() {
            let row_y = ty + 38.0 + 16.0 * i as f32;
            draw_text(pixmap, font, left, tx + 10.0, row_y, 13.0, title_text_color());
            draw_text(pixmap, font, right, tx + 190.0, row_y, 13.0, title_text_color());
        }
    }
}

fn draw_frame(pixmap: &mut Pixmap) {
    let w = SHEET_W as f32;
    let h = SHEET_H as f32;
    stroke_rect(pixmap, 20.0, 65.0, w - 40.0, h - 85.0, 1.0, frame_inner_color());
    stroke_rect(pixmap, 16.0, 61.0, w - 32.0, h - 77.0, 2.5, dim_line_color());
}

fn fill_rect(pixmap: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, color: Color) {
    if let Some(r) = Rect::from_xywh(x, y, w, h) {
        let path = PathBuilder::from_rect(r);
        let mut paint = Paint::default();
        paint.set_color(color);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn stroke_rect(pixmap: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, width: f32, color: Color) {
    if let Some(r) = Rect::from_xywh(x, y, w, h) {
        let path = PathBuilder::from_rect(r);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Draw `text` with its top-left corner at (x, y).
fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(x, y + v_metrics.ascent);

    for glyph in font.layout(text, scale, start) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bounding_box.min.x;
                let py = gy as i32 + bounding_box.min.y;
                blit_glyph_px(pixmap, px, py, v, color);
            });
        }
    }
}

/// Draw `text` centered on (cx, cy).
fn draw_text_centered(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    cx: f32,
    cy: f32,
    size: f32,
    color: Color,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let w = measure_text(font, text, size);
    let top = cy - (v_metrics.ascent - v_metrics.descent) / 2.0;
    draw_text(pixmap, font, text, cx - w / 2.0, top, size, color);
}

/// Draw `text` centered on cx with its top at y.
fn draw_text_centered_x(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    cx: f32,
    y: f32,
    size: f32,
    color: Color,
) {
    let w = measure_text(font, text, size);
    draw_text(pixmap, font, text, cx - w / 2.0, y, size, color);
}

/// Draw `text` left-aligned at x, vertically centered on cy.
fn draw_text_vcenter(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    x: f32,
    cy: f32,
    size: f32,
    color: Color,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let top = cy - (v_metrics.ascent - v_metrics.descent) / 2.0;
    draw_text(pixmap, font, text, x, top, size, color);
}

/// Draw `text` rotated a quarter turn counter-clockwise, centered on the
/// anchor (ax, ay), reading bottom to top.
///
/// Glyphs are laid out in an upright local frame centered on the origin
/// and each coverage pixel (lx, ly) lands on the sheet at
/// (ax + ly, ay - lx).
fn draw_text_rotated(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    ax: f32,
    ay: f32,
    size: f32,
    color: Color,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let w = measure_text(font, text, size);
    let start = rt_point(
        -w / 2.0,
        -(v_metrics.ascent - v_metrics.descent) / 2.0 + v_metrics.ascent,
    );

    for glyph in font.layout(text, scale, start) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let lx = gx as i32 + bounding_box.min.x;
                let ly = gy as i32 + bounding_box.min.y;
                let px = ax as i32 + ly;
                let py = ay as i32 - lx;
                blit_glyph_px(pixmap, px, py, v, color);
            });
        }
    }
}

fn blit_glyph_px(pixmap: &mut Pixmap, px: i32, py: i32, v: f32, color: Color) {
    if px < 0 || px >= SHEET_W as i32 || py < 0 || py >= SHEET_H as i32 {
        return;
    }
    let alpha = (v * 255.0) as u8;
    if alpha == 0 {
        return;
    }

    let idx = ((py as u32 * SHEET_W + px as u32) * 4) as usize;
    let pixel = &mut pixmap.data_mut()[idx..idx + 4];

    // Premultiplied source-over against the existing pixel.
    let a = alpha as u16;
    let inv = 255 - a;
    let r = (color.red() * 255.0) as u16;
    let g = (color.green() * 255.0) as u16;
    let b = (color.blue() * 255.0) as u16;
    pixel[0] = ((r * a + pixel[0] as u16 * inv) / 255) as u8;
    pixel[1] = ((g * a + pixel[1] as u16 * inv) / 255) as u8;
    pixel[2] = ((b * a + pixel[2] as u16 * inv) / 255) as u8;
    pixel[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_engine::{compute, LedConfig, StructureConfig};
    use standkit_scene::assemble;

    fn default_sheet_inputs() -> (Scene, GeometryParams) {
        let led = LedConfig::default();
        let structure = StructureConfig::default();
        let computed = compute(&led, &structure).unwrap();
        let geo = GeometryParams::derive(&led, &structure, &computed);
        let scene = assemble(&geo, true);
        (scene, geo)
    }

    fn sample_panel() -> DataPanel {
        let mut panel = DataPanel::default();
        panel.push(
            "LED WALL",
            vec![("Fisico".into(), "5.000 × 2.000 mm".into())],
        );
        panel
    }

    #[test]
    fn test_render_produces_full_sheet() {
        let (scene, geo) = default_sheet_inputs();
        let meta = SheetMeta {
            project_name: "Fiera Milano".into(),
            client: "ACME".into(),
            date: "08/2026".into(),
            designer: "Andrea".into(),
            revision: 2,
        };
        let panel = sample_panel();

        let image = render_view(ViewKind::Front, &scene, &geo, &meta, &panel).unwrap();
        assert_eq!(image.dimensions(), (SHEET_W, SHEET_H));

        // Header band is dark; left of the wall the backdrop shows through.
        assert_eq!(image.get_pixel(1400, 20), &Rgb([26, 35, 50]));
        assert_eq!(image.get_pixel(193, 1036), &Rgb([240, 242, 245]));
    }

    #[test]
    fn test_every_view_renders() {
        let (scene, geo) = default_sheet_inputs();
        let meta = SheetMeta::default();
        let panel = sample_panel();
        for view in ViewKind::ALL {
            let image = render_view(view, &scene, &geo, &meta, &panel).unwrap();
            assert_eq!(image.dimensions(), (SHEET_W, SHEET_H));
        }
    }

    #[test]
    fn test_empty_scene_still_yields_a_sheet() {
        let (_, geo) = default_sheet_inputs();
        let scene = Scene::new();
        let image =
            render_view(ViewKind::Plan, &scene, &geo, &SheetMeta::default(), &DataPanel::default())
                .unwrap();
        assert_eq!(image.dimensions(), (SHEET_W, SHEET_H));
    }

    #[test]
    fn test_front_view_paints_the_led_face() {
        let (scene, geo) = default_sheet_inputs();
        let image = render_view(
            ViewKind::Front,
            &scene,
            &geo,
            &SheetMeta::default(),
            &sample_panel(),
        )
        .unwrap();

        // Centre of the cabinet in column 4, row 2: live, so it reads as
        // a driven face even though legs and tubes sit behind it.
        let (min, max) = ViewKind::Front.view_bounds(&scene.bounds);
        let vp = SheetViewport::fit(min, max);
        let px = vp.x_px(2.25).round() as u32;
        let py = vp.y_px(1.35).round() as u32;
        assert_eq!(image.get_pixel(px, py), &Rgb([0x1a, 0x6f, 0xce]));
    }
}
