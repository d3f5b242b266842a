//! Stand assembly
//!
//! Builds the full element list for a ground stand from its resolved
//! geometry: bottom bar, cabinet grid, braced truss legs, horizontal
//! tubes with clamps, and direct-mount spacers when the tubes are off.
//! Assembly order is fixed, so two runs over the same geometry produce
//! identical scenes.

use glam::Vec3;
use standkit_catalog::TrussFamily;
use standkit_engine::GeometryParams;
use tracing::debug;

use crate::element::{Axis, Element, Material, Scene, Shape};

/// Lattice bays in a vertical leg run.
const LEG_BAYS: u32 = 4;
/// Lattice bays in a stabiliser arm run.
const ARM_BAYS: u32 = 2;
/// Shrink applied to each cabinet face so the grid reads as tiles.
const CABINET_SEAM: f32 = 0.005;
/// Bottom bar depth.
const BAR_DEPTH: f32 = 0.12;
/// Tube clamp body width and height.
const CLAMP_SIZE: f32 = 0.065;
/// Tube clamp body depth.
const CLAMP_DEPTH: f32 = 0.1;
/// Offset of the second clamp of a double pair, towards the wall.
const CLAMP_PAIR_OFFSET: f32 = 0.06;
/// Direct-mount spacer radius.
const SPACER_RADIUS: f32 = 0.02;

/// Assemble the stand scene for `params`.
///
/// `base_plates` toggles the ballast plates under deep legs; flat legs
/// always carry their steel plate, it is what keeps them standing.
pub fn assemble(params: &GeometryParams, base_plates: bool) -> Scene {
    let mut scene = Scene::new();

    push_bottom_bar(&mut scene, params);
    push_cabinets(&mut scene, params);
    for &leg_x in &params.leg_x {
        match params.family {
            TrussFamily::Box => push_deep_leg(&mut scene, params, leg_x, base_plates),
            TrussFamily::Ladder => push_flat_leg(&mut scene, params, leg_x),
        }
    }
    push_tubes(&mut scene, params);
    push_spacers(&mut scene, params);

    debug!(
        elements = scene.elements.len(),
        legs = params.leg_x.len(),
        "assembled stand scene"
    );
    scene
}

fn push_box(scene: &mut Scene, material: Material, w: f32, h: f32, d: f32, at: Vec3) {
    scene.push(Element {
        shape: Shape::Box { w, h, d },
        material,
        position: at,
    });
}

fn push_cylinder(
    scene: &mut Scene,
    material: Material,
    radius: f32,
    length: f32,
    axis: Axis,
    at: Vec3,
) {
    scene.push(Element {
        shape: Shape::Cylinder {
            radius,
            length,
            axis,
        },
        material,
        position: at,
    });
}

fn push_line(scene: &mut Scene, from: Vec3, to: Vec3) {
    scene.push(Element {
        shape: Shape::Line { end: to },
        material: Material::DiagLine,
        position: from,
    });
}

fn push_bottom_bar(scene: &mut Scene, params: &GeometryParams) {
    if params.bottom_bar <= 0.0 {
        return;
    }
    push_box(
        scene,
        Material::Bar,
        params.led_w,
        params.bottom_bar,
        BAR_DEPTH,
        Vec3::new(params.led_w / 2.0, params.bottom_bar / 2.0, params.cab_d / 2.0),
    );
}

/// Cabinet grid, column-major from the bottom-left corner. Dead rows and
/// edge columns get the off face, everything else lights up.
fn push_cabinets(scene: &mut Scene, params: &GeometryParams) {
    let live_cols_end = params.cab_cols.saturating_sub(params.dead_cols);
    for col in 0..params.cab_cols {
        for row in 0..params.cab_rows {
            let dead = row < params.dead_rows || col < params.dead_cols || col >= live_cols_end;
            let face = if dead { Material::LedOff } else { Material::LedOn };
            let at = Vec3::new(
                params.cab_w / 2.0 + col as f32 * params.cab_w,
                params.bottom_bar + params.cab_h / 2.0 + row as f32 * params.cab_h,
                params.cab_d / 2.0,
            );
            push_box(
                scene,
                face,
                params.cab_w - CABINET_SEAM,
                params.cab_h - CABINET_SEAM,
                params.cab_d,
                at,
            );
            push_box(
                scene,
                Material::Frame,
                params.cab_w - CABINET_SEAM,
                params.cab_h - CABINET_SEAM,
                params.cab_d,
                at,
            );
        }
    }
}

/// Deep box-section leg: four chords, ringed and cross-braced bays, the
/// rear stabiliser arm, and optionally the ballast plate.
fn push_deep_leg(scene: &mut Scene, params: &GeometryParams, leg_x: f32, base_plate: bool) {
    let qh = params.half_section;
    let zc = params.z_truss_center;
    let (xl, xr) = (leg_x - qh, leg_x + qh);
    let (zf, zb) = (zc - qh, zc + qh);

    for (x, z) in [(xl, zf), (xr, zf), (xl, zb), (xr, zb)] {
        push_cylinder(
            scene,
            Material::Chord,
            params.chord_r,
            params.leg_h,
            Axis::Y,
            Vec3::new(x, params.leg_h / 2.0, z),
        );
    }

    let bay_h = params.leg_h / LEG_BAYS as f32;
    for i in 0..=LEG_BAYS {
        let y = i as f32 * bay_h;
        push_line(scene, Vec3::new(xl, y, zf), Vec3::new(xr, y, zf));
        push_line(scene, Vec3::new(xl, y, zb), Vec3::new(xr, y, zb));
        push_line(scene, Vec3::new(xl, y, zf), Vec3::new(xl, y, zb));
        push_line(scene, Vec3::new(xr, y, zf), Vec3::new(xr, y, zb));

        if i < LEG_BAYS {
            let yn = y + bay_h;
            // Crossing diagonals on all four faces of the bay.
            push_line(scene, Vec3::new(xl, y, zf), Vec3::new(xr, yn, zf));
            push_line(scene, Vec3::new(xr, y, zf), Vec3::new(xl, yn, zf));
            push_line(scene, Vec3::new(xl, y, zb), Vec3::new(xr, yn, zb));
            push_line(scene, Vec3::new(xr, y, zb), Vec3::new(xl, yn, zb));
            push_line(scene, Vec3::new(xl, y, zf), Vec3::new(xl, yn, zb));
            push_line(scene, Vec3::new(xl, y, zb), Vec3::new(xl, yn, zf));
            push_line(scene, Vec3::new(xr, y, zf), Vec3::new(xr, yn, zb));
            push_line(scene, Vec3::new(xr, y, zb), Vec3::new(xr, yn, zf));
        }
    }

    if params.leg_arm > 0.0 {
        push_arm(scene, params, leg_x);
    }

    if base_plate {
        push_box(
            scene,
            Material::Base,
            params.base_plate_w,
            0.015,
            params.base_plate_d,
            Vec3::new(leg_x, 0.008, plate_center_z(params)),
        );
    }
}

/// Rear stabiliser arm behind a deep leg, a short braced run along z.
fn push_arm(scene: &mut Scene, params: &GeometryParams, leg_x: f32) {
    let qh = params.half_section;
    let (xl, xr) = (leg_x - qh, leg_x + qh);
    let yb = params.chord_r;
    let yt = params.truss_section - params.chord_r;
    let arm_center = params.z_truss_back + params.leg_arm / 2.0;

    for (x, y) in [(xl, yb), (xr, yb), (xl, yt), (xr, yt)] {
        push_cylinder(
            scene,
            Material::Chord,
            params.chord_r,
            params.leg_arm,
            Axis::Z,
            Vec3::new(x, y, arm_center),
        );
    }

    let bay_d = params.leg_arm / ARM_BAYS as f32;
    for i in 0..=ARM_BAYS {
        let z = params.z_truss_back + i as f32 * bay_d;
        push_line(scene, Vec3::new(xl, yb, z), Vec3::new(xr, yb, z));
        push_line(scene, Vec3::new(xl, yt, z), Vec3::new(xr, yt, z));
        push_line(scene, Vec3::new(xl, yb, z), Vec3::new(xl, yt, z));
        push_line(scene, Vec3::new(xr, yb, z), Vec3::new(xr, yt, z));

        if i < ARM_BAYS {
            let zn = z + bay_d;
            push_line(scene, Vec3::new(xl, yb, z), Vec3::new(xr, yb, zn));
            push_line(scene, Vec3::new(xr, yb, z), Vec3::new(xl, yb, zn));
            push_line(scene, Vec3::new(xl, yt, z), Vec3::new(xr, yt, zn));
            push_line(scene, Vec3::new(xr, yt, z), Vec3::new(xl, yt, zn));
            push_line(scene, Vec3::new(xl, yb, z), Vec3::new(xl, yt, zn));
            push_line(scene, Vec3::new(xl, yt, z), Vec3::new(xl, yb, zn));
            push_line(scene, Vec3::new(xr, yb, z), Vec3::new(xr, yt, zn));
            push_line(scene, Vec3::new(xr, yt, z), Vec3::new(xr, yb, zn));
        }
    }
}

/// Flat ladder leg: steel plate, two chord pairs front and back, and
/// crossing diagonals through the open bays. No rings, the ladder welds
/// carry the section.
fn push_flat_leg(scene: &mut Scene, params: &GeometryParams, leg_x: f32) {
    push_box(
        scene,
        Material::PlateBlack,
        params.base_plate_w,
        0.02,
        params.base_plate_d,
        Vec3::new(leg_x, 0.01, plate_center_z(params)),
    );

    let half_w = params.truss_section_depth / 2.0;
    let (xl, xr) = (leg_x - half_w, leg_x + half_w);
    let (zf, zb) = (params.z_truss_front, params.z_truss_back);

    for (x, z) in [(xl, zf), (xr, zf), (xl, zb), (xr, zb)] {
        push_cylinder(
            scene,
            Material::Chord,
            params.chord_r,
            params.leg_h,
            Axis::Y,
            Vec3::new(x, params.leg_h / 2.0, z),
        );
    }

    let bay_h = params.leg_h / LEG_BAYS as f32;
    for i in 0..LEG_BAYS {
        let y = i as f32 * bay_h;
        let yn = y + bay_h;
        push_line(scene, Vec3::new(xl, y, zf), Vec3::new(xr, yn, zb));
        push_line(scene, Vec3::new(xr, y, zb), Vec3::new(xl, yn, zf));
        push_line(scene, Vec3::new(xr, y, zf), Vec3::new(xl, yn, zb));
        push_line(scene, Vec3::new(xl, y, zb), Vec3::new(xr, yn, zf));
    }
}

/// Horizontal tubes spanning the leg run, with a double clamp where each
/// tube crosses a leg.
fn push_tubes(scene: &mut Scene, params: &GeometryParams) {
    if params.leg_x.len() < 2 || params.tube_y.is_empty() {
        return;
    }
    let (Some(&first), Some(&last)) = (params.leg_x.first(), params.leg_x.last()) else {
        return;
    };
    let span = last - first;
    let mid = (first + last) / 2.0;

    for &tube_y in &params.tube_y {
        push_cylinder(
            scene,
            Material::Tube,
            params.tube_r,
            span,
            Axis::X,
            Vec3::new(mid, tube_y, params.z_tube),
        );
        for &leg_x in &params.leg_x {
            push_box(
                scene,
                Material::Clamp,
                CLAMP_SIZE,
                CLAMP_SIZE,
                CLAMP_DEPTH,
                Vec3::new(leg_x, tube_y, params.z_tube),
            );
            push_box(
                scene,
                Material::Clamp,
                CLAMP_SIZE,
                CLAMP_SIZE,
                CLAMP_DEPTH,
                Vec3::new(leg_x, tube_y, params.z_tube - CLAMP_PAIR_OFFSET),
            );
        }
    }
}

/// Direct mounting: with no tubes, each leg carries two spacer studs that
/// reach through the gap to the cabinet backs.
fn push_spacers(scene: &mut Scene, params: &GeometryParams) {
    if params.leg_x.is_empty() || !params.tube_y.is_empty() {
        return;
    }
    let spacer_len = params.z_truss_front - params.cab_d;
    if spacer_len <= 0.0 {
        return;
    }
    let center_z = params.cab_d + spacer_len / 2.0;
    let mounts = [
        params.bottom_bar + params.led_h * 0.33,
        params.bottom_bar + params.led_h * 0.67,
    ];

    for &leg_x in &params.leg_x {
        for &mount_y in &mounts {
            push_cylinder(
                scene,
                Material::Bar,
                SPACER_RADIUS,
                spacer_len,
                Axis::Z,
                Vec3::new(leg_x, mount_y, center_z),
            );
            push_box(
                scene,
                Material::Clamp,
                0.07,
                0.07,
                0.08,
                Vec3::new(leg_x, mount_y, params.z_truss_front),
            );
            push_box(
                scene,
                Material::Clamp,
                0.07,
                0.07,
                0.06,
                Vec3::new(leg_x, mount_y, params.cab_d + 0.03),
            );
        }
    }
}

fn plate_center_z(params: &GeometryParams) -> f32 {
    params.z_truss_front - params.base_plate_inset + params.base_plate_d / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_engine::{compute, LedConfig, StructureConfig, TubeConfig};

    fn geometry(led: &LedConfig, structure: &StructureConfig) -> GeometryParams {
        let computed = compute(led, structure).unwrap();
        GeometryParams::derive(led, structure, &computed)
    }

    fn default_geometry() -> GeometryParams {
        geometry(&LedConfig::default(), &StructureConfig::default())
    }

    fn count_material(scene: &Scene, material: Material) -> usize {
        scene
            .elements
            .iter()
            .filter(|e| e.material == material)
            .count()
    }

    #[test]
    fn test_default_scene_element_count() {
        let scene = assemble(&default_geometry(), true);
        // Bar, 40 cabinets with frames, four braced legs with arms and
        // plates, three tubes with double clamps at every crossing.
        let bar = 1;
        let cabinets = 40 * 2;
        let per_leg = 4 + 20 + 32 + 4 + 12 + 16 + 1;
        let tubes = 3 + 3 * 4 * 2;
        assert_eq!(scene.elements.len(), bar + cabinets + 4 * per_leg + tubes);
    }

    #[test]
    fn test_base_plates_toggle() {
        let geo = default_geometry();
        let with = assemble(&geo, true);
        let without = assemble(&geo, false);
        assert_eq!(count_material(&with, Material::Base), 4);
        assert_eq!(count_material(&without, Material::Base), 0);
        assert_eq!(with.elements.len(), without.elements.len() + 4);
    }

    #[test]
    fn test_dead_row_cabinets_are_off() {
        let scene = assemble(&default_geometry(), true);
        // First element is the bar; cabinets follow column-major, two
        // elements each, rows inner.
        let first_cabinet = &scene.elements[1];
        assert_eq!(first_cabinet.material, Material::LedOff);
        let second_row = &scene.elements[3];
        assert_eq!(second_row.material, Material::LedOn);
        assert_eq!(count_material(&scene, Material::LedOff), 10);
        assert_eq!(count_material(&scene, Material::LedOn), 30);
        assert_eq!(count_material(&scene, Material::Frame), 40);
    }

    #[test]
    fn test_dead_columns_mask_both_edges() {
        let mut led = LedConfig::default();
        led.dead_rows = 0;
        led.dead_cols = 1;
        let scene = assemble(&geometry(&led, &StructureConfig::default()), true);
        // One column off on each side: 2 x 4 cabinets dark.
        assert_eq!(count_material(&scene, Material::LedOff), 8);
        assert_eq!(count_material(&scene, Material::LedOn), 32);
    }

    #[test]
    fn test_tube_and_clamp_layout() {
        let scene = assemble(&default_geometry(), true);
        assert_eq!(count_material(&scene, Material::Tube), 3);
        assert_eq!(count_material(&scene, Material::Clamp), 24);

        let tube = scene
            .elements
            .iter()
            .find(|e| e.material == Material::Tube)
            .unwrap();
        // Tubes span the outer legs, set just ahead of the truss.
        assert!((tube.position.x - 2.5).abs() < 1e-6);
        assert!((tube.position.z - 0.2).abs() < 1e-6);
        match tube.shape {
            Shape::Cylinder { length, axis, .. } => {
                assert!((length - 4.0).abs() < 1e-6);
                assert_eq!(axis, Axis::X);
            }
            _ => panic!("tube must be a cylinder"),
        }
    }

    #[test]
    fn test_direct_mount_spacers() {
        let structure = StructureConfig {
            horizontal_tubes: TubeConfig {
                count: 0,
                ..TubeConfig::default()
            },
            ..StructureConfig::default()
        };
        let scene = assemble(&geometry(&LedConfig::default(), &structure), true);
        assert_eq!(count_material(&scene, Material::Tube), 0);
        // Two studs per leg, each with a clamp at both ends.
        assert_eq!(count_material(&scene, Material::Bar), 1 + 4 * 2);
        assert_eq!(count_material(&scene, Material::Clamp), 4 * 2 * 2);
    }

    #[test]
    fn test_flat_legs_have_no_rings() {
        let mut structure = StructureConfig::default();
        structure.apply_truss(standkit_catalog::truss("FX30").unwrap());
        let scene = assemble(&geometry(&LedConfig::default(), &structure), true);

        // Plate, four chords and sixteen crossing diagonals per leg.
        assert_eq!(count_material(&scene, Material::PlateBlack), 4);
        assert_eq!(count_material(&scene, Material::Chord), 16);
        assert_eq!(count_material(&scene, Material::DiagLine), 4 * 16);
        assert_eq!(count_material(&scene, Material::Base), 0);
    }

    #[test]
    fn test_flat_plate_ignores_toggle() {
        let mut structure = StructureConfig::default();
        structure.apply_truss(standkit_catalog::truss("FX30").unwrap());
        let scene = assemble(&geometry(&LedConfig::default(), &structure), false);
        assert_eq!(count_material(&scene, Material::PlateBlack), 4);
    }

    #[test]
    fn test_scene_bounds_cover_plates_and_arms() {
        let scene = assemble(&default_geometry(), true);
        let bounds = scene.bounds;
        assert!(bounds.min.x <= 0.0);
        assert!((bounds.max.x - 5.0).abs() < 1e-6);
        assert!(bounds.min.y <= 0.0);
        // Cabinet faces stop half a seam short of the nominal 2.1 m top.
        assert!((bounds.max.y - (2.1 - CABINET_SEAM / 2.0)).abs() < 1e-6);
        // Arm chords end at the full stand depth.
        assert!((bounds.max.z - 0.94).abs() < 1e-6);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let geo = default_geometry();
        let a = assemble(&geo, true);
        let b = assemble(&geo, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_flying_geometry_builds_wall_only() {
        let led = LedConfig::default();
        let structure = StructureConfig {
            mount_type: standkit_engine::MountType::Flying,
            ..StructureConfig::default()
        };
        let scene = assemble(&geometry(&led, &structure), true);
        assert_eq!(count_material(&scene, Material::Chord), 0);
        assert_eq!(count_material(&scene, Material::Tube), 0);
        assert_eq!(count_material(&scene, Material::LedOn), 30);
    }
}
