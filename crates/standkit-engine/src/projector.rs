//! Document to drawing geometry
//!
//! [`GeometryParams`] is the single hand-off between the document and
//! everything that draws: all lengths resolved to metres, every optional
//! section flattened, the flat/deep truss distinction decided once. The
//! scene assembler and the sheet views read only this struct and never
//! look back at the document.

use standkit_catalog::{truss, BasePlate, TrussFamily};
use standkit_core::constants::{DIRECT_MOUNT_GAP_MM, TUBE_MOUNT_GAP_MM};

use crate::compute::ComputedValues;
use crate::config::{LedConfig, StructureConfig};

/// Base plate footprint used when the document names a truss the catalog
/// does not carry, in millimetres.
const FALLBACK_PLATE: BasePlate = BasePlate {
    width_mm: 320.0,
    depth_mm: 740.0,
    inset_mm: 70.0,
};

/// Clearance between the truss front face and the tube centreline, metres.
const TUBE_SETBACK_M: f32 = 0.03;

/// Fully resolved stand geometry, in metres.
///
/// The world frame has x running along the wall from its left edge, y up
/// from the ground, and z from the cabinet faces back towards the legs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryParams {
    /// Wall width.
    pub led_w: f32,
    /// Wall height, bottom bar excluded.
    pub led_h: f32,
    /// Cabinet width.
    pub cab_w: f32,
    /// Cabinet height.
    pub cab_h: f32,
    /// Cabinet depth.
    pub cab_d: f32,
    /// Cabinet columns.
    pub cab_cols: u32,
    /// Cabinet rows.
    pub cab_rows: u32,
    /// Undriven bottom rows.
    pub dead_rows: u32,
    /// Undriven outer columns per side.
    pub dead_cols: u32,
    /// Bottom bar height, zero when absent.
    pub bottom_bar: f32,
    /// Truss family of the legs.
    pub family: TrussFamily,
    /// Truss section width.
    pub truss_section: f32,
    /// Truss section depth.
    pub truss_section_depth: f32,
    /// Front-to-back depth of a standing leg, already resolved per family.
    pub truss_depth: f32,
    /// Half the section width, the chord offset from a leg centreline.
    pub half_section: f32,
    /// Chord tube radius.
    pub chord_r: f32,
    /// Diagonal tube radius.
    pub diag_r: f32,
    /// Rear face of the cabinets.
    pub z_led_back: f32,
    /// Service gap between cabinets and truss.
    pub z_gap: f32,
    /// Front face of the truss run.
    pub z_truss_front: f32,
    /// Centre plane of the truss run.
    pub z_truss_center: f32,
    /// Rear face of the truss run.
    pub z_truss_back: f32,
    /// Leg centrelines along x. Empty for flown walls.
    pub leg_x: Vec<f32>,
    /// Leg height.
    pub leg_h: f32,
    /// Stabiliser arm length behind each leg. Zero for flat trusses.
    pub leg_arm: f32,
    /// Base plate width.
    pub base_plate_w: f32,
    /// Base plate depth.
    pub base_plate_d: f32,
    /// Plate front-edge inset ahead of the truss front face.
    pub base_plate_inset: f32,
    /// Horizontal tube radius.
    pub tube_r: f32,
    /// Tube centrelines above the ground. Empty for direct mounting.
    pub tube_y: Vec<f32>,
    /// Tube centreline depth, just ahead of the truss front face.
    pub z_tube: f32,
}

impl GeometryParams {
    /// Resolve the drawing geometry for a document.
    ///
    /// Total over any input: an unknown truss model falls back to a deep
    /// section with the standard plate footprint, and flown walls come out
    /// with an empty leg run.
    pub fn derive(
        led: &LedConfig,
        structure: &StructureConfig,
        computed: &ComputedValues,
    ) -> GeometryParams {
        let spec = truss(&structure.truss_model).ok();
        let family = spec.map_or(TrussFamily::Box, |s| s.family);
        let plate = spec.map_or(FALLBACK_PLATE, |s| s.base_plate);
        let is_flat = family.is_flat();

        let truss_section = (structure.truss_section_mm / 1000.0) as f32;
        let truss_section_depth = (structure.truss_section_depth_mm / 1000.0) as f32;
        let truss_depth = if is_flat {
            truss_section
        } else {
            truss_section_depth
        };

        let z_led_back = (led.tile_depth_mm / 1000.0) as f32;
        let gap_mm = if structure.horizontal_tubes.count == 0 {
            DIRECT_MOUNT_GAP_MM
        } else {
            TUBE_MOUNT_GAP_MM
        };
        let z_gap = (gap_mm / 1000.0) as f32;
        let z_truss_front = z_led_back + z_gap;

        let legs = structure.legs.as_ref();
        let leg_arm = if is_flat {
            0.0
        } else {
            legs.map_or(0.0, |l| (l.arm_length_mm / 1000.0) as f32)
        };

        GeometryParams {
            led_w: (led.width_mm / 1000.0) as f32,
            led_h: (led.height_mm / 1000.0) as f32,
            cab_w: (led.tile_width_mm / 1000.0) as f32,
            cab_h: (led.tile_height_mm / 1000.0) as f32,
            cab_d: z_led_back,
            cab_cols: computed.cols,
            cab_rows: computed.rows,
            dead_rows: led.dead_rows,
            dead_cols: led.dead_cols,
            bottom_bar: if structure.bottom_bar {
                (structure.bottom_bar_height_mm / 1000.0) as f32
            } else {
                0.0
            },
            family,
            truss_section,
            truss_section_depth,
            truss_depth,
            half_section: truss_section / 2.0,
            chord_r: (structure.truss_chord_dia_mm / 2000.0) as f32,
            diag_r: (structure.truss_diag_dia_mm / 2000.0) as f32,
            z_led_back,
            z_gap,
            z_truss_front,
            z_truss_center: z_truss_front + truss_depth / 2.0,
            z_truss_back: z_truss_front + truss_depth,
            leg_x: computed
                .leg_positions_mm
                .iter()
                .map(|&x| (x / 1000.0) as f32)
                .collect(),
            leg_h: legs.map_or(0.0, |l| (l.height_mm / 1000.0) as f32),
            leg_arm,
            base_plate_w: (plate.width_mm / 1000.0) as f32,
            base_plate_d: (plate.depth_mm / 1000.0) as f32,
            base_plate_inset: (plate.inset_mm / 1000.0) as f32,
            tube_r: (structure.horizontal_tubes.diameter_mm / 2000.0) as f32,
            tube_y: computed
                .tube_positions_mm
                .iter()
                .map(|&y| (y / 1000.0) as f32)
                .collect(),
            z_tube: z_truss_front - TUBE_SETBACK_M,
        }
    }

    /// Ground-to-top extent, bottom bar included.
    pub fn total_height(&self) -> f32 {
        self.bottom_bar + self.led_h
    }

    /// Front-to-back extent, stabiliser arm included.
    pub fn total_depth(&self) -> f32 {
        self.z_truss_back + self.leg_arm
    }
}
