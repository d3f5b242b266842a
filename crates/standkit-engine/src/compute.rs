//! Derived metrics
//!
//! Everything the document does not store directly: cabinet grid, weights,
//! leg and tube placement, pixel resolution, power and network plans. The
//! whole derivation is a pure function of the LED and structure sections
//! plus the catalog specs they reference, and it is total: degenerate
//! input produces clamped output, never a panic.

use serde::{Deserialize, Serialize};
use standkit_catalog::{controller, pixels_per_500mm, truss, ControllerSpec, TrussSpec};
use standkit_core::constants::{
    CLAMP_WEIGHT_KG, DIRECT_MOUNT_GAP_MM, LEG_PITCH_MM, LINE_CURRENT_A, LINE_LOAD_FACTOR,
    MAINS_VOLTAGE_V, MIN_LEGS, RIGGING_ALLOWANCE_KG, TILE_POWER_W, TUBE_MOUNT_GAP_MM,
    TUBE_WEIGHT_KG_PER_M,
};
use standkit_core::units::group_thousands;
use standkit_core::Result;

use crate::config::{LedConfig, MountType, StructureConfig};

/// Mains power distribution plan for the wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerSchema {
    /// 16 A lines to run, whichever of amperage or cabinet chaining binds.
    pub lines_16a: u32,
    /// Cabinets a single line may feed, limited by the chaining spec.
    pub max_cabinets_per_line: u32,
    /// Usable watts per line at the derated load factor.
    pub watts_per_line: u32,
    /// Human-readable plan, as printed on the sheet.
    pub schema: String,
}

/// Data distribution plan for the wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSchema {
    /// Ethernet ports actually patched.
    pub ports_used: u32,
    /// Ports the controller offers.
    pub ports_total: u32,
    /// Whether the controller can drive the full active resolution.
    pub controller_compatible: bool,
    /// Pixel budget of one port.
    pub pixels_per_port: u64,
    /// Human-readable plan, or a capacity warning when incompatible.
    pub schema: String,
}

/// Every figure derived from a project document.
///
/// Stored alongside the editable sections for display, but never trusted
/// on load: documents are recomputed as soon as they are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedValues {
    /// Upper bound on the leg count for the current wall width.
    pub max_legs: u32,
    /// Cabinet columns.
    pub cols: u32,
    /// Cabinet rows.
    pub rows: u32,
    /// Cabinets mounted.
    pub total_tiles: u32,
    /// Cabinets actually driven, dead rows excluded.
    pub active_tiles: u32,
    /// Weight of all mounted cabinets in kilograms.
    pub led_weight_kg: f64,
    /// Weight of legs, tubes, clamps and rigging in kilograms.
    pub structure_weight_kg: f64,
    /// Combined load in kilograms.
    pub total_weight_kg: f64,
    /// Active horizontal resolution in pixels.
    pub resolution_x_px: u32,
    /// Active vertical resolution in pixels.
    pub resolution_y_px: u32,
    /// Active pixel count.
    pub total_pixels: u64,
    /// Leg centrelines measured from the wall's left edge, in millimetres.
    pub leg_positions_mm: Vec<f64>,
    /// Distance between adjacent legs in millimetres. Zero for one leg.
    pub leg_spacing_mm: f64,
    /// Tube heights measured from the ground, in millimetres.
    pub tube_positions_mm: Vec<f64>,
    /// Ground-to-top height including the bottom bar, in millimetres.
    pub total_height_mm: f64,
    /// Front-to-back depth including the stabiliser arm, in millimetres.
    pub total_depth_mm: f64,
    /// Wall power draw in watts.
    pub power_consumption_w: f64,
    /// 16 A lines needed by amperage alone.
    pub power_lines_16a: u32,
    /// Full power plan.
    pub power_schema: PowerSchema,
    /// Full network plan.
    pub network_schema: NetworkSchema,
}

/// Resolve the catalog references of a document and derive its metrics.
///
/// Fails fast when the document names a truss or controller the catalog
/// does not carry.
pub fn compute(led: &LedConfig, structure: &StructureConfig) -> Result<ComputedValues> {
    let truss_spec = truss(&structure.truss_model)?;
    let controller_spec = controller(&led.controller)?;
    Ok(compute_values(led, structure, truss_spec, controller_spec))
}

/// Derive all metrics from a document and its resolved catalog specs.
pub fn compute_values(
    led: &LedConfig,
    structure: &StructureConfig,
    truss_spec: &TrussSpec,
    controller_spec: &ControllerSpec,
) -> ComputedValues {
    let safe_tile_w = led.tile_width_mm.max(1.0);
    let safe_tile_h = led.tile_height_mm.max(1.0);
    let is_flat = truss_spec.family.is_flat();

    // Grid. The wall always carries at least one cabinet each way.
    let cols = (led.width_mm.max(safe_tile_w) / safe_tile_w).round() as u32;
    let rows = (led.height_mm.max(safe_tile_h) / safe_tile_h).round() as u32;
    let total_tiles = cols.saturating_mul(rows);
    let active_tiles = cols.saturating_mul(rows.saturating_sub(led.dead_rows));

    let led_weight_kg = f64::from(total_tiles) * led.tile_weight_kg;

    // Leg run. Only a ground stand with a leg section gets legs; flown
    // walls keep the vectors empty.
    let mut leg_positions_mm = Vec::new();
    let mut leg_spacing_mm = 0.0;
    let mut structure_weight_kg = 0.0;
    let grounded_legs = structure
        .legs
        .as_ref()
        .filter(|_| structure.mount_type == MountType::Ground);

    if let Some(legs) = grounded_legs {
        let span = led.width_mm - 2.0 * legs.edge_offset_mm;
        leg_spacing_mm = if legs.count > 1 {
            span / f64::from(legs.count - 1)
        } else {
            0.0
        };
        for i in 0..legs.count {
            leg_positions_mm.push(legs.edge_offset_mm + f64::from(i) * leg_spacing_mm);
        }

        let arm_mm = if is_flat { 0.0 } else { legs.arm_length_mm };
        let leg_length_m = (legs.height_mm + arm_mm) / 1000.0;
        let tube_span_m = match (leg_positions_mm.first(), leg_positions_mm.last()) {
            (Some(first), Some(last)) => (last - first) / 1000.0,
            _ => 0.0,
        };
        let tube_count = f64::from(structure.horizontal_tubes.count);

        structure_weight_kg = f64::from(legs.count) * leg_length_m * truss_spec.weight_kg_per_m
            + tube_count * tube_span_m * TUBE_WEIGHT_KG_PER_M
            + f64::from(legs.count) * tube_count * 2.0 * CLAMP_WEIGHT_KG
            + RIGGING_ALLOWANCE_KG;
    }

    let bottom_bar_mm = if structure.bottom_bar {
        structure.bottom_bar_height_mm
    } else {
        0.0
    };

    // Tubes divide the wall height evenly, measured from the top of the
    // bottom bar.
    let mut tube_positions_mm = Vec::new();
    if structure.horizontal_tubes.count > 0 {
        let step = led.height_mm / f64::from(structure.horizontal_tubes.count + 1);
        for i in 1..=structure.horizontal_tubes.count {
            tube_positions_mm.push(bottom_bar_mm + step * f64::from(i));
        }
    }

    // Resolution. Tall cabinets pack two pixel modules vertically.
    let pixels_per_module = pixels_per_500mm(led.tile_pitch_mm);
    let pixels_per_tile_w = pixels_per_module;
    let pixels_per_tile_h = if led.tile_height_mm == 1000.0 {
        pixels_per_module.saturating_mul(2)
    } else {
        pixels_per_module
    };
    let resolution_x_px =
        ((led.active_width_mm.max(0.0) / safe_tile_w) * f64::from(pixels_per_tile_w)).round() as u32;
    let resolution_y_px =
        ((led.active_height_mm.max(0.0) / safe_tile_h) * f64::from(pixels_per_tile_h)).round() as u32;
    let total_pixels = u64::from(resolution_x_px) * u64::from(resolution_y_px);

    let total_height_mm = bottom_bar_mm + led.height_mm;

    // Depth. A flat leg has no stabiliser arm and stands on its section
    // width; without tubes the cabinets mount directly on a wider gap.
    let truss_depth_mm = if is_flat {
        structure.truss_section_mm
    } else {
        structure.truss_section_depth_mm
    };
    let arm_mm = if is_flat {
        0.0
    } else {
        structure.legs.as_ref().map_or(0.0, |l| l.arm_length_mm)
    };
    let gap_mm = if structure.horizontal_tubes.count == 0 {
        DIRECT_MOUNT_GAP_MM
    } else {
        TUBE_MOUNT_GAP_MM
    };
    let total_depth_mm = led.tile_depth_mm + gap_mm + truss_depth_mm + arm_mm;

    let power_consumption_w = f64::from(total_tiles) * TILE_POWER_W;
    let power_schema = plan_power(led, total_tiles, power_consumption_w);
    let network_schema = plan_network(controller_spec, total_pixels);

    let max_legs = (led.width_mm / LEG_PITCH_MM).floor().max(f64::from(MIN_LEGS)) as u32;

    ComputedValues {
        max_legs,
        cols,
        rows,
        total_tiles,
        active_tiles,
        led_weight_kg,
        structure_weight_kg,
        total_weight_kg: led_weight_kg + structure_weight_kg,
        resolution_x_px,
        resolution_y_px,
        total_pixels,
        leg_positions_mm,
        leg_spacing_mm,
        tube_positions_mm,
        total_height_mm,
        total_depth_mm,
        power_consumption_w,
        power_lines_16a: power_lines(power_consumption_w),
        power_schema,
        network_schema,
    }
}

/// 16 A lines needed to carry `watts` at the derated line capacity.
fn power_lines(watts: f64) -> u32 {
    (watts / line_capacity_w()).ceil() as u32
}

fn line_capacity_w() -> f64 {
    MAINS_VOLTAGE_V * LINE_CURRENT_A * LINE_LOAD_FACTOR
}

fn plan_power(led: &LedConfig, total_tiles: u32, watts: f64) -> PowerSchema {
    // Tall cabinets draw double per unit, so half as many chain per line.
    let tall = led.tile_height_mm == 1000.0;
    let max_cabinets_per_line: u32 = if tall { 8 } else { 16 };
    let tile_label = if tall { "500×1000" } else { "500×500" };

    let by_amperage = power_lines(watts);
    let by_chaining =
        (f64::from(total_tiles) / f64::from(max_cabinets_per_line)).ceil() as u32;
    let lines_16a = by_amperage.max(by_chaining);

    PowerSchema {
        lines_16a,
        max_cabinets_per_line,
        watts_per_line: line_capacity_w().round() as u32,
        schema: format!(
            "{} linee 16A · max {} cabinet {}/linea",
            lines_16a, max_cabinets_per_line, tile_label
        ),
    }
}

fn plan_network(controller_spec: &ControllerSpec, total_pixels: u64) -> NetworkSchema {
    let ports_needed = total_pixels.div_ceil(controller_spec.pixels_per_port) as u32;
    let compatible = total_pixels <= controller_spec.max_pixels;

    if !compatible {
        tracing::warn!(
            total_pixels,
            max_pixels = controller_spec.max_pixels,
            controller = controller_spec.id,
            "wall resolution exceeds controller capacity"
        );
    }

    let schema = if compatible {
        format!(
            "{} porte ethernet su {} ({})",
            ports_needed, controller_spec.ethernet_ports, controller_spec.label
        )
    } else {
        format!(
            "⚠ {} px > {} px max ({})",
            group_thousands(total_pixels as i64),
            group_thousands(controller_spec.max_pixels as i64),
            controller_spec.label
        )
    };

    NetworkSchema {
        ports_used: ports_needed.min(controller_spec.ethernet_ports),
        ports_total: controller_spec.ethernet_ports,
        controller_compatible: compatible,
        pixels_per_port: controller_spec.pixels_per_port,
        schema,
    }
}
