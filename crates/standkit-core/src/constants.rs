//! Physical and electrical constants used by the metrics engine
//!
//! These values encode the rigging and distribution practice the configurator
//! is built around. Every computed sheet depends on them.

/// Mains voltage assumed for power distribution, in volts.
pub const MAINS_VOLTAGE_V: f64 = 230.0;

/// Rated current of one distribution line, in amperes.
pub const LINE_CURRENT_A: f64 = 16.0;

/// Derating factor applied when sizing distribution lines.
pub const LINE_LOAD_FACTOR: f64 = 0.85;

/// Worst-case draw of a single LED cabinet, in watts.
pub const TILE_POWER_W: f64 = 150.0;

/// Linear weight of a rigging tube, in kg per metre.
pub const TUBE_WEIGHT_KG_PER_M: f64 = 1.5;

/// Weight of a single half coupler, in kg. Each tube/leg crossing uses two.
pub const CLAMP_WEIGHT_KG: f64 = 0.5;

/// Fixed hardware allowance for pins, spigots and safeties, in kg.
pub const RIGGING_ALLOWANCE_KG: f64 = 20.0;

/// Wall-to-truss air gap when cabinets bolt straight onto the legs, in mm.
pub const DIRECT_MOUNT_GAP_MM: f64 = 210.0;

/// Wall-to-truss air gap when cabinets hang from horizontal tubes, in mm.
pub const TUBE_MOUNT_GAP_MM: f64 = 150.0;

/// Minimum number of supporting legs for a free-standing wall.
pub const MIN_LEGS: u32 = 2;

/// Wall width served by one leg when suggesting the maximum leg count, in mm.
pub const LEG_PITCH_MM: f64 = 500.0;
