//! Editable project configuration
//!
//! The three document sections a user edits: the LED wall itself, the
//! supporting structure, and the optional leg and tube assemblies inside
//! it. All linear fields are stored in millimetres and carry a unit
//! suffix. Defaults describe the house-standard 5x2 m wall on four QX30
//! legs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use standkit_catalog::{tile_spec, TileSize, TrussSpec};
use standkit_core::ProjectError;

/// How the wall is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountType {
    /// Free-standing on ballasted truss legs.
    Ground,
    /// Hung from a flying bar. Not exportable.
    Flying,
    /// Ground stand with an additional top bar.
    GroundFlying,
}

impl Default for MountType {
    fn default() -> Self {
        MountType::Ground
    }
}

impl fmt::Display for MountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MountType::Ground => "ground",
            MountType::Flying => "flying",
            MountType::GroundFlying => "ground_flying",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MountType {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ground" => Ok(MountType::Ground),
            "flying" => Ok(MountType::Flying),
            "ground_flying" => Ok(MountType::GroundFlying),
            other => Err(ProjectError::UnknownMountType {
                mount: other.to_string(),
            }),
        }
    }
}

/// Curvature of the wall. Stored for the record; the stand geometry is
/// always computed for the flat projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallShape {
    Flat,
    Concave,
    Convex,
}

impl Default for WallShape {
    fn default() -> Self {
        WallShape::Flat
    }
}

/// How a horizontal tube is clamped to the legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampType {
    Single,
    Double,
}

impl Default for ClampType {
    fn default() -> Self {
        ClampType::Double
    }
}

/// The LED wall section of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    /// Physical wall width in millimetres.
    pub width_mm: f64,
    /// Physical wall height in millimetres.
    pub height_mm: f64,
    /// Width of the driven (lit) area in millimetres.
    pub active_width_mm: f64,
    /// Height of the driven (lit) area in millimetres.
    pub active_height_mm: f64,
    /// Cabinet format, one of the two Uniview sizes.
    pub tile_size: TileSize,
    /// Cabinet width in millimetres.
    pub tile_width_mm: f64,
    /// Cabinet height in millimetres.
    pub tile_height_mm: f64,
    /// Pixel pitch in millimetres.
    pub tile_pitch_mm: f64,
    /// Cabinet depth in millimetres.
    pub tile_depth_mm: f64,
    /// Weight of one cabinet in kilograms.
    pub tile_weight_kg: f64,
    /// Bottom cabinet rows that are mounted but never driven.
    pub dead_rows: u32,
    /// Outer cabinet columns on each side that are never driven.
    pub dead_cols: u32,
    /// Catalog id of the sending controller.
    pub controller: String,
}

impl Default for LedConfig {
    fn default() -> Self {
        LedConfig {
            width_mm: 5000.0,
            height_mm: 2000.0,
            active_width_mm: 5000.0,
            active_height_mm: 1500.0,
            tile_size: TileSize::Square500,
            tile_width_mm: 500.0,
            tile_height_mm: 500.0,
            tile_pitch_mm: 2.6,
            tile_depth_mm: 80.0,
            tile_weight_kg: 7.5,
            dead_rows: 1,
            dead_cols: 0,
            controller: "vx1000".to_string(),
        }
    }
}

impl LedConfig {
    /// Pull the cabinet dimensions and weight for `size` into the config.
    pub fn apply_tile_size(&mut self, size: TileSize) {
        let spec = tile_spec(size);
        self.tile_size = size;
        self.tile_width_mm = spec.width_mm;
        self.tile_height_mm = spec.height_mm;
        self.tile_weight_kg = spec.weight_kg;
    }
}

/// The truss leg run of a ground stand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegConfig {
    /// Number of vertical legs.
    pub count: u32,
    /// Leg height in millimetres.
    pub height_mm: f64,
    /// Length of the rear stabiliser arm in millimetres.
    pub arm_length_mm: f64,
    /// Distance of the outermost legs from the wall edges, in millimetres.
    pub edge_offset_mm: f64,
    /// Whether each leg sits on a ballast base plate.
    pub base_plate: bool,
}

impl Default for LegConfig {
    fn default() -> Self {
        LegConfig {
            count: 4,
            height_mm: 2000.0,
            arm_length_mm: 420.0,
            edge_offset_mm: 500.0,
            base_plate: true,
        }
    }
}

/// The horizontal scaffolding tubes the cabinets hang from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeConfig {
    /// Number of horizontal tubes. Zero switches to direct mounting.
    pub count: u32,
    /// Tube diameter in millimetres.
    pub diameter_mm: f64,
    /// Clamp style at each leg crossing.
    pub clamp_type: ClampType,
}

impl Default for TubeConfig {
    fn default() -> Self {
        TubeConfig {
            count: 3,
            diameter_mm: 50.0,
            clamp_type: ClampType::Double,
        }
    }
}

/// The structure section of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// How the wall is carried.
    pub mount_type: MountType,
    /// Curvature of the wall.
    pub wall_shape: WallShape,
    /// Catalog id of the truss the legs are built from.
    pub truss_model: String,
    /// Truss section width in millimetres.
    pub truss_section_mm: f64,
    /// Truss section depth in millimetres.
    pub truss_section_depth_mm: f64,
    /// Chord tube diameter in millimetres.
    pub truss_chord_dia_mm: f64,
    /// Diagonal tube diameter in millimetres.
    pub truss_diag_dia_mm: f64,
    /// Leg run. `None` for flown walls.
    pub legs: Option<LegConfig>,
    /// Whether a bottom support bar runs under the first cabinet row.
    pub bottom_bar: bool,
    /// Bottom bar height in millimetres.
    pub bottom_bar_height_mm: f64,
    /// Bottom bar tube diameter in millimetres.
    pub bottom_bar_dia_mm: f64,
    /// Whether a flying bar tops the stand.
    pub flying_bar: bool,
    /// Horizontal tube assembly between the legs and the wall.
    pub horizontal_tubes: TubeConfig,
}

impl Default for StructureConfig {
    fn default() -> Self {
        // QX30 section data, kept in step with the catalog by a test below.
        StructureConfig {
            mount_type: MountType::Ground,
            wall_shape: WallShape::Flat,
            truss_model: "QX30".to_string(),
            truss_section_mm: 290.0,
            truss_section_depth_mm: 290.0,
            truss_chord_dia_mm: 50.0,
            truss_diag_dia_mm: 18.0,
            legs: Some(LegConfig::default()),
            bottom_bar: true,
            bottom_bar_height_mm: 100.0,
            bottom_bar_dia_mm: 50.0,
            flying_bar: false,
            horizontal_tubes: TubeConfig::default(),
        }
    }
}

impl StructureConfig {
    /// Pull the section dimensions for `spec` into the config.
    pub fn apply_truss(&mut self, spec: &TrussSpec) {
        self.truss_model = spec.id.to_string();
        self.truss_section_mm = spec.section_mm;
        self.truss_section_depth_mm = spec.section_depth_mm;
        self.truss_chord_dia_mm = spec.chord_dia_mm;
        self.truss_diag_dia_mm = spec.diag_dia_mm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_catalog::truss;

    #[test]
    fn test_mount_type_round_trip() {
        for s in ["ground", "flying", "ground_flying"] {
            let mount: MountType = s.parse().unwrap();
            assert_eq!(mount.to_string(), s);
        }
    }

    #[test]
    fn test_mount_type_rejects_unknown() {
        let err = "hover".parse::<MountType>().unwrap_err();
        assert!(matches!(err, ProjectError::UnknownMountType { .. }));
    }

    #[test]
    fn test_mount_type_serde_tags() {
        let json = serde_json::to_string(&MountType::GroundFlying).unwrap();
        assert_eq!(json, "\"ground_flying\"");
        let back: MountType = serde_json::from_str("\"flying\"").unwrap();
        assert_eq!(back, MountType::Flying);
    }

    #[test]
    fn test_default_structure_matches_catalog_truss() {
        let structure = StructureConfig::default();
        let spec = truss(&structure.truss_model).unwrap();
        assert_eq!(structure.truss_section_mm, spec.section_mm);
        assert_eq!(structure.truss_section_depth_mm, spec.section_depth_mm);
        assert_eq!(structure.truss_chord_dia_mm, spec.chord_dia_mm);
        assert_eq!(structure.truss_diag_dia_mm, spec.diag_dia_mm);
    }

    #[test]
    fn test_default_led_matches_tile_spec() {
        let led = LedConfig::default();
        let spec = tile_spec(led.tile_size);
        assert_eq!(led.tile_width_mm, spec.width_mm);
        assert_eq!(led.tile_height_mm, spec.height_mm);
        assert_eq!(led.tile_weight_kg, spec.weight_kg);
    }

    #[test]
    fn test_apply_tile_size_syncs_dimensions() {
        let mut led = LedConfig::default();
        led.apply_tile_size(TileSize::Tall1000);
        assert_eq!(led.tile_width_mm, 500.0);
        assert_eq!(led.tile_height_mm, 1000.0);
        assert_eq!(led.tile_weight_kg, 14.0);
    }

    #[test]
    fn test_apply_truss_syncs_section() {
        let mut structure = StructureConfig::default();
        let fx = truss("FX30").unwrap();
        structure.apply_truss(fx);
        assert_eq!(structure.truss_model, "FX30");
        assert_eq!(structure.truss_section_mm, 220.0);
        assert_eq!(structure.truss_section_depth_mm, 30.0);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let led: LedConfig = serde_json::from_str(r#"{ "width_mm": 3000.0 }"#).unwrap();
        assert_eq!(led.width_mm, 3000.0);
        assert_eq!(led.height_mm, 2000.0);
        assert_eq!(led.controller, "vx1000");
    }
}
