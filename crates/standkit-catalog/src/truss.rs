//! Truss reference data
//!
//! Manufacturer specifications for the vertical supports the configurator
//! can build legs from. Lookups by model id fail fast: a silently
//! substituted truss would invalidate every weight and load figure
//! derived from it.

use standkit_core::error::CatalogError;

/// Cross-section family of a truss model.
///
/// The family decides both the leg geometry (four-chord tower versus
/// two-chord ladder) and which section measurement gives the structure
/// its front-to-back depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrussFamily {
    /// Four-chord square box section ("americana").
    Box,
    /// Two-chord flat ladder section.
    Ladder,
}

impl TrussFamily {
    /// Ladder sections lie flat against the wall and carry no rear arm.
    pub fn is_flat(&self) -> bool {
        matches!(self, TrussFamily::Ladder)
    }
}

impl std::fmt::Display for TrussFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Box => write!(f, "Americana"),
            Self::Ladder => write!(f, "Ladder"),
        }
    }
}

/// Base plate dimensions for a truss model, in mm.
#[derive(Debug, Clone, Copy)]
pub struct BasePlate {
    /// Plate width across the wall.
    pub width_mm: f64,
    /// Plate depth front to back.
    pub depth_mm: f64,
    /// Offset from the plate's LED-side edge to the truss front face.
    pub inset_mm: f64,
}

/// Distributed load capacity, in kg, at the manufacturer's reference spans.
#[derive(Debug, Clone, Copy)]
pub struct LoadCapacity {
    pub span_3m_kg: f64,
    pub span_5m_kg: f64,
    pub span_10m_kg: f64,
}

/// Manufacturer data for one truss model.
#[derive(Debug, Clone)]
pub struct TrussSpec {
    /// Model identifier as stored in project files ("QX30").
    pub id: &'static str,
    /// Human-readable label for panels and title blocks.
    pub label: &'static str,
    pub family: TrussFamily,
    /// Section width across the wall, in mm.
    pub section_mm: f64,
    /// Section depth front to back, in mm.
    pub section_depth_mm: f64,
    /// Main chord diameter, in mm.
    pub chord_dia_mm: f64,
    /// Bracing diagonal diameter, in mm.
    pub diag_dia_mm: f64,
    /// Linear weight, in kg per metre.
    pub weight_kg_per_m: f64,
    pub base_plate: BasePlate,
    /// Load table where the manufacturer publishes one.
    pub load_capacity: Option<LoadCapacity>,
}

static TRUSS_DB: [TrussSpec; 2] = [
    TrussSpec {
        id: "QX30",
        label: "LITEC QX30SA (Americana)",
        family: TrussFamily::Box,
        section_mm: 290.0,
        section_depth_mm: 290.0,
        chord_dia_mm: 50.0,
        diag_dia_mm: 18.0,
        weight_kg_per_m: 5.3,
        base_plate: BasePlate {
            width_mm: 320.0,
            depth_mm: 740.0,
            inset_mm: 70.0,
        },
        load_capacity: Some(LoadCapacity {
            span_3m_kg: 2473.0,
            span_5m_kg: 1750.0,
            span_10m_kg: 834.0,
        }),
    },
    TrussSpec {
        id: "FX30",
        label: "Prolyte FX30 (Piatta/Ladder)",
        family: TrussFamily::Ladder,
        section_mm: 220.0,
        section_depth_mm: 30.0,
        chord_dia_mm: 50.0,
        diag_dia_mm: 20.0,
        weight_kg_per_m: 2.8,
        base_plate: BasePlate {
            width_mm: 320.0,
            depth_mm: 740.0,
            inset_mm: 70.0,
        },
        load_capacity: None,
    },
];

/// All known truss models, in catalog order.
pub fn all_trusses() -> &'static [TrussSpec] {
    &TRUSS_DB
}

/// Look up a truss model by its project-file identifier.
///
/// Unknown models are an error; there is no default truss.
pub fn truss(model: &str) -> Result<&'static TrussSpec, CatalogError> {
    TRUSS_DB
        .iter()
        .find(|spec| spec.id == model)
        .ok_or_else(|| CatalogError::TrussNotFound {
            model: model.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_models() {
        let qx30 = truss("QX30").unwrap();
        assert_eq!(qx30.section_mm, 290.0);
        assert_eq!(qx30.section_depth_mm, 290.0);
        assert!(!qx30.family.is_flat());
        assert!(qx30.load_capacity.is_some());

        let fx30 = truss("FX30").unwrap();
        assert_eq!(fx30.section_mm, 220.0);
        assert_eq!(fx30.section_depth_mm, 30.0);
        assert!(fx30.family.is_flat());
        assert!(fx30.load_capacity.is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(truss("qx30").is_err());
    }

    #[test]
    fn test_unknown_model_fails() {
        let err = truss("HD44").unwrap_err();
        assert!(matches!(err, CatalogError::TrussNotFound { model } if model == "HD44"));
    }

    #[test]
    fn test_base_plates_share_footprint() {
        for spec in all_trusses() {
            assert_eq!(spec.base_plate.width_mm, 320.0);
            assert_eq!(spec.base_plate.depth_mm, 740.0);
            assert_eq!(spec.base_plate.inset_mm, 70.0);
        }
    }
}
