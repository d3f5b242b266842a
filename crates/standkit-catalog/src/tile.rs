//! Cabinet format reference data
//!
//! The two cabinet formats the configurator stocks, with the physical
//! dimensions and weights the metrics engine syncs into the document
//! whenever the format changes.

use serde::{Deserialize, Serialize};
use standkit_core::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Cabinet format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSize {
    /// 500 × 500 mm square cabinet.
    #[serde(rename = "500x500")]
    Square500,
    /// 500 × 1000 mm double-height cabinet.
    #[serde(rename = "500x1000")]
    Tall1000,
}

impl TileSize {
    /// Label used in schema strings and panels ("500×500").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Square500 => "500×500",
            Self::Tall1000 => "500×1000",
        }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::Square500
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square500 => write!(f, "500x500"),
            Self::Tall1000 => write!(f, "500x1000"),
        }
    }
}

impl FromStr for TileSize {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "500x500" => Ok(Self::Square500),
            "500x1000" => Ok(Self::Tall1000),
            _ => Err(CatalogError::TileSizeNotFound {
                label: s.to_string(),
            }),
        }
    }
}

/// Physical data for one cabinet format.
#[derive(Debug, Clone, Copy)]
pub struct TileSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub weight_kg: f64,
}

/// Dimensions and weight for a cabinet format.
pub fn tile_spec(size: TileSize) -> TileSpec {
    match size {
        TileSize::Square500 => TileSpec {
            width_mm: 500.0,
            height_mm: 500.0,
            weight_kg: 7.5,
        },
        TileSize::Tall1000 => TileSpec {
            width_mm: 500.0,
            height_mm: 1000.0,
            weight_kg: 14.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs() {
        let square = tile_spec(TileSize::Square500);
        assert_eq!(square.width_mm, 500.0);
        assert_eq!(square.height_mm, 500.0);
        assert_eq!(square.weight_kg, 7.5);

        let tall = tile_spec(TileSize::Tall1000);
        assert_eq!(tall.height_mm, 1000.0);
        assert_eq!(tall.weight_kg, 14.0);
    }

    #[test]
    fn test_parse_round_trip() {
        for size in [TileSize::Square500, TileSize::Tall1000] {
            assert_eq!(size.to_string().parse::<TileSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = "600x600".parse::<TileSize>().unwrap_err();
        assert!(matches!(err, CatalogError::TileSizeNotFound { label } if label == "600x600"));
    }

    #[test]
    fn test_labels_use_multiplication_sign() {
        assert_eq!(TileSize::Square500.label(), "500×500");
        assert_eq!(TileSize::Tall1000.label(), "500×1000");
    }
}
