//! LED processor reference data
//!
//! Capacity figures for the NovaStar processors the configurator can plan
//! around. Pixel-per-port figures are quoted at 8-bit colour depth; each
//! entry records the datasheet it was taken from.

use standkit_core::error::CatalogError;

/// Manufacturer data for one LED processor.
#[derive(Debug, Clone)]
pub struct ControllerSpec {
    /// Identifier as stored in project files ("vx1000").
    pub id: &'static str,
    /// Human-readable label for panels and title blocks.
    pub label: &'static str,
    /// Total pixel capacity.
    pub max_pixels: u64,
    /// Widest supported canvas, in px.
    pub max_resolution_w: u32,
    /// Tallest supported canvas, in px.
    pub max_resolution_h: u32,
    /// Gigabit ethernet outputs.
    pub ethernet_ports: u32,
    /// Pixels driven per ethernet port.
    pub pixels_per_port: u64,
    /// Processor's own draw, in watts.
    pub power_w: f64,
    /// Datasheet the figures were taken from.
    pub source: &'static str,
}

static CONTROLLER_DB: [ControllerSpec; 3] = [
    ControllerSpec {
        id: "vx1000",
        label: "NovaStar VX1000",
        max_pixels: 6_500_000,
        max_resolution_w: 10240,
        max_resolution_h: 8192,
        ethernet_ports: 10,
        pixels_per_port: 650_000,
        power_w: 150.0,
        source: "VX1000 Spec V1.1.1 — 6.5M px, 10×1G",
    },
    ControllerSpec {
        id: "mctr4k",
        label: "NovaStar MCTRL4K",
        max_pixels: 8_847_360,
        max_resolution_w: 7680,
        max_resolution_h: 7680,
        ethernet_ports: 16,
        pixels_per_port: 650_000,
        power_w: 180.0,
        source: "MCTRL4K Spec — 650k px/porta @8bit, 16×1G + 4×10G",
    },
    ControllerSpec {
        id: "h2",
        label: "NovaStar H2",
        max_pixels: 26_000_000,
        max_resolution_w: 10752,
        max_resolution_h: 10752,
        ethernet_ports: 40,
        pixels_per_port: 650_000,
        power_w: 210.0,
        source: "H2 ledwallcentral.com — 26M px, 40×1G",
    },
];

/// All known processors, in catalog order.
pub fn all_controllers() -> &'static [ControllerSpec] {
    &CONTROLLER_DB
}

/// Look up a processor by its project-file identifier.
///
/// Unknown identifiers are an error; there is no default processor.
pub fn controller(id: &str) -> Result<&'static ControllerSpec, CatalogError> {
    CONTROLLER_DB
        .iter()
        .find(|spec| spec.id == id)
        .ok_or_else(|| CatalogError::ControllerNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_controllers() {
        assert_eq!(controller("vx1000").unwrap().ethernet_ports, 10);
        assert_eq!(controller("mctr4k").unwrap().max_pixels, 8_847_360);
        assert_eq!(controller("h2").unwrap().max_pixels, 26_000_000);
    }

    #[test]
    fn test_unknown_controller_fails() {
        let err = controller("vx600").unwrap_err();
        assert!(matches!(err, CatalogError::ControllerNotFound { id } if id == "vx600"));
    }

    #[test]
    fn test_ports_share_capacity() {
        for spec in all_controllers() {
            assert_eq!(spec.pixels_per_port, 650_000);
        }
    }
}
