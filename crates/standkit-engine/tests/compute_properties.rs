//! Property tests over the derivation invariants

use proptest::prelude::*;
use standkit_engine::{
    compute, ClampType, GeometryParams, LedConfig, LegConfig, StructureConfig, TubeConfig,
};

fn arb_led() -> impl Strategy<Value = LedConfig> {
    (
        // Wider than twice the default leg edge offset, so leg runs
        // always have a positive span.
        1500.0f64..20_000.0,
        500.0f64..6000.0,
        prop_oneof![Just(false), Just(true)],
        prop_oneof![Just(1.5f64), Just(1.9), Just(2.6), Just(2.9), Just(3.9), Just(4.8)],
        0u32..3,
    )
        .prop_map(|(width, height, tall, pitch, dead_rows)| {
            let mut led = LedConfig {
                width_mm: width,
                height_mm: height,
                active_width_mm: width,
                active_height_mm: height,
                tile_pitch_mm: pitch,
                dead_rows,
                ..LedConfig::default()
            };
            if tall {
                led.apply_tile_size(standkit_catalog::TileSize::Tall1000);
            }
            led
        })
}

fn arb_structure() -> impl Strategy<Value = StructureConfig> {
    (
        prop_oneof![Just("QX30"), Just("FX30")],
        1u32..8,
        1000.0f64..4000.0,
        0u32..5,
        prop_oneof![Just(false), Just(true)],
    )
        .prop_map(|(model, leg_count, leg_height, tube_count, bottom_bar)| {
            let mut structure = StructureConfig {
                legs: Some(LegConfig {
                    count: leg_count,
                    height_mm: leg_height,
                    ..LegConfig::default()
                }),
                bottom_bar,
                horizontal_tubes: TubeConfig {
                    count: tube_count,
                    diameter_mm: 50.0,
                    clamp_type: ClampType::Double,
                },
                ..StructureConfig::default()
            };
            if let Ok(spec) = standkit_catalog::truss(model) {
                structure.apply_truss(spec);
            }
            structure
        })
}

proptest! {
    #[test]
    fn leg_positions_increase_with_equal_gaps(
        led in arb_led(),
        structure in arb_structure(),
    ) {
        let computed = compute(&led, &structure).unwrap();
        let positions = &computed.leg_positions_mm;
        for pair in positions.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!((pair[1] - pair[0] - computed.leg_spacing_mm).abs() < 1e-6);
        }
        if positions.len() >= 2 {
            // Outer legs mirror each other about the wall centre.
            let left = positions[0];
            let right = led.width_mm - positions[positions.len() - 1];
            prop_assert!((left - right).abs() < 1e-6);
        }
    }

    #[test]
    fn tube_heights_stay_inside_the_wall(
        led in arb_led(),
        structure in arb_structure(),
    ) {
        let computed = compute(&led, &structure).unwrap();
        let bar = if structure.bottom_bar { structure.bottom_bar_height_mm } else { 0.0 };
        for window in computed.tube_positions_mm.windows(2) {
            prop_assert!(window[1] > window[0]);
        }
        for &y in &computed.tube_positions_mm {
            prop_assert!(y > bar);
            prop_assert!(y < bar + led.height_mm);
        }
    }

    #[test]
    fn weights_and_counts_are_consistent(
        led in arb_led(),
        structure in arb_structure(),
    ) {
        let computed = compute(&led, &structure).unwrap();
        prop_assert!(computed.active_tiles <= computed.total_tiles);
        prop_assert_eq!(computed.total_tiles, computed.cols * computed.rows);
        prop_assert!(
            (computed.total_weight_kg
                - computed.led_weight_kg
                - computed.structure_weight_kg)
                .abs()
                < 1e-9
        );
        prop_assert!(computed.network_schema.ports_used <= computed.network_schema.ports_total);
        prop_assert!(computed.power_schema.lines_16a >= computed.power_lines_16a);
        prop_assert!(computed.max_legs >= 2);
    }

    #[test]
    fn derivation_is_deterministic(
        led in arb_led(),
        structure in arb_structure(),
    ) {
        let a = compute(&led, &structure).unwrap();
        let b = compute(&led, &structure).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn sheet_extents_match_computed_figures(
        led in arb_led(),
        structure in arb_structure(),
    ) {
        let computed = compute(&led, &structure).unwrap();
        let geo = GeometryParams::derive(&led, &structure, &computed);
        // The projector and the metrics must tell the same story, or the
        // dimension labels drift from the drawn extents.
        let height_m = computed.total_height_mm as f32 / 1000.0;
        let depth_m = computed.total_depth_mm as f32 / 1000.0;
        prop_assert!((geo.total_height() - height_m).abs() < 1e-3);
        prop_assert!((geo.total_depth() - depth_m).abs() < 1e-3);
    }
}
