//! Editing store
//!
//! A thread-safe wrapper around the open document. Every mutation goes
//! through a typed patch so partial edits merge over the current state,
//! and every config edit rederives the computed figures before the lock
//! is released. Two side effects keep the document coherent while the
//! user types: changing the cabinet format or the truss model pulls the
//! matching catalog dimensions into the config, and shrinking the wall
//! clamps the leg count to what still fits.

use parking_lot::RwLock;
use tracing::debug;

use standkit_catalog::{truss, TileSize};
use standkit_core::Result;
use standkit_engine::{ClampType, MountType, WallShape};

use crate::document::Project;

/// Partial edit of the event section.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub setup_date: Option<String>,
    pub teardown_date: Option<String>,
    pub notes: Option<String>,
    pub designer: Option<String>,
    pub revision: Option<u32>,
}

/// Partial edit of the LED section.
///
/// Cabinet dimensions and weight are not directly editable; they follow
/// the `tile_size` selection.
#[derive(Debug, Clone, Default)]
pub struct LedPatch {
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub active_width_mm: Option<f64>,
    pub active_height_mm: Option<f64>,
    pub tile_size: Option<TileSize>,
    pub tile_pitch_mm: Option<f64>,
    pub tile_depth_mm: Option<f64>,
    pub dead_rows: Option<u32>,
    pub dead_cols: Option<u32>,
    pub controller: Option<String>,
}

/// Partial edit of the structure section.
///
/// Truss section dimensions are not directly editable; they follow the
/// `truss_model` selection.
#[derive(Debug, Clone, Default)]
pub struct StructurePatch {
    pub mount_type: Option<MountType>,
    pub wall_shape: Option<WallShape>,
    pub truss_model: Option<String>,
    pub bottom_bar: Option<bool>,
    pub bottom_bar_height_mm: Option<f64>,
    pub bottom_bar_dia_mm: Option<f64>,
    pub flying_bar: Option<bool>,
}

/// Partial edit of the leg run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegsPatch {
    pub count: Option<u32>,
    pub height_mm: Option<f64>,
    pub arm_length_mm: Option<f64>,
    pub edge_offset_mm: Option<f64>,
    pub base_plate: Option<bool>,
}

/// Partial edit of the horizontal tube assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TubesPatch {
    pub count: Option<u32>,
    pub diameter_mm: Option<f64>,
    pub clamp_type: Option<ClampType>,
}

/// The open document and its editing operations.
pub struct ProjectStore {
    inner: RwLock<Project>,
}

impl ProjectStore {
    /// Wrap an existing document.
    pub fn new(project: Project) -> Self {
        ProjectStore {
            inner: RwLock::new(project),
        }
    }

    /// A clone of the current document.
    pub fn snapshot(&self) -> Project {
        self.inner.read().clone()
    }

    /// Merge an event patch. Metadata edits never change the figures, so
    /// nothing is recomputed.
    pub fn set_event(&self, patch: EventPatch) {
        let mut project = self.inner.write();
        let event = &mut project.event;
        if let Some(v) = patch.project_name {
            event.project_name = v;
        }
        if let Some(v) = patch.client {
            event.client = v;
        }
        if let Some(v) = patch.location {
            event.location = v;
        }
        if let Some(v) = patch.event_date {
            event.event_date = v;
        }
        if let Some(v) = patch.setup_date {
            event.setup_date = v;
        }
        if let Some(v) = patch.teardown_date {
            event.teardown_date = v;
        }
        if let Some(v) = patch.notes {
            event.notes = v;
        }
        if let Some(v) = patch.designer {
            event.designer = v;
        }
        if let Some(v) = patch.revision {
            event.revision = v;
        }
        project.touch();
    }

    /// Merge an LED patch, then recompute.
    ///
    /// Selecting a cabinet format pulls its dimensions from the catalog,
    /// the active area is clamped to the physical wall, and the leg count
    /// is clamped to the new maximum.
    pub fn set_led(&self, patch: LedPatch) -> Result<()> {
        let mut project = self.inner.write();
        let led = &mut project.led;
        if let Some(v) = patch.width_mm {
            led.width_mm = v;
        }
        if let Some(v) = patch.height_mm {
            led.height_mm = v;
        }
        if let Some(v) = patch.active_width_mm {
            led.active_width_mm = v;
        }
        if let Some(v) = patch.active_height_mm {
            led.active_height_mm = v;
        }
        if let Some(size) = patch.tile_size {
            led.apply_tile_size(size);
        }
        if let Some(v) = patch.tile_pitch_mm {
            led.tile_pitch_mm = v;
        }
        if let Some(v) = patch.tile_depth_mm {
            led.tile_depth_mm = v;
        }
        if let Some(v) = patch.dead_rows {
            led.dead_rows = v;
        }
        if let Some(v) = patch.dead_cols {
            led.dead_cols = v;
        }
        if let Some(v) = patch.controller {
            led.controller = v;
        }
        if led.active_width_mm > led.width_mm {
            led.active_width_mm = led.width_mm;
        }
        if led.active_height_mm > led.height_mm {
            led.active_height_mm = led.height_mm;
        }
        project.recompute()?;
        if clamp_legs(&mut project) {
            project.recompute()?;
        }
        project.touch();
        Ok(())
    }

    /// Merge a structure patch, then recompute.
    ///
    /// Selecting a truss model pulls its section from the catalog; an
    /// unknown model is rejected before anything is touched.
    pub fn set_structure(&self, patch: StructurePatch) -> Result<()> {
        let truss_spec = match patch.truss_model.as_deref() {
            Some(model) => Some(truss(model)?),
            None => None,
        };
        let mut project = self.inner.write();
        let structure = &mut project.structure;
        if let Some(v) = patch.mount_type {
            structure.mount_type = v;
        }
        if let Some(v) = patch.wall_shape {
            structure.wall_shape = v;
        }
        if let Some(spec) = truss_spec {
            structure.apply_truss(spec);
        }
        if let Some(v) = patch.bottom_bar {
            structure.bottom_bar = v;
        }
        if let Some(v) = patch.bottom_bar_height_mm {
            structure.bottom_bar_height_mm = v;
        }
        if let Some(v) = patch.bottom_bar_dia_mm {
            structure.bottom_bar_dia_mm = v;
        }
        if let Some(v) = patch.flying_bar {
            structure.flying_bar = v;
        }
        project.recompute()?;
        if clamp_legs(&mut project) {
            project.recompute()?;
        }
        project.touch();
        Ok(())
    }

    /// Merge a leg patch, then recompute. Does nothing when the document
    /// has no leg run.
    pub fn update_legs(&self, patch: LegsPatch) -> Result<()> {
        let mut project = self.inner.write();
        let Some(legs) = project.structure.legs.as_mut() else {
            return Ok(());
        };
        if let Some(v) = patch.count {
            legs.count = v;
        }
        if let Some(v) = patch.height_mm {
            legs.height_mm = v;
        }
        if let Some(v) = patch.arm_length_mm {
            legs.arm_length_mm = v;
        }
        if let Some(v) = patch.edge_offset_mm {
            legs.edge_offset_mm = v;
        }
        if let Some(v) = patch.base_plate {
            legs.base_plate = v;
        }
        project.recompute()?;
        if clamp_legs(&mut project) {
            project.recompute()?;
        }
        project.touch();
        Ok(())
    }

    /// Merge a tube patch, then recompute.
    pub fn update_tubes(&self, patch: TubesPatch) -> Result<()> {
        let mut project = self.inner.write();
        let tubes = &mut project.structure.horizontal_tubes;
        if let Some(v) = patch.count {
            tubes.count = v;
        }
        if let Some(v) = patch.diameter_mm {
            tubes.diameter_mm = v;
        }
        if let Some(v) = patch.clamp_type {
            tubes.clamp_type = v;
        }
        project.recompute()?;
        project.touch();
        Ok(())
    }

    /// Rederive the figures without touching any config.
    pub fn recompute(&self) -> Result<()> {
        self.inner.write().recompute()
    }

    /// Replace the document, typically with one from
    /// [`Project::load_from_file`].
    pub fn load(&self, project: Project) {
        debug!(name = %project.event.project_name, "document loaded into store");
        *self.inner.write() = project;
    }

    /// Replace the document with a fresh default one.
    pub fn reset(&self) -> Result<()> {
        *self.inner.write() = Project::new()?;
        Ok(())
    }
}

/// Clamp the leg count to the computed maximum. Returns whether anything
/// changed, in which case the figures must be rederived.
fn clamp_legs(project: &mut Project) -> bool {
    let max = project.computed.max_legs;
    match project.structure.legs.as_mut() {
        Some(legs) if legs.count > max => {
            debug!(count = legs.count, max, "leg count clamped");
            legs.count = max;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProjectStore {
        ProjectStore::new(Project::new().unwrap())
    }

    #[test]
    fn test_set_event_does_not_recompute() {
        let store = store();
        let before = store.snapshot();
        store.set_event(EventPatch {
            project_name: Some("Fiera Milano".to_string()),
            client: Some("ACME".to_string()),
            ..Default::default()
        });
        let after = store.snapshot();
        assert_eq!(after.event.project_name, "Fiera Milano");
        assert_eq!(after.event.client, "ACME");
        assert_eq!(after.computed, before.computed);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_set_led_syncs_tile_dimensions() {
        let store = store();
        store
            .set_led(LedPatch {
                tile_size: Some(TileSize::Tall1000),
                ..Default::default()
            })
            .unwrap();
        let project = store.snapshot();
        assert_eq!(project.led.tile_height_mm, 1000.0);
        assert_eq!(project.led.tile_weight_kg, 14.0);
        assert_eq!(project.computed.rows, 2);
    }

    #[test]
    fn test_set_led_clamps_active_area() {
        let store = store();
        store
            .set_led(LedPatch {
                width_mm: Some(3000.0),
                ..Default::default()
            })
            .unwrap();
        let project = store.snapshot();
        assert_eq!(project.led.active_width_mm, 3000.0);
    }

    #[test]
    fn test_narrow_wall_clamps_leg_count() {
        let store = store();
        store
            .set_led(LedPatch {
                width_mm: Some(1200.0),
                ..Default::default()
            })
            .unwrap();
        let project = store.snapshot();
        assert_eq!(project.computed.max_legs, 2);
        assert_eq!(project.structure.legs.unwrap().count, 2);
        // The positions come from a recompute after the clamp.
        assert_eq!(project.computed.leg_positions_mm.len(), 2);
    }

    #[test]
    fn test_set_structure_switches_truss() {
        let store = store();
        store
            .set_structure(StructurePatch {
                truss_model: Some("FX30".to_string()),
                ..Default::default()
            })
            .unwrap();
        let project = store.snapshot();
        assert_eq!(project.structure.truss_section_mm, 220.0);
        assert_eq!(project.structure.truss_section_depth_mm, 30.0);
    }

    #[test]
    fn test_set_structure_rejects_unknown_truss() {
        let store = store();
        let before = store.snapshot();
        let err = store
            .set_structure(StructurePatch {
                truss_model: Some("XX99".to_string()),
                mount_type: Some(MountType::Flying),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_catalog_error());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_legs_without_legs_is_a_noop() {
        let store = store();
        let mut project = store.snapshot();
        project.structure.legs = None;
        project.recompute().unwrap();
        store.load(project);

        store
            .update_legs(LegsPatch {
                count: Some(6),
                ..Default::default()
            })
            .unwrap();
        assert!(store.snapshot().structure.legs.is_none());
    }

    #[test]
    fn test_update_tubes_switches_to_direct_mount() {
        let store = store();
        store
            .update_tubes(TubesPatch {
                count: Some(0),
                ..Default::default()
            })
            .unwrap();
        let project = store.snapshot();
        assert!(project.computed.tube_positions_mm.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = store();
        store
            .set_led(LedPatch {
                width_mm: Some(9000.0),
                ..Default::default()
            })
            .unwrap();
        store.reset().unwrap();
        let project = store.snapshot();
        assert_eq!(project.led.width_mm, 5000.0);
        assert_eq!(project.event.project_name, "Nuovo Progetto");
    }
}
