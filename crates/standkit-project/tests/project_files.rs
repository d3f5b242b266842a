//! Project documents round-tripping through disk.

use std::fs;

use standkit_core::Error;
use standkit_project::{Project, FILE_FORMAT_VERSION};

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wall.json");

    let mut project = Project::new().unwrap();
    project.event.project_name = "Teatro Regio".to_string();
    project.led.width_mm = 4000.0;
    project.led.active_width_mm = 4000.0;
    project.recompute().unwrap();
    project.save_to_file(&path).unwrap();

    let back = Project::load_from_file(&path).unwrap();
    assert_eq!(back.event.project_name, "Teatro Regio");
    assert_eq!(back.led.width_mm, 4000.0);
    assert_eq!(back.version, FILE_FORMAT_VERSION);
    assert_eq!(back.computed, project.computed);
    assert_eq!(back.created_at, project.created_at);
}

#[test]
fn test_load_recomputes_stale_figures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stale.json");

    // A document whose computed section disagrees with its config, as
    // left behind by a hand edit or an older build.
    let doc = serde_json::json!({
        "event": { "project_name": "Stale" },
        "led": { "width_mm": 5000.0, "height_mm": 2000.0 },
        "structure": { "mount_type": "ground" },
        "computed": { "cols": 99, "total_weight_kg": 1.0 }
    });
    fs::write(&path, doc.to_string()).unwrap();

    let project = Project::load_from_file(&path).unwrap();
    assert_eq!(project.computed.cols, 10);
    assert!(project.computed.total_weight_kg > 100.0);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal.json");

    let doc = serde_json::json!({
        "event": { "project_name": "Minimal" },
        "led": {
            "width_mm": 3000.0,
            "height_mm": 2000.0,
            "active_width_mm": 3000.0,
            "active_height_mm": 1500.0
        },
        "structure": { "mount_type": "ground" }
    });
    fs::write(&path, doc.to_string()).unwrap();

    let project = Project::load_from_file(&path).unwrap();
    assert_eq!(project.led.controller, "vx1000");
    assert_eq!(project.structure.truss_model, "QX30");
    assert_eq!(project.event.designer, "Andrea");
    assert_eq!(project.computed.cols, 6);
    assert_eq!(project.computed.rows, 4);
}

#[test]
fn test_load_rejects_invalid_documents() {
    let dir = tempfile::tempdir().unwrap();

    let cases = [
        serde_json::json!({
            "led": { "width_mm": 5000.0, "height_mm": 2000.0 },
            "structure": { "mount_type": "ground" }
        }),
        serde_json::json!({
            "event": { "project_name": "Bad" },
            "led": { "width_mm": -5.0, "height_mm": 2000.0 },
            "structure": { "mount_type": "ground" }
        }),
        serde_json::json!({
            "event": { "project_name": "Bad" },
            "led": { "width_mm": 5000.0, "height_mm": 2000.0 },
            "structure": { "mount_type": "wall" }
        }),
    ];

    for (i, doc) in cases.iter().enumerate() {
        let path = dir.path().join(format!("bad{}.json", i));
        fs::write(&path, doc.to_string()).unwrap();
        let err = Project::load_from_file(&path).unwrap_err();
        assert!(err.is_validation_error(), "case {} gave {:?}", i, err);
    }
}

#[test]
fn test_load_rejects_non_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "not json at all").unwrap();

    let err = Project::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Project(standkit_core::ProjectError::Parse { .. })
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = Project::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
