//! Drawing package export
//!
//! Turns a project into a folder of deliverables: the four annotated
//! sheets as PNG, a copy of the document, and a standalone HTML viewer
//! that shows the sheets next to the technical data. Only ground stands
//! have a drawing package; a flown wall is rejected before anything is
//! derived or written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use standkit_catalog::{controller, truss};
use standkit_core::units::{format_kg, group_thousands};
use standkit_core::{DraftingError, ExportError, Result};
use standkit_drafting::{render_view, DataPanel, SheetMeta, ViewKind};
use standkit_engine::{
    compute, ClampType, ComputedValues, GeometryParams, MountType, StructureConfig,
};
use standkit_scene::assemble;

use crate::document::Project;

/// Everything a finished export left on disk.
#[derive(Debug, Clone)]
pub struct ExportArtifacts {
    /// The package folder, named after the project.
    pub dir: PathBuf,
    /// The four sheet PNGs, in view order.
    pub sheets: Vec<PathBuf>,
    /// The document copy.
    pub document: PathBuf,
    /// The HTML viewer.
    pub viewer: PathBuf,
}

/// Export the drawing package for `project` into a folder under `out_dir`.
///
/// The figures are rederived from the config sections so the sheets and
/// the document copy always agree, whatever `project.computed` held.
pub fn export_project(
    project: &Project,
    out_dir: &Path,
    base_plates: bool,
) -> Result<ExportArtifacts> {
    if project.structure.mount_type == MountType::Flying {
        return Err(ExportError::UnsupportedMount {
            mount: project.structure.mount_type.to_string(),
        }
        .into());
    }

    let computed = compute(&project.led, &project.structure)?;
    let sanitized = sanitize_name(&project.event.project_name);
    let dir = out_dir.join(&sanitized);
    fs::create_dir_all(&dir).map_err(|e| ExportError::OutputDir {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let geo = GeometryParams::derive(&project.led, &project.structure, &computed);
    let scene = assemble(&geo, base_plates);
    let meta = sheet_meta(project);
    let panel = build_panel(project, &computed);

    let mut sheets = Vec::with_capacity(ViewKind::ALL.len());
    for view in ViewKind::ALL {
        let image = render_view(view, &scene, &geo, &meta, &panel)?;
        let path = dir.join(format!("{}_{}.png", sanitized, view.file_tag()));
        image.save(&path).map_err(|e| DraftingError::Encode {
            reason: e.to_string(),
        })?;
        info!(sheet = %path.display(), "sheet written");
        sheets.push(path);
    }

    let mut doc = project.clone();
    doc.computed = computed;
    let document = dir.join(format!("{}_progetto.json", sanitized));
    doc.save_to_file(&document)?;

    let viewer = dir.join("viewer.html");
    fs::write(&viewer, viewer_html(&doc, &sanitized))?;

    info!(dir = %dir.display(), sheets = sheets.len(), "drawing package exported");
    Ok(ExportArtifacts {
        dir,
        sheets,
        document,
        viewer,
    })
}

/// Keep alphanumerics, underscores and hyphens; everything else becomes
/// an underscore. A blank name falls back to `Progetto`.
fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "Progetto".to_string()
    } else {
        sanitized
    }
}

/// Title block metadata for the sheets of `project`.
pub fn sheet_meta(project: &Project) -> SheetMeta {
    SheetMeta {
        project_name: project.event.project_name.clone(),
        client: project.event.client.clone(),
        date: project.event.month_year(),
        designer: project.event.designer.clone(),
        revision: project.event.revision,
    }
}

fn grouped_mm(value_mm: f64) -> String {
    group_thousands(value_mm.round() as i64)
}

fn truss_row(structure: &StructureConfig) -> String {
    match truss(&structure.truss_model) {
        Ok(spec) => {
            let mut row = format!(
                "{} ({}×{} mm)",
                spec.label, spec.section_mm, spec.section_depth_mm
            );
            if spec.family.is_flat() {
                row.push_str(&format!(
                    " + piastra {}×{} mm",
                    spec.base_plate.width_mm, spec.base_plate.depth_mm
                ));
            }
            row
        }
        Err(_) => format!(
            "{} ({}×{} mm)",
            structure.truss_model, structure.truss_section_mm, structure.truss_section_depth_mm
        ),
    }
}

/// The data panel drawn on every sheet. Rows with nothing to say are
/// omitted rather than filled with dashes.
pub fn build_panel(project: &Project, computed: &ComputedValues) -> DataPanel {
    let event = &project.event;
    let led = &project.led;
    let structure = &project.structure;

    let mut panel = DataPanel::default();

    let mut rows = Vec::new();
    if !event.client.is_empty() {
        rows.push(("Cliente".to_string(), event.client.clone()));
    }
    if !event.location.is_empty() {
        rows.push(("Location".to_string(), event.location.clone()));
    }
    rows.push(("Data".to_string(), event.month_year()));
    if !event.designer.is_empty() {
        rows.push(("Progettista".to_string(), event.designer.clone()));
    }
    rows.push(("Revisione".to_string(), event.revision.to_string()));
    let title = if event.project_name.is_empty() {
        "Progetto".to_string()
    } else {
        event.project_name.clone()
    };
    panel.push(title, rows);

    let mut rows = vec![
        (
            "Fisico".to_string(),
            format!("{} × {} mm", grouped_mm(led.width_mm), grouped_mm(led.height_mm)),
        ),
        (
            "Attivo".to_string(),
            format!(
                "{} × {} mm",
                grouped_mm(led.active_width_mm),
                grouped_mm(led.active_height_mm)
            ),
        ),
        ("Pitch".to_string(), format!("{} mm", led.tile_pitch_mm)),
        (
            "Cabinet".to_string(),
            format!(
                "{} × {} ({}×{} mm)",
                computed.cols, computed.rows, led.tile_width_mm, led.tile_height_mm
            ),
        ),
        (
            "Risoluzione".to_string(),
            format!(
                "{} × {} px",
                group_thousands(i64::from(computed.resolution_x_px)),
                group_thousands(i64::from(computed.resolution_y_px))
            ),
        ),
    ];
    if led.dead_rows > 0 {
        rows.push(("Fila morta".to_string(), "SPENTA (dead zone)".to_string()));
    }
    panel.push("LED WALL", rows);

    let mut rows = vec![
        (
            "H Totale".to_string(),
            format!("{} mm", grouped_mm(computed.total_height_mm)),
        ),
        (
            "Profondità".to_string(),
            format!("{} mm", grouped_mm(computed.total_depth_mm)),
        ),
    ];
    if structure.bottom_bar {
        rows.push((
            "Bottom bar".to_string(),
            format!("{} mm h", structure.bottom_bar_height_mm),
        ));
    }
    rows.push(("Truss".to_string(), truss_row(structure)));
    if let Some(legs) = structure.legs {
        rows.push((
            "Gambe".to_string(),
            format!(
                "{} × L ({} + {} mm)",
                legs.count,
                grouped_mm(legs.height_mm),
                grouped_mm(legs.arm_length_mm)
            ),
        ));
        if computed.leg_spacing_mm > 0.0 {
            rows.push((
                "Interasse".to_string(),
                format!("{} mm", grouped_mm(computed.leg_spacing_mm)),
            ));
        }
    }
    let tubes = &structure.horizontal_tubes;
    if tubes.count > 0 {
        let mut value = format!("{} × Ø{}", tubes.count, tubes.diameter_mm);
        if tubes.clamp_type == ClampType::Double {
            value.push_str(" + doppio aliscaff");
        }
        rows.push(("Tubi".to_string(), value));
    }
    panel.push("STRUTTURA", rows);

    let controller_label = match controller(&led.controller) {
        Ok(spec) => spec.label.to_string(),
        Err(_) => led.controller.clone(),
    };
    panel.push(
        "DATI TECNICI",
        vec![
            ("Centralina".to_string(), controller_label),
            ("Corrente".to_string(), computed.power_schema.schema.clone()),
            ("Rete".to_string(), computed.network_schema.schema.clone()),
            ("Peso LED".to_string(), format_kg(computed.led_weight_kg)),
            ("Carico tot.".to_string(), format_kg(computed.total_weight_kg)),
        ],
    );

    panel
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn viewer_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "      <span class=\"lbl\">{}: </span><span class=\"val\">{}</span><br>\n",
        label, value
    ));
}

fn viewer_sep(out: &mut String) {
    out.push_str("      <div class=\"sep\"></div>\n");
}

/// The technical data block of the viewer, one flat list with separators.
fn viewer_panel(project: &Project) -> String {
    let event = &project.event;
    let led = &project.led;
    let structure = &project.structure;
    let computed = &project.computed;

    let mut out = String::from("      <h2>▸ DATI TECNICI</h2>\n");
    viewer_row(&mut out, "Progetto", &escape_html(&event.project_name));
    viewer_sep(&mut out);

    viewer_row(
        &mut out,
        "Fisico",
        &format!("{} × {} mm", grouped_mm(led.width_mm), grouped_mm(led.height_mm)),
    );
    viewer_row(
        &mut out,
        "Attivo",
        &format!(
            "{} × {} mm",
            grouped_mm(led.active_width_mm),
            grouped_mm(led.active_height_mm)
        ),
    );
    viewer_row(&mut out, "Pitch", &format!("{} mm", led.tile_pitch_mm));
    viewer_row(
        &mut out,
        "Cabinet",
        &format!(
            "{} × {} ({}×{} mm)",
            computed.cols, computed.rows, led.tile_width_mm, led.tile_height_mm
        ),
    );
    let dead = if led.dead_rows > 0 {
        "SPENTA (dead zone)"
    } else {
        "—"
    };
    viewer_row(&mut out, "Fila bassa", dead);
    viewer_row(
        &mut out,
        "Risoluzione",
        &format!(
            "{} × {} px",
            group_thousands(i64::from(computed.resolution_x_px)),
            group_thousands(i64::from(computed.resolution_y_px))
        ),
    );
    viewer_sep(&mut out);

    let bar = if structure.bottom_bar {
        format!("{} mm h", structure.bottom_bar_height_mm)
    } else {
        "—".to_string()
    };
    viewer_row(&mut out, "Bottom bar", &bar);
    viewer_row(
        &mut out,
        "H totale",
        &format!("{} mm", grouped_mm(computed.total_height_mm)),
    );
    viewer_row(&mut out, "Truss", &truss_row(structure));
    let legs = match structure.legs {
        Some(legs) => format!(
            "{} × L ({} + {} mm)",
            legs.count,
            grouped_mm(legs.height_mm),
            grouped_mm(legs.arm_length_mm)
        ),
        None => "—".to_string(),
    };
    viewer_row(&mut out, "Gambe", &legs);
    let spacing = if structure.legs.is_some() && computed.leg_spacing_mm > 0.0 {
        format!("{} mm", grouped_mm(computed.leg_spacing_mm))
    } else {
        "—".to_string()
    };
    viewer_row(&mut out, "Interasse gambe", &spacing);
    let tubes = &structure.horizontal_tubes;
    let tube_value = if tubes.count > 0 {
        let mut value = format!("{} × Ø{}", tubes.count, tubes.diameter_mm);
        if tubes.clamp_type == ClampType::Double {
            value.push_str(" + doppio aliscaff");
        }
        value
    } else {
        "—".to_string()
    };
    viewer_row(&mut out, "Tubi", &tube_value);
    viewer_sep(&mut out);

    let controller_label = match controller(&led.controller) {
        Ok(spec) => spec.label.to_string(),
        Err(_) => led.controller.clone(),
    };
    viewer_row(&mut out, "Centralina", &controller_label);
    viewer_row(&mut out, "Corrente", &computed.power_schema.schema);
    viewer_row(&mut out, "Rete", &computed.network_schema.schema);
    viewer_row(&mut out, "Peso LED", &format_kg(computed.led_weight_kg));
    viewer_row(
        &mut out,
        "Carico totale",
        &format_kg(computed.total_weight_kg),
    );
    out
}

/// A standalone gallery page: the four sheets plus the technical data,
/// with no external assets so it opens from any folder.
fn viewer_html(project: &Project, sanitized: &str) -> String {
    let led = &project.led;
    let title = format!(
        "{} {}×{}m",
        escape_html(&project.event.project_name),
        led.width_mm / 1000.0,
        led.height_mm / 1000.0
    );
    let sub = [
        escape_html(&project.event.client),
        escape_html(&project.event.location),
        project.event.month_year(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .cloned()
    .collect::<Vec<_>>()
    .join(" · ");

    let mut figures = String::new();
    for view in ViewKind::ALL {
        figures.push_str(&format!(
            "    <figure><img src=\"{0}_{1}.png\" alt=\"{2}\" loading=\"lazy\"><figcaption>{2}</figcaption></figure>\n",
            sanitized,
            view.file_tag(),
            view.label()
        ));
    }

    let panel = viewer_panel(project);

    format!(
        r#"<!DOCTYPE html>
<html lang="it">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LEDWALL {title} — Stand Tecnico Standkit</title>
<style>
  body {{ margin: 0; background: #10141a; color: #e8eaed; font-family: 'Segoe UI', Arial, sans-serif; }}
  header {{ padding: 24px 32px; background: #1a2332; border-bottom: 3px solid #0066cc; }}
  header h1 {{ margin: 0; font-size: 24px; }}
  header p {{ margin: 6px 0 0; color: #8a93a0; }}
  main {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 20px; padding: 24px 32px; }}
  figure {{ margin: 0; background: #1a2332; border-radius: 8px; padding: 10px; }}
  figure img {{ width: 100%; display: block; border-radius: 4px; }}
  figcaption {{ padding: 8px 4px 2px; font-size: 13px; letter-spacing: 1px; color: #88ccff; }}
  #panel-left {{ margin: 0 32px 32px; padding: 18px 24px; background: #1a2332; border-radius: 8px; max-width: 640px; font-size: 14px; line-height: 1.7; }}
  #panel-left h2 {{ margin: 0 0 10px; font-size: 14px; letter-spacing: 2px; color: #88ccff; }}
  .lbl {{ color: #8a93a0; }}
  .val {{ color: #e8eaed; font-weight: 600; }}
  .sep {{ border-top: 1px solid #2a3442; margin: 8px 0; }}
  footer {{ padding: 16px 32px; color: #5a6472; font-size: 12px; }}
</style>
</head>
<body>
<header>
  <h1>LEDWALL {title}</h1>
  <p>{sub}</p>
</header>
<main>
{figures}</main>
<div id="panel-left">
{panel}</div>
<footer>Generato da Standkit · rev. {revision}</footer>
</body>
</html>
"#,
        title = title,
        sub = sub,
        figures = figures,
        panel = panel,
        revision = project.event.revision,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Fiera Milano 2025!"), "Fiera_Milano_2025_");
        assert_eq!(sanitize_name("demo-wall_01"), "demo-wall_01");
        assert_eq!(sanitize_name(""), "Progetto");
    }

    #[test]
    fn test_panel_rows_for_default_project() {
        let project = Project::new().unwrap();
        let panel = build_panel(&project, &project.computed);

        assert_eq!(panel.sections.len(), 4);
        assert_eq!(panel.sections[0].title, "Nuovo Progetto");
        // Client and location are empty, so the header holds date,
        // designer and revision only.
        assert_eq!(panel.sections[0].rows.len(), 3);

        let led = &panel.sections[1];
        assert_eq!(led.title, "LED WALL");
        assert_eq!(led.rows[0], ("Fisico".to_string(), "5.000 × 2.000 mm".to_string()));
        assert_eq!(led.rows[2], ("Pitch".to_string(), "2.6 mm".to_string()));
        assert_eq!(
            led.rows[3],
            ("Cabinet".to_string(), "10 × 4 (500×500 mm)".to_string())
        );
        assert_eq!(
            led.rows.last().cloned(),
            Some(("Fila morta".to_string(), "SPENTA (dead zone)".to_string()))
        );

        let structure = &panel.sections[2];
        assert_eq!(structure.title, "STRUTTURA");
        let gambe = structure
            .rows
            .iter()
            .find(|(label, _)| label == "Gambe")
            .cloned();
        assert_eq!(gambe, Some(("Gambe".to_string(), "4 × L (2.000 + 420 mm)".to_string())));
        let tubi = structure
            .rows
            .iter()
            .find(|(label, _)| label == "Tubi")
            .cloned();
        assert_eq!(
            tubi,
            Some(("Tubi".to_string(), "3 × Ø50 + doppio aliscaff".to_string()))
        );

        let tech = &panel.sections[3];
        assert_eq!(tech.title, "DATI TECNICI");
        assert_eq!(tech.rows[0].1, "NovaStar VX1000");
    }

    #[test]
    fn test_flat_truss_panel_mentions_the_plate() {
        let mut project = Project::new().unwrap();
        let spec = truss("FX30").unwrap();
        project.structure.apply_truss(spec);
        project.recompute().unwrap();

        let panel = build_panel(&project, &project.computed);
        let row = panel.sections[2]
            .rows
            .iter()
            .find(|(label, _)| label == "Truss")
            .cloned()
            .unwrap();
        assert!(row.1.contains("+ piastra"), "row was {:?}", row.1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Fiera "A&B" <live>"#),
            "Fiera &quot;A&amp;B&quot; &lt;live&gt;"
        );
    }

    #[test]
    fn test_viewer_html_names_the_sheets() {
        let project = Project::new().unwrap();
        let html = viewer_html(&project, "Nuovo_Progetto");
        assert!(html.contains("<title>LEDWALL Nuovo Progetto 5×2m — Stand Tecnico Standkit</title>"));
        for tag in ["FRONTALE", "POSTERIORE", "LATERALE", "PIANTA"] {
            assert!(html.contains(&format!("Nuovo_Progetto_{}.png", tag)));
        }
        assert!(html.contains("doppio aliscaff"));
    }
}
