use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use standkit::{
    all_controllers, all_pitches, all_trusses, assemble, build_panel, export_project,
    init_logging, render_view, sheet_meta, units::group_thousands, AppSettings, GeometryParams,
    Project, ViewKind,
};

#[derive(Parser)]
#[command(name = "standkit", version, about = "LED wall stand configurator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new project file with default sections
    Init {
        /// Project file to create
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Project name
        #[arg(short, long, default_value = "Nuovo Progetto")]
        name: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a project file and report the wall it describes
    Validate {
        /// Project file to check
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Print the figures derived from a project
    Compute {
        /// Project file to read
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render one sheet of a project to a PNG
    Render {
        /// Project file to read
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// View to draw: front, rear, side or plan
        #[arg(short, long, default_value = "front")]
        view: String,

        /// Output file (defaults to <view>.png)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave the ballast base plates out
        #[arg(long)]
        no_base_plates: bool,
    },

    /// Export the full drawing package of a project
    Export {
        /// Project file to read
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output directory (defaults to the configured export directory)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Leave the ballast base plates out
        #[arg(long)]
        no_base_plates: bool,
    },

    /// List the truss, controller and pitch catalogs
    Catalog,
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Init { path, name, force } => init(path, name, force),
        Command::Validate { path } => validate(path),
        Command::Compute { path, json } => compute(path, json),
        Command::Render {
            path,
            view,
            output,
            no_base_plates,
        } => render(path, &view, output, no_base_plates),
        Command::Export {
            path,
            out_dir,
            no_base_plates,
        } => export(path, out_dir, no_base_plates),
        Command::Catalog => {
            catalog();
            Ok(())
        }
    }
}

fn init(path: PathBuf, name: String, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let settings = AppSettings::load_or_default()?;
    let mut project = settings.new_project()?;
    project.event.project_name = name;
    project.save_to_file(&path)?;

    println!("Created {}", path.display());
    Ok(())
}

fn validate(path: PathBuf) -> Result<()> {
    let project = Project::load_from_file(&path)?;
    println!(
        "OK: {} ({} × {} mm, {} cabinets, {} legs)",
        project.event.project_name,
        group_thousands(project.led.width_mm.round() as i64),
        group_thousands(project.led.height_mm.round() as i64),
        project.computed.total_tiles,
        project
            .structure
            .legs
            .map(|legs| legs.count)
            .unwrap_or_default(),
    );
    Ok(())
}

fn compute(path: PathBuf, json: bool) -> Result<()> {
    let project = Project::load_from_file(&path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&project.computed)?);
        return Ok(());
    }

    let panel = build_panel(&project, &project.computed);
    for section in &panel.sections {
        println!("{}", section.title);
        for (label, value) in &section.rows {
            println!("  {:<12} {}", label, value);
        }
        println!();
    }
    Ok(())
}

fn render(path: PathBuf, view: &str, output: Option<PathBuf>, no_base_plates: bool) -> Result<()> {
    let project = Project::load_from_file(&path)?;
    let view: ViewKind = view.parse()?;

    let geo = GeometryParams::derive(&project.led, &project.structure, &project.computed);
    let scene = assemble(&geo, !no_base_plates);
    let panel = build_panel(&project, &project.computed);
    let meta = sheet_meta(&project);

    let image = render_view(view, &scene, &geo, &meta, &panel)?;
    let output =
        output.unwrap_or_else(|| PathBuf::from(format!("{}.png", view.file_tag().to_lowercase())));
    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}

fn export(path: PathBuf, out_dir: Option<PathBuf>, no_base_plates: bool) -> Result<()> {
    let mut settings = AppSettings::load_or_default()?;
    let project = Project::load_from_file(&path)?;

    let out_dir = out_dir.unwrap_or_else(|| settings.export.output_dir.clone());
    let base_plates = if no_base_plates {
        false
    } else {
        settings.export.base_plates
    };

    let artifacts = export_project(&project, &out_dir, base_plates)?;
    println!(
        "Exported {} sheets to {}",
        artifacts.sheets.len(),
        artifacts.dir.display()
    );

    settings.add_recent_project(path);
    if let Err(err) = settings.save_to_file(&AppSettings::default_path()) {
        warn!(%err, "could not update the recent project list");
    }
    Ok(())
}

fn catalog() {
    println!("Trusses");
    for spec in all_trusses() {
        println!(
            "  {:<6} {} ({}×{} mm, {} kg/m)",
            spec.id, spec.label, spec.section_mm, spec.section_depth_mm, spec.weight_kg_per_m
        );
    }
    println!();

    println!("Controllers");
    for spec in all_controllers() {
        println!(
            "  {:<8} {} ({} px, {} porte)",
            spec.id,
            spec.label,
            group_thousands(spec.max_pixels as i64),
            spec.ethernet_ports
        );
    }
    println!();

    println!("Pitches");
    for entry in all_pitches() {
        println!(
            "  P{:<4} {} px per modulo da 500 mm",
            entry.pitch_mm, entry.pixels_per_500mm
        );
    }
}
