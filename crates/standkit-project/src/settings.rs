//! Application settings
//!
//! Preferences that live outside any project document: where drawing
//! packages land, what a fresh document is seeded with, and the recent
//! project list. Stored as JSON or TOML in the platform config
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use standkit_catalog::{controller, truss};
use standkit_core::{Error, Result};

use crate::document::Project;

/// Recent projects kept in the list.
const MAX_RECENT: usize = 10;

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory drawing packages are written into.
    pub output_dir: PathBuf,
    /// Draw ballast base plates on the sheets.
    pub base_plates: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let output_dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        ExportSettings {
            output_dir,
            base_plates: true,
        }
    }
}

/// Catalog picks and metadata seeded into new documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    /// Default designer name.
    pub designer: String,
    /// Default truss model id.
    pub truss_model: String,
    /// Default controller id.
    pub controller: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        ProjectDefaults {
            designer: "Andrea".to_string(),
            truss_model: "QX30".to_string(),
            controller: "vx1000".to_string(),
        }
    }
}

/// Complete application settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Export preferences.
    pub export: ExportSettings,
    /// Defaults for new documents.
    pub defaults: ProjectDefaults,
    /// Recently opened project files, newest first.
    pub recent_projects: Vec<PathBuf>,
}

impl AppSettings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The platform settings file, `<config dir>/standkit/settings.toml`.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("standkit");
        std::fs::create_dir_all(&path).ok();
        path.push("settings.toml");
        path
    }

    /// Load settings from file (JSON or TOML).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON settings: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML settings: {}", e)))?
        } else {
            return Err(Error::other(
                "Settings file must be .json or .toml".to_string(),
            ));
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default path, falling back to defaults when
    /// the file does not exist yet.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize settings: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize settings: {}", e)))?
        } else {
            return Err(Error::other(
                "Settings file must be .json or .toml".to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Validate settings against the catalogs.
    pub fn validate(&self) -> Result<()> {
        if self.export.output_dir.as_os_str().is_empty() {
            return Err(Error::other("Export directory must not be empty".to_string()));
        }

        truss(&self.defaults.truss_model)?;
        controller(&self.defaults.controller)?;

        Ok(())
    }

    /// A fresh document seeded with the configured defaults.
    pub fn new_project(&self) -> Result<Project> {
        let mut project = Project::new()?;
        project.event.designer = self.defaults.designer.clone();
        let spec = truss(&self.defaults.truss_model)?;
        project.structure.apply_truss(spec);
        project.led.controller = self.defaults.controller.clone();
        project.recompute()?;
        Ok(project)
    }

    /// Move `path` to the front of the recent project list.
    pub fn add_recent_project(&mut self, path: PathBuf) {
        self.recent_projects.retain(|p| p != &path);
        self.recent_projects.insert(0, path);
        self.recent_projects.truncate(MAX_RECENT);
    }
}
