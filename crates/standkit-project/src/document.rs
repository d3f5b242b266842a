//! Project document model
//!
//! A project file is a JSON document with four sections: event metadata,
//! the LED wall, the structure, and the derived figures. Documents are
//! validated against a small set of required fields before they are
//! deserialized, missing fields are filled from defaults, and the derived
//! figures are always recomputed after a load so stale numbers never
//! survive a round trip.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use standkit_engine::{compute, ComputedValues, LedConfig, MountType, StructureConfig};

use standkit_core::{ProjectError, Result};

/// Version tag written into every saved document.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Event metadata attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    /// Project name, also used to name exported files.
    pub project_name: String,
    /// Client the stand is built for.
    pub client: String,
    /// Venue or city.
    pub location: String,
    /// Event date, ISO `YYYY-MM-DD`.
    pub event_date: String,
    /// Load-in date, ISO `YYYY-MM-DD`.
    pub setup_date: String,
    /// Load-out date, ISO `YYYY-MM-DD`.
    pub teardown_date: String,
    /// Free-form production notes.
    pub notes: String,
    /// Who drew the stand.
    pub designer: String,
    /// Drawing revision, bumped by hand.
    pub revision: u32,
}

impl Default for EventInfo {
    fn default() -> Self {
        EventInfo {
            project_name: "Nuovo Progetto".to_string(),
            client: String::new(),
            location: String::new(),
            event_date: today(),
            setup_date: today(),
            teardown_date: today(),
            notes: String::new(),
            designer: "Andrea".to_string(),
            revision: 1,
        }
    }
}

impl EventInfo {
    /// The event date as `MM/YYYY` for title blocks. Falls back to the raw
    /// string when the date is not ISO formatted.
    pub fn month_year(&self) -> String {
        NaiveDate::parse_from_str(&self.event_date, "%Y-%m-%d")
            .map(|date| date.format("%m/%Y").to_string())
            .unwrap_or_else(|_| self.event_date.clone())
    }
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

/// A complete project document.
///
/// `computed` is carried in the file for human inspection but is never
/// trusted on load; [`Project::load_from_file`] rederives it from the two
/// config sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// File format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// When the document was first created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the document was last edited or recomputed.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    /// Event metadata.
    #[serde(default)]
    pub event: EventInfo,
    /// The LED wall.
    #[serde(default)]
    pub led: LedConfig,
    /// The supporting structure.
    #[serde(default)]
    pub structure: StructureConfig,
    /// Figures derived from `led` and `structure`.
    #[serde(default)]
    pub computed: ComputedValues,
}

impl Project {
    /// A fresh document with default sections and its figures derived.
    pub fn new() -> Result<Self> {
        let led = LedConfig::default();
        let structure = StructureConfig::default();
        let computed = compute(&led, &structure)?;
        let now = Utc::now();
        Ok(Project {
            version: FILE_FORMAT_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            event: EventInfo::default(),
            led,
            structure,
            computed,
        })
    }

    /// Rederive `computed` from the config sections.
    ///
    /// `updated_at` is left alone; only user edits move it.
    pub fn recompute(&mut self) -> Result<()> {
        self.computed = compute(&self.led, &self.structure)?;
        Ok(())
    }

    /// Record a user edit.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Check the raw JSON of a document before deserializing it.
    ///
    /// Only three fields are required of a file: a non-blank project name,
    /// finite positive wall dimensions and a known mount type. Everything
    /// else is filled from defaults.
    pub fn validate(value: &Value) -> std::result::Result<(), ProjectError> {
        let name = value.pointer("/event/project_name").and_then(Value::as_str);
        match name {
            Some(s) if !s.trim().is_empty() => {}
            _ => return Err(ProjectError::MissingName),
        }

        for field in ["width_mm", "height_mm"] {
            let raw = value
                .pointer(&format!("/led/{}", field))
                .and_then(Value::as_f64);
            match raw {
                Some(v) if v.is_finite() && v > 0.0 => {}
                _ => {
                    return Err(ProjectError::InvalidDimension {
                        field: format!("led.{}", field),
                        value: raw.unwrap_or(f64::NAN),
                    })
                }
            }
        }

        let Some(mount) = value.pointer("/structure/mount_type") else {
            return Err(ProjectError::UnknownMountType {
                mount: "(none)".to_string(),
            });
        };
        let Some(mount) = mount.as_str() else {
            return Err(ProjectError::UnknownMountType {
                mount: mount.to_string(),
            });
        };
        mount.parse::<MountType>()?;

        Ok(())
    }

    /// Load a document from `path`.
    ///
    /// The file is validated as raw JSON first, then deserialized with
    /// missing fields filled from defaults, and finally recomputed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| ProjectError::Parse {
                reason: e.to_string(),
            })?;
        Self::validate(&value)?;
        let mut project: Project =
            serde_json::from_value(value).map_err(|e| ProjectError::Parse {
                reason: e.to_string(),
            })?;
        project.recompute()?;
        debug!(path = %path.display(), name = %project.event.project_name, "project loaded");
        Ok(project)
    }

    /// Save the document to `path` as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ProjectError::Serialize {
            reason: e.to_string(),
        })?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "project saved");
        Ok(())
    }
}
