//! Persisted calculator inputs.
//!
//! Stored at: ~/.config/dumbbell-rs/settings.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    calc_error::CalcError,
    mode::Mode,
    plate::Plate,
    rack::{DEFAULT_HANDLE_WEIGHT, DEFAULT_MAX_PLATES, Rack},
    unit::Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "dumbbell-plates", default)]
    pub plates: Vec<Plate>,

    #[serde(rename = "dumbbell-handle-weight", default = "default_handle_weight")]
    pub handle_weight: f64,

    /// `null` means no cap.
    #[serde(rename = "dumbbell-max-plates", default = "default_max_plates")]
    pub max_plates: Option<u32>,

    #[serde(rename = "dumbbell-unit-system", default)]
    pub unit: Unit,

    #[serde(rename = "dumbbell-calculation-mode", default)]
    pub mode: Mode,
}

fn default_handle_weight() -> f64 {
    DEFAULT_HANDLE_WEIGHT
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_plates() -> Option<u32> {
    Some(DEFAULT_MAX_PLATES)
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(&Rack::default())
    }
}

impl Settings {
    ///
    /// # Errors
    /// If the platform has no configuration directory.
    ///
    pub fn default_path() -> Result<PathBuf, CalcError> {
        Ok(dirs::config_dir()
            .ok_or(CalcError::ConfigDirNotFound)?
            .join("dumbbell-rs")
            .join("settings.json"))
    }

    /// Loads settings from `path`, or defaults when the file does not exist.
    ///
    /// # Errors
    /// If the file cannot be read or is not valid JSON.
    ///
    pub fn load(path: &Path) -> Result<Self, CalcError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    ///
    /// # Errors
    /// If the directory or file cannot be written.
    ///
    pub fn save(&self, path: &Path) -> Result<(), CalcError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Rebuilds a rack, validating every stored value on the way in.
    ///
    /// # Errors
    /// If any stored value is out of range.
    ///
    pub fn to_rack(&self) -> Result<Rack, CalcError> {
        let mut rack = Rack::new(self.handle_weight)?.with_unit(self.unit);
        rack.set_max_plates(self.max_plates.map(i64::from))?;
        rack.set_mode(self.mode);
        for plate in &self.plates {
            rack.add_plate(plate.weight(), i64::from(plate.count()))?;
        }
        Ok(rack)
    }
}

impl From<&Rack> for Settings {
    fn from(rack: &Rack) -> Self {
        Settings {
            plates: rack.plates().to_vec(),
            handle_weight: rack.handle_weight(),
            max_plates: rack.max_plates(),
            unit: rack.unit(),
            mode: rack.mode(),
        }
    }
}
