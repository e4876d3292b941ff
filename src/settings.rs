//! Runtime settings
//!
//! Balance constants live in `crate::consts`; these are the knobs a host may
//! want to change per device or per run.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen density; speeds and HUD offsets are multiplied by it
    pub density: f32,
    /// Seed for the spawner RNG
    pub seed: u64,

    // === HUD ===
    /// Font size for the score and bomb counter
    pub font_size: f32,
    /// Font size inside the score dialog
    pub dialog_font_size: f32,
    /// Stroke width of the dialog border
    pub border_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            density: 1.0,
            seed: 0x5eed_cafe,
            font_size: 12.0,
            dialog_font_size: 20.0,
            border_size: 2.0,
        }
    }
}

impl Settings {
    /// Environment variable naming a JSON settings file
    const SETTINGS_ENV: &'static str = "SPACE_PATROL_SETTINGS";

    /// Font size scaled by density
    pub fn scaled_font_size(&self) -> f32 {
        self.font_size * self.density
    }

    /// Dialog font size scaled by density
    pub fn scaled_dialog_font_size(&self) -> f32 {
        self.dialog_font_size * self.density
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| GameError::Settings(e.to_string()))?;
        if !(settings.density > 0.0) {
            return Err(GameError::Settings(format!(
                "density must be positive, got {}",
                settings.density
            )));
        }
        Ok(settings)
    }

    /// Load settings from the file named by `SPACE_PATROL_SETTINGS`, or defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| GameError::Settings(format!("{path}: {e}")))
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
