//! Preset file format and operations.

use chorus_effect::ParameterSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::params::ParamValues;
use crate::validation::validate_params;

/// A named set of chorus parameter values.
///
/// Presets are stored as TOML files. Parameters left out of the file take
/// their defaults; unknown keys are rejected when loading.
///
/// # TOML Format
///
/// ```toml
/// name = "Lush"
/// description = "Wide, deep ensemble chorus"
///
/// [params]
/// rate = 1
/// depth = 70
/// center_delay = 25
/// feedback = 20
/// mix = 50
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChorusPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter values.
    #[serde(default)]
    pub params: ParamValues,
}

impl ChorusPreset {
    /// Create a preset with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: ParamValues::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the parameter values.
    pub fn with_params(mut self, params: impl Into<ParamValues>) -> Self {
        self.params = params.into();
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validated parameter values.
    ///
    /// Unlike a restored state blob, a preset with out-of-range values is
    /// an error rather than being clamped.
    pub fn parameter_set(&self) -> Result<ParameterSet, ConfigError> {
        Ok(validate_params(&self.params)?)
    }
}

/// Find a preset by factory name or by path to a TOML file.
///
/// Factory names are matched case-insensitively and take precedence over
/// files of the same name.
pub fn find_preset(name: &str) -> Result<ChorusPreset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.is_file() {
        return ChorusPreset::load(path);
    }

    Err(ConfigError::PresetNotFound(name.to_string()))
}

impl Default for ChorusPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
