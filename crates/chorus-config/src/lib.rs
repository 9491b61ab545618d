//! Presets, state persistence and validation for the chorus.
//!
//! # Features
//!
//! - **State blob**: versioned JSON encoding of the five parameter values,
//!   restored with host semantics (defaults for missing keys, clamping)
//! - **Presets**: named parameter sets stored as TOML
//! - **Validation**: strict range checks for preset files
//! - **Factory presets**: built-in starting points
//!
//! # Example
//!
//! ```rust
//! use chorus_config::{get_factory_preset, load_state, save_state};
//!
//! let preset = get_factory_preset("lush").unwrap();
//! let params = preset.parameter_set().unwrap();
//!
//! let blob = save_state(&params).unwrap();
//! assert_eq!(load_state(&blob).unwrap(), params);
//! ```

mod error;
mod params;
mod preset;

/// Parameter validation.
pub mod validation;

/// Versioned state blob.
pub mod state;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use params::ParamValues;
pub use preset::{ChorusPreset, find_preset};
pub use state::{STATE_VERSION, StateBlob, load_state, restore_into, save_state, save_store_state};
pub use validation::{ValidationError, ValidationResult, validate_param, validate_params};
