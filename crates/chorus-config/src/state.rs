//! Versioned state blob for host save/restore.
//!
//! The five raw parameter values are the only persisted state. They are
//! encoded as JSON:
//!
//! ```json
//! {"version":1,"params":{"rate":50,"depth":0,"center_delay":50,"feedback":0,"mix":0}}
//! ```
//!
//! Restoring is lenient where hosts expect it: missing keys take their
//! defaults and out-of-range values are clamped. A blob that does not parse
//! or carries another version is rejected and nothing is applied.

use chorus_effect::{ChorusParam, ParameterSet, ParameterStore};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::ParamValues;

/// Version written by [`save_state`] and accepted by [`load_state`].
pub const STATE_VERSION: u32 = 1;

/// On-disk shape of the state blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBlob {
    /// Format version.
    pub version: u32,
    /// Raw parameter values.
    #[serde(default)]
    pub params: ParamValues,
}

/// Encode `params` as a state blob.
pub fn save_state(params: &ParameterSet) -> Result<Vec<u8>, ConfigError> {
    let blob = StateBlob {
        version: STATE_VERSION,
        params: (*params).into(),
    };
    Ok(serde_json::to_vec(&blob)?)
}

/// Encode the current contents of `store` as a state blob.
pub fn save_store_state(store: &ParameterStore) -> Result<Vec<u8>, ConfigError> {
    save_state(&store.snapshot())
}

/// Decode a state blob into a clamped parameter set.
pub fn load_state(bytes: &[u8]) -> Result<ParameterSet, ConfigError> {
    let blob: StateBlob = serde_json::from_slice(bytes)?;
    if blob.version != STATE_VERSION {
        return Err(ConfigError::UnsupportedStateVersion {
            found: blob.version,
            expected: STATE_VERSION,
        });
    }

    let raw = blob.params.to_parameter_set();
    for param in ChorusParam::ALL {
        let value = raw.get(param);
        let clamped = param.clamp_raw(value);
        if clamped != value {
            tracing::warn!(
                param = param.key(),
                value,
                clamped,
                "state value out of range, clamping"
            );
        }
    }
    Ok(raw.clamped())
}

/// Decode a state blob and publish it to `store`.
///
/// On error the store is left untouched.
pub fn restore_into(store: &ParameterStore, bytes: &[u8]) -> Result<ParameterSet, ConfigError> {
    let set = load_state(bytes)?;
    store.store_set(&set);
    tracing::debug!(?set, "restored parameter state");
    Ok(set)
}
