//! Serializable form of the five parameter values.

use chorus_effect::{ChorusParam, ParameterSet};
use serde::{Deserialize, Serialize};

/// Raw parameter values as stored in preset and state files.
///
/// Missing keys take their defaults and unknown keys are rejected. The key
/// `center_delay` also accepts the spellings `center delay` and
/// `center-delay`.
///
/// ```toml
/// rate = 2
/// depth = 60
/// center_delay = 20
/// feedback = 30
/// mix = 50
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamValues {
    /// LFO rate, 1–99 Hz
    #[serde(default = "default_rate")]
    pub rate: i32,

    /// Modulation depth, 0–100 %
    #[serde(default = "default_depth")]
    pub depth: i32,

    /// Center delay, 1–99 ms
    #[serde(
        default = "default_center_delay",
        alias = "center delay",
        alias = "center-delay"
    )]
    pub center_delay: i32,

    /// Feedback, 0–95 %
    #[serde(default = "default_feedback")]
    pub feedback: i32,

    /// Wet/dry mix, 0–100 %
    #[serde(default = "default_mix")]
    pub mix: i32,
}

fn default_rate() -> i32 {
    ChorusParam::Rate.default_raw()
}

fn default_depth() -> i32 {
    ChorusParam::Depth.default_raw()
}

fn default_center_delay() -> i32 {
    ChorusParam::CenterDelay.default_raw()
}

fn default_feedback() -> i32 {
    ChorusParam::Feedback.default_raw()
}

fn default_mix() -> i32 {
    ChorusParam::Mix.default_raw()
}

impl Default for ParamValues {
    fn default() -> Self {
        ParameterSet::default().into()
    }
}

impl ParamValues {
    /// Copies the values without checking ranges.
    pub fn to_parameter_set(&self) -> ParameterSet {
        ParameterSet {
            rate: self.rate,
            depth: self.depth,
            center_delay: self.center_delay,
            feedback: self.feedback,
            mix: self.mix,
        }
    }
}

impl From<ParameterSet> for ParamValues {
    fn from(set: ParameterSet) -> Self {
        Self {
            rate: set.rate,
            depth: set.depth,
            center_delay: set.center_delay,
            feedback: set.feedback,
            mix: set.mix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let values: ParamValues = toml::from_str("mix = 40").unwrap();
        assert_eq!(values.mix, 40);
        assert_eq!(values.rate, 50);
        assert_eq!(values.center_delay, 50);
        assert_eq!(values.depth, 0);
    }

    #[test]
    fn center_delay_aliases() {
        let spaced: ParamValues = toml::from_str("\"center delay\" = 12").unwrap();
        let dashed: ParamValues = toml::from_str("center-delay = 13").unwrap();
        assert_eq!(spaced.center_delay, 12);
        assert_eq!(dashed.center_delay, 13);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(toml::from_str::<ParamValues>("speed = 3").is_err());
    }

    #[test]
    fn converts_to_parameter_set() {
        let values = ParamValues {
            rate: 3,
            depth: 4,
            center_delay: 5,
            feedback: 6,
            mix: 7,
        };
        let set = values.to_parameter_set();
        assert_eq!(ParamValues::from(set), values);
    }
}
