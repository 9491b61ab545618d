//! The chorus parameter model.
//!
//! Five integer parameters in host-facing ranges, and their DSP-native
//! resolution.
//!
//! ## Parameter Indices (`ParameterInfo`)
//!
//! | Index | ID | Key | Name | Range | Default | Resolves to |
//! |-------|-----|-----|------|-------|---------|-------------|
//! | 0 | 700 | `rate` | Rate | 1–99 Hz | 50 | Hz, unchanged |
//! | 1 | 701 | `depth` | Depth | 0–100% | 0 | 0.0–1.0 |
//! | 2 | 702 | `center_delay` | Center Delay | 1–99 ms | 50 | ms, unchanged |
//! | 3 | 703 | `feedback` | Feedback | 0–95% | 0 | 0.0–0.95 |
//! | 4 | 704 | `mix` | Mix | 0–100% | 0 | 0.0–1.0 |

use chorus_core::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo, RangeError, scale_range};
use libm::roundf;

/// Descriptors for every parameter, in index order.
pub const DESCRIPTORS: [ParamDescriptor; 5] = [
    ParamDescriptor::stepped("Rate", "Rate", ParamUnit::Hertz, 1.0, 99.0, 50.0)
        .with_id(ParamId(700), "rate"),
    ParamDescriptor::stepped("Depth", "Depth", ParamUnit::Percent, 0.0, 100.0, 0.0)
        .with_id(ParamId(701), "depth"),
    ParamDescriptor::stepped("Center Delay", "Delay", ParamUnit::Milliseconds, 1.0, 99.0, 50.0)
        .with_id(ParamId(702), "center_delay"),
    ParamDescriptor::stepped("Feedback", "Fdbk", ParamUnit::Percent, 0.0, 95.0, 0.0)
        .with_id(ParamId(703), "feedback"),
    ParamDescriptor::stepped("Mix", "Mix", ParamUnit::Percent, 0.0, 100.0, 0.0)
        .with_id(ParamId(704), "mix"),
];

/// Upper end of the resolved feedback coefficient.
pub const MAX_FEEDBACK: f32 = 0.95;

/// One of the five chorus parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChorusParam {
    /// LFO rate in Hz
    Rate,
    /// Modulation depth in percent
    Depth,
    /// Center delay in milliseconds
    CenterDelay,
    /// Feedback in percent
    Feedback,
    /// Wet/dry mix in percent
    Mix,
}

impl ChorusParam {
    /// All parameters in index order.
    pub const ALL: [ChorusParam; 5] = [
        ChorusParam::Rate,
        ChorusParam::Depth,
        ChorusParam::CenterDelay,
        ChorusParam::Feedback,
        ChorusParam::Mix,
    ];

    /// Parameter index.
    pub const fn index(self) -> usize {
        match self {
            ChorusParam::Rate => 0,
            ChorusParam::Depth => 1,
            ChorusParam::CenterDelay => 2,
            ChorusParam::Feedback => 3,
            ChorusParam::Mix => 4,
        }
    }

    /// Parameter at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parameter descriptor.
    pub const fn descriptor(self) -> ParamDescriptor {
        DESCRIPTORS[self.index()]
    }

    /// Stable string key used in preset and state files.
    pub const fn key(self) -> &'static str {
        self.descriptor().string_id
    }

    /// Looks a parameter up by key or display name (case-insensitive).
    ///
    /// Accepts `center delay` and `center-delay` as spellings of
    /// `center_delay`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|p| {
            let d = p.descriptor();
            d.string_id.eq_ignore_ascii_case(key)
                || d.name.eq_ignore_ascii_case(key)
                || d.string_id
                    .bytes()
                    .map(|b| if b == b'_' { b'-' } else { b })
                    .eq(key.bytes().map(|b| b.to_ascii_lowercase()))
        })
    }

    /// Clamps a raw value into this parameter's range.
    pub fn clamp_raw(self, raw: i32) -> i32 {
        let d = self.descriptor();
        raw.clamp(d.min as i32, d.max as i32)
    }

    /// Default raw value.
    pub fn default_raw(self) -> i32 {
        self.descriptor().default as i32
    }
}

/// Raw host-facing parameter values.
///
/// Values outside their ranges are clamped by [`set`](Self::set) and
/// [`ParameterInfo::set_param`]; direct field writes are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    /// LFO rate, 1–99 Hz
    pub rate: i32,
    /// Modulation depth, 0–100 %
    pub depth: i32,
    /// Center delay, 1–99 ms
    pub center_delay: i32,
    /// Feedback, 0–95 %
    pub feedback: i32,
    /// Wet/dry mix, 0–100 %
    pub mix: i32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            rate: ChorusParam::Rate.default_raw(),
            depth: ChorusParam::Depth.default_raw(),
            center_delay: ChorusParam::CenterDelay.default_raw(),
            feedback: ChorusParam::Feedback.default_raw(),
            mix: ChorusParam::Mix.default_raw(),
        }
    }
}

impl ParameterSet {
    /// Raw value of `param`.
    pub fn get(&self, param: ChorusParam) -> i32 {
        match param {
            ChorusParam::Rate => self.rate,
            ChorusParam::Depth => self.depth,
            ChorusParam::CenterDelay => self.center_delay,
            ChorusParam::Feedback => self.feedback,
            ChorusParam::Mix => self.mix,
        }
    }

    /// Sets `param`, clamped to its range.
    pub fn set(&mut self, param: ChorusParam, raw: i32) {
        let raw = param.clamp_raw(raw);
        match param {
            ChorusParam::Rate => self.rate = raw,
            ChorusParam::Depth => self.depth = raw,
            ChorusParam::CenterDelay => self.center_delay = raw,
            ChorusParam::Feedback => self.feedback = raw,
            ChorusParam::Mix => self.mix = raw,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, param: ChorusParam, raw: i32) -> Self {
        self.set(param, raw);
        self
    }

    /// Copy with every value clamped to its range.
    pub fn clamped(self) -> Self {
        ChorusParam::ALL
            .into_iter()
            .fold(self, |set, p| set.with(p, set.get(p)))
    }

    /// Returns `true` if every value lies within its range.
    pub fn is_in_range(&self) -> bool {
        ChorusParam::ALL
            .into_iter()
            .all(|p| p.descriptor().contains(self.get(p) as f32))
    }

    /// Maps raw values into the units the engine consumes.
    ///
    /// Depth, feedback and mix are rescaled from their percent ranges;
    /// rate and center delay pass through.
    pub fn resolve(&self) -> Result<ResolvedParams, RangeError> {
        Ok(ResolvedParams {
            rate_hz: self.rate as f32,
            depth: rescale(ChorusParam::Depth, self.depth, 1.0)?,
            center_delay_ms: self.center_delay as f32,
            feedback: rescale(ChorusParam::Feedback, self.feedback, MAX_FEEDBACK)?,
            mix: rescale(ChorusParam::Mix, self.mix, 1.0)?,
        })
    }
}

fn rescale(param: ChorusParam, raw: i32, out_high: f32) -> Result<f32, RangeError> {
    let d = param.descriptor();
    scale_range(raw as f32, d.min, d.max, 0.0, out_high)
}

impl ParameterInfo for ParameterSet {
    fn param_count(&self) -> usize {
        DESCRIPTORS.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        DESCRIPTORS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        ChorusParam::from_index(index).map_or(0.0, |p| self.get(p) as f32)
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if let Some(p) = ChorusParam::from_index(index) {
            let d = p.descriptor();
            self.set(p, d.quantize(value) as i32);
        }
    }
}

/// Parameter values in the units the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    /// LFO rate in Hz
    pub rate_hz: f32,
    /// Modulation depth, 0.0–1.0
    pub depth: f32,
    /// Center delay in milliseconds
    pub center_delay_ms: f32,
    /// Feedback coefficient, 0.0–0.95
    pub feedback: f32,
    /// Wet amount, 0.0–1.0
    pub mix: f32,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        Self {
            rate_hz: 50.0,
            depth: 0.0,
            center_delay_ms: 50.0,
            feedback: 0.0,
            mix: 0.0,
        }
    }
}

/// Rounds a host-normalized value (0.0–1.0) to a raw value of `param`.
pub fn raw_from_normalized(param: ChorusParam, normalized: f32) -> i32 {
    let d = param.descriptor();
    roundf(d.clamp(d.denormalize(normalized.clamp(0.0, 1.0)))) as i32
}
