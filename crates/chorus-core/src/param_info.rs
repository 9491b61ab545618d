//! Parameter introspection for discoverable parameters.
//!
//! The [`ParameterInfo`] trait exposes a processor's parameters by index so
//! front ends (CLI listings, preset files, host state) can enumerate, read and
//! write them without knowing the concrete type. Each parameter is described
//! by a [`ParamDescriptor`] carrying its range, default, display unit and two
//! stable identifiers:
//!
//! - [`ParamId`] - numeric ID for host automation and persisted state
//! - `string_id` - readable key used in preset and state files
//!
//! # Example
//!
//! ```rust
//! use chorus_core::{ParameterInfo, ParamDescriptor, ParamUnit, ParamId};
//!
//! struct Level {
//!     percent: f32,
//! }
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::stepped("Level", "Level", ParamUnit::Percent, 0.0, 100.0, 50.0)
//!                 .with_id(ParamId(1), "level")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.percent,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.percent = value.clamp(0.0, 100.0);
//!         }
//!     }
//! }
//!
//! let level = Level { percent: 10.0 };
//! assert_eq!(level.find_param_by_name("level"), Some(0));
//! ```

use libm::roundf;

/// Stable numeric parameter identifier.
///
/// Once assigned, an ID never changes for a given parameter; persisted
/// state and host automation refer to parameters by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Index-based parameter access.
///
/// Implementations clamp values to the descriptor's range in
/// [`set_param`](Self::set_param) and ignore out-of-range indices.
pub trait ParameterInfo {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index` (0.0 if out of range).
    fn get_param(&self, index: usize) -> f32;

    /// Sets the parameter at `index`, clamped to its valid range.
    fn set_param(&mut self, index: usize, value: f32);

    /// Finds a parameter by name, short name or string ID (case-insensitive).
    ///
    /// # Returns
    ///
    /// `Some(index)` if found, `None` if no parameter matches.
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters (O(n)), for setup paths rather than audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Example
///
/// ```rust
/// use chorus_core::{ParamDescriptor, ParamId, ParamUnit};
///
/// let delay = ParamDescriptor::stepped("Center Delay", "Delay", ParamUnit::Milliseconds, 1.0, 99.0, 50.0)
///     .with_id(ParamId(702), "center_delay");
///
/// assert_eq!(delay.clamp(0.0), 1.0);
/// assert_eq!(delay.quantize(12.6), 13.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Center Delay").
    pub name: &'static str,

    /// Short name for narrow displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value at initialization.
    pub default: f32,

    /// Smallest meaningful increment. `1.0` for integer parameters.
    pub step: f32,

    /// Stable numeric ID.
    pub id: ParamId,

    /// Stable readable key for preset and state files.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Integer-stepped parameter (`step == 1.0`) with an unassigned ID.
    pub const fn stepped(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            min,
            max,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable numeric and string identifiers.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to the valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Rounds to the nearest step from `min`, then clamps.
    #[inline]
    pub fn quantize(&self, value: f32) -> f32 {
        if self.step <= 0.0 {
            return self.clamp(value);
        }
        let steps = roundf((value - self.min) / self.step);
        self.clamp(self.min + steps * self.step)
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// ```rust
    /// use chorus_core::{ParamDescriptor, ParamUnit};
    ///
    /// let mix = ParamDescriptor::stepped("Mix", "Mix", ParamUnit::Percent, 0.0, 100.0, 0.0);
    /// assert_eq!(mix.normalize(50.0), 0.5);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz), for LFO rate.
    Hertz,

    /// Milliseconds (ms), for delay times.
    Milliseconds,

    /// Percentage (%), for mix, depth and feedback amounts.
    Percent,

    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use chorus_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}
