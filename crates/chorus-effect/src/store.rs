//! Lock-free parameter storage shared between control and audio threads.
//!
//! [`ParameterStore`] keeps one atomic integer per chorus parameter. Control
//! threads (UI, automation, preset loading) call `set()`; the audio thread
//! calls [`snapshot`](ParameterStore::snapshot) once per block.
//!
//! Loads and stores use `Relaxed` ordering. A single value is never torn, but
//! a snapshot taken while a control thread updates several parameters may mix
//! old and new values for one block.

use core::sync::atomic::{AtomicI32, Ordering};

use crate::params::{ChorusParam, ParameterSet, raw_from_normalized};

/// Atomics-backed current values of the five chorus parameters.
///
/// Share it between threads with `Arc<ParameterStore>`.
///
/// # Example
///
/// ```rust
/// use chorus_effect::{ChorusParam, ParameterStore};
///
/// let store = ParameterStore::new();
/// store.set(ChorusParam::Mix, 75);
/// assert_eq!(store.snapshot().mix, 75);
/// ```
#[derive(Debug)]
pub struct ParameterStore {
    values: [AtomicI32; 5],
}

impl ParameterStore {
    /// Store initialised to the parameter defaults.
    pub fn new() -> Self {
        Self::from_set(&ParameterSet::default())
    }

    /// Store initialised from `set`, clamped into range.
    pub fn from_set(set: &ParameterSet) -> Self {
        let set = set.clamped();
        Self {
            values: ChorusParam::ALL.map(|p| AtomicI32::new(set.get(p))),
        }
    }

    /// Current raw value of `param`.
    #[inline]
    pub fn get(&self, param: ChorusParam) -> i32 {
        self.values[param.index()].load(Ordering::Relaxed)
    }

    /// Stores `raw`, clamped to the parameter's range.
    #[inline]
    pub fn set(&self, param: ChorusParam, raw: i32) {
        self.values[param.index()].store(param.clamp_raw(raw), Ordering::Relaxed);
    }

    /// Stores a host-normalised value (0.0–1.0), rounded to the nearest step.
    pub fn set_normalized(&self, param: ChorusParam, normalized: f32) {
        self.set(param, raw_from_normalized(param, normalized));
    }

    /// Stores every value of `set`.
    pub fn store_set(&self, set: &ParameterSet) {
        for p in ChorusParam::ALL {
            self.set(p, set.get(p));
        }
    }

    /// Reads all parameters. Real-time safe.
    #[inline]
    pub fn snapshot(&self) -> ParameterSet {
        ParameterSet {
            rate: self.get(ChorusParam::Rate),
            depth: self.get(ChorusParam::Depth),
            center_delay: self.get(ChorusParam::CenterDelay),
            feedback: self.get(ChorusParam::Feedback),
            mix: self.get(ChorusParam::Mix),
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
