//! Chorus Core - DSP primitives for the modulated-delay chorus
//!
//! The building blocks the chorus engine is assembled from, designed for
//! real-time processing with zero allocation in the audio path.
//!
//! # Primitives
//!
//! ## Delay Lines
//!
//! - [`InterpolatedDelay`] - Circular buffer with fractional-delay reads
//!
//! ## Modulation
//!
//! - [`Lfo`] - Sine phase accumulator with per-instance phase offset
//!
//! ## Parameter Handling
//!
//! - [`scale_range`] - Linear rescale between two ranges
//! - [`BlockRamp`] - Linear ramp that lands on its target at the end of a block
//! - [`ParamDescriptor`] / [`ParameterInfo`] - Parameter metadata and
//!   index-based access
//!
//! ## Utilities
//!
//! - [`flush_denormal`], [`soft_limit`], [`wet_dry_mix`], [`ms_to_samples`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! chorus-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chorus_core::{InterpolatedDelay, Lfo, scale_range};
//!
//! let depth = scale_range(50.0, 0.0, 100.0, 0.0, 1.0).unwrap();
//! assert_eq!(depth, 0.5);
//!
//! let mut lfo = Lfo::new(48000.0, 2.0);
//! let mut delay = InterpolatedDelay::new(4800);
//! let input = 0.25;
//! let delayed = delay.read(240.0 + depth * 48.0 * lfo.next());
//! delay.write(input);
//! # let _ = delayed;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod lfo;
pub mod math;
pub mod param;
pub mod param_info;
pub mod range;

pub use delay::{InterpolatedDelay, Interpolation};
pub use lfo::Lfo;
pub use math::{flush_denormal, ms_to_samples, samples_to_ms, soft_limit, wet_dry_mix};
pub use param::BlockRamp;
pub use param_info::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo};
pub use range::{RangeError, scale_range};
