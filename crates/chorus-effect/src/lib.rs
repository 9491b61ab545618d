//! Chorus Effect - modulated-delay chorus engine
//!
//! A real-time chorus driven by five integer parameters: rate, depth, center
//! delay, feedback and mix.
//!
//! # Layers
//!
//! - [`ParameterSet`] - raw host-facing values, resolved through the range
//!   mapper into [`ResolvedParams`]
//! - [`ParameterStore`] - lock-free shared storage for the raw values
//! - [`ChorusEngine`] - per-channel delay lines and LFOs, `prepare`/`process`
//! - [`BlockProcessor`] - one call per audio callback: resolve, apply, process
//!
//! # Real-time Contract
//!
//! All allocation happens in [`ChorusEngine::prepare`]. Processing calls
//! never allocate, lock or block, and reject invalid buffers before touching
//! them.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chorus_effect::{AudioBlock, BlockProcessor, ChorusParam, EngineConfig, ParameterStore};
//!
//! let store = Arc::new(ParameterStore::new());
//! store.set(ChorusParam::Depth, 60);
//! store.set(ChorusParam::Mix, 50);
//!
//! let mut processor = BlockProcessor::new();
//! processor.prepare(EngineConfig::new(48000.0, 512, 2)).unwrap();
//!
//! let mut left = vec![0.0f32; 512];
//! let mut right = vec![0.0f32; 512];
//! let mut channels = [&mut left[..], &mut right[..]];
//! let mut block = AudioBlock::new(&mut channels).unwrap();
//! processor.process_from_store(&store, &mut block).unwrap();
//! ```
//!
//! # Features
//!
//! - `std` (default) - standard library support
//! - `tracing` - debug events from `prepare` and `reset`

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod engine;
pub mod error;
pub mod params;
pub mod processor;
pub mod store;

pub use block::AudioBlock;
pub use engine::{ChorusEngine, EngineConfig};
pub use error::EngineError;
pub use params::{ChorusParam, DESCRIPTORS, ParameterSet, ResolvedParams};
pub use processor::BlockProcessor;
pub use store::ParameterStore;
