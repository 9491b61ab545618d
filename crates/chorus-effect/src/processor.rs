//! Per-callback glue between the parameter model and the engine.

use crate::block::AudioBlock;
use crate::engine::{ChorusEngine, EngineConfig};
use crate::error::EngineError;
use crate::params::ParameterSet;
use crate::store::ParameterStore;

/// Runs the chorus over one audio callback at a time.
///
/// Each call resolves the raw parameter values through the range mapper,
/// hands them to the engine and processes the buffer in place. Nothing here
/// allocates after [`prepare`](Self::prepare).
///
/// # Example
///
/// ```rust
/// use chorus_effect::{AudioBlock, BlockProcessor, EngineConfig, ParameterSet};
///
/// let mut processor = BlockProcessor::new();
/// processor.prepare(EngineConfig::new(44100.0, 128, 1)).unwrap();
///
/// let params = ParameterSet { depth: 40, mix: 50, ..ParameterSet::default() };
/// let mut mono = vec![0.0f32; 128];
/// let mut channels = [&mut mono[..]];
/// processor
///     .process_block(&params, &mut AudioBlock::new(&mut channels).unwrap())
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockProcessor {
    engine: ChorusEngine,
}

impl BlockProcessor {
    /// Create a processor around an unprepared engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing engine.
    pub fn with_engine(engine: ChorusEngine) -> Self {
        Self { engine }
    }

    /// Prepare the engine for a stream. See [`ChorusEngine::prepare`].
    pub fn prepare(&mut self, config: EngineConfig) -> Result<(), EngineError> {
        self.engine.prepare(config)
    }

    /// Clear all audio state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &ChorusEngine {
        &self.engine
    }

    /// The wrapped engine, mutably.
    pub fn engine_mut(&mut self) -> &mut ChorusEngine {
        &mut self.engine
    }

    /// Process one planar block with `params`.
    ///
    /// Output channels beyond the host's input count must already be
    /// silenced (see [`AudioBlock::clear_channels_from`]).
    pub fn process_block(
        &mut self,
        params: &ParameterSet,
        block: &mut AudioBlock<'_, '_>,
    ) -> Result<(), EngineError> {
        let resolved = params.resolve()?;
        self.engine.set_params(&resolved);
        self.engine.process(block)
    }

    /// Process one interleaved buffer with `params`.
    pub fn process_interleaved(
        &mut self,
        params: &ParameterSet,
        data: &mut [f32],
    ) -> Result<(), EngineError> {
        let resolved = params.resolve()?;
        self.engine.set_params(&resolved);
        self.engine.process_interleaved(data)
    }

    /// Snapshot `store` once and process one planar block with it.
    pub fn process_from_store(
        &mut self,
        store: &ParameterStore,
        block: &mut AudioBlock<'_, '_>,
    ) -> Result<(), EngineError> {
        let params = store.snapshot();
        self.process_block(&params, block)
    }
}
