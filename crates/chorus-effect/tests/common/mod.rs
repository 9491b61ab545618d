//! Shared helpers for chorus-effect integration tests.

#![allow(dead_code)]

use chorus_effect::{AudioBlock, BlockProcessor, EngineConfig, EngineError, ParameterSet};

/// Prepare a processor, panicking on invalid configuration.
pub fn prepared(sample_rate: f32, max_block: usize, channels: usize) -> BlockProcessor {
    let mut processor = BlockProcessor::new();
    processor
        .prepare(EngineConfig::new(sample_rate, max_block, channels))
        .expect("valid configuration");
    processor
}

/// Process planar `buffers` in consecutive blocks of `block_size` samples.
pub fn process_in_blocks(
    processor: &mut BlockProcessor,
    params: &ParameterSet,
    buffers: &mut [Vec<f32>],
    block_size: usize,
) -> Result<(), EngineError> {
    let total = buffers.first().map_or(0, Vec::len);
    let mut start = 0;
    while start < total {
        let end = (start + block_size).min(total);
        let mut channels: Vec<&mut [f32]> =
            buffers.iter_mut().map(|b| &mut b[start..end]).collect();
        let mut block = AudioBlock::new(&mut channels)?;
        processor.process_block(params, &mut block)?;
        start = end;
    }
    Ok(())
}

/// Sine wave of `len` samples.
pub fn sine(freq: f32, sample_rate: f32, len: usize, amplitude: f32) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (std::f32::consts::TAU * freq * i as f32 / sample_rate).sin())
        .collect()
}

/// Deterministic white noise in [-1, 1] (xorshift).
pub fn noise(len: usize, seed: u32) -> Vec<f32> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}
