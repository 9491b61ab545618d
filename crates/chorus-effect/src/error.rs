//! Engine error types.

use chorus_core::RangeError;
use thiserror::Error;

/// Errors from preparing or running the chorus engine.
///
/// Configuration errors come from [`prepare`](crate::ChorusEngine::prepare).
/// Precondition errors come from processing calls and are raised before
/// any sample of the buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    /// Sample rate is outside `MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE` or not finite.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    /// Maximum block size is zero.
    #[error("invalid maximum block size: {0}")]
    InvalidBlockSize(usize),

    /// Channel count is zero.
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(usize),

    /// A processing call arrived before `prepare`.
    #[error("engine is not prepared")]
    NotPrepared,

    /// Block is longer than the prepared maximum.
    #[error("block of {len} samples exceeds maximum block size {max}")]
    BlockTooLarge {
        /// Samples in the rejected block
        len: usize,
        /// Prepared maximum block size
        max: usize,
    },

    /// Block carries more channels than the engine was prepared for.
    #[error("block has {got} channels but engine was prepared for {max}")]
    TooManyChannels {
        /// Channels in the rejected block
        got: usize,
        /// Prepared channel count
        max: usize,
    },

    /// Channel slices in one block have different lengths.
    #[error("channel {channel} has {len} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Offending channel index
        channel: usize,
        /// Its length
        len: usize,
        /// Length of channel 0
        expected: usize,
    },

    /// Interleaved buffer length is not a multiple of the channel count.
    #[error("interleaved buffer of {len} samples is not a multiple of {channels} channels")]
    InterleavedLength {
        /// Buffer length
        len: usize,
        /// Prepared channel count
        channels: usize,
    },

    /// Parameter range mapping failed.
    #[error("parameter mapping failed: {0}")]
    Range(#[from] RangeError),
}
