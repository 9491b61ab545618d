//! The modulated-delay chorus engine.
//!
//! One delay line and one sine LFO per channel. Every sample the LFO sweeps
//! the read position around the center delay; the delayed signal is fed back
//! into the line through a soft limiter and crossfaded with the input.
//!
//! ```text
//!            ┌──────────────── dry ───────────────────┐
//! input ──┬──┤                                        ├── mix ── output
//!         │  └─> (+) ──> limit ──> [delay line] ──┬───┘
//!         │       ^                     ^         │
//!         │       └──── × feedback <────┼─────────┘
//!         │                             │
//!         └────────────────  LFO ──> center + depth · 20 ms · sin
//! ```
//!
//! The engine has two states. It starts unprepared and rejects every
//! processing call with [`EngineError::NotPrepared`]; [`ChorusEngine::prepare`]
//! validates an [`EngineConfig`], allocates all channel state and makes it
//! ready. Preparing again discards the old state and reallocates. Nothing on
//! the processing path allocates, locks or logs.

use alloc::vec::Vec;

use chorus_core::{
    BlockRamp, InterpolatedDelay, Interpolation, Lfo, flush_denormal, ms_to_samples, soft_limit,
    wet_dry_mix,
};
use libm::ceilf;

use crate::block::AudioBlock;
use crate::error::EngineError;
use crate::params::{MAX_FEEDBACK, ResolvedParams};

/// Largest center delay in milliseconds.
pub const MAX_CENTER_DELAY_MS: f32 = 99.0;

/// Smallest center delay in milliseconds.
pub const MIN_CENTER_DELAY_MS: f32 = 1.0;

/// Delay excursion at full depth, in milliseconds either side of center.
pub const MOD_RANGE_MS: f32 = 20.0;

/// Highest LFO rate in Hz.
pub const MAX_RATE_HZ: f32 = 99.0;

/// LFO phase offset between adjacent channels, in cycles.
pub const CHANNEL_PHASE_OFFSET: f32 = 0.25;

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: f32 = 1000.0;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: f32 = 768_000.0;

/// Extra delay-line slots beyond the longest reachable delay.
const CAPACITY_MARGIN: usize = 4;

/// Stream configuration fixed by [`ChorusEngine::prepare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Sample rate in Hz
    pub sample_rate: f32,
    /// Longest block a processing call may carry
    pub max_block_size: usize,
    /// Channels processed per block
    pub num_channels: usize,
}

impl EngineConfig {
    /// Create a configuration.
    pub fn new(sample_rate: f32, max_block_size: usize, num_channels: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            num_channels,
        }
    }

    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(EngineError::InvalidSampleRate(self.sample_rate));
        }
        if self.max_block_size == 0 {
            return Err(EngineError::InvalidBlockSize(self.max_block_size));
        }
        if self.num_channels == 0 {
            return Err(EngineError::InvalidChannelCount(self.num_channels));
        }
        Ok(())
    }

    /// Delay-line length needed per channel at this sample rate.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn delay_capacity(&self) -> usize {
        let longest = ms_to_samples(MAX_CENTER_DELAY_MS + MOD_RANGE_MS, self.sample_rate);
        (ceilf(longest) as usize).saturating_add(CAPACITY_MARGIN)
    }
}

/// Per-sample control values shared by every channel of one frame.
#[derive(Debug, Clone, Copy)]
struct FrameParams {
    /// Center delay in samples
    center: f32,
    /// Peak delay excursion in samples (depth × modulation range)
    excursion: f32,
    feedback: f32,
    mix: f32,
}

/// Delay line and LFO of one channel.
#[derive(Debug, Clone)]
struct ChannelState {
    delay: InterpolatedDelay,
    lfo: Lfo,
}

impl ChannelState {
    fn new(index: usize, config: &EngineConfig, interpolation: Interpolation) -> Self {
        let mut delay = InterpolatedDelay::new(config.delay_capacity());
        delay.set_interpolation(interpolation);

        let mut lfo = Lfo::new(config.sample_rate, 0.0);
        lfo.set_phase_offset(index as f32 * CHANNEL_PHASE_OFFSET);

        Self { delay, lfo }
    }

    #[inline]
    fn tick(&mut self, input: f32, frame: &FrameParams) -> f32 {
        let modulation = self.lfo.next();

        // `read` clamps to the line's valid window.
        let delayed = self.delay.read(frame.center + frame.excursion * modulation);

        let recirculated = soft_limit(input + frame.feedback * delayed);
        self.delay.write(flush_denormal(recirculated));

        wet_dry_mix(input, delayed, frame.mix)
    }

    fn reset(&mut self) {
        self.delay.clear();
        self.lfo.reset();
    }
}

/// Multi-channel modulated-delay chorus.
///
/// Parameters set with [`set_params`](Self::set_params) take effect on the
/// next processing call. Depth, feedback, mix and center delay ramp linearly
/// across that block and land on their targets on its last sample; the first
/// block after `prepare` or `reset` applies them immediately.
///
/// # Example
///
/// ```rust
/// use chorus_effect::{AudioBlock, ChorusEngine, EngineConfig, ResolvedParams};
///
/// let mut engine = ChorusEngine::new();
/// engine.prepare(EngineConfig::new(48000.0, 256, 2)).unwrap();
/// engine.set_params(&ResolvedParams { depth: 0.5, mix: 0.5, ..ResolvedParams::default() });
///
/// let mut left = vec![0.1f32; 256];
/// let mut right = vec![0.1f32; 256];
/// let mut channels = [&mut left[..], &mut right[..]];
/// engine.process(&mut AudioBlock::new(&mut channels).unwrap()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ChorusEngine {
    config: Option<EngineConfig>,
    channels: Vec<ChannelState>,
    interpolation: Interpolation,
    target: ResolvedParams,
    /// Modulation range in samples at the prepared rate
    mod_range_samples: f32,
    /// Center delay in samples
    center: BlockRamp,
    depth: BlockRamp,
    feedback: BlockRamp,
    mix: BlockRamp,
    /// Next block applies targets without ramping
    snap_pending: bool,
}

impl Default for ChorusEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChorusEngine {
    /// Create an unprepared engine with default parameters.
    pub fn new() -> Self {
        Self {
            config: None,
            channels: Vec::new(),
            interpolation: Interpolation::Linear,
            target: ResolvedParams::default(),
            mod_range_samples: 0.0,
            center: BlockRamp::default(),
            depth: BlockRamp::default(),
            feedback: BlockRamp::default(),
            mix: BlockRamp::default(),
            snap_pending: true,
        }
    }

    /// Validate `config`, allocate per-channel state and reset it.
    ///
    /// On error the engine keeps its previous state.
    pub fn prepare(&mut self, config: EngineConfig) -> Result<(), EngineError> {
        config.validate()?;

        self.channels = (0..config.num_channels)
            .map(|index| ChannelState::new(index, &config, self.interpolation))
            .collect();
        self.mod_range_samples = ms_to_samples(MOD_RANGE_MS, config.sample_rate);
        self.config = Some(config);
        self.snap_pending = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = config.sample_rate,
            max_block_size = config.max_block_size,
            channels = config.num_channels,
            capacity = config.delay_capacity(),
            "chorus engine prepared"
        );

        Ok(())
    }

    /// Clear delay lines and restore LFO phases without reallocating.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            channel.reset();
        }
        self.snap_pending = true;

        #[cfg(feature = "tracing")]
        tracing::debug!("chorus engine reset");
    }

    /// Returns `true` once [`prepare`](Self::prepare) has succeeded.
    pub fn is_prepared(&self) -> bool {
        self.config.is_some()
    }

    /// The prepared configuration.
    pub fn config(&self) -> Option<EngineConfig> {
        self.config
    }

    /// Delay-line length per channel, or 0 when unprepared.
    pub fn capacity_samples(&self) -> usize {
        self.channels.first().map_or(0, |c| c.delay.capacity())
    }

    /// Fractional-delay interpolation in use.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Switch fractional-delay interpolation. Does not allocate.
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
        for channel in &mut self.channels {
            channel.delay.set_interpolation(interpolation);
        }
    }

    /// Parameters the next block ramps toward.
    pub fn params(&self) -> &ResolvedParams {
        &self.target
    }

    /// Set the parameters for the next block.
    ///
    /// Values are clamped to their valid ranges when applied.
    pub fn set_params(&mut self, params: &ResolvedParams) {
        self.target = *params;
    }

    /// Values reached by the ramps after the last processed sample.
    ///
    /// `rate_hz` reports the target; the rate is never ramped.
    pub fn current_params(&self) -> ResolvedParams {
        let sample_rate = self.config.map_or(1.0, |c| c.sample_rate);
        ResolvedParams {
            rate_hz: self.target.rate_hz,
            depth: self.depth.get(),
            center_delay_ms: self.center.get() * 1000.0 / sample_rate,
            feedback: self.feedback.get(),
            mix: self.mix.get(),
        }
    }

    /// Process a planar block in place.
    ///
    /// The block may carry fewer channels than prepared; the remaining
    /// channels' state does not advance.
    pub fn process(&mut self, block: &mut AudioBlock<'_, '_>) -> Result<(), EngineError> {
        let len = block.num_samples();
        self.check_block(block.num_channels(), len)?;
        if len == 0 {
            return Ok(());
        }

        self.begin_block(len);

        let buffers = block.channels_mut();
        for i in 0..len {
            let frame = self.next_frame();
            for (state, samples) in self.channels.iter_mut().zip(buffers.iter_mut()) {
                samples[i] = state.tick(samples[i], &frame);
            }
        }

        Ok(())
    }

    /// Process an interleaved buffer in place.
    ///
    /// `data.len()` must be a multiple of the prepared channel count.
    pub fn process_interleaved(&mut self, data: &mut [f32]) -> Result<(), EngineError> {
        let config = self.config.ok_or(EngineError::NotPrepared)?;
        let channels = config.num_channels;
        if data.len() % channels != 0 {
            return Err(EngineError::InterleavedLength {
                len: data.len(),
                channels,
            });
        }

        let frames = data.len() / channels;
        self.check_block(channels, frames)?;
        if frames == 0 {
            return Ok(());
        }

        self.begin_block(frames);

        for samples in data.chunks_exact_mut(channels) {
            let frame = self.next_frame();
            for (state, sample) in self.channels.iter_mut().zip(samples.iter_mut()) {
                *sample = state.tick(*sample, &frame);
            }
        }

        Ok(())
    }

    fn check_block(&self, num_channels: usize, len: usize) -> Result<(), EngineError> {
        let config = self.config.ok_or(EngineError::NotPrepared)?;
        if len > config.max_block_size {
            return Err(EngineError::BlockTooLarge {
                len,
                max: config.max_block_size,
            });
        }
        if num_channels > config.num_channels {
            return Err(EngineError::TooManyChannels {
                got: num_channels,
                max: config.num_channels,
            });
        }
        Ok(())
    }

    /// Start this block's ramps toward the clamped targets.
    fn begin_block(&mut self, len: usize) {
        let sample_rate = self.config.map_or(1.0, |c| c.sample_rate);
        let target = self.target;

        let ramp_len = if self.snap_pending { 0 } else { len };
        self.snap_pending = false;

        let center_ms = target
            .center_delay_ms
            .clamp(MIN_CENTER_DELAY_MS, MAX_CENTER_DELAY_MS);
        self.center
            .ramp_to(ms_to_samples(center_ms, sample_rate), ramp_len);
        self.depth.ramp_to(target.depth.clamp(0.0, 1.0), ramp_len);
        self.feedback
            .ramp_to(target.feedback.clamp(0.0, MAX_FEEDBACK), ramp_len);
        self.mix.ramp_to(target.mix.clamp(0.0, 1.0), ramp_len);

        let rate = target.rate_hz.clamp(0.0, MAX_RATE_HZ);
        for channel in &mut self.channels {
            channel.lfo.set_frequency(rate);
        }
    }

    #[inline]
    fn next_frame(&mut self) -> FrameParams {
        FrameParams {
            center: self.center.advance(),
            excursion: self.depth.advance() * self.mod_range_samples,
            feedback: self.feedback.advance(),
            mix: self.mix.advance(),
        }
    }
}
