//! Linear parameter ramps for click-free block-rate changes.
//!
//! Parameters arrive once per audio block. Stepping a delay time or mix
//! amount at a block boundary produces an audible click, so each value is
//! ramped linearly across the block it arrives in and lands exactly on its
//! target on the block's last sample.

/// A value that moves linearly toward a target over a fixed number of samples.
///
/// # Example
///
/// ```rust
/// use chorus_core::BlockRamp;
///
/// let mut mix = BlockRamp::new(0.0);
/// mix.ramp_to(1.0, 4);
///
/// let values: Vec<f32> = (0..4).map(|_| mix.advance()).collect();
/// assert_eq!(values, [0.25, 0.5, 0.75, 1.0]);
/// assert!(mix.is_settled());
/// ```
#[derive(Debug, Clone)]
pub struct BlockRamp {
    /// Current value
    current: f32,
    /// Target value
    target: f32,
    /// Increment per sample
    increment: f32,
    /// Samples remaining until target reached
    samples_remaining: usize,
}

impl BlockRamp {
    /// Create a settled ramp at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            increment: 0.0,
            samples_remaining: 0,
        }
    }

    /// Start a ramp from the current value to `target` over `samples` samples.
    ///
    /// A ramp still in flight is replaced, starting from wherever it got to.
    /// With `samples == 0` the value jumps to `target`.
    pub fn ramp_to(&mut self, target: f32, samples: usize) {
        self.target = target;

        if samples == 0 || self.current == target {
            self.current = target;
            self.increment = 0.0;
            self.samples_remaining = 0;
        } else {
            self.increment = (target - self.current) / samples as f32;
            self.samples_remaining = samples;
        }
    }

    /// Set value immediately.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }

    /// Get next value (advances by one sample).
    #[inline]
    pub fn advance(&mut self) -> f32 {
        if self.samples_remaining > 0 {
            self.current += self.increment;
            self.samples_remaining -= 1;
            if self.samples_remaining == 0 {
                self.current = self.target;
            }
        }
        self.current
    }

    /// Get current value without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Get target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check if the ramp is complete.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.samples_remaining == 0
    }
}

impl Default for BlockRamp {
    fn default() -> Self {
        Self::new(0.0)
    }
}
