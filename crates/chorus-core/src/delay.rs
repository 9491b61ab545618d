//! Fractional delay line for modulated effects.
//!
//! A circular buffer written one sample at a time and read at an arbitrary,
//! possibly fractional, distance behind the write head. Reads interpolate
//! between stored samples so the delay time can sweep without zipper noise.
//!
//! # Delay convention
//!
//! Delays are measured from the sample about to be written. In a
//! read-then-write loop, `read(1.0)` returns the previous input and
//! `read(n)` returns the input from `n` samples ago. A delay below the
//! interpolation's [`min_delay`](Interpolation::min_delay) would touch the
//! slot that is about to be overwritten.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Interpolation method for fractional delay reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// No interpolation (truncate toward the shorter delay)
    None,
    /// Linear interpolation between two samples
    #[default]
    Linear,
    /// 4-point cubic interpolation (smoother, one extra sample of headroom)
    Cubic,
}

impl Interpolation {
    /// Smallest delay, in samples, that reads only already-written data.
    pub const fn min_delay(self) -> f32 {
        match self {
            Self::None | Self::Linear => 1.0,
            Self::Cubic => 2.0,
        }
    }

    /// Samples read past the integer delay position (older side).
    pub const fn margin(self) -> usize {
        match self {
            Self::None => 0,
            Self::Linear => 1,
            Self::Cubic => 2,
        }
    }

    /// Parses a lowercase interpolation name (`none`, `linear`, `cubic`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "linear" => Some(Self::Linear),
            "cubic" => Some(Self::Cubic),
            _ => None,
        }
    }

    /// Lowercase name of the method.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

/// Interpolated delay line using a heap-allocated circular buffer.
///
/// # Memory
///
/// The buffer is allocated once in [`new`](Self::new) and never resized.
/// No allocations occur in [`read`](Self::read) or [`write`](Self::write).
///
/// # Example
///
/// ```rust
/// use chorus_core::InterpolatedDelay;
///
/// let mut delay = InterpolatedDelay::new(64);
/// delay.write(1.0);
/// delay.write(0.0);
///
/// // The impulse is two samples behind the write head
/// assert_eq!(delay.read(2.0), 1.0);
/// // Halfway between the impulse and the zero after it
/// assert_eq!(delay.read(1.5), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedDelay {
    /// Circular buffer storage
    buffer: Vec<f32>,
    /// Next slot to be written
    write_pos: usize,
    /// Interpolation method for fractional delay reads
    interpolation: Interpolation,
}

impl InterpolatedDelay {
    /// Creates a delay line holding `capacity` samples.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Buffer length in samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 4.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 4, "Delay capacity must be >= 4");

        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
            interpolation: Interpolation::Linear,
        }
    }

    /// Sets the interpolation method for fractional delay reads.
    pub fn set_interpolation(&mut self, interp: Interpolation) {
        self.interpolation = interp;
    }

    /// Returns the interpolation method.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Largest delay, in samples, that [`read`](Self::read) serves without
    /// wrapping into data that is about to be overwritten.
    pub fn max_delay(&self) -> f32 {
        (self.buffer.len() - 1 - self.interpolation.margin()) as f32
    }

    /// Reads a delayed sample with the configured interpolation method.
    ///
    /// # Arguments
    ///
    /// * `delay_samples` - Delay in samples, clamped to
    ///   `[min_delay, max_delay]`
    #[inline]
    pub fn read(&self, delay_samples: f32) -> f32 {
        let delay = delay_samples.clamp(self.interpolation.min_delay(), self.max_delay());

        let len = self.buffer.len();
        let delay_int = delay as usize;
        let frac = delay - delay_int as f32;

        // Sample written `delay_int` steps before the write head.
        let read_pos = (self.write_pos + len - delay_int) % len;

        match self.interpolation {
            Interpolation::None => self.buffer[read_pos],

            Interpolation::Linear => {
                let older = (read_pos + len - 1) % len;
                let a = self.buffer[read_pos];
                let b = self.buffer[older];
                a + (b - a) * frac
            }

            Interpolation::Cubic => {
                let y0 = self.buffer[(read_pos + 1) % len];
                let y1 = self.buffer[read_pos];
                let y2 = self.buffer[(read_pos + len - 1) % len];
                let y3 = self.buffer[(read_pos + len - 2) % len];

                let t = frac;
                let t2 = t * t;
                let t3 = t2 * t;

                let a0 = y3 - y2 - y0 + y1;
                let a1 = y0 - y1 - a0;
                let a2 = y2 - y0;

                a0 * t3 + a1 * t2 + a2 * t + y1
            }
        }
    }

    /// Writes a sample and advances the write position.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Clears the delay line (sets all samples to 0).
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Returns the buffer length in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
