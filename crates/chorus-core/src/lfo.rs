//! Sine LFO for delay-time modulation.
//!
//! A phase accumulator in cycles: the phase lives in `[0.0, 1.0)`, advances
//! by `frequency / sample_rate` every sample and wraps modulo 1.0. Each
//! instance carries a fixed phase offset so several channels can run the same
//! rate a fraction of a cycle apart.

use core::f32::consts::TAU;
use libm::{floorf, sinf};

/// Sine low-frequency oscillator with a fixed phase offset.
///
/// # Example
///
/// ```rust
/// use chorus_core::Lfo;
///
/// let mut lfo = Lfo::new(48000.0, 2.0);
/// lfo.set_phase_offset(0.25); // start a quarter cycle in
///
/// // Output lies in [-1.0, 1.0]
/// let value = lfo.next();
/// assert!((value - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Lfo {
    /// Current phase [0.0, 1.0)
    phase: f32,
    /// Phase restored by `reset`
    offset: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl Default for Lfo {
    fn default() -> Self {
        Self::new(48000.0, 1.0)
    }
}

impl Lfo {
    /// Create a new LFO with the given sample rate and frequency.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            offset: 0.0,
            phase_inc: freq_hz / sample_rate,
            sample_rate,
        }
    }

    /// Set frequency in Hz.
    ///
    /// Takes effect on the next sample without moving the phase.
    #[inline]
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Set the fixed phase offset in cycles and jump to it.
    ///
    /// Values outside `[0.0, 1.0)` wrap, so channel `n` can pass
    /// `n as f32 * 0.25` directly.
    pub fn set_phase_offset(&mut self, offset: f32) {
        self.offset = wrap_phase(offset);
        self.phase = self.offset;
    }

    /// Fixed phase offset in cycles.
    pub fn phase_offset(&self) -> f32 {
        self.offset
    }

    /// Restore the phase to the offset.
    pub fn reset(&mut self) {
        self.phase = self.offset;
    }

    /// Current phase [0.0, 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Next LFO value in [-1.0, 1.0], then advance one sample.
    #[inline]
    pub fn next(&mut self) -> f32 {
        let output = sinf(self.phase * TAU);

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase = wrap_phase(self.phase);
        }

        output
    }

    /// Set sample rate, keeping the frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.frequency();
        self.sample_rate = sample_rate;
        self.set_frequency(freq);
    }
}

#[inline]
fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase - floorf(phase);
    // Rounding can land exactly on 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
