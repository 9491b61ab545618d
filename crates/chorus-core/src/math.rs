//! Audio math utilities.
//!
//! Small inline helpers shared by the chorus signal path. Everything here is
//! pure and allocation-free.

use libm::{fabsf, tanhf};

/// Knee where [`soft_limit`] starts bending the signal.
pub const LIMIT_KNEE: f32 = 1.0;

/// Level [`soft_limit`] approaches but never exceeds.
pub const LIMIT_CEILING: f32 = 2.0;

/// Flush subnormal values to zero.
///
/// Subnormal floats cause severe CPU slowdowns on most architectures. Values
/// below 1e-20 are replaced with zero, leaving margin before the IEEE 754
/// subnormal range begins.
///
/// Use this in feedback loops where a signal can decay toward zero forever.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if fabsf(x) < 1e-20 { 0.0 } else { x }
}

/// Soft limiter for the feedback write path.
///
/// The identity for `|x| <= LIMIT_KNEE`. Above the knee the excess is
/// compressed with a tanh curve whose slope is 1 at the knee, so the transfer
/// curve stays smooth and the output never exceeds `LIMIT_CEILING`.
///
/// # Arguments
/// * `x` - Input sample
///
/// # Returns
/// A value with `|y| <= LIMIT_CEILING` and the sign of `x`.
#[inline]
pub fn soft_limit(x: f32) -> f32 {
    let magnitude = fabsf(x);
    if magnitude <= LIMIT_KNEE {
        return x;
    }

    let headroom = LIMIT_CEILING - LIMIT_KNEE;
    let bent = LIMIT_KNEE + headroom * tanhf((magnitude - LIMIT_KNEE) / headroom);
    if x < 0.0 { -bent } else { bent }
}

/// Crossfade between dry and wet signals.
///
/// Computed as `dry * (1 - mix) + wet * mix`, which returns `dry` exactly when
/// `mix == 0.0` and `wet` exactly when `mix == 1.0`.
///
/// # Arguments
/// * `dry` - Unprocessed signal
/// * `wet` - Processed signal
/// * `mix` - Wet amount in [0.0, 1.0]
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Convert milliseconds to samples.
#[inline]
pub fn ms_to_samples(ms: f32, sample_rate: f32) -> f32 {
    ms * sample_rate / 1000.0
}

/// Convert samples to milliseconds.
#[inline]
pub fn samples_to_ms(samples: f32, sample_rate: f32) -> f32 {
    samples * 1000.0 / sample_rate
}
