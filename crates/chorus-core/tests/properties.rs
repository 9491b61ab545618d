//! Property-based tests for chorus-core primitives.
//!
//! Covers range-mapper linearity, delay line integrity, limiter bounds and
//! ramp convergence using proptest for randomized inputs.

use chorus_core::{BlockRamp, InterpolatedDelay, Lfo, RangeError, scale_range, soft_limit};
use chorus_core::math::LIMIT_CEILING;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Mapping the source endpoints yields the destination endpoints.
    #[test]
    fn scale_range_endpoints(
        lo in -1000.0f32..1000.0,
        width in 1.0f32..1000.0,
        out_lo in -10.0f32..10.0,
        out_hi in -10.0f32..10.0,
    ) {
        let hi = lo + width;
        let at_lo = scale_range(lo, lo, hi, out_lo, out_hi).unwrap();
        let at_hi = scale_range(hi, lo, hi, out_lo, out_hi).unwrap();
        prop_assert!((at_lo - out_lo).abs() < 1e-3, "low endpoint {} vs {}", at_lo, out_lo);
        prop_assert!((at_hi - out_hi).abs() < 1e-3, "high endpoint {} vs {}", at_hi, out_hi);
    }

    /// An increasing destination range preserves ordering.
    #[test]
    fn scale_range_monotonic(a in 0.0f32..100.0, b in 0.0f32..100.0) {
        let ma = scale_range(a, 0.0, 100.0, 0.0, 1.0).unwrap();
        let mb = scale_range(b, 0.0, 100.0, 0.0, 1.0).unwrap();
        if a < b {
            prop_assert!(ma <= mb);
        } else if a > b {
            prop_assert!(ma >= mb);
        }
    }

    /// Equal steps in the source produce equal steps in the destination.
    #[test]
    fn scale_range_linear(raw in 0i32..=94, step in 1i32..=5) {
        let raw = raw as f32;
        let step = step as f32;
        let f = |x: f32| scale_range(x, 0.0, 95.0, 0.0, 0.95).unwrap();
        let d1 = f(raw + step) - f(raw);
        let d2 = f(raw + 2.0 * step) - f(raw + step);
        prop_assert!((d1 - d2).abs() < 1e-5);
    }

    /// A zero-width source range is always an error.
    #[test]
    fn scale_range_zero_width(raw in -100.0f32..100.0, edge in -100.0f32..100.0) {
        prop_assert_eq!(scale_range(raw, edge, edge, 0.0, 1.0), Err(RangeError::DivideByZero));
    }

    /// Samples written to the delay line read back exactly at integer delays.
    #[test]
    fn delay_line_integrity(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..200),
    ) {
        let n = samples.len();
        let mut delay = InterpolatedDelay::new(n + 2);
        for &s in &samples {
            delay.write(s);
        }

        // Delay 1 is the newest sample, delay n the oldest.
        for d in 1..=n {
            let expected = samples[n - d];
            let got = delay.read(d as f32);
            prop_assert_eq!(got, expected, "delay={}", d);
        }
    }

    /// Linear reads between two integer positions stay between their samples.
    #[test]
    fn delay_fractional_read_bounded(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 4..64),
        pos in 0.0f32..1.0,
    ) {
        let n = samples.len();
        let mut delay = InterpolatedDelay::new(n + 2);
        for &s in &samples {
            delay.write(s);
        }

        let d = 1.0 + pos * (n as f32 - 2.0);
        let lo = d as usize;
        let a = samples[n - lo];
        let b = samples[n - lo - 1];
        let got = delay.read(d);
        prop_assert!(got >= a.min(b) - 1e-6 && got <= a.max(b) + 1e-6);
    }

    /// The limiter never exceeds its ceiling and never flips sign.
    #[test]
    fn soft_limit_bounded(x in -1.0e6f32..1.0e6) {
        let y = soft_limit(x);
        prop_assert!(y.abs() <= LIMIT_CEILING);
        prop_assert!(y == 0.0 || y.signum() == x.signum());
    }

    /// The limiter is monotonic non-decreasing.
    #[test]
    fn soft_limit_monotonic(a in -10.0f32..10.0, b in -10.0f32..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(soft_limit(lo) <= soft_limit(hi));
    }

    /// A ramp reaches its target exactly after the requested sample count.
    #[test]
    fn ramp_reaches_target(
        start in -100.0f32..100.0,
        target in -100.0f32..100.0,
        samples in 1usize..4096,
    ) {
        let mut ramp = BlockRamp::new(start);
        ramp.ramp_to(target, samples);
        for _ in 0..samples {
            ramp.advance();
        }
        prop_assert_eq!(ramp.get(), target);
        prop_assert!(ramp.is_settled());
    }

    /// LFO output stays in [-1, 1] and phase stays in [0, 1) for any rate.
    #[test]
    fn lfo_bounded(
        rate in 1.0f32..99.0,
        sr in prop::sample::select(vec![8000.0f32, 44100.0, 48000.0, 192000.0]),
        offset in 0.0f32..4.0,
    ) {
        let mut lfo = Lfo::new(sr, rate);
        lfo.set_phase_offset(offset);
        for _ in 0..2048 {
            let v = lfo.next();
            prop_assert!((-1.0..=1.0).contains(&v));
            prop_assert!((0.0..1.0).contains(&lfo.phase()));
        }
    }
}
