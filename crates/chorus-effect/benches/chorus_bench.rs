//! Criterion benchmarks for the chorus engine
//!
//! Run with: cargo bench -p chorus-effect
#![allow(missing_docs)]

use chorus_core::Interpolation;
use chorus_effect::{AudioBlock, BlockProcessor, EngineConfig, ParameterSet};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn lush() -> ParameterSet {
    ParameterSet {
        rate: 2,
        depth: 60,
        center_delay: 20,
        feedback: 40,
        mix: 50,
    }
}

fn bench_stereo_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChorusStereo");

    for (name, interp) in [("linear", Interpolation::Linear), ("cubic", Interpolation::Cubic)] {
        for &block_size in BLOCK_SIZES {
            let input = generate_test_signal(block_size);

            group.bench_with_input(BenchmarkId::new(name, block_size), &block_size, |b, &size| {
                let mut processor = BlockProcessor::new();
                processor
                    .prepare(EngineConfig::new(SAMPLE_RATE, size, 2))
                    .unwrap();
                processor.engine_mut().set_interpolation(interp);
                let params = lush();
                let mut left = input.clone();
                let mut right = input.clone();

                b.iter(|| {
                    let mut channels = [&mut left[..], &mut right[..]];
                    let mut block = AudioBlock::new(&mut channels).unwrap();
                    processor
                        .process_block(black_box(&params), &mut block)
                        .unwrap();
                });
            });
        }
    }

    group.finish();
}

fn bench_interleaved(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChorusInterleaved");

    for &block_size in BLOCK_SIZES {
        let mono = generate_test_signal(block_size);
        let input: Vec<f32> = mono.iter().flat_map(|&s| [s, s]).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &size| {
                let mut processor = BlockProcessor::new();
                processor
                    .prepare(EngineConfig::new(SAMPLE_RATE, size, 2))
                    .unwrap();
                let params = lush();
                let mut data = input.clone();

                b.iter(|| {
                    processor
                        .process_interleaved(black_box(&params), &mut data)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let params = lush();
    c.bench_function("ParameterSet::resolve", |b| {
        b.iter(|| black_box(black_box(&params).resolve()));
    });
}

criterion_group!(benches, bench_stereo_block, bench_interleaved, bench_resolve);

criterion_main!(benches);
