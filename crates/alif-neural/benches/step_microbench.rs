// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Core Step Microbenchmarks
//!
//! Throughput of the per-edge update under the stimulus profiles the harness uses.

use alif_neural::{NeuronConfig, NeuronCore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const EDGES: u64 = 3_000;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("neuron_core_step");
    group.throughput(Throughput::Elements(EDGES));

    // (input current, config byte)
    let profiles = [("adapting", 80u8, 0x24u8), ("silent", 3, 0x0F), ("saturating", 255, 0xFF)];

    for (name, input_current, config_byte) in profiles {
        let config = NeuronConfig::from_byte(config_byte);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input_current, |b, &input| {
            b.iter(|| {
                let mut core = NeuronCore::new();
                let mut spikes = 0u32;
                for _ in 0..EDGES {
                    spikes += core.step_with_config(true, black_box(input), config).spike as u32;
                }
                black_box(spikes)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
