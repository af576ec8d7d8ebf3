//! Benchmark for the layout codec.
//!
//! TARGET: encode and decode are microsecond-scale; a seed server packs
//! thousands of configurations per second without noticing.
//!
//! Run with: cargo bench --package warpseed_layout --bench layout_codec_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use warpseed_layout::{
    ItemLossMode, KeyHuntMode, LayoutConfiguration, PickupQuantities,
    StartingLocation, TeleporterMode, TrickLevel,
};

fn create_test_configuration() -> LayoutConfiguration {
    LayoutConfiguration {
        trick_level: TrickLevel::Hard,
        key_hunt: KeyHuntMode::FixedCount(7),
        teleporters: TeleporterMode::Randomized,
        pickup_quantities: PickupQuantities::new([25, 6, 4]).unwrap(),
        starting_location: StartingLocation::custom(42),
        item_loss: ItemLossMode::Disabled,
    }
}

fn benchmark_encode(c: &mut Criterion) {
    let configuration = create_test_configuration();

    c.bench_function("encode_layout_configuration", |b| {
        b.iter(|| black_box(configuration).encode());
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let encoded = create_test_configuration().encode();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("decode_layout_configuration", |b| {
        b.iter(|| LayoutConfiguration::decode(black_box(&encoded)).unwrap());
    });
    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let configuration = create_test_configuration();

    c.bench_function("round_trip_layout_configuration", |b| {
        b.iter(|| {
            let encoded = black_box(configuration).encode();
            LayoutConfiguration::decode(&encoded).unwrap()
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_round_trip
);
criterion_main!(benches);
