//! Benchmark for the in-memory validator registration datastore
//!
//! Target: 100K registration lookups/sec under concurrent saves

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relay_datastore::{
    Address, BlsSignature, Datastore, MemoryDatastore, PublicKey, SignedValidatorRegistration,
    ValidatorRegistration,
};
use std::sync::Arc;

fn registration(index: u32) -> SignedValidatorRegistration {
    let mut pubkey = PublicKey::ZERO;
    pubkey[..4].copy_from_slice(&index.to_be_bytes());
    SignedValidatorRegistration::new(
        ValidatorRegistration::new(pubkey, Address::repeat_byte(0xaa), 30_000_000, index as u64),
        BlsSignature::repeat_byte(0xbb),
    )
}

fn bench_save_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_datastore");
    group.throughput(Throughput::Elements(1));

    group.bench_function("save_validator_registration", |b| {
        let store = MemoryDatastore::new();
        let mut counter = 0u32;

        b.iter(|| {
            counter = counter.wrapping_add(1);
            let _ = store.save_validator_registration(black_box(registration(counter % 100_000)));
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_datastore");
    group.throughput(Throughput::Elements(1));

    // Pre-register validators
    let store = MemoryDatastore::with_capacity(10_000);
    let _ = store.save_validator_registrations((0..10_000).map(registration).collect());

    group.bench_function("get_validator_registration_hit", |b| {
        let mut counter = 0u32;
        b.iter(|| {
            counter = counter.wrapping_add(1);
            let pubkey = *registration(counter % 10_000).pubkey();
            let _ = store.get_validator_registration(black_box(&pubkey));
        });
    });

    group.bench_function("get_validator_registration_miss", |b| {
        let pubkey = PublicKey::repeat_byte(0xff);
        b.iter(|| {
            let _ = store.get_validator_registration(black_box(&pubkey));
        });
    });

    group.finish();
}

fn bench_save_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_datastore");
    group.throughput(Throughput::Elements(500));

    let store = MemoryDatastore::new();
    let batch: Vec<_> = (0..500).map(registration).collect();

    group.bench_function("save_validator_registrations_500", |b| {
        b.iter(|| {
            let _ = store.save_validator_registrations(black_box(batch.clone()));
        });
    });

    group.finish();
}

fn bench_concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_datastore");
    group.throughput(Throughput::Elements(100));

    let store = Arc::new(MemoryDatastore::new());
    let _ = store.save_validator_registrations((0..1000).map(registration).collect());

    let rt = tokio::runtime::Runtime::new().unwrap();

    group.bench_function("concurrent_100_mixed", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut handles = Vec::new();
                for i in 0..100u32 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        let reg = registration(i % 1000);
                        if i % 10 == 0 {
                            let _ = store.save_validator_registration(reg);
                        } else {
                            let _ = store.get_validator_registration(reg.pubkey());
                        }
                    }));
                }
                for handle in handles {
                    let _ = handle.await;
                }
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_save_single,
    bench_get,
    bench_save_batch,
    bench_concurrent_mixed,
);
criterion_main!(benches);
