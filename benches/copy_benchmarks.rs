//! Micro-benchmarks for registry dispatch and copy execution.
//!
//! Measures the three paths a caller pays for: exact-match lookup, the
//! structural-fallback decision, and lookup-plus-invoke through the typed
//! API. Run with `cargo bench`.

use std::hint::black_box;

use copycast::{CopyRegistry, MemAddr, TypeDesc};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_lookup(c: &mut Criterion) {
    let reg = CopyRegistry::new();
    let dest = TypeDesc::of::<i32>();
    let src = TypeDesc::of::<i64>();
    let arr = TypeDesc::of::<[u8; 32]>();
    let missing = TypeDesc::of::<String>();

    c.bench_function("get_exact", |b| {
        b.iter(|| reg.get(black_box(&dest), black_box(&src)))
    });

    c.bench_function("get_fallback", |b| {
        b.iter(|| reg.get(black_box(&arr), black_box(&arr)))
    });

    c.bench_function("get_absent", |b| {
        b.iter(|| reg.get(black_box(&dest), black_box(&missing)))
    });
}

fn bench_copy(c: &mut Criterion) {
    let reg = CopyRegistry::new();

    c.bench_function("copy_i64_to_i32", |b| {
        let src: i64 = 123456789;
        let mut dst: i32 = 0;
        b.iter(|| {
            reg.copy(black_box(&mut dst), black_box(&src)).unwrap();
            dst
        })
    });

    c.bench_function("invoke_resolved_op", |b| {
        let op = reg
            .get(&TypeDesc::of::<i32>(), &TypeDesc::of::<i64>())
            .unwrap();
        let src: i64 = 123456789;
        let mut dst: i32 = 0;
        b.iter(|| {
            op(MemAddr::of_mut(&mut dst), MemAddr::of(&src));
            dst
        })
    });

    c.bench_function("raw_copy_32_bytes", |b| {
        let arr = TypeDesc::of::<[u8; 32]>();
        let op = reg.get(&arr, &arr).unwrap();
        let src: [u8; 32] = [7; 32];
        let mut dst: [u8; 32] = [0; 32];
        b.iter(|| {
            op(MemAddr::of_mut(&mut dst), MemAddr::of(&src));
            dst
        })
    });
}

criterion_group!(benches, bench_lookup, bench_copy);
criterion_main!(benches);
