//! Byte-order codec benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecp_accel::{
    Mpi, Operand,
    codec::{read_le, write_le},
};
use hex_literal::hex;

fn test_value() -> Mpi {
    let mut value = Mpi::zero();
    read_le(
        &mut value,
        &hex!("64b472da6da554caac3e4e0b13c8445b1a77f459eea84f1f588b5f713d429b51"),
    );
    value
}

fn bench_write_le<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let value = test_value();
    let mut buf = [0u8; 64];
    group.bench_function("write_le", |b| b.iter(|| write_le(&value, &mut buf)));
}

fn bench_read_le<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let bytes = hex!("64b472da6da554caac3e4e0b13c8445b1a77f459eea84f1f588b5f713d429b51");
    let mut value = Mpi::zero();
    group.bench_function("read_le", |b| b.iter(|| read_le(&mut value, &bytes)));
}

fn bench_operand<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let value = test_value();
    let mut operand = Operand::new(8).unwrap();
    let mut out = Mpi::zero();
    group.bench_function("operand load", |b| b.iter(|| operand.load(&value)));
    group.bench_function("operand store", |b| b.iter(|| operand.store(&mut out)));
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    bench_write_le(&mut group);
    bench_read_le(&mut group);
    bench_operand(&mut group);
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
