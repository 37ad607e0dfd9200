use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polar_common::{bit_reverse, create_code_parameters, format_packed_bits, Msb0Unpacker};

fn bench_code_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_parameters");

    for power in [6u32, 10, 14] {
        let n = 1usize << power;
        let frozen: Vec<usize> = (0..n / 2).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &frozen, |b, frozen| {
            b.iter(|| create_code_parameters(black_box(n), n / 2, frozen.clone()))
        });
    }

    group.finish();
}

fn bench_bit_reverse(c: &mut Criterion) {
    c.bench_function("bit_reverse_10_bits", |b| {
        b.iter(|| {
            for value in 0..1024u32 {
                black_box(bit_reverse(black_box(value), 10).ok());
            }
        })
    });
}

fn bench_format_packed(c: &mut Criterion) {
    let buffer = vec![0xA5u8; 256];
    c.bench_function("format_packed_256_bytes", |b| {
        b.iter(|| format_packed_bits(black_box(&buffer), buffer.len(), &Msb0Unpacker))
    });
}

criterion_group!(
    benches,
    bench_code_parameters,
    bench_bit_reverse,
    bench_format_packed
);
criterion_main!(benches);
