use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flexpolyline_io::{decode, PointEncoder, RawPoint};

struct Xorshift32(u32);

impl Iterator for Xorshift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        Some(self.0)
    }
}

/// Generate a random walk resembling a driving route.
fn random_route(count: usize, rng: &mut Xorshift32) -> String {
    let mut point = RawPoint::new(5010228, 869821);
    (0..count)
        .map(|_| {
            let step = rng.next().unwrap();
            point.lat += i64::from(step & 0x3ff) - 0x200;
            point.lng += i64::from((step >> 10) & 0x3ff) - 0x200;
            point
        })
        .collect::<PointEncoder>()
        .take_string()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &len in &[4, 256, 65536] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("decode", len), move |b| {
            let st = random_route(len, &mut Xorshift32(42));
            b.iter(|| decode(&st).unwrap());
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
