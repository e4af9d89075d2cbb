use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use checksum_rs::hash::{ChecksumAlgorithm, digest_bytes};

/// Create test data of the given size for benchmarking.
fn make_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn bench_digest_bytes(c: &mut Criterion) {
    let sizes = [1024, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024];

    let mut group = c.benchmark_group("digest_bytes");
    for &size in &sizes {
        let data = make_test_data(size);
        let label = if size >= 1024 * 1024 {
            format!("{}MB", size / (1024 * 1024))
        } else {
            format!("{}KB", size / 1024)
        };

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha256", &label), &data, |b, data| {
            b.iter(|| digest_bytes(ChecksumAlgorithm::Sha256, data));
        });

        group.bench_with_input(BenchmarkId::new("sha1", &label), &data, |b, data| {
            b.iter(|| digest_bytes(ChecksumAlgorithm::Sha1, data));
        });

        group.bench_with_input(BenchmarkId::new("md5", &label), &data, |b, data| {
            b.iter(|| digest_bytes(ChecksumAlgorithm::Md5, data));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_digest_bytes);
criterion_main!(benches);
