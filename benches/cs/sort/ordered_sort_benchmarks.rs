use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use warmup_arrays::array::merge_sorted_arrays;
use warmup_arrays::sort::{SortConfig, SortDirection};

fn shuffled(len: i32, seed: u64) -> Vec<i32> {
    let mut data: Vec<i32> = (0..len).collect();
    data.shuffle(&mut StdRng::seed_from_u64(seed));
    data
}

fn bench_ordered_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_sort");
    for &size in &[100, 1_000, 10_000] {
        let random = shuffled(size, 42);
        let presorted: Vec<i32> = (0..size).collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let config = SortConfig::new().direction(direction).seed(7);
            group.bench_with_input(
                BenchmarkId::new(format!("random_{direction:?}"), size),
                &random,
                |b, data| {
                    b.iter(|| {
                        let mut v = data.clone();
                        config.bind(&mut v).sort();
                        black_box(v)
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("presorted", size), &presorted, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                SortConfig::new().seed(7).bind(&mut v).sort();
                black_box(v)
            })
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let evens: Vec<i32> = (0..5_000).map(|x| x * 2).collect();
    let odds: Vec<i32> = (0..5_000).map(|x| x * 2 + 1).collect();
    c.bench_function("merge_sorted_arrays_10k", |b| {
        b.iter(|| merge_sorted_arrays(black_box(&evens), black_box(&odds)))
    });
}

criterion_group!(benches, bench_ordered_sort, bench_merge);
criterion_main!(benches);
