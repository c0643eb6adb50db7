use std::hint::black_box;

use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use dijkstra::generator::GraphCase;
use dijkstra::generator::generate_case;
use dijkstra::run_shortest_paths;

const CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::AlmostLine,
    GraphCase::GridRandom,
    GraphCase::DisconnectedClusters,
];

const SIZES: [usize; 3] = [1_024, 8_192, 32_768];

fn bench_dijkstra(c: &mut Criterion) {
    for case in CASES {
        let mut group = c.benchmark_group(format!("dijkstra/{}", case.label()));

        for &size in &SIZES {
            if size <= 1_024 {
                apply_small_runtime_config(&mut group);
            } else {
                apply_medium_runtime_config(&mut group);
            }

            let seed = 0x5EED_2026 ^ ((size as u64) << 7) ^ (case as u64);
            let input = generate_case(case, size, seed);

            group.bench_function(BenchmarkId::new("binary_heap", size), |bencher| {
                bencher.iter(|| {
                    let paths = run_shortest_paths(&input.graph, input.source)
                        .expect("generated input is well-formed");
                    black_box(paths);
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
