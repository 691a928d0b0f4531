use std::hint::black_box;
use bencher::{ROUTE_CASES, ROUTE_TABLE};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use micro_router::{PathValues, TrieRouter};

fn create_router() -> TrieRouter<usize> {
    let mut router = TrieRouter::new();
    for (index, (method, path)) in ROUTE_TABLE.iter().enumerate() {
        router.add_route(method, path, index).expect("benchmark routes should be valid");
    }
    router
}

fn benchmark_find_handler(criterion: &mut Criterion) {
    let router = create_router();
    let mut group = criterion.benchmark_group("find_handler");

    for case in ROUTE_CASES {
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), case, |b, case| {
            b.iter(|| {
                let mut values = PathValues::new();
                let result = router.find_handler(case.method(), case.path(), Some(&mut values)).copied();
                black_box((result, values));
            });
        });
    }

    group.finish();
}

fn benchmark_path_methods(criterion: &mut Criterion) {
    let router = create_router();
    let mut group = criterion.benchmark_group("path_methods");

    for case in ROUTE_CASES {
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), case, |b, case| {
            b.iter(|| black_box(router.path_methods(case.path())));
        });
    }

    group.finish();
}

fn benchmark_add_route(criterion: &mut Criterion) {
    criterion.bench_function("add_route_table", |b| b.iter(|| black_box(create_router())));
}

criterion_group!(matcher, benchmark_find_handler, benchmark_path_methods, benchmark_add_route);
criterion_main!(matcher);
