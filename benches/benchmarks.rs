//! Performance benchmarks for fleetdex
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fleetdex::index::{Car, IndexedDocument, reindex_documents};
use fleetdex::query::MemoryStore;
use fleetdex::utils::ReindexProgress;

/// Create a fleet of cars with varied models, plates and colors
fn create_fleet(size: usize) -> Vec<Car> {
    let models = ["Tesla Model S", "Toyota Corolla", "Škoda Octavia RS", "VW Golf-GTI", "Fiat 500"];
    let colors = ["Red", "Deep Blue", "Pearl White", "Black"];

    (0..size)
        .map(|i| Car {
            id: format!("car-{:05}", i),
            model: Some(models[i % models.len()].to_string()),
            plate: Some(format!("WX-{:04}_{}", i, i % 7)),
            color: Some(colors[i % colors.len()].to_string()),
            ..Default::default()
        })
        .collect()
}

fn bench_keyword_generation(c: &mut Criterion) {
    let fields = vec![
        "Tesla Model S",
        "osk.r.pnk@gmail.com",
        "email+test@gmail.com",
        "A very long rental note with many words, some-hyphenated, some_underscored.",
    ];

    let mut group = c.benchmark_group("keyword_generation");
    for field in fields {
        group.bench_with_input(BenchmarkId::from_parameter(field), &field, |b, &f| {
            b.iter(|| fleetdex::index::generate_search_keywords(black_box(f)))
        });
    }
    group.finish();
}

fn bench_query_terms(c: &mut Criterion) {
    let queries = vec![
        "tesla",
        "tesla model s",
        "osk.r.pnk@gmail.com",
        "a-b.c_d e-f.g_h i-j.k_l m-n.o_p q-r.s_t u-v.w_x y-z",
    ];

    let mut group = c.benchmark_group("query_terms");
    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &q| {
            b.iter(|| fleetdex::query::prepare_search_terms(black_box(q)))
        });
    }
    group.finish();
}

fn bench_reindex(c: &mut Criterion) {
    let fleet: Vec<IndexedDocument<Car>> = create_fleet(10_000)
        .into_iter()
        .map(IndexedDocument::new)
        .collect();

    let mut group = c.benchmark_group("reindex_10k");
    for parallel in [false, true] {
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &parallel, |b, &p| {
            b.iter(|| {
                let progress = ReindexProgress::new(0, false);
                reindex_documents(black_box(fleet.clone()), p, &progress)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let store: MemoryStore<Car> = create_fleet(10_000).into_iter().collect();

    let mut group = c.benchmark_group("search_10k");
    group.bench_function("single_word", |b| {
        b.iter(|| store.search(black_box("tesla"), 50))
    });
    group.bench_function("plate", |b| {
        b.iter(|| store.search(black_box("wx-0042_0"), 50))
    });
    group.bench_function("miss", |b| {
        b.iter(|| store.search(black_box("lamborghini urus"), 50))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_keyword_generation,
    bench_query_terms,
    bench_reindex,
    bench_search,
);

criterion_main!(benches);
