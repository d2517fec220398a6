use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use appmeta::{App, Config, Maintainer, Release, Store, StructQueryIsolation};
use rand::Rng;

const WORDS: [&str; 8] = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];

/// Helper to create test records
fn create_test_app(id: u64, title_words: usize) -> App {
    let mut rng = rand::thread_rng();
    let title: String = (0..title_words)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ");

    App::new(&title)
        .with_company(&format!("company_{}", id % 10))
        .with_maintainer(&format!("maintainer {}", id % 25), "team@example.com")
        .with_maintainer("release bot", "bot@example.com")
        .with_release(Release::new(
            &format!("v{}", id % 5),
            Maintainer::new("author", &format!("author{}@example.com", id % 3)),
        ))
}

fn populated_store(config: Config, count: u64) -> Store {
    let store = Store::with_config(config);
    for i in 0..count {
        let app = create_test_app(i, 8);
        let raw = serde_json::to_vec(&app).unwrap();
        store.insert(&app, raw).unwrap();
    }
    store
}

/// Benchmark single record insertion
fn bench_single_insert(c: &mut Criterion) {
    let store = Store::new();

    c.bench_function("single_record_insert", |b| {
        let mut id = 0;
        b.iter(|| {
            let app = create_test_app(id, 8);
            store.insert(&app, "raw").unwrap();
            id += 1;
        });
    });
}

/// Benchmark insertion by title length
fn bench_insert_title_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_title_length");

    for words in [1, 4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(words), words, |b, &words| {
            let store = Store::new();
            let mut id = 0u64;
            b.iter(|| {
                let app = create_test_app(id, words);
                store.insert(&app, "raw").unwrap();
                id += 1;
            });
        });
    }
    group.finish();
}

/// Benchmark single-path and structural search
fn bench_search(c: &mut Criterion) {
    let store = populated_store(Config::default(), 10_000);
    let snapshot = populated_store(
        Config::default().with_struct_query_isolation(StructQueryIsolation::Snapshot),
        10_000,
    );

    let mut group = c.benchmark_group("search");

    group.bench_function("title_word", |b| {
        b.iter(|| store.search(black_box("fox"), &["title"]));
    });

    group.bench_function("nested_sequence_field", |b| {
        b.iter(|| store.search(black_box("maintainer"), &["maintainers", "name"]));
    });

    group.bench_function("unknown_field", |b| {
        b.iter(|| store.search(black_box("fox"), &["nope"]));
    });

    let query = App::new("fox")
        .with_company("company_3")
        .with_release(Release::new("v3", Maintainer::default()));

    group.bench_function("struct_per_path", |b| {
        b.iter(|| store.search_struct(black_box(&query)).unwrap());
    });

    group.bench_function("struct_snapshot", |b| {
        b.iter(|| snapshot.search_struct(black_box(&query)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_single_insert, bench_insert_title_length, bench_search);
criterion_main!(benches);
