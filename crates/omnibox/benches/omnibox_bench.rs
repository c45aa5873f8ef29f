use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use omnibox::{Candidate, MatchOffset, classify, decorate, search_terms};

const INPUTS: &[&str] = &[
    "example.com",
    "hello world",
    "localhost:8080",
    "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
    "/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/readme",
    "ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12ab12",
];

fn make_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            Candidate::new(
                format!("https://docs.example/serde/{i}/index.html"),
                format!("Serde documentation page {i}"),
            )
            .with_match_offsets(vec![
                MatchOffset::new(0, 0, 8, 4),
                MatchOffset::new(0, 1, 22, 5),
                MatchOffset::new(1, 1, 0, 5),
            ])
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("bench_classify", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(classify(black_box(input)));
            }
        });
    });
}

fn bench_decorate(c: &mut Criterion) {
    let terms = search_terms("docs serde");
    let candidates = make_candidates(256);
    c.bench_function("bench_decorate_256", |b| {
        b.iter_batched(
            || candidates.clone(),
            |mut list| {
                for candidate in &mut list {
                    decorate(&terms, candidate);
                }
                black_box(list.len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_classify, bench_decorate);
criterion_main!(benches);
