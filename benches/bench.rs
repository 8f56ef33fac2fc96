use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use boardwalk::navigation::{NavigationGraph, shortest_path};
use boardwalk::sentence::{ResolverConfig, SentenceResolver};
use boardwalk::table::{EffortRecord, EffortTable, Technique};

fn chain_graph(pages: usize, fanout: usize) -> NavigationGraph {
    let mut graph = NavigationGraph::new();
    for i in 0..pages {
        for j in 1..=fanout {
            let target = i + j;
            if target < pages {
                graph.add_jump(&format!("Page{i}"), &format!("Page{target}"));
            }
        }
    }
    graph
}

fn synthetic_table(entries: usize) -> EffortTable {
    let mut records = Vec::with_capacity(entries + 1);
    for i in 0..entries {
        records.push(EffortRecord::new(
            format!("word{i}"),
            format!("Home -> Page{}", i % 20),
            (i % 10) as f64 * 0.3 + 0.5,
            (i % 10) as f64 * 0.7 + 0.5,
            i % 4 + 1,
        ));
    }
    records.push(EffortRecord::new(
        "i would like some water please",
        "Home -> Phrases",
        3.5,
        6.0,
        2,
    ));
    EffortTable::from_records(records)
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = chain_graph(500, 3);

    let mut group = c.benchmark_group("navigation");
    group.bench_function("shortest_path_500_pages", |b| {
        b.iter(|| {
            black_box(shortest_path(
                black_box(&graph),
                black_box("Page0"),
                black_box("Page499"),
            ))
        })
    });
    group.bench_function("shortest_path_unreachable", |b| {
        b.iter(|| {
            black_box(shortest_path(
                black_box(&graph),
                black_box("Page499"),
                black_box("Page0"),
            ))
        })
    });
    group.finish();
}

fn bench_sentence_resolution(c: &mut Criterion) {
    let table = synthetic_table(2000);
    let resolver = SentenceResolver::new(&table);
    let spelling = SentenceResolver::with_config(
        &table,
        ResolverConfig {
            spelling_page: Some("word0".to_string()),
            ..Default::default()
        },
    );

    let mut group = c.benchmark_group("sentence");
    group.bench_function("exact_words_2000_entries", |b| {
        b.iter(|| {
            black_box(resolver.resolve(
                black_box("word1 word500 word1999"),
                black_box(Technique::Direct),
            ))
        })
    });
    group.bench_function("fuzzy_phrase_2000_entries", |b| {
        b.iter(|| {
            black_box(resolver.resolve(
                black_box("i would like sum water please"),
                black_box(Technique::Direct),
            ))
        })
    });
    group.bench_function("spelling_fallback", |b| {
        b.iter(|| {
            black_box(
                spelling.resolve(black_box("unmodeled"), black_box(Technique::Scanning)),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_sentence_resolution);
criterion_main!(benches);
