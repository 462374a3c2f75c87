//! Benchmarks for example generation and scoring

#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spelling_bee::{evaluate, Split, SpellingBee, Task, WordCorpus};
use std::sync::Arc;

fn create_corpus(n: usize) -> Arc<WordCorpus> {
    let words = (0..n).map(|i| {
        let mut word = String::from("strawberry");
        for digit in i.to_string().bytes() {
            word.push(char::from(b'a' + (digit - b'0')));
        }
        word
    });
    Arc::new(WordCorpus::from_lines(words).expect("benchmark corpus is non-empty"))
}

fn benchmark_get_example(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_example");

    for (label, use_mistakes) in [("plain", false), ("mistakes", true)] {
        let task = SpellingBee::new(create_corpus(10_000), Split::Train, 1000, use_mistakes)
            .with_mistake_probability(1.0)
            .expect("valid probability");

        group.bench_function(format!("{label}_100_examples"), |b| {
            b.iter(|| {
                for index in 0..100 {
                    let _ = black_box(task.get_example(black_box(index)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let task = SpellingBee::new(create_corpus(1000), Split::Test, 100, false);
    let conversations: Vec<_> = task
        .examples()
        .collect::<Result<Vec<_>, _>>()
        .expect("examples generate");

    c.bench_function("evaluate_100_candidates", |b| {
        b.iter(|| {
            for conversation in &conversations {
                let _ = black_box(evaluate(conversation, black_box("so the answer is #### 2")));
            }
        });
    });
}

criterion_group!(benches, benchmark_get_example, benchmark_evaluate);
criterion_main!(benches);
