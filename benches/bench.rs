// Criterion benchmarks for Gathr Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gathr_engine::core::{select_recipients, similarity_score, Recommender};
use gathr_engine::models::{ConnectionCandidate, EventCandidate};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRAIT_POOL: [&str; 8] = [
    "creative",
    "social",
    "adventurous",
    "analytical",
    "curious",
    "reserved",
    "outgoing",
    "pragmatic",
];

fn personality() -> Vec<String> {
    vec![
        "creative".to_string(),
        "social".to_string(),
        "adventurous".to_string(),
    ]
}

fn create_event(id: usize) -> EventCandidate {
    EventCandidate {
        event_id: id.to_string(),
        categories: vec![
            TRAIT_POOL[id % TRAIT_POOL.len()].to_string(),
            TRAIT_POOL[(id + 3) % TRAIT_POOL.len()].to_string(),
        ],
    }
}

fn create_candidate(id: usize) -> ConnectionCandidate {
    ConnectionCandidate {
        user_id: id.to_string(),
        personality_tags: vec![
            TRAIT_POOL[id % TRAIT_POOL.len()].to_string(),
            TRAIT_POOL[(id + 1) % TRAIT_POOL.len()].to_string(),
            TRAIT_POOL[(id + 5) % TRAIT_POOL.len()].to_string(),
        ],
    }
}

fn bench_similarity_score(c: &mut Criterion) {
    let traits = personality();
    let categories = vec!["live music".to_string(), "street food".to_string()];

    c.bench_function("similarity_score", |b| {
        b.iter(|| similarity_score(black_box(&traits), black_box(&categories)));
    });
}

fn bench_recommend_events(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let traits = personality();

    let mut group = c.benchmark_group("recommend_events");

    for event_count in [10, 50, 100, 500, 1000].iter() {
        let events: Vec<EventCandidate> = (0..*event_count).map(create_event).collect();

        group.bench_with_input(
            BenchmarkId::new("events", event_count),
            event_count,
            |b, _| {
                b.iter(|| recommender.recommend_events(black_box(&traits), black_box(&events)));
            },
        );
    }

    group.finish();
}

fn bench_recommend_connections(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let traits = personality();

    let mut group = c.benchmark_group("recommend_connections");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<ConnectionCandidate> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    recommender.recommend_connections(black_box(&traits), black_box(&candidates))
                });
            },
        );
    }

    group.finish();
}

fn bench_select_recipients(c: &mut Criterion) {
    let attendees: Vec<String> = (0..1000).map(|i| format!("user{}", i)).collect();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("select_recipients_1000", |b| {
        b.iter(|| select_recipients(black_box(&attendees), 10, 1, &mut rng));
    });
}

criterion_group!(
    benches,
    bench_similarity_score,
    bench_recommend_events,
    bench_recommend_connections,
    bench_select_recipients
);

criterion_main!(benches);
