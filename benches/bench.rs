// Criterion benchmarks for the hot discovery paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sideline_algo::core::{
    compat::evaluate_candidate,
    distance::{calculate_bounding_box, haversine_distance},
};
use sideline_algo::models::{Profile, SkillLevel, SportEntry};
use std::collections::HashMap;

const TENNIS: i64 = 1;
const RUNNING: i64 = 2;

fn sport_names() -> HashMap<i64, String> {
    HashMap::from([
        (TENNIS, "Tennis".to_string()),
        (RUNNING, "Running".to_string()),
    ])
}

fn create_candidate(id: usize, lat: f64, lon: f64) -> Profile {
    Profile {
        user_id: id.to_string(),
        first_name: format!("User {}", id),
        age: 25 + (id % 10) as u8,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        city: "Turin".to_string(),
        latitude: lat,
        longitude: lon,
        bio: String::new(),
        photo_url: None,
        max_distance_km: 50,
        sports: vec![SportEntry {
            sport_id: if id % 3 == 0 { RUNNING } else { TENNIS },
            level: match id % 5 {
                0 => SkillLevel::Beginner,
                1 => SkillLevel::Intermediate,
                2 => SkillLevel::Advanced,
                3 => SkillLevel::Competitive,
                _ => SkillLevel::Expert,
            },
        }],
        created_at: None,
    }
}

fn create_viewer() -> Profile {
    Profile {
        user_id: "viewer".to_string(),
        first_name: "Viewer".to_string(),
        age: 30,
        gender: "female".to_string(),
        city: "Turin".to_string(),
        latitude: 45.0703,
        longitude: 7.6869,
        bio: String::new(),
        photo_url: None,
        max_distance_km: 50,
        sports: vec![SportEntry {
            sport_id: TENNIS,
            level: SkillLevel::Intermediate,
        }],
        created_at: None,
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(45.0703),
                black_box(7.6869),
                black_box(45.4642),
                black_box(9.1900),
            )
        });
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| calculate_bounding_box(black_box(45.0703), black_box(7.6869), black_box(25.0)));
    });
}

fn bench_evaluate_candidate(c: &mut Criterion) {
    let viewer = create_viewer();
    let candidate = create_candidate(1, 45.12, 7.70);
    let names = sport_names();

    c.bench_function("evaluate_candidate", |b| {
        b.iter(|| {
            evaluate_candidate(
                black_box(&viewer),
                black_box(&candidate),
                black_box(&names),
                black_box(None),
            )
        });
    });
}

fn bench_filter_pool(c: &mut Criterion) {
    let viewer = create_viewer();
    let names = sport_names();

    let mut group = c.benchmark_group("filter_pool");
    for size in [100usize, 1_000, 10_000] {
        let pool: Vec<Profile> = (0..size)
            .map(|i| {
                create_candidate(
                    i,
                    45.0 + (i % 100) as f64 * 0.005,
                    7.6 + (i % 50) as f64 * 0.004,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| {
                let mut cards: Vec<_> = pool
                    .iter()
                    .filter_map(|p| evaluate_candidate(&viewer, p, &names, None))
                    .collect();
                cards.sort_by(|a, b| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| a.user_id.cmp(&b.user_id))
                });
                cards.len()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_bounding_box,
    bench_evaluate_candidate,
    bench_filter_pool
);
criterion_main!(benches);
