// Criterion benchmarks for the Affinity compatibility engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use affinity_engine::core::haversine_miles;
use affinity_engine::models::{
    AccountType, Activity, AgeRange, ExperienceLevel, Location, Membership, MembershipTier,
    Preferences, UserProfile, Verification, VerificationLevel,
};
use affinity_engine::{CompatibilityEngine, MatchRanker};
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

fn tags(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn candidate(id: usize, lat: f64, lon: f64) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        account_type: match id % 3 {
            0 => AccountType::Individual,
            1 => AccountType::Couple,
            _ => AccountType::Group,
        },
        location: Location {
            latitude: lat,
            longitude: lon,
            city: format!("City {}", id % 20),
            country: "US".to_string(),
        },
        preferences: Preferences {
            looking_for: tags(&["friendship", "dating"]),
            experience: ExperienceLevel::Intermediate,
            age_range: AgeRange { min: 25, max: 40 },
            interests: tags(&["salsa", "wine", "travel"]),
            lifestyle: tags(&["nightlife"]),
        },
        verification: Verification {
            level: if id % 3 == 0 {
                VerificationLevel::Premium
            } else {
                VerificationLevel::Basic
            },
            verified: id % 2 == 0,
            trust_score: (id % 100) as f64,
        },
        activity: Activity {
            last_active: Utc::now(),
            response_rate: (id % 100) as f64,
            profile_views: (id * 37 % 2000) as u32,
            event_attendance: (id % 12) as u32,
        },
        membership: Membership {
            tier: match id % 4 {
                0 => MembershipTier::Vip,
                1 => MembershipTier::Premium,
                _ => MembershipTier::Free,
            },
            since: Utc::now(),
        },
    }
}

fn viewer() -> UserProfile {
    candidate(0, 25.7617, -80.1918)
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_miles", |b| {
        b.iter(|| {
            haversine_miles(
                black_box(25.7617),
                black_box(-80.1918),
                black_box(28.5384),
                black_box(-81.3789),
            )
        });
    });
}

fn bench_compare(c: &mut Criterion) {
    let engine = CompatibilityEngine::with_default_rules();
    let viewer = viewer();
    let candidate = candidate(7, 26.1224, -80.1373);

    c.bench_function("compare_single_pair", |b| {
        b.iter(|| engine.compare(black_box(&viewer), black_box(&candidate)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = MatchRanker::new(CompatibilityEngine::with_default_rules());
    let viewer = viewer();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.01) % 5.0;
                let lon_offset = (i as f64 * 0.01) % 5.0;
                candidate(i, 25.7617 + lat_offset, -80.1918 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker.rank(black_box(&viewer), black_box(&candidates), black_box(20))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine, bench_compare, bench_ranking);
criterion_main!(benches);
