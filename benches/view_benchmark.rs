use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use umroh_itinerary::models::ActivityType;
use umroh_itinerary::services::activity_store::{toggle_activity, ActivityStore};
use umroh_itinerary::services::itinerary::seed_activities;
use umroh_itinerary::services::{view, ViewFilter};
use umroh_itinerary::storage::{keys, KeyValueStore, MemoryStore};

fn benchmark_view(c: &mut Criterion) {
    // Every third activity checked off
    let activities = seed_activities()
        .iter()
        .step_by(3)
        .fold(seed_activities(), |acc, a| toggle_activity(&acc, &a.id));

    let mut group = c.benchmark_group("view");

    group.bench_function("unfiltered", |b| {
        b.iter(|| view(black_box(&activities), black_box(&ViewFilter::default())))
    });

    let narrow = ViewFilter {
        day: Some(6),
        kind: Some(ActivityType::Ritual),
        show_completed: false,
    };
    group.bench_function("day_and_type_hide_completed", |b| {
        b.iter(|| view(black_box(&activities), black_box(&narrow)))
    });

    group.finish();
}

fn benchmark_snapshot_load(c: &mut Criterion) {
    // Persist a snapshot once, then measure loading it back
    let mut store = ActivityStore::load(MemoryStore::new());
    store.toggle("6-9");
    let snapshot = store
        .into_inner()
        .get(keys::ACTIVITY_SNAPSHOT)
        .expect("Snapshot was not persisted");

    c.bench_function("load_snapshot", |b| {
        b.iter(|| {
            let mut kv = MemoryStore::new();
            kv.set(keys::ACTIVITY_SNAPSHOT, black_box(snapshot.clone()), None);
            ActivityStore::load(kv)
        })
    });
}

criterion_group!(benches, benchmark_view, benchmark_snapshot_load);
criterion_main!(benches);
