//! Benchmarks for the baserunning state machine.
//!
//! A single transition is the hot path of every game and season replay.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use diamond::report::rules_table;
use diamond::{BaseOccupancy, BaserunningState, Outcome, PlayerId, transition};

fn bench_single_transition(c: &mut Criterion) {
    let before = BaserunningState::with_placeholder_runners(1, BaseOccupancy::LOADED).unwrap();
    let batter = PlayerId::from("batter");

    c.bench_function("transition_bases_loaded_single", |b| {
        b.iter(|| {
            let result = transition(black_box(&before), black_box(Outcome::Single), &batter);
            black_box(result)
        });
    });
}

fn bench_every_start_state(c: &mut Criterion) {
    // All 17 outcomes from all 24 start states
    let batter = PlayerId::from("batter");
    let starts: Vec<BaserunningState> = (0..3)
        .flat_map(|outs| {
            BaseOccupancy::ALL
                .into_iter()
                .map(move |bases| BaserunningState::with_placeholder_runners(outs, bases).unwrap())
        })
        .collect();

    c.bench_function("transition_408_cells", |b| {
        b.iter(|| {
            for before in &starts {
                for outcome in Outcome::ALL {
                    black_box(transition(black_box(before), outcome, &batter));
                }
            }
        });
    });
}

fn bench_rules_table(c: &mut Criterion) {
    c.bench_function("rules_table", |b| b.iter(|| black_box(rules_table())));
}

criterion_group!(benches, bench_single_transition, bench_every_start_state, bench_rules_table);
criterion_main!(benches);
