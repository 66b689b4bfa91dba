// benches/tick.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spinq::{EnvironmentModel, SpinEngine};

fn tick_benchmark(c: &mut Criterion) {
    let mut env = EnvironmentModel::new();
    env.set_temperature(100.0);
    env.set_field(1.0);
    let snapshot = env.snapshot();

    let mut engine = SpinEngine::with_seed(1);
    c.bench_function("evolve_and_decohere_tick", |b| {
        b.iter(|| {
            engine.evolve(black_box(1.0), true);
            engine.apply_decoherence(black_box(1.0), &snapshot);
        })
    });
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
