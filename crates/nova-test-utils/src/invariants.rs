//! Assertions for properties that hold on every run.

use nova_engine::{CoverageMap, SimConfig, SimulationEngine, StepResult};
use nova_space::HitCountGrid;

/// Every cell count in `after` is at least its count in `before`.
pub fn assert_hits_monotonic(before: &HitCountGrid, after: &HitCountGrid) {
    assert_eq!(before.shape(), after.shape(), "hit grid shape changed");
    for (flat, (&b, &a)) in before.as_slice().iter().zip(after.as_slice()).enumerate() {
        assert!(a >= b, "cell {flat} decreased from {b} to {a}");
    }
}

/// Fractions lie in `[0, 1]` and never increase with the threshold.
pub fn assert_coverage_ordered(coverage: &CoverageMap) {
    let mut prev = f64::INFINITY;
    for (&t, &c) in coverage {
        assert!((0.0..=1.0).contains(&c), "coverage[{t}] = {c} out of range");
        assert!(c <= prev, "coverage[{t}] = {c} exceeds lower threshold ({prev})");
        prev = c;
    }
}

/// Living count matches the registry, and no civilization died before
/// it was born or in its birth interval.
pub fn assert_civilizations_consistent(engine: &SimulationEngine) {
    let civs = engine.civilizations();
    let extinct = civs.iter().filter(|c| c.is_extinct()).count();
    assert_eq!(civs.living_count(), civs.total_spawned() - extinct);
    for civ in civs.iter() {
        if let Some(died) = civ.extinction_interval() {
            assert!(
                died > civ.birth_interval,
                "civ {} born in {} died in {}",
                civ.id,
                civ.birth_interval,
                died
            );
        }
    }
}

/// Run `config` to completion, checking hit-count monotonicity and
/// coverage ordering after every step.
///
/// Returns the finished engine and all step results.
pub fn run_checked(config: SimConfig) -> (SimulationEngine, Vec<StepResult>) {
    let mut engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => panic!("fixture config rejected: {e}"),
    };
    let mut results = Vec::new();
    let mut prev_hits = engine.hit_count().clone();
    let mut prev_coverage: Option<CoverageMap> = None;

    while let Some(result) = engine.step().into_result() {
        assert_hits_monotonic(&prev_hits, engine.hit_count());
        assert_coverage_ordered(&result.coverage);
        if let Some(prev) = &prev_coverage {
            for (t, &c) in &result.coverage {
                assert!(c >= prev[t], "coverage[{t}] fell from {} to {c}", prev[t]);
            }
        }
        prev_hits = engine.hit_count().clone();
        prev_coverage = Some(result.coverage.clone());
        results.push(result);
    }
    (engine, results)
}
