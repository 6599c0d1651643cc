//! Interval-stepping simulation engine.
//!
//! [`SimulationEngine`] is a two-state machine. It is *running* while
//! `current_interval < num_intervals` and *completed* once the cap is
//! reached. Each [`step()`](SimulationEngine::step) in the running state
//! performs one full interval:
//!
//! 1. draw the interval's supernova count from a Poisson distribution;
//! 2. for each event in turn: sample a centre, stamp the bubble into the
//!    hit counts, and (with civilizations enabled) extinguish every living
//!    civilization inside it;
//! 3. spawn the interval's new civilizations and record the living count;
//! 4. append the coverage fractions for every threshold;
//! 5. advance the interval counter.
//!
//! Newcomers are placed only after every event of the interval has been
//! applied, so an event never kills a civilization born in the same
//! interval. Steps on a completed engine return
//! [`StepOutcome::Completed`] and leave all state untouched.
//!
//! # Ownership model
//!
//! The engine owns its random stream. Every draw comes from one
//! `ChaCha8Rng` seeded at construction, so two engines built from equal
//! configurations and seeds produce identical trajectories. The engine is
//! [`Send`]; all mutation goes through `&mut self`.

use std::fmt;
use std::time::Instant;

use nova_core::IntervalId;
use nova_events::{BubbleStamper, CivilizationRegistry, EventSampler};
use nova_space::{DiskGrid, HitCountGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SimConfig};
use crate::coverage::{CoverageHistory, CoverageMap};
use crate::metrics::StepMetrics;

// Compile-time assertion: SimulationEngine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationEngine>();
    }
};

// ── StepResult ─────────────────────────────────────────────────────

/// Observable outcome of one completed interval.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepResult {
    /// Number of intervals completed, counting this one (1 after the
    /// first step).
    pub interval: IntervalId,
    /// Coverage fraction per threshold, in ascending threshold order.
    pub coverage: CoverageMap,
    /// Living civilizations after this interval; `None` when the
    /// civilization lifecycle is disabled.
    pub civ_count: Option<usize>,
    /// Cumulative supernovae since the start of the run.
    pub supernovae: u64,
}

/// Return value of [`SimulationEngine::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// One interval was simulated.
    Advanced(StepResult),
    /// The interval cap had already been reached; nothing changed.
    Completed,
}

impl StepOutcome {
    /// The step result, if the engine advanced.
    pub fn into_result(self) -> Option<StepResult> {
        match self {
            StepOutcome::Advanced(result) => Some(result),
            StepOutcome::Completed => None,
        }
    }

    /// Whether this outcome signals the terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}

// ── SimulationEngine ───────────────────────────────────────────────

/// Owns all simulation state and advances it one interval per call.
///
/// Created from a [`SimConfig`] via [`new()`](SimulationEngine::new).
///
/// ```
/// use nova_engine::{SimConfig, SimulationEngine};
///
/// let config = SimConfig {
///     num_intervals: 3,
///     radius: 1000.0,
///     thickness: 100.0,
///     ngrid_xy: 20,
///     ngrid_z: 10,
///     seed: Some(1),
///     ..SimConfig::default()
/// };
/// let mut engine = SimulationEngine::new(config).unwrap();
/// let results = engine.run_to_completion();
/// assert_eq!(results.len(), 3);
/// assert!(engine.is_complete());
/// assert!(engine.step().is_completed());
/// ```
pub struct SimulationEngine {
    config: SimConfig,
    seed: u64,
    rng: ChaCha8Rng,
    grid: DiskGrid,
    sampler: EventSampler,
    stamper: BubbleStamper,
    hits: HitCountGrid,
    event_dist: Option<Poisson<f64>>,
    emergence_dist: Option<Poisson<f64>>,
    civs: CivilizationRegistry,
    coverage: CoverageHistory,
    civ_history: Vec<usize>,
    supernova_history: Vec<u64>,
    supernovae: u64,
    current_interval: IntervalId,
    last_metrics: StepMetrics,
}

/// Build a Poisson distribution for `mean`, or `None` for a zero mean.
///
/// A zero-mean draw is always zero, so the engine skips it without
/// consuming randomness.
fn poisson(name: &'static str, mean: f64) -> Result<Option<Poisson<f64>>, ConfigError> {
    if mean == 0.0 {
        return Ok(None);
    }
    Poisson::new(mean)
        .map(Some)
        .map_err(|_| ConfigError::InvalidPoissonMean { name, value: mean })
}

fn draw(dist: Option<&Poisson<f64>>, rng: &mut ChaCha8Rng) -> u64 {
    match dist {
        Some(d) => {
            let n: f64 = d.sample(rng);
            n as u64
        }
        None => 0,
    }
}

impl SimulationEngine {
    /// Validate `config` and build a fresh engine at interval 0.
    ///
    /// When `config.seed` is `None` a seed is drawn from process entropy;
    /// [`seed()`](Self::seed) reports the value in use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any invalid parameter, including grid
    /// geometry rejected by [`DiskGrid::new`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = DiskGrid::new(
            config.radius,
            config.thickness,
            config.ngrid_xy,
            config.ngrid_z,
        )?;
        let stamper = BubbleStamper::new(&grid, config.bubble_r)?;
        let sampler = EventSampler::for_grid(&grid);
        let hits = HitCountGrid::zeroed(&grid);

        let event_dist = poisson("events", config.mean_events())?;
        let emergence_dist = if config.simulate_civilizations {
            poisson("emergence", config.civ_per_interval())?
        } else {
            None
        };

        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);

        let domain_cells = grid.total_domain_cells();
        if domain_cells == 0 {
            warn!(
                ngrid_xy = config.ngrid_xy,
                "no cell centre lies inside the disk; coverage will stay at zero"
            );
        }
        info!(
            seed,
            shape = ?grid.shape(),
            domain_cells,
            window = ?stamper.window(),
            mean_events = config.mean_events(),
            civilizations = config.simulate_civilizations,
            "simulation engine created"
        );

        Ok(Self {
            coverage: CoverageHistory::new(config.max_threshold),
            civ_history: Vec::new(),
            supernova_history: Vec::new(),
            supernovae: 0,
            current_interval: IntervalId::default(),
            last_metrics: StepMetrics::default(),
            civs: CivilizationRegistry::new(),
            config,
            seed,
            rng,
            grid,
            sampler,
            stamper,
            hits,
            event_dist,
            emergence_dist,
        })
    }

    /// Advance one interval, or report completion.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_complete() {
            return StepOutcome::Completed;
        }
        let start = Instant::now();
        let interval = self.current_interval;
        let mut metrics = StepMetrics::default();

        // 1. Event count.
        let num_events = draw(self.event_dist.as_ref(), &mut self.rng);
        metrics.events = num_events;

        // 2. Events, strictly in order.
        let stamp_start = Instant::now();
        for _ in 0..num_events {
            let center = self.sampler.sample(&mut self.rng);
            let report = self.stamper.stamp(&self.grid, &mut self.hits, &center);
            metrics.cells_stamped += report.cells_hit as u64;
            metrics.first_hits += report.first_hits as u64;

            if self.config.simulate_civilizations {
                let killed = self
                    .civs
                    .apply_extinction(&center, self.stamper.bubble_r(), interval);
                metrics.civs_extinguished += killed.len() as u64;
                trace!(
                    x = center.x,
                    y = center.y,
                    z = center.z,
                    cells = report.cells_hit,
                    killed = killed.len(),
                    "supernova"
                );
            } else {
                trace!(
                    x = center.x,
                    y = center.y,
                    z = center.z,
                    cells = report.cells_hit,
                    "supernova"
                );
            }
        }
        self.supernovae += num_events;
        self.supernova_history.push(self.supernovae);
        metrics.stamp_us = stamp_start.elapsed().as_micros() as u64;

        // 3. Civilization emergence.
        let civ_count = if self.config.simulate_civilizations {
            let born = draw(self.emergence_dist.as_ref(), &mut self.rng);
            self.civs
                .spawn(born as usize, &self.sampler, &mut self.rng, interval);
            metrics.civs_spawned = born;
            let living = self.civs.living_count();
            self.civ_history.push(living);
            Some(living)
        } else {
            None
        };

        // 4. Coverage.
        let coverage_start = Instant::now();
        let coverage = self
            .coverage
            .record(&self.hits, self.grid.total_domain_cells());
        metrics.coverage_us = coverage_start.elapsed().as_micros() as u64;

        // 5. Advance.
        self.current_interval = interval.next();
        metrics.total_us = start.elapsed().as_micros() as u64;

        debug!(
            interval = %interval,
            events = metrics.events,
            first_hits = metrics.first_hits,
            spawned = metrics.civs_spawned,
            extinguished = metrics.civs_extinguished,
            "interval complete"
        );
        if self.is_complete() {
            info!(
                intervals = self.current_interval.0,
                supernovae = self.supernovae,
                living = ?civ_count,
                "simulation complete"
            );
        }
        self.last_metrics = metrics;

        StepOutcome::Advanced(StepResult {
            interval: self.current_interval,
            coverage,
            civ_count,
            supernovae: self.supernovae,
        })
    }

    /// Step until completion, returning every result produced.
    ///
    /// Returns an empty vector if the engine was already complete.
    pub fn run_to_completion(&mut self) -> Vec<StepResult> {
        let mut results = Vec::new();
        while let StepOutcome::Advanced(result) = self.step() {
            results.push(result);
        }
        results
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Per-cell hit counts.
    pub fn hit_count(&self) -> &HitCountGrid {
        &self.hits
    }

    /// Which cells lie inside the disk, in flat grid order.
    pub fn domain_mask(&self) -> &[bool] {
        self.grid.domain_mask()
    }

    /// The lattice the engine stamps into.
    pub fn grid(&self) -> &DiskGrid {
        &self.grid
    }

    /// Coverage series for every threshold.
    pub fn coverage_history(&self) -> &CoverageHistory {
        &self.coverage
    }

    /// Living-civilization count after each interval. Empty when the
    /// lifecycle is disabled.
    pub fn civ_history(&self) -> &[usize] {
        &self.civ_history
    }

    /// Cumulative supernovae after each interval.
    pub fn supernova_history(&self) -> &[u64] {
        &self.supernova_history
    }

    /// Cumulative supernovae.
    pub fn supernovae(&self) -> u64 {
        self.supernovae
    }

    /// Intervals completed so far.
    pub fn current_interval(&self) -> IntervalId {
        self.current_interval
    }

    /// Configured interval cap.
    pub fn num_intervals(&self) -> u64 {
        self.config.num_intervals
    }

    /// Labels of the completed intervals, `1..=current_interval`, one per
    /// entry of every history series.
    pub fn intervals(&self) -> impl Iterator<Item = IntervalId> {
        (1..=self.current_interval.0).map(IntervalId)
    }

    /// Whether the interval cap has been reached.
    pub fn is_complete(&self) -> bool {
        self.current_interval.0 >= self.config.num_intervals
    }

    /// All civilizations spawned so far, living and extinct.
    pub fn civilizations(&self) -> &CivilizationRegistry {
        &self.civs
    }

    /// Seed of the engine's random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration the engine was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Metrics from the most recent interval.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("seed", &self.seed)
            .field("shape", &self.grid.shape())
            .field("current_interval", &self.current_interval)
            .field("num_intervals", &self.config.num_intervals)
            .field("supernovae", &self.supernovae)
            .field("living", &self.civs.living_count())
            .finish_non_exhaustive()
    }
}
