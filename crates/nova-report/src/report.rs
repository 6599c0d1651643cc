//! Run summaries and their JSON / CSV export.

use std::io::Write;

use indexmap::IndexMap;
use nova_engine::{SimConfig, SimulationEngine};
use serde::Serialize;

use crate::error::ReportError;
use crate::hash::{config_hash, hit_count_hash};

/// Civilization totals at the time of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CivilizationSummary {
    /// Civilizations ever spawned.
    pub total_spawned: usize,
    /// Civilizations still alive.
    pub living: usize,
    /// Civilizations extinguished.
    pub extinct: usize,
}

/// Everything observable about a run, detached from the engine.
///
/// Built with [`from_engine`](Self::from_engine) at any point of a run;
/// series cover the intervals completed so far.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    /// Seed the engine actually used.
    pub seed: u64,
    /// Configuration the engine was built from.
    pub config: SimConfig,
    /// Intervals completed.
    pub intervals_completed: u64,
    /// Interval labels, one per entry of every series.
    pub intervals: Vec<u64>,
    /// Cumulative supernovae.
    pub supernovae: u64,
    /// Cumulative supernovae after each interval.
    pub supernova_history: Vec<u64>,
    /// Coverage series keyed by threshold.
    pub coverage: IndexMap<u32, Vec<f64>>,
    /// Living civilizations per interval, when the lifecycle is enabled.
    pub civ_history: Option<Vec<usize>>,
    /// Civilization totals, when the lifecycle is enabled.
    pub civilizations: Option<CivilizationSummary>,
    /// In-disk cell count.
    pub domain_cells: usize,
    /// Entry `v - 1` is the number of cells hit exactly `v` times.
    pub hit_histogram: Vec<usize>,
    /// FNV-1a fingerprint of the final hit counts.
    pub hit_count_hash: u64,
    /// FNV-1a fingerprint of the configuration and seed.
    pub config_hash: u64,
}

impl RunReport {
    /// Snapshot the engine's history and summary statistics.
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        let config = engine.config().clone();
        let civs_enabled = config.simulate_civilizations;
        let civs = engine.civilizations();
        Self {
            seed: engine.seed(),
            config_hash: config_hash(&config, engine.seed()),
            intervals_completed: engine.current_interval().0,
            intervals: engine.intervals().map(|i| i.0).collect(),
            supernovae: engine.supernovae(),
            supernova_history: engine.supernova_history().to_vec(),
            coverage: engine.coverage_history().to_map(),
            civ_history: civs_enabled.then(|| engine.civ_history().to_vec()),
            civilizations: civs_enabled.then(|| CivilizationSummary {
                total_spawned: civs.total_spawned(),
                living: civs.living_count(),
                extinct: civs.extinct_count(),
            }),
            domain_cells: engine.grid().total_domain_cells(),
            hit_histogram: engine.hit_count().histogram(),
            hit_count_hash: hit_count_hash(engine.hit_count()),
            config,
        }
    }

    /// Serialize the whole report as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the whole report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Write one row per interval.
    ///
    /// Columns are `interval,supernovae,civ_count,coverage_ge_1..`, with
    /// cumulative supernovae. `civ_count` is left empty when the lifecycle
    /// is disabled.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        write!(writer, "interval,supernovae,civ_count")?;
        for t in self.coverage.keys() {
            write!(writer, ",coverage_ge_{t}")?;
        }
        writeln!(writer)?;

        for (pos, (interval, supernovae)) in self
            .intervals
            .iter()
            .zip(&self.supernova_history)
            .enumerate()
        {
            write!(writer, "{interval},{supernovae},")?;
            if let Some(n) = self.civ_history.as_ref().and_then(|h| h.get(pos)) {
                write!(writer, "{n}")?;
            }
            for series in self.coverage.values() {
                match series.get(pos) {
                    Some(c) => write!(writer, ",{c}")?,
                    None => write!(writer, ",")?,
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
