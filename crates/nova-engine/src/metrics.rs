//! Per-interval performance metrics for the simulation engine.

/// Timing and work counters collected during a single interval.
///
/// Durations are in microseconds. The engine overwrites these after each
/// `step()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole interval.
    pub total_us: u64,
    /// Time spent sampling and stamping events (including extinction).
    pub stamp_us: u64,
    /// Time spent computing coverage fractions.
    pub coverage_us: u64,
    /// Supernovae drawn this interval.
    pub events: u64,
    /// Cell increments performed this interval.
    pub cells_stamped: u64,
    /// Cells that received their first hit this interval.
    pub first_hits: u64,
    /// Civilizations born this interval.
    pub civs_spawned: u64,
    /// Civilizations extinguished this interval.
    pub civs_extinguished: u64,
}
