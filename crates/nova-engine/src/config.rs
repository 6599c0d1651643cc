//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`SimulationEngine`].
//! [`validate()`](SimConfig::validate) checks the scalar invariants up
//! front; grid geometry is checked by [`DiskGrid::new`] during engine
//! construction and surfaces as [`ConfigError::Space`].
//!
//! [`SimulationEngine`]: crate::SimulationEngine
//! [`DiskGrid::new`]: nova_space::DiskGrid::new

use std::path::{Path, PathBuf};

use nova_space::SpaceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`SimConfig`].
///
/// All of these surface at construction time. A validated configuration
/// never fails during `step()`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grid geometry or bubble radius rejected.
    #[error("grid: {0}")]
    Space(#[from] SpaceError),
    /// `num_intervals` is zero.
    #[error("num_intervals must be at least 1")]
    ZeroIntervals,
    /// `max_threshold` is zero.
    #[error("max_threshold must be at least 1")]
    ZeroThreshold,
    /// `max_threshold` exceeds [`SimConfig::MAX_THRESHOLD`].
    #[error("max_threshold {value} exceeds the limit of {max}")]
    ThresholdTooLarge {
        /// The configured threshold.
        value: u32,
        /// The largest accepted threshold.
        max: u32,
    },
    /// A duration or length is zero, negative, NaN, or infinite.
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A rate is negative, NaN, or infinite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRate {
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A per-interval Poisson mean is not usable.
    #[error("{name} per interval is not a valid Poisson mean: {value}")]
    InvalidPoissonMean {
        /// Which process (`events` or `emergence`).
        name: &'static str,
        /// The rejected mean.
        value: f64,
    },
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for [`SimConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a simulation run.
///
/// Missing TOML keys fall back to [`Default`]. The keys `R` and `h` are
/// accepted as aliases for `radius` and `thickness`.
///
/// ```
/// use nova_engine::SimConfig;
///
/// let cfg = SimConfig::from_toml_str(
///     r#"
///     num_intervals = 5
///     R = 1000.0
///     h = 100.0
///     ngrid_xy = 20
///     ngrid_z = 10
///     seed = 1
///     "#,
/// )
/// .unwrap();
/// assert_eq!(cfg.radius, 1000.0);
/// assert_eq!(cfg.seed, Some(1));
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Intervals to run before the engine completes.
    pub num_intervals: u64,
    /// Simulated years per interval.
    pub interval_years: f64,
    /// Supernova rate per year over the whole disk.
    pub rate_per_year: f64,
    /// Disk radius `R`.
    #[serde(alias = "R")]
    pub radius: f64,
    /// Slab thickness `h`.
    #[serde(alias = "h")]
    pub thickness: f64,
    /// Lethal bubble radius.
    pub bubble_r: f64,
    /// Samples per in-plane axis.
    pub ngrid_xy: usize,
    /// Samples on the vertical axis.
    pub ngrid_z: usize,
    /// Highest coverage threshold tracked (thresholds are `1..=max`).
    pub max_threshold: u32,
    /// Whether to run the civilization lifecycle.
    pub simulate_civilizations: bool,
    /// New civilizations per year.
    pub civ_emergence_rate: f64,
    /// Seed for the engine's random stream. `None` draws one from
    /// process entropy; the engine reports the value it used.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_intervals: 10_000,
            interval_years: 1e6,
            rate_per_year: 0.02,
            radius: 50_000.0,
            thickness: 1_000.0,
            bubble_r: 50.0,
            ngrid_xy: 200,
            ngrid_z: 50,
            max_threshold: 5,
            simulate_civilizations: true,
            civ_emergence_rate: 1e-9,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Largest accepted `max_threshold`.
    pub const MAX_THRESHOLD: u32 = 1 << 16;

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Expected supernovae per interval.
    pub fn mean_events(&self) -> f64 {
        self.rate_per_year * self.interval_years
    }

    /// Expected new civilizations per interval.
    pub fn civ_per_interval(&self) -> f64 {
        self.civ_emergence_rate * self.interval_years
    }

    /// Validate all scalar invariants.
    ///
    /// Grid extents and cell counts are checked separately when the
    /// engine builds its [`DiskGrid`](nova_space::DiskGrid).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one interval.
        if self.num_intervals == 0 {
            return Err(ConfigError::ZeroIntervals);
        }
        // 2. Durations and lengths strictly positive.
        for (name, value) in [
            ("interval_years", self.interval_years),
            ("bubble_r", self.bubble_r),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        // 3. Rates non-negative.
        for (name, value) in [
            ("rate_per_year", self.rate_per_year),
            ("civ_emergence_rate", self.civ_emergence_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        // 4. Per-interval means must stay finite after scaling.
        let events = self.mean_events();
        if !events.is_finite() {
            return Err(ConfigError::InvalidPoissonMean {
                name: "events",
                value: events,
            });
        }
        let emergence = self.civ_per_interval();
        if !emergence.is_finite() {
            return Err(ConfigError::InvalidPoissonMean {
                name: "emergence",
                value: emergence,
            });
        }
        // 5. Threshold range.
        if self.max_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.max_threshold > Self::MAX_THRESHOLD {
            return Err(ConfigError::ThresholdTooLarge {
                value: self.max_threshold,
                max: Self::MAX_THRESHOLD,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SimConfig {
        SimConfig {
            num_intervals: 5,
            interval_years: 1e6,
            rate_per_year: 0.02,
            radius: 1000.0,
            thickness: 100.0,
            bubble_r: 50.0,
            ngrid_xy: 20,
            ngrid_z: 10,
            max_threshold: 3,
            simulate_civilizations: false,
            civ_emergence_rate: 0.0,
            seed: Some(1),
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_intervals_fails() {
        let mut cfg = valid_config();
        cfg.num_intervals = 0;
        match cfg.validate() {
            Err(ConfigError::ZeroIntervals) => {}
            other => panic!("expected ZeroIntervals, got {other:?}"),
        }
    }

    #[test]
    fn validate_non_positive_bubble_fails() {
        let mut cfg = valid_config();
        cfg.bubble_r = 0.0;
        match cfg.validate() {
            Err(ConfigError::NonPositive {
                name: "bubble_r", ..
            }) => {}
            other => panic!("expected NonPositive(bubble_r), got {other:?}"),
        }
    }

    #[test]
    fn validate_nan_interval_years_fails() {
        let mut cfg = valid_config();
        cfg.interval_years = f64::NAN;
        match cfg.validate() {
            Err(ConfigError::NonPositive {
                name: "interval_years",
                ..
            }) => {}
            other => panic!("expected NonPositive(interval_years), got {other:?}"),
        }
    }

    #[test]
    fn validate_negative_rate_fails() {
        let mut cfg = valid_config();
        cfg.rate_per_year = -0.1;
        match cfg.validate() {
            Err(ConfigError::InvalidRate {
                name: "rate_per_year",
                ..
            }) => {}
            other => panic!("expected InvalidRate, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_rates_are_allowed() {
        let mut cfg = valid_config();
        cfg.rate_per_year = 0.0;
        cfg.civ_emergence_rate = 0.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_overflowing_mean_fails() {
        let mut cfg = valid_config();
        cfg.rate_per_year = f64::MAX;
        cfg.interval_years = 10.0;
        match cfg.validate() {
            Err(ConfigError::InvalidPoissonMean { name: "events", .. }) => {}
            other => panic!("expected InvalidPoissonMean, got {other:?}"),
        }
    }

    #[test]
    fn validate_threshold_bounds() {
        let mut cfg = valid_config();
        cfg.max_threshold = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroThreshold)));
        cfg.max_threshold = SimConfig::MAX_THRESHOLD + 1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThresholdTooLarge { .. })
        ));
    }

    #[test]
    fn means_scale_with_interval_length() {
        let cfg = SimConfig {
            civ_emergence_rate: 1e-6,
            ..valid_config()
        };
        assert!((cfg.mean_events() - 20_000.0).abs() < 1e-9);
        assert!((cfg.civ_per_interval() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn toml_fills_missing_keys_from_default() {
        let cfg = SimConfig::from_toml_str("num_intervals = 7\nsimulate_civilizations = false\n")
            .unwrap();
        assert_eq!(cfg.num_intervals, 7);
        assert!(!cfg.simulate_civilizations);
        assert_eq!(cfg.ngrid_xy, SimConfig::default().ngrid_xy);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        match SimConfig::from_toml_str("num_intervalz = 7\n") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn toml_round_trips_through_serialize() {
        let cfg = valid_config();
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(SimConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimConfig::from_toml_file("/nonexistent/nova.toml").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/nova.toml"), "{msg}");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn space_error_wraps_with_prefix() {
        let err: ConfigError = SpaceError::DegenerateAxis {
            axis: "ngrid_z",
            cells: 1,
        }
        .into();
        assert_eq!(err.to_string(), "grid: ngrid_z must have at least 2 cells, got 1");
    }
}
