//! Civilization population with one-way extinction.
//!
//! Civilizations are appended at birth and never removed; extinct ones
//! stay in the registry for historical statistics. Storage is a plain
//! `Vec` indexed by [`CivId`], so extinction is an in-place field write.
//!
//! # Ordering
//!
//! The engine calls [`CivilizationRegistry::apply_extinction`] once per
//! event, right after that event is stamped, and spawns the interval's
//! newcomers only after every event has been processed. A civilization
//! born in interval `k` is therefore never killed by an event of interval
//! `k`.

use nova_core::{CivId, IntervalId, Point3};
use rand::Rng;
use serde::Serialize;
use smallvec::SmallVec;

use crate::sampler::EventSampler;

/// A point entity with a fixed position and a one-way extinguishable state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Civilization {
    /// Sequential ID, equal to the registry index.
    pub id: CivId,
    /// Position sampled once at birth.
    pub position: Point3,
    /// Interval during which the civilization emerged.
    pub birth_interval: IntervalId,
    extinction_interval: Option<IntervalId>,
}

impl Civilization {
    /// Whether an event has extinguished this civilization.
    pub fn is_extinct(&self) -> bool {
        self.extinction_interval.is_some()
    }

    /// Interval of extinction, set exactly when the civilization dies.
    pub fn extinction_interval(&self) -> Option<IntervalId> {
        self.extinction_interval
    }
}

/// Owns all civilizations ever spawned in a run.
#[derive(Clone, Debug, Default)]
pub struct CivilizationRegistry {
    civs: Vec<Civilization>,
    living: usize,
}

impl CivilizationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `n` civilizations born in `interval`, placing each with
    /// `sampler`. Returns the newly assigned IDs in order.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        sampler: &EventSampler,
        rng: &mut R,
        interval: IntervalId,
    ) -> std::ops::Range<u64> {
        let first = self.civs.len() as u64;
        self.civs.reserve(n);
        for _ in 0..n {
            // Storage length as u64 is lossless and never wraps.
            let id = CivId(self.civs.len() as u64);
            self.civs.push(Civilization {
                id,
                position: sampler.sample(rng),
                birth_interval: interval,
                extinction_interval: None,
            });
        }
        self.living += n;
        first..self.civs.len() as u64
    }

    /// Extinguish every living civilization within `bubble_r` of
    /// `center`, stamping `interval` as the extinction time.
    ///
    /// Returns the IDs extinguished by this call.
    pub fn apply_extinction(
        &mut self,
        center: &Point3,
        bubble_r: f64,
        interval: IntervalId,
    ) -> SmallVec<[CivId; 4]> {
        let r2 = bubble_r * bubble_r;
        let mut killed = SmallVec::new();
        for civ in self.civs.iter_mut().filter(|c| !c.is_extinct()) {
            if civ.position.distance_sq(center) <= r2 {
                civ.extinction_interval = Some(interval);
                killed.push(civ.id);
            }
        }
        self.living -= killed.len();
        killed
    }

    /// Civilizations not yet extinguished.
    pub fn living_count(&self) -> usize {
        self.living
    }

    /// Civilizations ever spawned.
    pub fn total_spawned(&self) -> usize {
        self.civs.len()
    }

    /// Civilizations extinguished so far.
    pub fn extinct_count(&self) -> usize {
        self.civs.len() - self.living
    }

    /// Look up a civilization by ID.
    pub fn get(&self, id: CivId) -> Option<&Civilization> {
        self.civs.get(id.index()?)
    }

    /// All civilizations in birth order.
    pub fn as_slice(&self) -> &[Civilization] {
        &self.civs
    }

    /// Iterate civilizations in birth order.
    pub fn iter(&self) -> std::slice::Iter<'_, Civilization> {
        self.civs.iter()
    }
}
