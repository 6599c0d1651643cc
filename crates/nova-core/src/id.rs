//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a civilization within a simulation run.
///
/// Civilizations are assigned sequential IDs at birth, starting at 0.
/// `CivId(n)` is also the index of the civilization in the registry's
/// backing storage.
///
/// IDs are `u64` so assignment can never wrap: the registry cannot hold
/// more entries than `usize` allows, and `usize` fits in `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivId(pub u64);

impl CivId {
    /// The storage index for this ID.
    ///
    /// IDs are only ever assigned from a storage length, so an ID that
    /// does not fit in `usize` was never issued on this platform.
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for CivId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CivId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Discrete simulated time step counter.
///
/// Starts at 0 and is incremented by exactly one per completed interval.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IntervalId(pub u64);

impl IntervalId {
    /// The following interval.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IntervalId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civ_id_index_matches_value() {
        assert_eq!(CivId(7).index(), Some(7));
        assert_eq!(CivId::from(3), CivId(3));
    }

    #[test]
    fn civ_id_holds_values_past_u32() {
        let id = CivId(u64::from(u32::MAX) + 1);
        assert!(id > CivId(u64::from(u32::MAX)));
        assert_eq!(id.to_string(), "4294967296");
        #[cfg(target_pointer_width = "64")]
        assert_eq!(id.index(), Some(1 << 32));
    }

    #[test]
    fn interval_next_increments_by_one() {
        let i = IntervalId(4);
        assert_eq!(i.next(), IntervalId(5));
        assert!(i < i.next());
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(CivId(12).to_string(), "12");
        assert_eq!(IntervalId(99).to_string(), "99");
    }
}
