//! DecorationSlots - Socket counts per decoration tier

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign, RangeInclusive};
use thiserror::Error;

/// Decoration tiers that exist. Fixed, never derived from data.
pub const DECORATION_TIERS: RangeInclusive<u8> = 1..=MAX_DECORATION_TIER;

/// Highest decoration tier
pub const MAX_DECORATION_TIER: u8 = 4;

/// Above this many sockets, slots serialize as per-tier counts instead of a socket list
pub const MAX_LISTED_SOCKETS: u64 = 32;

/// A socket tier outside `DECORATION_TIERS`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("decoration tier {0} is outside 1-4")]
pub struct InvalidTier(pub u64);

/// Number of decoration sockets at each tier
///
/// Every tier 1-4 always has an entry. Lookups outside that range read as zero.
/// Counts add saturating, so totals never wrap or panic.
///
/// Serialized as a list of socket tiers, one entry per socket:
/// `[1, 1, 3]` is two tier-1 sockets and one tier-3 socket. Large counts use
/// per-tier fields instead: `{ tier1 = 500, tier3 = 2 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotsRepr", into = "SlotsRepr")]
pub struct DecorationSlots {
    counts: [u64; MAX_DECORATION_TIER as usize],
}

impl DecorationSlots {
    /// No sockets at any tier
    pub fn none() -> Self {
        Self::default()
    }

    /// Create from counts for tiers 1 through 4, in order
    pub fn from_counts(counts: [u64; 4]) -> Self {
        DecorationSlots { counts }
    }

    /// Create from a tier -> count mapping
    ///
    /// Tiers missing from the mapping count as zero. Tiers outside 1-4 are
    /// dropped.
    pub fn from_tier_counts<I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut slots = Self::none();
        for (tier, count) in tiers {
            match Self::index(u64::from(tier)) {
                Some(i) => slots.counts[i] = slots.counts[i].saturating_add(count),
                None => tracing::warn!(tier, count, "ignoring decoration slots outside tiers 1-4"),
            }
        }
        slots
    }

    /// Create from one tier entry per socket
    pub fn from_sockets<I>(sockets: I) -> Result<Self, InvalidTier>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut slots = Self::none();
        for tier in sockets {
            let i = Self::index(tier).ok_or(InvalidTier(tier))?;
            slots.counts[i] = slots.counts[i].saturating_add(1);
        }
        Ok(slots)
    }

    fn index(tier: u64) -> Option<usize> {
        (1..=u64::from(MAX_DECORATION_TIER))
            .contains(&tier)
            .then(|| (tier - 1) as usize)
    }

    /// Socket count at a tier (zero for tiers outside 1-4)
    pub fn get(&self, tier: u8) -> u64 {
        Self::index(u64::from(tier)).map_or(0, |i| self.counts[i])
    }

    /// Iterate `(tier, count)` for all four tiers, lowest first
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        DECORATION_TIERS.zip(self.counts.iter().copied())
    }

    /// Mapping with exactly four entries, tiers 1-4
    pub fn to_map(&self) -> BTreeMap<u8, u64> {
        self.iter().collect()
    }

    /// Total sockets across every tier
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |acc, &c| acc.saturating_add(c))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for DecorationSlots {
    type Output = DecorationSlots;

    fn add(mut self, rhs: DecorationSlots) -> DecorationSlots {
        self += rhs;
        self
    }
}

impl AddAssign for DecorationSlots {
    fn add_assign(&mut self, rhs: DecorationSlots) {
        for (mine, theirs) in self.counts.iter_mut().zip(rhs.counts) {
            *mine = mine.saturating_add(theirs);
        }
    }
}

impl Sum for DecorationSlots {
    fn sum<I: Iterator<Item = DecorationSlots>>(iter: I) -> Self {
        iter.fold(DecorationSlots::none(), Add::add)
    }
}

impl<'a> Sum<&'a DecorationSlots> for DecorationSlots {
    fn sum<I: Iterator<Item = &'a DecorationSlots>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// On-disk shape: a socket list, or per-tier counts
#[doc(hidden)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotsRepr {
    Sockets(Vec<u64>),
    Tiers {
        #[serde(default)]
        tier1: u64,
        #[serde(default)]
        tier2: u64,
        #[serde(default)]
        tier3: u64,
        #[serde(default)]
        tier4: u64,
    },
}

impl TryFrom<SlotsRepr> for DecorationSlots {
    type Error = InvalidTier;

    fn try_from(repr: SlotsRepr) -> Result<Self, Self::Error> {
        match repr {
            SlotsRepr::Sockets(sockets) => Self::from_sockets(sockets),
            SlotsRepr::Tiers {
                tier1,
                tier2,
                tier3,
                tier4,
            } => Ok(Self::from_counts([tier1, tier2, tier3, tier4])),
        }
    }
}

impl From<DecorationSlots> for SlotsRepr {
    fn from(slots: DecorationSlots) -> Self {
        if slots.total() > MAX_LISTED_SOCKETS {
            let [tier1, tier2, tier3, tier4] = slots.counts;
            return SlotsRepr::Tiers {
                tier1,
                tier2,
                tier3,
                tier4,
            };
        }
        let sockets = slots
            .iter()
            .flat_map(|(tier, count)| std::iter::repeat(u64::from(tier)).take(count as usize))
            .collect();
        SlotsRepr::Sockets(sockets)
    }
}
