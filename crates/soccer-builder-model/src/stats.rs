use serde::{Deserialize, Serialize};

pub const DEFAULT_STAT: i64 = 70;

/// The nine skill ratings shown on a player card.
///
/// The attribute set is closed: unknown names are rejected on
/// deserialization, and every field missing from the input falls back to
/// [`DEFAULT_STAT`]. `def` is spelled literally on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stats {
    pub rit: i64,
    pub tir: i64,
    pub pas: i64,
    pub reg: i64,
    pub def: i64,
    pub fis: i64,
    pub con: i64,
    pub res: i64,
    pub cab: i64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::from_values([DEFAULT_STAT; Stats::FIELD_COUNT])
    }
}

impl Stats {
    pub const FIELD_COUNT: usize = 9;

    /// Attribute names in wire order. Kept next to [`Stats::values`] so a new
    /// rating is added in one place.
    pub const FIELD_NAMES: [&'static str; Stats::FIELD_COUNT] =
        ["rit", "tir", "pas", "reg", "def", "fis", "con", "res", "cab"];

    #[must_use]
    pub fn values(&self) -> [i64; Stats::FIELD_COUNT] {
        [
            self.rit, self.tir, self.pas, self.reg, self.def, self.fis, self.con, self.res,
            self.cab,
        ]
    }

    #[must_use]
    pub fn from_values(values: [i64; Stats::FIELD_COUNT]) -> Self {
        let [rit, tir, pas, reg, def, fis, con, res, cab] = values;
        Self {
            rit,
            tir,
            pas,
            reg,
            def,
            fis,
            con,
            res,
            cab,
        }
    }

    /// Element-wise mean over `votes`, rounded half to even.
    ///
    /// Returns `None` for an empty slice; callers keep the previous stats in
    /// that case instead of dividing by zero.
    #[must_use]
    pub fn round_mean(votes: &[Stats]) -> Option<Stats> {
        if votes.is_empty() {
            return None;
        }
        let count = votes.len() as f64;
        let mut totals = [0_i64; Stats::FIELD_COUNT];
        for vote in votes {
            for (total, value) in totals.iter_mut().zip(vote.values()) {
                *total += value;
            }
        }
        Some(Self::from_values(
            totals.map(|total| (total as f64 / count).round_ties_even() as i64),
        ))
    }
}
