//! Row selection and the derived FP/G column
//!
//! Keeps running backs above a carries threshold and attaches
//! `rate = fantasy_points / games` to each surviving row.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::PlayerSeason;
use crate::error::{AnalysisError, Result};

/// Predicates applied to every player-season row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Case-sensitive substring the position must contain (default: "RB")
    #[serde(default = "default_position_pattern")]
    pub position_pattern: String,
    /// Carries must be strictly greater than this (default: 75)
    #[serde(default = "default_min_carries")]
    pub min_carries: u32,
    /// What to do with rows that report zero games played
    #[serde(default)]
    pub zero_games: ZeroGamesPolicy,
}

fn default_position_pattern() -> String {
    "RB".to_string()
}

fn default_min_carries() -> u32 {
    75
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            position_pattern: default_position_pattern(),
            min_carries: default_min_carries(),
            zero_games: ZeroGamesPolicy::default(),
        }
    }
}

impl FilterCriteria {
    /// Whether a row passes the position and carries predicates.
    ///
    /// Missing position or carries fail the predicate.
    pub fn matches(&self, row: &PlayerSeason) -> bool {
        let position_ok = row
            .position
            .as_deref()
            .is_some_and(|p| p.contains(self.position_pattern.as_str()));
        let carries_ok = row.carries.is_some_and(|c| c > self.min_carries);
        position_ok && carries_ok
    }
}

/// Handling of a zero in the games column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZeroGamesPolicy {
    /// Divide anyway; an infinite rate flows into the statistics, a NaN one is skipped
    #[default]
    Propagate,
    /// Abort the analysis
    Reject,
}

/// A surviving row with its per-game rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRow {
    #[serde(flatten)]
    pub row: PlayerSeason,
    /// Fantasy points per game
    pub rate: f64,
}

/// Rows that passed the filter, ordered by rate descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilteredDataset {
    rows: Vec<RatedRow>,
}

impl FilteredDataset {
    /// Apply the criteria, derive the rate column and sort.
    ///
    /// The sort is stable, so rows with equal rates keep their input order.
    /// Undefined (NaN) rates are placed after every defined rate.
    pub fn from_rows(rows: Vec<PlayerSeason>, criteria: &FilterCriteria) -> Result<Self> {
        let total = rows.len();
        let mut rated = Vec::new();

        for row in rows.into_iter().filter(|r| criteria.matches(r)) {
            if row.games == 0 {
                match criteria.zero_games {
                    ZeroGamesPolicy::Propagate => warn!(
                        player = %row.player_display_name,
                        season = row.season,
                        "Zero games played; rate is undefined"
                    ),
                    ZeroGamesPolicy::Reject => {
                        return Err(AnalysisError::ZeroGames {
                            player: row.player_display_name,
                            season: row.season,
                        })
                    }
                }
            }
            let rate = row.fantasy_points / f64::from(row.games);
            rated.push(RatedRow { row, rate });
        }

        // descending; NaN rates go last whatever their sign bit
        rated.sort_by(|a, b| match (a.rate.is_nan(), b.rate.is_nan()) {
            (false, false) => b.rate.total_cmp(&a.rate),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        });
        debug!(total, kept = rated.len(), "Filtered player seasons");

        Ok(Self { rows: rated })
    }

    pub fn rows(&self) -> &[RatedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rate series, in dataset order
    pub fn rates(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.rate).collect()
    }
}
