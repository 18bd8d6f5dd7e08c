//! Player statistics acquisition
//!
//! Rows are one player-season each. Sources hide where the rows come from:
//!
//! - [`NflverseSource`]: per-season CSV release assets downloaded over HTTP
//! - [`CsvFileSource`]: a local CSV file with the same columns
//! - [`StaticSource`]: rows already in memory (tests, embedding)

mod csv_source;
mod nflverse;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

pub use csv_source::{read_rows, CsvFileSource};
pub use nflverse::{NflverseSource, DEFAULT_BASE_URL};

/// Seasons loaded when no configuration overrides them
pub const DEFAULT_SEASONS: [u16; 8] = [2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024];

/// One player-season record
///
/// Only the columns the analysis needs are kept; any other column in the
/// source is ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeason {
    pub player_id: String,
    pub player_display_name: String,
    /// Position category, e.g. `RB` or `FB`. Missing for some records.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub position: Option<String>,
    pub season: u16,
    pub games: u32,
    pub fantasy_points: f64,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub carries: Option<u32>,
}

/// Granularity of the aggregated statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum SummaryLevel {
    /// Regular season totals
    #[default]
    #[serde(rename = "reg")]
    Regular,
    /// Postseason totals
    #[serde(rename = "post")]
    Post,
    /// Regular season and postseason combined
    #[serde(rename = "reg+post")]
    RegularAndPost,
    /// One row per player-week
    #[serde(rename = "week")]
    Week,
}

impl SummaryLevel {
    /// Token used in release asset names
    pub fn file_token(&self) -> &'static str {
        match self {
            SummaryLevel::Regular => "reg",
            SummaryLevel::Post => "post",
            SummaryLevel::RegularAndPost => "regpost",
            SummaryLevel::Week => "week",
        }
    }
}

impl fmt::Display for SummaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SummaryLevel::Regular => "reg",
            SummaryLevel::Post => "post",
            SummaryLevel::RegularAndPost => "reg+post",
            SummaryLevel::Week => "week",
        };
        f.write_str(label)
    }
}

/// Provider of player-season rows
pub trait PlayerStatsSource {
    /// Fetch all rows for the given seasons at the given granularity.
    ///
    /// An empty `seasons` slice means every season the source holds.
    fn fetch(&self, seasons: &[u16], level: SummaryLevel) -> Result<Vec<PlayerSeason>>;
}

/// Rows held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<PlayerSeason>,
}

impl StaticSource {
    pub fn new(rows: Vec<PlayerSeason>) -> Self {
        Self { rows }
    }
}

impl PlayerStatsSource for StaticSource {
    fn fetch(&self, seasons: &[u16], _level: SummaryLevel) -> Result<Vec<PlayerSeason>> {
        Ok(select_seasons(self.rows.iter().cloned(), seasons))
    }
}

pub(crate) fn select_seasons(
    rows: impl Iterator<Item = PlayerSeason>,
    seasons: &[u16],
) -> Vec<PlayerSeason> {
    rows.filter(|row| seasons.is_empty() || seasons.contains(&row.season))
        .collect()
}

#[cfg(test)]
pub(crate) fn row(
    name: &str,
    position: Option<&str>,
    season: u16,
    games: u32,
    fantasy_points: f64,
    carries: Option<u32>,
) -> PlayerSeason {
    PlayerSeason {
        player_id: format!("00-{}", name.to_lowercase().replace(' ', "-")),
        player_display_name: name.to_string(),
        position: position.map(str::to_string),
        season,
        games,
        fantasy_points,
        carries,
    }
}
