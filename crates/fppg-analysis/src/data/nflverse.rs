//! nflverse release downloads
//!
//! Each season is a separate CSV asset named
//! `stats_player_{level}_{season}.csv` under the `stats_player` release.

use std::time::Duration;
use tracing::{debug, info, instrument};

use super::{read_rows, PlayerSeason, PlayerStatsSource, SummaryLevel, DEFAULT_SEASONS};
use crate::error::{AnalysisError, Result};

/// Release URL holding the per-season player stats assets
pub const DEFAULT_BASE_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/stats_player";

/// Player stats downloaded from nflverse
pub struct NflverseSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl NflverseSource {
    /// Create a source with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| AnalysisError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { base_url, client })
    }

    /// URL of the asset for one season
    pub fn season_url(&self, season: u16, level: SummaryLevel) -> String {
        format!(
            "{}/stats_player_{}_{}.csv",
            self.base_url.trim_end_matches('/'),
            level.file_token(),
            season
        )
    }

    #[instrument(skip(self))]
    fn fetch_season(&self, season: u16, level: SummaryLevel) -> Result<Vec<PlayerSeason>> {
        let url = self.season_url(season, level);
        debug!(%url, "Downloading season");

        let http_err = |source| AnalysisError::Http {
            url: url.clone(),
            source,
        };
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(http_err)?;

        read_rows(body.as_ref())
    }
}

impl PlayerStatsSource for NflverseSource {
    fn fetch(&self, seasons: &[u16], level: SummaryLevel) -> Result<Vec<PlayerSeason>> {
        // the release has no "all seasons" asset
        let seasons = if seasons.is_empty() {
            &DEFAULT_SEASONS[..]
        } else {
            seasons
        };

        let mut rows = Vec::new();
        for &season in seasons {
            let season_rows = self.fetch_season(season, level)?;
            info!(season, rows = season_rows.len(), "Loaded season");
            rows.extend(season_rows);
        }
        Ok(rows)
    }
}
