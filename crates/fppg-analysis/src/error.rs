//! Error types for the FP/G analysis pipeline

use thiserror::Error;

/// Errors raised while loading, filtering or summarizing player data
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed player stats CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to download player stats from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No rows survived the filter; statistics are undefined for an empty series")]
    EmptySeries,

    #[error("Player {player} ({season}) has zero games played")]
    ZeroGames { player: String, season: u16 },

    #[error("Plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
