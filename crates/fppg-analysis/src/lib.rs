//! Fantasy points per game analysis for running backs
//!
//! This crate loads multi-season player statistics, keeps the running backs
//! with more than a minimum number of carries, and summarizes their fantasy
//! points per game (FP/G) with descriptive statistics, IQR outlier fences and
//! a one-sample t-test.
//!
//! # Pipeline
//!
//! ```text
//! PlayerStatsSource ──► FilteredDataset ──► SummaryResult ──► Reporter / plots
//!   (fetch rows)        (RB, carries > 75,   (quartiles, fences,
//!                        rate = pts / games)  t-test)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use fppg_analysis::{Config, pipeline, reporter::{OutputFormat, Reporter}};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("fppg.toml")?;
//! let source = config.source.build()?;
//! let analysis = pipeline::analyze(source.as_ref(), &config)?;
//!
//! Reporter::new(OutputFormat::Console).report(&analysis.report())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod gate;
pub mod pipeline;
pub mod plots;
pub mod reporter;
pub mod stats;

// Re-export main types for convenience
pub use config::Config;
pub use data::{PlayerSeason, PlayerStatsSource, SummaryLevel};
pub use error::{AnalysisError, Result};
pub use filter::{FilterCriteria, FilteredDataset, RatedRow};
pub use pipeline::Analysis;
pub use reporter::{OutputFormat, Reporter};
pub use stats::SummaryResult;
