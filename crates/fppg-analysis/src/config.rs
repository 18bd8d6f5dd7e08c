//! Configuration for an FP/G report run
//!
//! Every section of the TOML file is optional; an empty file reproduces the
//! standard report (RB, more than 75 carries, 2017-2024 regular seasons,
//! t-test against 8.0 FP/G).

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::data::{
    CsvFileSource, NflverseSource, PlayerStatsSource, SummaryLevel, DEFAULT_BASE_URL,
    DEFAULT_SEASONS,
};
use crate::filter::FilterCriteria;
use crate::reporter::OutputFormat;
use crate::stats::TTestConfig;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where player stats come from
    #[serde(default)]
    pub source: SourceConfig,
    /// Row predicates
    #[serde(default)]
    pub filter: FilterCriteria,
    /// One-sample t-test parameters
    #[serde(default)]
    pub t_test: TTestConfig,
    /// Report and gate settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Figure settings
    #[serde(default)]
    pub plot: PlotConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fppg_analysis::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("fppg.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use fppg_analysis::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str(r#"
    ///     [filter]
    ///     min_carries = 100
    /// "#)?;
    /// assert_eq!(config.filter.min_carries, 100);
    /// assert_eq!(config.filter.position_pattern, "RB");
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Kind of player stats provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Download per-season CSV assets from the nflverse release
    #[default]
    Nflverse,
    /// Read a local CSV file
    Csv,
}

/// Data acquisition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Seasons to load (default: 2017 through 2024)
    #[serde(default = "default_seasons")]
    pub seasons: Vec<u16>,
    #[serde(default)]
    pub summary_level: SummaryLevel,
    /// Release URL for the nflverse source
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// CSV file for the csv source
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// HTTP request timeout in seconds (default: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_seasons() -> Vec<u16> {
    DEFAULT_SEASONS.to_vec()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            seasons: default_seasons(),
            summary_level: SummaryLevel::default(),
            base_url: default_base_url(),
            path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Instantiate the configured source
    pub fn build(&self) -> anyhow::Result<Box<dyn PlayerStatsSource>> {
        match self.kind {
            SourceKind::Nflverse => {
                let source = NflverseSource::new(
                    self.base_url.clone(),
                    Duration::from_secs(self.timeout_secs),
                )?;
                Ok(Box::new(source))
            }
            SourceKind::Csv => match &self.path {
                Some(path) => Ok(Box::new(CsvFileSource::new(path))),
                None => bail!("source.kind = \"csv\" requires source.path"),
            },
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Wait for Enter before rendering plots (default: true)
    #[serde(default = "default_true")]
    pub pause: bool,
    /// Write the histogram and box plot (default: true)
    #[serde(default = "default_true")]
    pub render_plots: bool,
    /// Directory receiving the SVG figures (default: "plots")
    #[serde(default = "default_plots_dir")]
    pub plots_dir: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_plots_dir() -> PathBuf {
    PathBuf::from("plots")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pause: true,
            render_plots: true,
            plots_dir: default_plots_dir(),
        }
    }
}

/// Figure settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Histogram bin count (default: 25)
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Figure width in pixels (default: 1000)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Figure height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_bins() -> usize {
    25
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            width: default_width(),
            height: default_height(),
        }
    }
}
