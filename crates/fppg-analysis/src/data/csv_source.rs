//! Local CSV player stats

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{select_seasons, PlayerSeason, PlayerStatsSource, SummaryLevel};
use crate::error::Result;

/// Parse player-season rows from CSV with a header line.
///
/// Columns are matched by name, so extra columns and any column order are
/// accepted.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<PlayerSeason>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Player stats read from a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlayerStatsSource for CsvFileSource {
    fn fetch(&self, seasons: &[u16], level: SummaryLevel) -> Result<Vec<PlayerSeason>> {
        info!(path = %self.path.display(), %level, "Reading player stats CSV");
        let file = File::open(&self.path)?;
        let rows = read_rows(file)?;
        debug!(rows = rows.len(), "Parsed CSV rows");
        Ok(select_seasons(rows.into_iter(), seasons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
player_id,player_display_name,position,position_group,season,games,carries,fantasy_points
00-0033873,Christian McCaffrey,RB,RB,2023,16,272,391.3
00-0036223,Garrett Wilson,WR,WR,2023,17,NA,196.4
00-0031234,Kyle Juszczyk,,RB,2023,16,,40.1
";

    #[test]
    fn test_read_rows_by_header_name() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.player_display_name, "Christian McCaffrey");
        assert_eq!(first.position.as_deref(), Some("RB"));
        assert_eq!(first.season, 2023);
        assert_eq!(first.games, 16);
        assert_eq!(first.carries, Some(272));
        assert!((first.fantasy_points - 391.3).abs() < 1e-10);
    }

    #[test]
    fn test_read_rows_missing_values_become_none() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows[1].carries, None);
        assert_eq!(rows[2].position, None);
        assert_eq!(rows[2].carries, None);
    }

    #[test]
    fn test_read_rows_rejects_malformed_numbers() {
        let bad = "player_id,player_display_name,position,season,games,carries,fantasy_points\n\
                   x,Someone,RB,2023,sixteen,100,50.0\n";
        assert!(read_rows(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_csv_file_source_fetch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = CsvFileSource::new(file.path());
        let rows = source.fetch(&[2023], SummaryLevel::Regular).unwrap();
        assert_eq!(rows.len(), 3);

        let rows = source.fetch(&[2022], SummaryLevel::Regular).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_csv_file_source_missing_file() {
        let source = CsvFileSource::new("/nonexistent/player_stats.csv");
        assert!(source.fetch(&[], SummaryLevel::Regular).is_err());
    }
}
