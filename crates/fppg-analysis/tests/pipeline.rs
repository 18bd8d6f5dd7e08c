//! End-to-end runs of the FP/G report over synthetic player data

use fppg_analysis::data::{CsvFileSource, StaticSource};
use fppg_analysis::pipeline::{analyze, summarize};
use fppg_analysis::reporter::{OutputFormat, Reporter};
use fppg_analysis::{AnalysisError, Config, FilterCriteria, PlayerSeason};
use fppg_analysis::stats::TTestConfig;
use pretty_assertions::assert_eq;
use std::io::Write;

fn rb(id: &str, carries: u32, fantasy_points: f64, games: u32) -> PlayerSeason {
    PlayerSeason {
        player_id: id.to_string(),
        player_display_name: format!("Back {}", id),
        position: Some("RB".to_string()),
        season: 2023,
        games,
        fantasy_points,
        carries: Some(carries),
    }
}

/// Carries 50, 76, 100, 200, 300; rates 8, 10, 15, 14, 10
fn five_backs() -> Vec<PlayerSeason> {
    vec![
        rb("1", 50, 80.0, 10),
        rb("2", 76, 120.0, 12),
        rb("3", 100, 150.0, 10),
        rb("4", 200, 210.0, 15),
        rb("5", 300, 90.0, 9),
    ]
}

#[test]
fn five_rows_keep_the_four_above_threshold() {
    let analysis = summarize(five_backs(), &FilterCriteria::default(), &TTestConfig::default()).unwrap();

    let ids: Vec<&str> = analysis
        .dataset
        .rows()
        .iter()
        .map(|r| r.row.player_id.as_str())
        .collect();
    assert_eq!(ids, vec!["3", "4", "2", "5"]);
    assert_eq!(analysis.rates(), vec![15.0, 14.0, 10.0, 10.0]);
    assert!(analysis.dataset.rows().iter().all(|r| r.row.carries > Some(75)));

    // sorted rates 10, 10, 14, 15
    assert_eq!(analysis.summary.median, 12.0);
    assert_eq!(analysis.summary.sample_size, 4);
    assert_eq!(analysis.summary.degrees_of_freedom, 3);

    let printed = Reporter::new(OutputFormat::Console)
        .format_report(&analysis.report())
        .unwrap();
    assert!(printed.lines().any(|l| l == "Median FP/G: 12.00"));
    assert!(printed.lines().any(|l| l == "Data Points: 4"));
    assert!(printed.lines().any(|l| l == "Mean FP/G: 12.25"));
}

#[test]
fn static_source_through_config() {
    let config = Config::from_str(
        r#"
        [source]
        seasons = [2023]

        [output]
        pause = false
        render_plots = false
        "#,
    )
    .unwrap();

    let analysis = analyze(&StaticSource::new(five_backs()), &config).unwrap();
    assert_eq!(analysis.summary.sample_size, 4);
    assert_eq!(analysis.summary.min, 10.0);
    assert_eq!(analysis.summary.max, 15.0);
}

#[test]
fn csv_file_source_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_id,player_display_name,position,season,season_type,games,carries,fantasy_points"
    )
    .unwrap();
    writeln!(file, "a,Alpha,RB,2022,REG,17,250,289.0").unwrap();
    writeln!(file, "b,Bravo,WR,2022,REG,17,12,210.0").unwrap();
    writeln!(file, "c,Charlie,RB,2022,REG,10,75,80.0").unwrap();
    writeln!(file, "d,Delta,FB-RB,2022,REG,16,90,96.0").unwrap();
    writeln!(file, "e,Echo,,2022,REG,16,120,99.0").unwrap();
    writeln!(file, "f,Foxtrot,RB,2016,REG,16,200,240.0").unwrap();

    let toml = format!(
        "[source]\nkind = \"csv\"\npath = \"{}\"\nseasons = [2022]\n",
        file.path().display()
    );
    let config = Config::from_str(&toml).unwrap();
    let source = config.source.build().unwrap();

    let analysis = analyze(source.as_ref(), &config).unwrap();
    assert_eq!(analysis.rates(), vec![17.0, 6.0]);
    assert_eq!(analysis.summary.median, 11.5);

    let source = CsvFileSource::new(file.path());
    let all = analyze(&source, &Config::from_str("[source]\nseasons = []").unwrap()).unwrap();
    assert_eq!(all.summary.sample_size, 3);
}

#[test]
fn nothing_survives_the_filter() {
    let rows = vec![rb("1", 75, 100.0, 10), rb("2", 10, 40.0, 8)];
    let err = summarize(rows, &FilterCriteria::default(), &TTestConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySeries));
}

#[test]
fn json_report_of_a_run() {
    let analysis = summarize(five_backs(), &FilterCriteria::default(), &TTestConfig::default()).unwrap();
    let json = Reporter::new(OutputFormat::Json)
        .format_report(&analysis.report())
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["sample_size"], 4);
    assert_eq!(value["summary"]["median"], 12.0);
    assert_eq!(value["criteria"]["min_carries"], 75);
}
