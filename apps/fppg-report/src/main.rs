//! FP/G report binary
//!
//! Loads player seasons, prints the running back FP/G summary, waits for
//! confirmation and writes the histogram and box plot.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fppg_analysis::gate::Gate;
use fppg_analysis::reporter::{OutputFormat, Reporter};
use fppg_analysis::{pipeline, plots, Config, PlayerStatsSource};

#[derive(Parser, Debug)]
#[command(name = "fppg-report")]
#[command(
    version,
    about = "Fantasy points per game summary for running backs with more than 75 carries"
)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not wait for Enter before rendering plots
    #[arg(long)]
    no_pause: bool,

    /// Skip the histogram and box plot
    #[arg(long)]
    no_plots: bool,

    /// Report format (overrides output.format)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Console,
    Json,
    JsonPretty,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Console => OutputFormat::Console,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the report, logs go to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.no_pause {
        config.output.pause = false;
    }
    if args.no_plots {
        config.output.render_plots = false;
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }

    let source = config.source.build()?;
    let stdin = io::stdin();
    run(
        &config,
        source.as_ref(),
        args.output.as_deref(),
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

/// Status lines share stdout with the console report; with a JSON format
/// stdout carries only the document and status goes to `err`.
fn run<R, W, E>(
    config: &Config,
    source: &dyn PlayerStatsSource,
    report_file: Option<&Path>,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let console = config.output.format == OutputFormat::Console;

    writeln!(status(console, out, err), "Loading Data . . .")?;
    let analysis = pipeline::analyze(source, config)?;

    let reporter = Reporter::new(config.output.format);
    let report = analysis.report();
    let text = reporter.format_report(&report)?;
    out.write_all(text.as_bytes())?;
    if !console && !text.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;
    if let Some(path) = report_file {
        reporter.write_to_file(&report, path)?;
        tracing::info!(path = %path.display(), "Wrote report");
    }

    if !config.output.render_plots {
        return Ok(());
    }

    Gate::from_pause(config.output.pause)
        .wait(input, status(console, out, err))
        .context("Failed to read confirmation from stdin")?;

    let files = plots::render(
        &analysis.rates(),
        &analysis.summary,
        &config.plot,
        &config.output.plots_dir,
    )?;
    let sink = status(console, out, err);
    writeln!(sink, "Histogram: {}", files.histogram.display())?;
    writeln!(sink, "Box plot: {}", files.box_plot.display())?;

    Ok(())
}

fn status<'a>(console: bool, out: &'a mut dyn Write, err: &'a mut dyn Write) -> &'a mut dyn Write {
    if console {
        out
    } else {
        err
    }
}
