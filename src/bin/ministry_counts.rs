//! Prints how many schemes fall under each primary ministry, most frequent first.

use clap::Parser;
use scheme_census::config::{DEFAULT_DATASET, DEFAULT_TOP};
use scheme_census::export::{write_csv, write_json};
use scheme_census::io_utils::ReportStep;
use scheme_census::{
    count_ministries, init_logging, load_dataset, CensusError, ReportConfig, TableReport,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Dataset to read
    #[arg(long, default_value = DEFAULT_DATASET)]
    input: PathBuf,
    /// Number of rows to print
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Optional CSV output path for the full table
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ReportConfig {
        input: args.input,
        top: args.top,
        json: args.json,
        csv: args.csv,
        ..ReportConfig::default()
    };
    config.validate().during("invalid arguments")?;

    let records = load_dataset(&config.input).during("loading dataset")?;
    let counts = count_ministries(&records);

    if let Some(path) = &config.csv {
        write_csv(path, &counts.ranked()).during("writing csv")?;
    }

    let report = TableReport::new(&counts, "Ministry", config.top);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        write_json(&mut out, &report).during("writing report")?;
    } else {
        report
            .write_text(&mut out)
            .map_err(CensusError::from)
            .during("writing report")?;
    }
    out.flush().map_err(CensusError::from).during("writing report")?;
    Ok(())
}
