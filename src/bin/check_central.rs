//! Counts schemes matching each "central scheme" proxy and prints a few
//! records that name a ministry.
//!
//! Sample ministry and state lists are printed as compact JSON arrays,
//! e.g. `["Ministry of Health","Some Other Body"]`, not with single quotes
//! and spaces as in `['Ministry of Health', 'Some Other Body']`.

use clap::Parser;
use scheme_census::config::{DEFAULT_DATASET, DEFAULT_SAMPLE, NAME_WIDTH};
use scheme_census::export::write_json;
use scheme_census::io_utils::ReportStep;
use scheme_census::{init_logging, load_dataset, CensusError, CentralReport, ReportConfig};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Dataset to read
    #[arg(long, default_value = DEFAULT_DATASET)]
    input: PathBuf,
    /// Number of sample schemes to show
    #[arg(long, default_value_t = DEFAULT_SAMPLE)]
    sample: usize,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
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
        sample: args.sample,
        json: args.json,
        ..ReportConfig::default()
    };

    let records = load_dataset(&config.input).during("loading dataset")?;
    let report = CentralReport::build(&records, config.sample, NAME_WIDTH);

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
