use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use application::UdtBuilder;
use infrastructure::{CsvTagRowSource, JsonUdtWriter, ToolConfig};

/// Build an Ignition UDT definition from a tag spreadsheet
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Example:\n  udt-create tags.csv MV_SWBOARD output.json\n\n\
Expected columns (first row is the header):\n  \
- name (required): Tag name\n  \
- dataType: Data type (default: Float4)\n  \
- documentation, engUnit: copied when present\n  \
- valueSource (default: opc), tagType (default: AtomicTag)\n  \
- alarmMode, alarmName (default: Alarm)\n  \
- historyEnabled, historySampleRate, historySampleRateUnits\n  \
- shortDescription, stateLabels, stateValues (pipe-separated)"
)]
struct Args {
    /// Spreadsheet saved as CSV
    input: PathBuf,

    /// Name of the UDT
    udt_name: String,

    /// Destination JSON file (default: output.json)
    output: Option<PathBuf>,

    /// Configuration file overriding the built-in defaults
    #[arg(long)]
    config: Option<String>,
}

fn run() -> Result<()> {
    udt_cli::init();
    let args = Args::parse();

    let config = ToolConfig::load(args.config.as_deref()).context("Loading configuration")?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));
    info!(input = %args.input.display(), output = %output.display(), "Converting tag spreadsheet");

    let builder = UdtBuilder::new(config.defaults);
    let summary = builder.run(
        &args.udt_name,
        &mut CsvTagRowSource::new(&args.input),
        &mut JsonUdtWriter::new(&output),
    )?;

    println!(
        "✓ Successfully converted {} to {}",
        summary.source, summary.destination
    );
    println!("✓ UDT Name: {}", summary.udt_name);
    println!("✓ Created {} tags", summary.tags_created);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        udt_cli::exit_with(e);
    }
}
