use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use application::TagExtractor;
use infrastructure::{CsvEntryExporter, JsonDocumentSource, TextReport};

/// List the tags of an exported UDT JSON file
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Example:\n  udt-extract my_udt.json\n  udt-extract my_udt.json --csv output.csv"
)]
struct Args {
    /// UDT JSON export
    input: PathBuf,

    /// Write the listing to this CSV file instead of the terminal
    #[arg(long, value_name = "FILE", conflicts_with = "names")]
    csv: Option<PathBuf>,

    /// Only list names and documentation of the top-level tags
    #[arg(long)]
    names: bool,
}

fn run() -> Result<()> {
    udt_cli::init();
    let args = Args::parse();

    let extractor = TagExtractor::new();
    let mut source = JsonDocumentSource::new(&args.input);

    if args.names {
        let summaries = extractor.list_names(&mut source)?;
        TextReport::stdout().write_summaries(&summaries)?;
        return Ok(());
    }

    match args.csv {
        Some(path) => {
            let mut exporter = CsvEntryExporter::new(path);
            let count = extractor.export(&mut source, &mut exporter)?;
            if count == 0 {
                println!("No tags to export");
            } else {
                println!("Exported {} tags to {}", count, exporter.path().display());
            }
        }
        None => {
            extractor.export(&mut source, &mut TextReport::stdout())?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        udt_cli::exit_with(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_csv_destination() {
        let args = Args::try_parse_from(["udt-extract", "udt.json", "--csv", "out.csv"]).unwrap();
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
        assert!(!args.names);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        assert!(Args::try_parse_from(["udt-extract"]).is_err());
    }
}
