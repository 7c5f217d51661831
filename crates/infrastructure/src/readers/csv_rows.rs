use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use domain::error::Result;
use domain::tag::{TagField, TagRow};
use domain::{DomainError, TagRowSource};
use tracing::{debug, warn};

const BOM: char = '\u{feff}';

/// Reads tag definitions from a spreadsheet saved as CSV.
///
/// The first record is the header. Columns are matched to tag fields
/// without regard to case; unknown columns are ignored.
pub struct CsvTagRowSource {
    path: PathBuf,
}

impl CsvTagRowSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TagRowSource for CsvTagRowSource {
    fn read_rows(&mut self) -> Result<Vec<TagRow>> {
        let file = File::open(&self.path).map_err(|e| super::input_error(&self.path, e))?;
        read_tag_rows(file).map_err(|e| DomainError::malformed(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse CSV text into rows. Short records are tolerated.
pub fn read_tag_rows<R: Read>(reader: R) -> std::result::Result<Vec<TagRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = map_columns(reader.headers()?);
    if !columns.contains(&Some(TagField::Name)) {
        warn!("No 'name' column found; every row will be skipped");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = TagRow::new();
        for (column, cell) in columns.iter().zip(record.iter()) {
            if let Some(field) = column {
                row.set(*field, cell);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Resolve each header cell; a field claimed by an earlier column wins.
fn map_columns(headers: &csv::StringRecord) -> Vec<Option<TagField>> {
    let mut columns: Vec<Option<TagField>> = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        let field = TagField::from_header(header.trim_start_matches(BOM))
            .filter(|field| !columns.contains(&Some(*field)));
        if field.is_none() {
            debug!(column = header, "Ignoring column");
        }
        columns.push(field);
    }
    columns
}
