use anyhow::Result;
use tracing::{debug, info};

use domain::tag::{FieldDefaults, RowIssue, TagRow};
use domain::{TagRowSource, UdtDocument, UdtDocumentWriter};

/// Outcome of one encoder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub source: String,
    pub destination: String,
    pub udt_name: String,
    pub rows_read: usize,
    pub tags_created: usize,
}

/// Encoder pipeline: rows → tag records → UDT envelope → writer
#[derive(Debug, Clone, Default)]
pub struct UdtBuilder {
    defaults: FieldDefaults,
}

impl UdtBuilder {
    pub fn new(defaults: FieldDefaults) -> Self {
        Self { defaults }
    }

    /// Build the document in memory.
    pub fn build(&self, udt_name: &str, rows: &[TagRow]) -> UdtDocument {
        UdtDocument::from_rows(udt_name, rows, &self.defaults, |row, issue| match issue {
            RowIssue::MissingName => debug!(row, "Skipping row without a name"),
            RowIssue::InvalidSampleRate(rate) => {
                debug!(row, rate = %rate, "Dropping non-numeric history sample rate")
            }
        })
    }

    /// Read all rows, build the document, then hand it to the writer.
    ///
    /// Nothing is written unless reading and building both succeed.
    pub fn run(
        &self,
        udt_name: &str,
        source: &mut dyn TagRowSource,
        writer: &mut dyn UdtDocumentWriter,
    ) -> Result<BuildSummary> {
        info!(source = %source.describe(), udt = %udt_name, "Reading tag definitions");
        let rows = source.read_rows()?;
        debug!(rows = rows.len(), "Rows loaded");

        let document = self.build(udt_name, &rows);
        info!(tags = document.tag_count(), "UDT assembled");

        writer.write_document(&document)?;
        info!(destination = %writer.describe(), "UDT written");

        Ok(BuildSummary {
            source: source.describe(),
            destination: writer.describe(),
            udt_name: udt_name.to_string(),
            rows_read: rows.len(),
            tags_created: document.tag_count(),
        })
    }
}
