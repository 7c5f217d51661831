use anyhow::Result;
use tracing::{info, warn};

use domain::extract::{self, FlatTagEntry, TagSummary};
use domain::{DocumentSource, TagEntrySink};

/// Decoder pipeline: document → depth-first flat listing → sink
#[derive(Debug, Clone, Copy, Default)]
pub struct TagExtractor;

impl TagExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, source: &mut dyn DocumentSource) -> Result<Vec<FlatTagEntry>> {
        info!(source = %source.describe(), "Parsing UDT file");
        let document = source.read_document()?;

        let entries = extract::flatten(&document);
        if entries.is_empty() {
            warn!(source = %source.describe(), "No tags, parameters or type definitions found");
        } else {
            info!(count = entries.len(), "Tags flattened");
        }
        Ok(entries)
    }

    /// Flatten the document and pass every entry to the sink.
    ///
    /// Returns the number of entries written.
    pub fn export(
        &self,
        source: &mut dyn DocumentSource,
        sink: &mut dyn TagEntrySink,
    ) -> Result<usize> {
        let entries = self.extract(source)?;
        sink.write_entries(&entries)?;
        Ok(entries.len())
    }

    /// Top-level tag names and documentation, without recursion.
    pub fn list_names(&self, source: &mut dyn DocumentSource) -> Result<Vec<TagSummary>> {
        info!(source = %source.describe(), "Listing top-level tags");
        let document = source.read_document()?;
        Ok(extract::list_top_level(&document))
    }
}
