use std::path::{Path, PathBuf};

use domain::error::Result;
use domain::extract::FlatTagEntry;
use domain::{DomainError, TagEntrySink};
use tracing::{debug, info};

/// Exports a flattened listing as `tag,documentation,alarm,history` CSV.
///
/// An empty listing creates no file.
pub struct CsvEntryExporter {
    path: PathBuf,
    written: usize,
}

impl CsvEntryExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows written by the last export
    pub fn written(&self) -> usize {
        self.written
    }
}

/// Render entries to CSV bytes with a header row and CRLF record endings.
pub fn render_entries(entries: &[FlatTagEntry]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(&mut buffer);
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

impl TagEntrySink for CsvEntryExporter {
    fn write_entries(&mut self, entries: &[FlatTagEntry]) -> Result<()> {
        self.written = 0;
        if entries.is_empty() {
            debug!(path = %self.path.display(), "Empty listing, no file written");
            return Ok(());
        }

        let bytes = render_entries(entries)
            .map_err(|e| DomainError::output(self.path.display().to_string(), e))?;
        std::fs::write(&self.path, bytes)
            .map_err(|e| DomainError::output(self.path.display().to_string(), e))?;

        self.written = entries.len();
        info!(count = entries.len(), path = %self.path.display(), "Exported tags");
        Ok(())
    }
}
