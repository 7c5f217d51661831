use std::path::{Path, PathBuf};

use domain::error::Result;
use domain::{DomainError, UdtDocument, UdtDocumentWriter};
use tracing::debug;

/// Writes a UDT document as two-space indented UTF-8 JSON
pub struct JsonUdtWriter {
    path: PathBuf,
}

impl JsonUdtWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Pretty JSON text; non-ASCII characters are written as-is.
pub fn render_document(document: &UdtDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

impl UdtDocumentWriter for JsonUdtWriter {
    fn write_document(&mut self, document: &UdtDocument) -> Result<()> {
        // Render first so a serialization failure never leaves a file behind.
        let text = render_document(document).map_err(|e| DomainError::output(self.describe(), e))?;
        std::fs::write(&self.path, text).map_err(|e| DomainError::output(self.describe(), e))?;
        debug!(path = %self.path.display(), tags = document.tag_count(), "UDT file written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
