use std::path::{Path, PathBuf};

use domain::error::Result;
use domain::{DocumentSource, DomainError};
use serde_json::Value;

/// Reads an exported UDT / tag JSON file
pub struct JsonDocumentSource {
    path: PathBuf,
}

impl JsonDocumentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for JsonDocumentSource {
    fn read_document(&mut self) -> Result<Value> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| super::input_error(&self.path, e))?;
        serde_json::from_str(text.trim_start_matches('\u{feff}'))
            .map_err(|e| DomainError::malformed(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
