pub mod csv_rows;
pub mod json_document;

pub use csv_rows::{CsvTagRowSource, read_tag_rows};
pub use json_document::JsonDocumentSource;

use domain::DomainError;
use std::path::Path;

/// Map an open/read failure to the input error taxonomy.
pub(crate) fn input_error(path: &Path, err: std::io::Error) -> DomainError {
    if err.kind() == std::io::ErrorKind::NotFound {
        DomainError::InputNotFound(path.display().to_string())
    } else {
        DomainError::malformed(path.display().to_string(), err)
    }
}
