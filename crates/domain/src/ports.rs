//! Port interfaces for the two pipelines
//!
//! Implementations live in the infrastructure layer. Every implementation
//! must release its file handles before returning, on success and on error.

use serde_json::Value;

use crate::error::Result;
use crate::extract::FlatTagEntry;
use crate::tag::TagRow;
use crate::udt::UdtDocument;

/// Supplies the spreadsheet rows of a tag definition
pub trait TagRowSource {
    /// Read every row, in sheet order
    fn read_rows(&mut self) -> Result<Vec<TagRow>>;

    /// Human-readable origin, used in log and summary lines
    fn describe(&self) -> String;
}

/// Persists an encoded UDT document
pub trait UdtDocumentWriter {
    /// Write the whole document or nothing at all
    fn write_document(&mut self, document: &UdtDocument) -> Result<()>;

    fn describe(&self) -> String;
}

/// Supplies an exported UDT / tag JSON document
pub trait DocumentSource {
    fn read_document(&mut self) -> Result<Value>;

    fn describe(&self) -> String;
}

/// Receives a flattened tag listing
pub trait TagEntrySink {
    fn write_entries(&mut self, entries: &[FlatTagEntry]) -> Result<()>;
}
