//! Domain layer - UDT tag model and the two pure transformations over it
//!
//! This crate contains:
//! - Encoder model (TagRow, TagRecord, UdtDocument) and the row mapping rules
//! - Decoder model (Node views, FlatTagEntry) and the flattening walk
//! - Port traits implemented by the infrastructure layer
//!
//! Principles:
//! - No file or terminal I/O
//! - Messy input degrades to defaults instead of failing
//! - Testable in isolation

pub mod error;
pub mod extract;
pub mod ports;
pub mod tag;
pub mod udt;

// Re-export commonly used types
pub use error::DomainError;
pub use extract::{FlatTagEntry, Flag, TagSummary, flatten, list_top_level};
pub use ports::{DocumentSource, TagEntrySink, TagRowSource, UdtDocumentWriter};
pub use tag::{FieldDefaults, TagField, TagRecord, TagRow};
pub use udt::UdtDocument;
