//! Infrastructure layer - File and terminal adapters for the domain ports

pub mod config;
pub mod readers;
pub mod writers;

pub use config::ToolConfig;
pub use readers::{CsvTagRowSource, JsonDocumentSource};
pub use writers::{CsvEntryExporter, JsonUdtWriter, TextReport};
