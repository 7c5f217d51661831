pub mod csv_entries;
pub mod json_udt;
pub mod text_report;

pub use csv_entries::{CsvEntryExporter, render_entries};
pub use json_udt::{JsonUdtWriter, render_document};
pub use text_report::TextReport;
