mod defaults;
mod metadata;
mod record;
mod row;

pub use defaults::{FieldDefaults, FieldRule};
pub use metadata::{MetadataSpec, StateEntry, StateValue};
pub use record::{AlarmSpec, RowIssue, TagRecord};
pub use row::{TagField, TagRow};
