use serde::{Deserialize, Serialize};

use crate::tag::{FieldDefaults, RowIssue, TagRecord, TagRow};

/// `tagType` of every UDT definition document
pub const UDT_TAG_TYPE: &str = "UdtType";

/// A User Defined Type definition as consumed by the SCADA tag import.
///
/// Serialized key order: `name`, `tagType`, `tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtDocument {
    pub name: String,
    pub tag_type: String,
    pub tags: Vec<TagRecord>,
}

impl UdtDocument {
    pub fn new(name: impl Into<String>, tags: Vec<TagRecord>) -> Self {
        Self {
            name: name.into(),
            tag_type: UDT_TAG_TYPE.to_string(),
            tags,
        }
    }

    /// Map every named row to a tag, keeping row order.
    ///
    /// `report` receives the 1-based row number of every [`RowIssue`].
    pub fn from_rows<'a>(
        name: impl Into<String>,
        rows: impl IntoIterator<Item = &'a TagRow>,
        defaults: &FieldDefaults,
        report: impl FnMut(usize, RowIssue),
    ) -> Self {
        Self::new(name, build_tags(rows, defaults, report))
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Build the tag list for a sequence of rows; unnamed rows are dropped.
pub fn build_tags<'a>(
    rows: impl IntoIterator<Item = &'a TagRow>,
    defaults: &FieldDefaults,
    mut report: impl FnMut(usize, RowIssue),
) -> Vec<TagRecord> {
    let mut tags = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let mut note = |issue| report(index + 1, issue);
        if let Some(record) = TagRecord::from_row(row, defaults, &mut note) {
            tags.push(record);
        }
    }
    tags
}
