use serde::{Deserialize, Serialize};

use super::defaults::FieldDefaults;
use super::metadata::MetadataSpec;
use super::row::{TagField, TagRow};

/// Literal written to `historyEnabled` whenever historization is requested
pub(crate) const HISTORY_ENABLED: &str = "true";

/// A row that did not map cleanly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// No `name` cell; the row produced no tag
    MissingName,
    /// `historySampleRate` was not numeric and was left out
    InvalidSampleRate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub mode: String,
    pub name: String,
}

/// One tag of a UDT definition.
///
/// Field declaration order is the serialized key order expected by the
/// SCADA import tooling; do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    pub value_source: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub name: String,
    pub tag_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eng_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<AlarmSpec>>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_enabled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_sample_rate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_sample_rate_units: Option<String>,
}

impl TagRecord {
    /// Map one spreadsheet row to a tag.
    ///
    /// Returns `None` for rows without a name; those rows are filtered, not
    /// rejected. Anything skipped or dropped is passed to `report`.
    pub fn from_row(
        row: &TagRow,
        defaults: &FieldDefaults,
        report: &mut impl FnMut(RowIssue),
    ) -> Option<Self> {
        let Some(name) = row.get(TagField::Name) else {
            report(RowIssue::MissingName);
            return None;
        };
        let resolve = |field| defaults.resolve(row, field).map(str::to_string);

        let mut record = Self {
            value_source: resolve(TagField::ValueSource).unwrap_or_default(),
            data_type: resolve(TagField::DataType).unwrap_or_default(),
            documentation: resolve(TagField::Documentation),
            name: name.to_string(),
            tag_type: resolve(TagField::TagType).unwrap_or_default(),
            eng_unit: resolve(TagField::EngUnit),
            alarms: None,
            metadata: None,
            history_enabled: None,
            history_sample_rate: None,
            history_sample_rate_units: None,
        };

        if let Some(mode) = row.get(TagField::AlarmMode) {
            record.alarms = Some(vec![AlarmSpec {
                mode: mode.to_string(),
                name: resolve(TagField::AlarmName).unwrap_or_default(),
            }]);
        }

        if let Some(short_description) = row.get(TagField::ShortDescription) {
            let mut metadata = MetadataSpec::new(short_description);
            if let (Some(labels), Some(values)) =
                (row.get(TagField::StateLabels), row.get(TagField::StateValues))
            {
                metadata = metadata.with_states(labels, values);
            }
            record.metadata = Some(metadata);
        }

        // Any value at all enables historization; the cell content is not inspected.
        if row.has(TagField::HistoryEnabled) {
            record.history_enabled = Some(HISTORY_ENABLED.to_string());
            record.history_sample_rate_units = resolve(TagField::HistorySampleRateUnits);
            if let Some(raw) = row.get(TagField::HistorySampleRate) {
                record.history_sample_rate = parse_sample_rate(raw);
                if record.history_sample_rate.is_none() {
                    report(RowIssue::InvalidSampleRate(raw.to_string()));
                }
            }
        }

        Some(record)
    }
}

/// Integer coercion for sample rate cells.
///
/// Accepts integer text and decimal text (truncated toward zero, as a
/// numeric spreadsheet cell would be). Anything else yields `None`.
pub(crate) fn parse_sample_rate(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
            .map(|v| v.trunc() as i64)
    })
}
