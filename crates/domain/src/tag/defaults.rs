use serde::{Deserialize, Serialize};

use super::row::{TagField, TagRow};

/// How a tag field is resolved when its cell is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule<'a> {
    /// Fall back to this value
    Default(&'a str),
    /// Leave the output field out entirely
    OmitIfAbsent,
}

/// Fallback values for the optional tag columns.
///
/// Every field not listed in [`FieldDefaults::rule`] with a default is
/// omitted from the output when absent. Defaults never cascade: one field's
/// fallback does not depend on another field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefaults {
    #[serde(default = "default_value_source")]
    pub value_source: String,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default = "default_tag_type")]
    pub tag_type: String,
    #[serde(default = "default_alarm_name")]
    pub alarm_name: String,
}

fn default_value_source() -> String {
    "opc".to_string()
}
fn default_data_type() -> String {
    "Float4".to_string()
}
fn default_tag_type() -> String {
    "AtomicTag".to_string()
}
fn default_alarm_name() -> String {
    "Alarm".to_string()
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            value_source: default_value_source(),
            data_type: default_data_type(),
            tag_type: default_tag_type(),
            alarm_name: default_alarm_name(),
        }
    }
}

impl FieldDefaults {
    pub fn rule(&self, field: TagField) -> FieldRule<'_> {
        match field {
            TagField::ValueSource => FieldRule::Default(&self.value_source),
            TagField::DataType => FieldRule::Default(&self.data_type),
            TagField::TagType => FieldRule::Default(&self.tag_type),
            TagField::AlarmName => FieldRule::Default(&self.alarm_name),
            _ => FieldRule::OmitIfAbsent,
        }
    }

    /// Cell value if present, else the field's default, else `None`.
    pub fn resolve<'a>(&'a self, row: &'a TagRow, field: TagField) -> Option<&'a str> {
        row.get(field).or(match self.rule(field) {
            FieldRule::Default(value) => Some(value),
            FieldRule::OmitIfAbsent => None,
        })
    }
}
