use std::collections::HashMap;

/// Spreadsheet markers that read as "no value".
///
/// Matches the set of not-available strings spreadsheet exports commonly
/// contain, so `N/A` or `#N/A` in a cell behaves like an empty cell.
pub(crate) const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if a raw cell should be treated as absent.
pub(crate) fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Known spreadsheet columns of a tag definition row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Name,
    DataType,
    Documentation,
    EngUnit,
    ValueSource,
    TagType,
    AlarmMode,
    AlarmName,
    HistoryEnabled,
    HistorySampleRate,
    HistorySampleRateUnits,
    ShortDescription,
    StateLabels,
    StateValues,
}

impl TagField {
    pub const ALL: [TagField; 14] = [
        Self::Name,
        Self::DataType,
        Self::Documentation,
        Self::EngUnit,
        Self::ValueSource,
        Self::TagType,
        Self::AlarmMode,
        Self::AlarmName,
        Self::HistoryEnabled,
        Self::HistorySampleRate,
        Self::HistorySampleRateUnits,
        Self::ShortDescription,
        Self::StateLabels,
        Self::StateValues,
    ];

    /// Canonical column header
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DataType => "dataType",
            Self::Documentation => "documentation",
            Self::EngUnit => "engUnit",
            Self::ValueSource => "valueSource",
            Self::TagType => "tagType",
            Self::AlarmMode => "alarmMode",
            Self::AlarmName => "alarmName",
            Self::HistoryEnabled => "historyEnabled",
            Self::HistorySampleRate => "historySampleRate",
            Self::HistorySampleRateUnits => "historySampleRateUnits",
            Self::ShortDescription => "shortDescription",
            Self::StateLabels => "stateLabels",
            Self::StateValues => "stateValues",
        }
    }

    /// Resolve a header cell, ignoring ASCII case and surrounding whitespace.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.column().eq_ignore_ascii_case(header))
    }
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One spreadsheet row: an unordered set of named cells.
///
/// Missing cells are never stored, so `get` returning `None` always means
/// "use the default or omit the output field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRow {
    cells: HashMap<TagField, String>,
}

impl TagRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell unless it reads as missing.
    pub fn set(&mut self, field: TagField, raw: impl Into<String>) {
        let raw = raw.into();
        if is_missing(&raw) {
            self.cells.remove(&field);
        } else {
            self.cells.insert(field, raw);
        }
    }

    /// Builder form of [`TagRow::set`]
    pub fn with(mut self, field: TagField, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    pub fn get(&self, field: TagField) -> Option<&str> {
        self.cells.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: TagField) -> bool {
        self.cells.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
