use application::UdtBuilder;
use domain::error::Result;
use domain::tag::{FieldDefaults, TagField, TagRow};
use domain::{DomainError, TagRowSource, UdtDocument, UdtDocumentWriter};
use serde_json::json;

// In-memory spreadsheet
struct MockRowSource {
    rows: Option<Vec<TagRow>>,
}

impl TagRowSource for MockRowSource {
    fn read_rows(&mut self) -> Result<Vec<TagRow>> {
        self.rows
            .clone()
            .ok_or_else(|| DomainError::InputNotFound("tags.csv".to_string()))
    }

    fn describe(&self) -> String {
        "tags.csv".to_string()
    }
}

// Captures written documents
#[derive(Default)]
struct MockWriter {
    written: Vec<UdtDocument>,
}

impl UdtDocumentWriter for MockWriter {
    fn write_document(&mut self, document: &UdtDocument) -> Result<()> {
        self.written.push(document.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "output.json".to_string()
    }
}

fn switchboard_rows() -> Vec<TagRow> {
    vec![
        TagRow::new()
            .with(TagField::Name, "V_AB")
            .with(TagField::Documentation, "Voltage A to B")
            .with(TagField::EngUnit, "V"),
        TagRow::new().with(TagField::Documentation, "row without name"),
        TagRow::new()
            .with(TagField::Name, "BRK_POS")
            .with(TagField::DataType, "Boolean")
            .with(TagField::AlarmMode, "WhenTrue")
            .with(TagField::ShortDescription, "Breaker state")
            .with(TagField::StateLabels, "Closed|Open")
            .with(TagField::StateValues, "false|true"),
        TagRow::new()
            .with(TagField::Name, "KW_TOTAL")
            .with(TagField::HistoryEnabled, "x")
            .with(TagField::HistorySampleRate, "abc")
            .with(TagField::HistorySampleRateUnits, "Seconds"),
    ]
}

#[test]
fn test_run_writes_complete_document() {
    let builder = UdtBuilder::default();
    let mut source = MockRowSource {
        rows: Some(switchboard_rows()),
    };
    let mut writer = MockWriter::default();

    let summary = builder.run("MV_SWBOARD", &mut source, &mut writer).unwrap();

    assert_eq!(summary.rows_read, 4);
    assert_eq!(summary.tags_created, 3);
    assert_eq!(summary.udt_name, "MV_SWBOARD");
    assert_eq!(summary.destination, "output.json");
    assert_eq!(writer.written.len(), 1);

    let value = serde_json::to_value(&writer.written[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "MV_SWBOARD",
            "tagType": "UdtType",
            "tags": [
                {
                    "valueSource": "opc",
                    "dataType": "Float4",
                    "documentation": "Voltage A to B",
                    "name": "V_AB",
                    "tagType": "AtomicTag",
                    "engUnit": "V"
                },
                {
                    "valueSource": "opc",
                    "dataType": "Boolean",
                    "name": "BRK_POS",
                    "tagType": "AtomicTag",
                    "alarms": [{"mode": "WhenTrue", "name": "Alarm"}],
                    "Metadata": {
                        "shortDescription": "Breaker state",
                        "states": [
                            {"label": "Closed", "value": false},
                            {"label": "Open", "value": true}
                        ]
                    }
                },
                {
                    "valueSource": "opc",
                    "dataType": "Float4",
                    "name": "KW_TOTAL",
                    "tagType": "AtomicTag",
                    "historyEnabled": "true",
                    "historySampleRateUnits": "Seconds"
                }
            ]
        })
    );
}

#[test]
fn test_read_failure_writes_nothing() {
    let builder = UdtBuilder::default();
    let mut source = MockRowSource { rows: None };
    let mut writer = MockWriter::default();

    let err = builder
        .run("MV_SWBOARD", &mut source, &mut writer)
        .unwrap_err();

    assert_eq!(err.to_string(), "File 'tags.csv' not found");
    assert!(writer.written.is_empty());
}

#[test]
fn test_configured_defaults_apply() {
    let defaults = FieldDefaults {
        value_source: "memory".to_string(),
        data_type: "Int4".to_string(),
        ..FieldDefaults::default()
    };
    let builder = UdtBuilder::new(defaults);

    let document = builder.build(
        "PUMP",
        &[TagRow::new()
            .with(TagField::Name, "RUN")
            .with(TagField::AlarmMode, "WhenTrue")],
    );

    let tag = &document.tags[0];
    assert_eq!(tag.value_source, "memory");
    assert_eq!(tag.data_type, "Int4");
    assert_eq!(tag.tag_type, "AtomicTag");
    assert_eq!(tag.alarms.as_ref().unwrap()[0].name, "Alarm");
}

#[test]
fn test_no_named_rows_still_produces_envelope() {
    let builder = UdtBuilder::default();
    let document = builder.build("EMPTY", &[TagRow::new(), TagRow::new()]);
    assert_eq!(document.name, "EMPTY");
    assert!(document.tags.is_empty());
}
