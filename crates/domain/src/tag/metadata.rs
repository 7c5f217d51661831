use serde::{Deserialize, Serialize};

/// Separator between entries of the `stateLabels` / `stateValues` cells
pub(crate) const STATE_SEPARATOR: char = '|';

const TRUE_WORDS: &[&str] = &["true", "1", "yes", "y"];
const FALSE_WORDS: &[&str] = &["false", "0", "no", "n"];

/// Raw value a state label maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Text(String),
}

impl StateValue {
    /// Coerce one token using the boolean vocabulary.
    ///
    /// Tokens outside the vocabulary stay text, trimmed but otherwise as written.
    pub fn coerce(token: &str) -> Self {
        let token = token.trim();
        let lowered = token.to_ascii_lowercase();
        if TRUE_WORDS.contains(&lowered.as_str()) {
            Self::Bool(true)
        } else if FALSE_WORDS.contains(&lowered.as_str()) {
            Self::Bool(false)
        } else {
            Self::Text(token.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    pub label: String,
    pub value: StateValue,
}

/// `Metadata` block of a tag: short description plus optional state table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSpec {
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<StateEntry>>,
}

impl MetadataSpec {
    pub fn new(short_description: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            states: None,
        }
    }

    /// Attach states zipped from pipe-delimited cells.
    ///
    /// Extra labels or values beyond the shorter list are dropped. The
    /// `states` key stays unset when no pair results.
    pub fn with_states(mut self, labels: &str, values: &str) -> Self {
        let states: Vec<StateEntry> = labels
            .split(STATE_SEPARATOR)
            .zip(values.split(STATE_SEPARATOR))
            .map(|(label, value)| StateEntry {
                label: label.trim().to_string(),
                value: StateValue::coerce(value),
            })
            .collect();

        if !states.is_empty() {
            self.states = Some(states);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_vocabulary() {
        for word in ["true", "1", "yes", "y", " TRUE ", "Yes"] {
            assert_eq!(StateValue::coerce(word), StateValue::Bool(true), "{word}");
        }
        for word in ["false", "0", "no", "n", "False", " N"] {
            assert_eq!(StateValue::coerce(word), StateValue::Bool(false), "{word}");
        }
    }

    #[test]
    fn test_coerce_keeps_unknown_tokens_trimmed() {
        assert_eq!(
            StateValue::coerce("  Tripped "),
            StateValue::Text("Tripped".to_string())
        );
        assert_eq!(StateValue::coerce("2"), StateValue::Text("2".to_string()));
    }

    #[test]
    fn test_breaker_states() {
        let md = MetadataSpec::new("Breaker state").with_states("Closed|Open", "false|true");
        assert_eq!(
            serde_json::to_value(&md).unwrap(),
            json!({
                "shortDescription": "Breaker state",
                "states": [
                    {"label": "Closed", "value": false},
                    {"label": "Open", "value": true}
                ]
            })
        );
    }

    #[test]
    fn test_length_mismatch_drops_extra_pairs() {
        let md = MetadataSpec::new("Mode").with_states(" Off | Auto | Hand ", "0|1");
        let states = md.states.unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].label, "Off");
        assert_eq!(states[1].label, "Auto");
    }

    #[test]
    fn test_without_states_key_is_absent() {
        let md = MetadataSpec::new("Feeder current");
        assert_eq!(
            serde_json::to_value(&md).unwrap(),
            json!({"shortDescription": "Feeder current"})
        );
    }
}
