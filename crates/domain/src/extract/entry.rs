use serde::{Deserialize, Serialize};

/// Yes/No column of a flattened tag listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    #[default]
    No,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the flattened tag listing.
///
/// Field order is the CSV column order: `tag,documentation,alarm,history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTagEntry {
    /// Slash-joined path from the document root
    pub tag: String,
    pub documentation: String,
    pub alarm: Flag,
    pub history: Flag,
}

/// Name and documentation of a top-level tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    pub name: String,
    pub documentation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_text() {
        assert_eq!(Flag::from(true).as_str(), "Yes");
        assert_eq!(Flag::from(false).to_string(), "No");
        assert_eq!(Flag::default(), Flag::No);
        assert_eq!(serde_json::to_string(&Flag::Yes).unwrap(), "\"Yes\"");
    }
}
