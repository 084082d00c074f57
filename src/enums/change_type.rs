use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of one extracted file change. The page occasionally exposes
/// badge labels outside the three known kinds; those are carried through
/// verbatim and excluded from the added/modified/deleted counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    Other(String),
}

impl ChangeType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "added" => ChangeType::Added,
            "modified" => ChangeType::Modified,
            "deleted" => ChangeType::Deleted,
            other => ChangeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Modified => "modified",
            ChangeType::Deleted => "deleted",
            ChangeType::Other(label) => label.as_str(),
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ChangeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChangeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ChangeType::from_label(&label))
    }
}
