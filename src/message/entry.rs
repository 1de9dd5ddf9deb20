//! Backend entry payloads.
//!
//! The Q&A backend returns entries with Go-style capitalised keys
//! (`ID`, `Author`, `Text`, `Type`, `Score`, `Voted`). Numeric id and score
//! become text when converted into a `MessageRecord`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

use super::record::MessageRecord;

/// Kind of a backend entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryType {
    #[default]
    None,
    Question,
    Comment,
}

impl EntryType {
    /// Short code used in backend query and form parameters.
    pub fn code(self) -> &'static str {
        match self {
            EntryType::None => "",
            EntryType::Question => "q",
            EntryType::Comment => "c",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "" | "none" => Some(EntryType::None),
            "q" | "question" => Some(EntryType::Question),
            "c" | "comment" => Some(EntryType::Comment),
            _ => None,
        }
    }

    fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(EntryType::None),
            1 => Some(EntryType::Question),
            2 => Some(EntryType::Comment),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryTypeVisitor;

        impl Visitor<'_> for EntryTypeVisitor {
            type Value = EntryType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an entry type code, name or index")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntryType, E> {
                EntryType::from_name(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntryType, E> {
                EntryType::from_index(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntryType, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(EntryType::from_index)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(EntryTypeVisitor)
    }
}

/// One entry as returned by the backend's listing endpoints.
///
/// Keys the record has no use for (`Timestamp`, `Votes`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendEntry {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Type")]
    pub kind: EntryType,
    #[serde(rename = "Score")]
    pub score: i64,
    #[serde(rename = "Voted")]
    pub voted: bool,
}

impl From<BackendEntry> for MessageRecord {
    fn from(entry: BackendEntry) -> Self {
        MessageRecord::new(
            entry.author,
            entry.text,
            entry.kind == EntryType::Question,
            entry.score.to_string(),
            entry.id.to_string(),
            entry.voted,
        )
    }
}
