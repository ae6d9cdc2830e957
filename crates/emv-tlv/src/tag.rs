use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Two-digit decimal tag identifier (`00`..`99`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

impl From<u8> for Tag {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag must be two decimal digits, got {0:?}")]
pub struct InvalidTag(pub String);

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidTag(s.to_string()));
        }
        Ok(Self((bytes[0] - b'0') * 10 + (bytes[1] - b'0')))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Decoded fields of one TLV stream, ordered by tag.
///
/// A tag seen twice keeps the value of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TlvMap {
    fields: BTreeMap<Tag, String>,
}

impl TlvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `tag`, returning the value it replaced.
    pub fn insert(&mut self, tag: impl Into<Tag>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(tag.into(), value.into())
    }

    pub fn get(&self, tag: impl Into<Tag>) -> Option<&str> {
        self.fields.get(&tag.into()).map(String::as_str)
    }

    pub fn contains(&self, tag: impl Into<Tag>) -> bool {
        self.fields.contains_key(&tag.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> {
        self.fields.iter().map(|(tag, value)| (*tag, value.as_str()))
    }
}

impl<T: Into<Tag>, V: Into<String>> FromIterator<(T, V)> for TlvMap {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}

impl IntoIterator for TlvMap {
    type Item = (Tag, String);
    type IntoIter = std::collections::btree_map::IntoIter<Tag, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
