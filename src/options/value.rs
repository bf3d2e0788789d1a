//! Resolved option values and the ordered [`CompilerOptions`] record.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The resolved value of one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean flag that was present on the command line.
    Flag(bool),
    /// Canonical value of a single-valued enumeration.
    Single(String),
    /// Canonical values of a multi-valued enumeration, in order of appearance.
    List(Vec<String>),
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag(b) => serializer.serialize_bool(*b),
            OptionValue::Single(s) => serializer.serialize_str(s),
            OptionValue::List(items) => items.serialize(serializer),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag(b) => write!(f, "{b}"),
            OptionValue::Single(s) => f.write_str(s),
            OptionValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// How a new occurrence of an option combines with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Later occurrence replaces the earlier value.
    Overwrite,
    /// Later occurrence's list is appended to the earlier one.
    Append,
}

/// Options keyed by registered option name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    entries: Vec<(&'static str, OptionValue)>,
}

impl CompilerOptions {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// `true` when the boolean option `key` was set.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(OptionValue::Flag(true)))
    }

    pub fn single(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(OptionValue::Single(s)) => Some(s),
            _ => None,
        }
    }

    /// Accumulated list for `key`, or `None` if the option never appeared.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.get(key) {
            Some(OptionValue::List(items)) => Some(items),
            _ => None,
        }
    }

    /// Declaration library files selected with `--library`.
    pub fn library(&self) -> Option<&[String]> {
        self.list("library")
    }

    pub fn target(&self) -> Option<&str> {
        self.single("target")
    }

    pub fn module(&self) -> Option<&str> {
        self.single("module")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Combine `value` into the entry for `key` according to `strategy`.
    ///
    /// A key seen for the first time is inserted at the end regardless of
    /// strategy.
    pub fn merge(&mut self, key: &'static str, value: OptionValue, strategy: MergeStrategy) {
        let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, value));
            return;
        };
        match (strategy, &mut slot.1, value) {
            (MergeStrategy::Append, OptionValue::List(existing), OptionValue::List(more)) => {
                existing.extend(more);
            }
            (_, current, value) => *current = value,
        }
    }
}

impl Serialize for CompilerOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
