#![forbid(unsafe_code)]

//! Options offered by a tag picker.
//!
//! Options arrive from the tag source as `{tagId, tagName}` records and are
//! kept in source order. Values are unique: when a value repeats, the first
//! occurrence wins and later ones are dropped.

use std::collections::HashSet;

/// Value of the "all tags" pseudo-option.
///
/// The sentinel is never a content tag. [`TagOptions`] refuses to store it,
/// and chip rendering skips it.
pub const ALL_TAGS_VALUE: &str = "all";

/// One record of the tag source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRecord {
    /// Numeric tag id, used as the option value.
    #[cfg_attr(feature = "serde", serde(rename = "tagId"))]
    pub tag_id: i64,
    /// Display name, used as the option label.
    #[cfg_attr(feature = "serde", serde(rename = "tagName"))]
    pub tag_name: String,
}

impl TagRecord {
    /// Create a record.
    pub fn new(tag_id: i64, tag_name: impl Into<String>) -> Self {
        Self {
            tag_id,
            tag_name: tag_name.into(),
        }
    }
}

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagOption {
    /// Value submitted with the form.
    pub value: String,
    /// Text shown to the user and matched by the search field.
    pub label: String,
}

impl TagOption {
    /// Create an option from a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Whether this is the "all tags" sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.value == ALL_TAGS_VALUE
    }
}

impl From<TagRecord> for TagOption {
    fn from(record: TagRecord) -> Self {
        Self {
            value: record.tag_id.to_string(),
            label: record.tag_name,
        }
    }
}

impl From<(&str, &str)> for TagOption {
    fn from((value, label): (&str, &str)) -> Self {
        Self::new(value, label)
    }
}

/// Ordered option list, unique by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    items: Vec<TagOption>,
    values: HashSet<String>,
}

impl TagOptions {
    /// Create an empty option list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option.
    ///
    /// Returns `false` (and leaves the list unchanged) when the value is
    /// already present or is the "all tags" sentinel.
    pub fn push(&mut self, option: impl Into<TagOption>) -> bool {
        let option = option.into();
        if option.is_sentinel() || self.values.contains(&option.value) {
            return false;
        }
        self.values.insert(option.value.clone());
        self.items.push(option);
        true
    }

    /// Whether an option with this value exists.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Look up an option by value.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&TagOption> {
        if !self.contains(value) {
            return None;
        }
        self.items.iter().find(|option| option.value == value)
    }

    /// Iterate options in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TagOption> {
        self.items.iter()
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Into<TagOption>> FromIterator<T> for TagOptions {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut options = Self::new();
        for option in iter {
            options.push(option);
        }
        options
    }
}

impl<'a> IntoIterator for &'a TagOptions {
    type Item = &'a TagOption;
    type IntoIter = std::slice::Iter<'a, TagOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
