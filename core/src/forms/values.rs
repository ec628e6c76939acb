use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Value of one field as entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Checkbox group selections, in the order they were made.
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.selected_count() == 0
    }

    /// Number of distinct, non-blank options selected. A non-blank single
    /// value counts as one.
    pub fn selected_count(&self) -> usize {
        match self {
            FieldValue::Text(text) if text.trim().is_empty() => 0,
            FieldValue::Text(_) => 1,
            FieldValue::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

/// Current contents of a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), FieldValue::Text(value.into()));
    }

    pub fn set_list(&mut self, name: impl Into<String>, items: Vec<String>) {
        self.values.insert(name.into(), FieldValue::List(items));
    }

    /// Single consent checkbox. Unchecked boxes are absent, as in a posted form.
    pub fn set_checked(&mut self, name: impl Into<String>, checked: bool) {
        let name = name.into();
        if checked {
            self.values.insert(name, FieldValue::Text("on".to_string()));
        } else {
            self.values.remove(&name);
        }
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.get(name).map(|value| !value.is_blank()).unwrap_or(false)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn with_list(mut self, name: &str, items: &[&str]) -> Self {
        self.set_list(name, items.iter().map(|item| item.to_string()).collect());
        self
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
