use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::forms::schema::FormSchema;
use crate::forms::values::{FieldValue, FormValues};

/// Body posted to the intake endpoint: field name to value, with checkbox
/// groups as lists in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, FieldValue>);

impl FormPayload {
    /// Keeps only fields declared by `schema`. Unchecked boxes and empty
    /// groups are left out, the way a browser posts a form. Group entries are
    /// trimmed and deduplicated, keeping the first occurrence.
    pub fn from_values(schema: &FormSchema, values: &FormValues) -> Self {
        let fields = schema
            .fields
            .iter()
            .filter_map(|field| {
                let value = match values.get(field.name)? {
                    FieldValue::List(items) => FieldValue::List(distinct_entries(items)),
                    FieldValue::Text(text) if field.kind.is_multi() => {
                        FieldValue::List(distinct_entries(std::slice::from_ref(text)))
                    }
                    text => text.clone(),
                };
                match &value {
                    FieldValue::List(items) if items.is_empty() => None,
                    _ => Some((field.name.to_string(), value)),
                }
            })
            .collect();
        Self(fields)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_values(self) -> FormValues {
        self.0.into_iter().collect()
    }
}

fn distinct_entries(items: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items.iter().map(|item| item.trim()) {
        if !item.is_empty() && !seen.iter().any(|kept: &String| kept == item) {
            seen.push(item.to_string());
        }
    }
    seen
}

impl FormValues {
    pub fn from_payload(payload: FormPayload) -> Self {
        payload.into_values()
    }
}
