use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema, MarkerTarget};
use crate::forms::values::FormValues;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl SubmissionResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error_for(&self, name: &str) -> bool {
        self.errors.iter().any(|error| error.field() == name)
    }

    /// Field and group names that should carry the error marker.
    pub fn marked_fields(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::field).collect()
    }

    /// One message naming every problem, in schema order.
    pub fn summary(&self, schema: &FormSchema) -> String {
        if self.valid {
            return String::new();
        }
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|error| describe(error, schema))
            .collect();
        format!("Please fix the following: {}.", parts.join("; "))
    }
}

/// Human readable form of one error, using the schema's labels.
pub fn describe(error: &ValidationError, schema: &FormSchema) -> String {
    let label = schema.label_for(error.field());
    match error {
        ValidationError::MissingField(_) => format!("{} is required", label),
        ValidationError::InvalidFormat(_) => format!("{} must be a valid email address", label),
        ValidationError::GroupCardinality {
            actual, min, max, ..
        } => {
            if actual < min {
                let noun = if *min == 1 { "option" } else { "options" };
                format!("{}: select at least {} {}", label, min, noun)
            } else {
                format!("{}: select no more than {} (you chose {})", label, max, actual)
            }
        }
    }
}

fn check_field(field: &FieldSpec, values: &FormValues, errors: &mut Vec<ValidationError>) {
    let value = values.get(field.name);

    if let Some(rule) = field.group {
        let actual = value.map(|value| value.selected_count()).unwrap_or(0);
        if !rule.allows(actual) {
            errors.push(ValidationError::GroupCardinality {
                group: field.name.to_string(),
                actual,
                min: rule.min,
                max: rule.max,
            });
        }
        return;
    }

    let text = value
        .and_then(|value| value.as_text())
        .map(str::trim)
        .unwrap_or("");
    if text.is_empty() {
        if field.required {
            errors.push(ValidationError::MissingField(field.name.to_string()));
        }
        return;
    }

    if field.kind == FieldKind::Email && !is_valid_email(text) {
        errors.push(ValidationError::InvalidFormat(field.name.to_string()));
    }
}

/// Checks every field of `schema` against `values` and reports all
/// violations in declaration order.
pub fn validate(schema: &FormSchema, values: &FormValues) -> SubmissionResult {
    let mut errors = Vec::new();
    for field in schema.fields {
        check_field(field, values, &mut errors);
    }
    SubmissionResult::from_errors(errors)
}

/// Where the marker for an error on `name` should be drawn.
pub fn marker_target(schema: &FormSchema, name: &str) -> MarkerTarget {
    schema
        .field(name)
        .map(FieldSpec::marker_target)
        .unwrap_or(MarkerTarget::Input)
}
