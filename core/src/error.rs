//! Error types for form handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rule violation found while validating a form.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Group {group} has {actual} selected, expected between {min} and {max}")]
    GroupCardinality {
        group: String,
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl ValidationError {
    /// Name of the field or group the error points at.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(name) => name,
            ValidationError::GroupCardinality { group, .. } => group,
            ValidationError::InvalidFormat(name) => name,
        }
    }
}

/// Errors from handing a validated payload to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The server refused the payload. `fields` names what it flagged.
    #[error("{message}")]
    Rejected { message: String, fields: Vec<String> },
}

impl SubmitError {
    pub fn rejected(message: impl Into<String>, errors: &[ValidationError]) -> Self {
        SubmitError::Rejected {
            message: message.into(),
            fields: errors.iter().map(|error| error.field().to_string()).collect(),
        }
    }

    /// Fields to mark after a rejection.
    pub fn marked_fields(&self) -> &[String] {
        match self {
            SubmitError::Rejected { fields, .. } => fields,
            SubmitError::SubmissionFailed(_) => &[],
        }
    }

    /// Text shown in the form's error notice.
    pub fn notice_message(&self) -> String {
        match self {
            SubmitError::SubmissionFailed(_) => {
                "We couldn't submit your form right now. Please try again in a moment.".to_string()
            }
            SubmitError::Rejected { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_rejection_keeps_server_fields() {
        let errors: Vec<ValidationError> = serde_json::from_value(json!([
            {"kind": "missing_field", "detail": "orgName"},
            {
                "kind": "group_cardinality",
                "detail": {"group": "interests", "actual": 0, "min": 1, "max": 2}
            },
        ]))
        .unwrap();

        let error = SubmitError::rejected("Please fix the following: ...", &errors);
        assert_eq!(error.marked_fields(), ["orgName".to_string(), "interests".to_string()]);
        assert_eq!(error.notice_message(), "Please fix the following: ...");
    }

    #[test]
    fn test_network_failure_marks_nothing() {
        let error = SubmitError::SubmissionFailed("timeout".to_string());
        assert!(error.marked_fields().is_empty());
        assert!(error.notice_message().starts_with("We couldn't submit"));
    }
}
