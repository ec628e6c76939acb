use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The marketing forms on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Volunteer,
    Sponsor,
    Exhibitor,
    Registration,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Volunteer,
        FormKind::Sponsor,
        FormKind::Exhibitor,
        FormKind::Registration,
    ];

    /// Path segment used by the intake endpoint.
    pub fn slug(self) -> &'static str {
        match self {
            FormKind::Volunteer => "volunteer",
            FormKind::Sponsor => "sponsor",
            FormKind::Exhibitor => "exhibitor",
            FormKind::Registration => "registration",
        }
    }

    /// DOM id of the rendered `<form>`.
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Volunteer => "volunteerForm",
            FormKind::Sponsor => "sponsorForm",
            FormKind::Exhibitor => "exhibitorForm",
            FormKind::Registration => "registrationForm",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| format!("unknown form: {}", s))
    }
}

/// One option of a select, radio or checkbox group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const YES_NO: &[Choice] = &[Choice::new("yes", "Yes"), Choice::new("no", "No")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select(&'static [Choice]),
    Radio(&'static [Choice]),
    CheckboxGroup(&'static [Choice]),
    /// A single consent box, submitted as `"on"` when checked.
    Checkbox,
}

impl FieldKind {
    pub fn is_multi(&self) -> bool {
        matches!(self, FieldKind::CheckboxGroup(_))
    }
}

/// Inclusive bounds on how many options of a group may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupRule {
    pub min: usize,
    pub max: usize,
}

impl GroupRule {
    pub fn allows(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Where the error marker goes for a failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTarget {
    Input,
    GroupContainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub group: Option<GroupRule>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            group: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub const fn tel(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn between(self, min: usize, max: usize) -> Self {
        Self {
            group: Some(GroupRule { min, max }),
            ..self
        }
    }

    /// `name` attribute on the rendered input. Checkbox groups post as `name[]`.
    pub fn input_name(&self) -> String {
        if self.kind.is_multi() {
            format!("{}[]", self.name)
        } else {
            self.name.to_string()
        }
    }

    pub fn marker_target(&self) -> MarkerTarget {
        match self.kind {
            FieldKind::Radio(_) | FieldKind::CheckboxGroup(_) => MarkerTarget::GroupContainer,
            _ => MarkerTarget::Input,
        }
    }
}

/// Declarative description of one form.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub success_message: &'static str,
    /// How long the success or error notice stays up.
    pub notice_duration_ms: u32,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.field(name).map(|field| field.label).unwrap_or(name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }
}
