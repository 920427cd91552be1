//! Field primitives of the lead form.
//!
//! Each control is described once here; the `components/fields.html` tera
//! macros render a labelled input, select or textarea from the bound view.
//! The controls hold no state: the value comes from the current draft and
//! edits flow back through the posted [`crate::forms::lead::LeadForm`].

use serde::Serialize;

use crate::domain::lead::{LeadDraft, LeadField};
use crate::domain::types::SERVICE_CATALOG;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Input,
    Select,
    TextArea,
}

/// Static description of one control.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub field: LeadField,
    pub label: &'static str,
    pub kind: FieldKind,
    /// HTML `type` attribute for inputs.
    pub input_type: &'static str,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    /// Lower bound for numeric inputs.
    pub min: Option<&'static str>,
    /// Spans both columns of the form grid.
    pub wide: bool,
}

impl FieldSpec {
    const fn input(field: LeadField, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Input,
            input_type: "text",
            required: false,
            placeholder: None,
            min: None,
            wide: false,
        }
    }

    const fn of_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn count(mut self) -> Self {
        self.input_type = "number";
        self.min = Some("0");
        self
    }

    const fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Controls of the lead form in render order.
pub const LEAD_FORM_FIELDS: [FieldSpec; 10] = [
    FieldSpec::input(LeadField::Name, "Full name")
        .required()
        .placeholder("Jane Doe"),
    FieldSpec::input(LeadField::Email, "Email")
        .of_type("email")
        .required()
        .placeholder("jane@email.com"),
    FieldSpec::input(LeadField::Phone, "Phone")
        .required()
        .placeholder("(555) 555-1234"),
    FieldSpec::input(LeadField::City, "City").placeholder("San Francisco"),
    FieldSpec::input(LeadField::Address, "Address")
        .required()
        .placeholder("123 Main St")
        .wide(),
    FieldSpec::input(LeadField::ServiceType, "Service type")
        .kind(FieldKind::Select)
        .required(),
    FieldSpec::input(LeadField::Bedrooms, "Bedrooms").count(),
    FieldSpec::input(LeadField::Bathrooms, "Bathrooms").count(),
    FieldSpec::input(LeadField::PreferredDate, "Preferred date").of_type("date"),
    FieldSpec::input(LeadField::Message, "Anything else?")
        .kind(FieldKind::TextArea)
        .wide(),
];

/// A control bound to the value it currently displays.
#[derive(Clone, Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub input_type: &'static str,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub min: Option<&'static str>,
    pub wide: bool,
    pub value: String,
    /// Choices of a select control, empty for other kinds.
    pub options: Vec<&'static str>,
}

/// Binds every control of the lead form to the draft.
pub fn bind_fields(draft: &LeadDraft) -> Vec<FieldView> {
    LEAD_FORM_FIELDS
        .iter()
        .map(|spec| FieldView {
            name: spec.field.name(),
            label: spec.label,
            kind: spec.kind,
            input_type: spec.input_type,
            required: spec.required,
            placeholder: spec.placeholder,
            min: spec.min,
            wide: spec.wide,
            value: draft.value(spec.field).to_string(),
            options: match spec.kind {
                FieldKind::Select => SERVICE_CATALOG.iter().map(|s| s.label()).collect(),
                _ => Vec::new(),
            },
        })
        .collect()
}
