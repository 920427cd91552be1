use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{ServiceType, TypeConstraintError};

/// Names of the editable fields of a [`LeadDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Address,
    City,
    ServiceType,
    Bedrooms,
    Bathrooms,
    PreferredDate,
    Message,
}

impl LeadField {
    /// Every field in form order.
    pub const ALL: [LeadField; 10] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Address,
        LeadField::City,
        LeadField::ServiceType,
        LeadField::Bedrooms,
        LeadField::Bathrooms,
        LeadField::PreferredDate,
        LeadField::Message,
    ];

    /// Form control name, identical to the payload key.
    pub const fn name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Address => "address",
            LeadField::City => "city",
            LeadField::ServiceType => "service_type",
            LeadField::Bedrooms => "bedrooms",
            LeadField::Bathrooms => "bathrooms",
            LeadField::PreferredDate => "preferred_date",
            LeadField::Message => "message",
        }
    }
}

impl Display for LeadField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LeadField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TypeConstraintError::UnknownField(s.to_string()))
    }
}

/// In-progress lead as typed by the visitor.
///
/// Every value is kept exactly as entered. Room counts stay raw text until
/// [`LeadDraft::to_payload`] coerces them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub service_type: Option<ServiceType>,
    pub bedrooms: String,
    pub bathrooms: String,
    pub preferred_date: String,
    pub message: String,
}

impl LeadDraft {
    /// Returns a copy of the draft with exactly one field replaced.
    ///
    /// An empty service type clears the selection; a label outside the
    /// catalog is rejected and no copy is produced.
    pub fn with_field(&self, field: LeadField, value: &str) -> Result<Self, TypeConstraintError> {
        let mut next = self.clone();
        match field {
            LeadField::Name => next.name = value.to_string(),
            LeadField::Email => next.email = value.to_string(),
            LeadField::Phone => next.phone = value.to_string(),
            LeadField::Address => next.address = value.to_string(),
            LeadField::City => next.city = value.to_string(),
            LeadField::ServiceType => {
                next.service_type = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            LeadField::Bedrooms => next.bedrooms = value.to_string(),
            LeadField::Bathrooms => next.bathrooms = value.to_string(),
            LeadField::PreferredDate => next.preferred_date = value.to_string(),
            LeadField::Message => next.message = value.to_string(),
        }
        Ok(next)
    }

    /// Current value of a field as it should appear in the form control.
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Address => &self.address,
            LeadField::City => &self.city,
            LeadField::ServiceType => self.service_type.map_or("", ServiceType::label),
            LeadField::Bedrooms => &self.bedrooms,
            LeadField::Bathrooms => &self.bathrooms,
            LeadField::PreferredDate => &self.preferred_date,
            LeadField::Message => &self.message,
        }
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the creation request body for the backend.
    pub fn to_payload(&self) -> LeadPayload {
        LeadPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            service_type: self.value(LeadField::ServiceType).to_string(),
            bedrooms: parse_room_count(&self.bedrooms),
            bathrooms: parse_room_count(&self.bathrooms),
            preferred_date: self.preferred_date.clone(),
            message: self.message.clone(),
        }
    }
}

/// Coerces a raw room count. Empty or unparsable text becomes `None` so it is
/// sent as `null` rather than as the raw string.
fn parse_room_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(count) => Some(count),
        Err(err) => {
            log::debug!("Ignoring room count {trimmed:?}: {err}");
            None
        }
    }
}

/// JSON body of `POST /api/leads`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub service_type: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub preferred_date: String,
    pub message: String,
}

/// Backend assigned identifier, accepted as either a number or a string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LeadId {
    Number(i64),
    Text(String),
}

impl Display for LeadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadId::Number(id) => write!(f, "{id}"),
            LeadId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// A lead persisted by the backend. Read-only for this site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRecord {
    pub id: LeadId,
    pub name: String,
    pub service_type: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extracts the `items` array of a recent leads response.
///
/// A missing or non-array `items` value yields an empty list. Records are
/// decoded one by one and malformed ones are skipped.
pub fn recent_leads_from_json(body: &Value) -> Vec<LeadRecord> {
    let Some(items) = body.get("items") else {
        return Vec::new();
    };
    let Some(items) = items.as_array() else {
        log::warn!("Recent leads items is not an array: {items}");
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match LeadRecord::deserialize(item) {
            Ok(lead) => Some(lead),
            Err(err) => {
                log::warn!("Skipping malformed recent lead {item}: {err}");
                None
            }
        })
        .collect()
}
