//! Strongly-typed value objects used by the lead domain.
//!
//! The service catalog is fixed at compile time, so once a [`ServiceType`]
//! reaches the domain layer it is guaranteed to be one of the offerings the
//! site advertises.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided label is not part of the service catalog.
    #[error("unknown service type: {0}")]
    UnknownServiceType(String),
    /// Provided name does not match any lead form field.
    #[error("unknown lead field: {0}")]
    UnknownField(String),
}

/// One of the cleaning offerings listed in the service catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceType {
    StandardCleaning,
    DeepCleaning,
    MoveInOut,
    OfficeCleaning,
    PostConstruction,
    CarpetCleaning,
}

/// The service catalog in display order.
pub const SERVICE_CATALOG: [ServiceType; 6] = [
    ServiceType::StandardCleaning,
    ServiceType::DeepCleaning,
    ServiceType::MoveInOut,
    ServiceType::OfficeCleaning,
    ServiceType::PostConstruction,
    ServiceType::CarpetCleaning,
];

impl ServiceType {
    /// Human readable label, also used as the wire value.
    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::StandardCleaning => "Standard Cleaning",
            ServiceType::DeepCleaning => "Deep Cleaning",
            ServiceType::MoveInOut => "Move In/Out",
            ServiceType::OfficeCleaning => "Office Cleaning",
            ServiceType::PostConstruction => "Post-Construction",
            ServiceType::CarpetCleaning => "Carpet Cleaning",
        }
    }

    /// Short marketing blurb shown in the services showcase.
    pub fn blurb(self) -> String {
        format!(
            "High-quality {} tailored to your space.",
            self.label().to_lowercase()
        )
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ServiceType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SERVICE_CATALOG
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or_else(|| TypeConstraintError::UnknownServiceType(s.to_string()))
    }
}

impl TryFrom<&str> for ServiceType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
