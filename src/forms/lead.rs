//! State controller for the lead-capture form.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::lead::{LeadDraft, LeadField, LeadPayload};
use crate::forms::FormError;

/// Owns the draft of a single form instance.
///
/// Every edit swaps in a new [`LeadDraft`] snapshot and bumps the revision,
/// so holders of an older snapshot can tell it is stale.
#[derive(Debug, Default)]
pub struct LeadFormController {
    draft: Arc<LeadDraft>,
    revision: u64,
}

impl LeadFormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current draft.
    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<LeadDraft> {
        Arc::clone(&self.draft)
    }

    /// Number of snapshots produced since the controller was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces exactly one field of the draft.
    pub fn set_field(&mut self, field: LeadField, value: &str) -> Result<(), FormError> {
        let next = self.draft.with_field(field, value)?;
        self.replace(next);
        Ok(())
    }

    /// Same as [`Self::set_field`] but addressed by form control name.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<LeadField>()?;
        self.set_field(field, value)
    }

    /// Restores the all-empty draft.
    pub fn reset(&mut self) {
        self.replace(LeadDraft::default());
    }

    /// Request body for the current draft.
    pub fn payload(&self) -> LeadPayload {
        self.draft.to_payload()
    }

    fn replace(&mut self, next: LeadDraft) {
        self.draft = Arc::new(next);
        self.revision += 1;
    }
}

/// Urlencoded body posted by the lead form. Missing controls read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub service_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub preferred_date: String,
    pub message: String,
}

impl LeadForm {
    /// Feeds every posted control into the controller one edit at a time.
    ///
    /// A rejected value leaves that field untouched; the remaining fields are
    /// still applied and the first error is returned.
    pub fn apply(self, controller: &mut LeadFormController) -> Result<(), FormError> {
        let values = [
            (LeadField::Name, self.name),
            (LeadField::Email, self.email),
            (LeadField::Phone, self.phone),
            (LeadField::Address, self.address),
            (LeadField::City, self.city),
            (LeadField::ServiceType, self.service_type),
            (LeadField::Bedrooms, self.bedrooms),
            (LeadField::Bathrooms, self.bathrooms),
            (LeadField::PreferredDate, self.preferred_date),
            (LeadField::Message, self.message),
        ];

        let mut first_error = None;
        for (field, value) in values {
            if let Err(err) = controller.set_field(field, &value) {
                log::warn!("Rejected value for {field}: {err}");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::types::{SERVICE_CATALOG, ServiceType, TypeConstraintError};

    #[test]
    fn set_field_produces_new_snapshot() {
        let mut controller = LeadFormController::new();
        let before = controller.snapshot();

        controller.set_field(LeadField::Email, "jane@email.com").unwrap();

        assert!(!Arc::ptr_eq(&before, &controller.snapshot()));
        assert_eq!(before.email, "");
        assert_eq!(controller.draft().email, "jane@email.com");
        assert_eq!(controller.revision(), 1);
    }

    #[test]
    fn rejected_edit_keeps_snapshot() {
        let mut controller = LeadFormController::new();
        let before = controller.snapshot();

        let result = controller.set_field(LeadField::ServiceType, "Pool Cleaning");

        assert!(matches!(
            result,
            Err(FormError::TypeConstraint(
                TypeConstraintError::UnknownServiceType(_)
            ))
        ));
        assert!(Arc::ptr_eq(&before, &controller.snapshot()));
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn set_named_rejects_unknown_controls() {
        let mut controller = LeadFormController::new();

        assert_eq!(
            controller.set_named("zip", "94110"),
            Err(FormError::TypeConstraint(TypeConstraintError::UnknownField(
                "zip".to_string()
            )))
        );
        controller.set_named("bedrooms", "2").unwrap();
        assert_eq!(controller.draft().bedrooms, "2");
    }

    #[test]
    fn numeric_fields_keep_raw_text() {
        let mut controller = LeadFormController::new();

        controller.set_field(LeadField::Bedrooms, "").unwrap();
        controller.set_field(LeadField::Bathrooms, "2.").unwrap();

        assert_eq!(controller.draft().bedrooms, "");
        assert_eq!(controller.draft().bathrooms, "2.");
    }

    #[test]
    fn reset_restores_empty_draft() {
        let mut controller = LeadFormController::new();
        controller.set_field(LeadField::Name, "Jane").unwrap();
        controller
            .set_field(LeadField::ServiceType, "Deep Cleaning")
            .unwrap();

        controller.reset();

        assert!(controller.draft().is_empty());
        assert_eq!(controller.revision(), 3);
    }

    fn edit() -> impl Strategy<Value = (LeadField, String)> {
        let text_fields: Vec<LeadField> = LeadField::ALL
            .into_iter()
            .filter(|field| *field != LeadField::ServiceType)
            .collect();
        let service_values: Vec<String> = std::iter::once(String::new())
            .chain(SERVICE_CATALOG.iter().map(|service| service.label().to_string()))
            .collect();

        prop_oneof![
            (prop::sample::select(text_fields), any::<String>()),
            prop::sample::select(service_values).prop_map(|value| (LeadField::ServiceType, value)),
        ]
    }

    proptest! {
        #[test]
        fn edit_sequences_keep_last_value_per_field(
            edits in prop::collection::vec(edit(), 0..40)
        ) {
            let mut controller = LeadFormController::new();
            let mut expected: HashMap<LeadField, String> = HashMap::new();

            for (field, value) in &edits {
                controller.set_field(*field, value).unwrap();
                expected.insert(*field, value.clone());
            }

            for field in LeadField::ALL {
                let want = expected.get(&field).map(String::as_str).unwrap_or("");
                prop_assert_eq!(controller.draft().value(field), want);
            }
            prop_assert_eq!(controller.revision(), edits.len() as u64);
        }
    }

    #[test]
    fn lead_form_applies_all_controls() {
        let form = LeadForm {
            name: "Jane Doe".to_string(),
            email: "jane@email.com".to_string(),
            phone: "(555) 555-1234".to_string(),
            address: "123 Main St".to_string(),
            service_type: "Office Cleaning".to_string(),
            bathrooms: "3".to_string(),
            ..LeadForm::default()
        };
        let mut controller = LeadFormController::new();

        form.apply(&mut controller).unwrap();

        let draft = controller.draft();
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.service_type, Some(ServiceType::OfficeCleaning));
        assert_eq!(draft.city, "");
        assert_eq!(controller.payload().bathrooms, Some(3));
        assert_eq!(controller.payload().bedrooms, None);
    }

    #[test]
    fn lead_form_keeps_valid_fields_when_one_is_rejected() {
        let form = LeadForm {
            name: "Jane".to_string(),
            service_type: "Gutter Cleaning".to_string(),
            message: "Call after 5".to_string(),
            ..LeadForm::default()
        };
        let mut controller = LeadFormController::new();

        let result = form.apply(&mut controller);

        assert!(result.is_err());
        assert_eq!(controller.draft().name, "Jane");
        assert_eq!(controller.draft().message, "Call after 5");
        assert_eq!(controller.draft().service_type, None);
    }
}
