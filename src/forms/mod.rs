//! Form definitions backing the lead-capture page.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

pub mod fields;
pub mod lead;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}
