//! Registration input validation.
//!
//! [`fields`] holds the pure per-field predicates; [`registration`] orders
//! them into the rule list evaluated by the registration pipeline.

pub mod fields;
pub mod registration;

pub use registration::{
    validate_all, validate_registration, RegistrationForm, RoleValue, Rule, ValidatedRegistration,
};
