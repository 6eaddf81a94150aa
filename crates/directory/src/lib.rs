//! `roster-directory` — the user record domain.
//!
//! Owns the directory's record model, field validation, and the outbound
//! registration-notification port. Storage lives in `roster-infra`; the
//! access-control rules live in `roster-auth`.

pub mod notifier;
pub mod user;
pub mod validate;

pub use notifier::RegistrationNotifier;
pub use user::{NewUser, User, UserUpdate};
pub use validate::{
    validate_registration, validate_update, RegistrationInput, UpdateFields, UpdateInput,
    ValidationErrors,
};
