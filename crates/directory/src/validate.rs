//! Per-field validation for registration and update payloads.
//!
//! Validation failures carry one message per invalid field and surface to
//! HTTP as a 422 with an `errors` map; the wording here is part of the wire
//! contract and covered by the black-box tests.

use std::collections::BTreeMap;

use serde::Serialize;

use roster_auth::Role;

use crate::user::{NewUser, UserUpdate};

const MIN_PASSWORD_LEN: usize = 8;

/// Field-keyed validation messages, ordered for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Raw registration payload, before validation.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

/// Raw update payload, before validation. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

pub fn validate_registration(input: RegistrationInput) -> Result<NewUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = match non_blank(input.name) {
        Some(name) => name,
        None => {
            errors.push("name", "The name field is required.");
            String::new()
        }
    };

    let email = match non_blank(input.email) {
        Some(raw) => match normalize_email(&raw) {
            Some(email) => email,
            None => {
                errors.push("email", "The email field must be a valid email address.");
                String::new()
            }
        },
        None => {
            errors.push("email", "The email field is required.");
            String::new()
        }
    };

    let password = match input.password {
        Some(p) if !p.is_empty() => {
            if p.chars().count() < MIN_PASSWORD_LEN {
                errors.push("password", "The password field must be at least 8 characters.");
            }
            p
        }
        _ => {
            errors.push("password", "The password field is required.");
            String::new()
        }
    };

    let role = validate_role(input.role, &mut errors).unwrap_or_default();

    errors.into_result(NewUser {
        name,
        email,
        password,
        phone_number: input.phone_number,
        role,
    })
}

pub fn validate_update(input: UpdateInput) -> Result<UpdateFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let email = match input.email {
        Some(raw) => match normalize_email(&raw) {
            Some(email) => Some(email),
            None => {
                errors.push("email", "The email field must be a valid email address.");
                None
            }
        },
        None => None,
    };

    if let Some(p) = &input.password {
        if p.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", "The password field must be at least 8 characters.");
        }
    }

    let role = validate_role(input.role, &mut errors);

    errors.into_result(UpdateFields {
        name: input.name,
        email,
        password: input.password,
        phone_number: input.phone_number,
        role,
    })
}

/// Validated update fields with the password still in the clear; the caller
/// hashes it and builds the final [`UserUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<Role>,
}

impl UpdateFields {
    pub fn into_update(self, password_hash: Option<String>) -> UserUpdate {
        UserUpdate {
            name: self.name,
            email: self.email,
            password_hash,
            phone_number: self.phone_number,
            role: self.role,
        }
    }
}

fn validate_role(role: Option<String>, errors: &mut ValidationErrors) -> Option<Role> {
    match role {
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                errors.push("role", "The selected role is invalid.");
                None
            }
        },
        None => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Shape check only: one '@' with a non-empty local part and a domain that
/// contains something either side of a dot. Full RFC parsing is out of scope.
fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(email)
}
