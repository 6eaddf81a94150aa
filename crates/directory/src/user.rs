//! User record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_auth::{role_field_mutable, Identity, Role};
use roster_core::UserId;

/// A directory record.
///
/// # Invariants
/// - `email` is unique across the directory (enforced by the store) and
///   stored trimmed + lowercased.
/// - `api_key` is generated exactly once at creation and never rotated.
/// - `password_hash` and `api_key` never appear in the JSON form of a user;
///   the register/login responses return the key as a separate field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(skip_serializing)]
    pub api_key: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a validated registration into a record.
    ///
    /// `api_key` and `password_hash` are produced by the caller (crypto is
    /// an infra concern).
    pub fn create(new: NewUser, api_key: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name: new.name,
            email: new.email,
            phone_number: new.phone_number,
            role: new.role,
            api_key,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.role)
    }

    /// Apply a validated update in place.
    ///
    /// Callers are expected to have run authorization and
    /// [`UserUpdate::restrict_role_change`] first.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(hash) = update.password_hash {
            self.password_hash = hash;
        }
        if let Some(phone) = update.phone_number {
            self.phone_number = Some(phone);
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        self.updated_at = Utc::now();
    }
}

/// A validated registration, ready to be materialized into a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub role: Role,
}

/// A validated partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Already hashed; the raw password never leaves the handler.
    pub password_hash: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<Role>,
}

impl UserUpdate {
    /// Drop the `role` field unless the actor may change roles.
    ///
    /// A non-admin updating their own record gets the rest of the payload
    /// applied and the role change silently ignored; this narrows the
    /// mutation set instead of rejecting the request.
    pub fn restrict_role_change(&mut self, actor: &Identity) {
        if !role_field_mutable(actor) {
            self.role = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.phone_number.is_none()
            && self.role.is_none()
    }
}
