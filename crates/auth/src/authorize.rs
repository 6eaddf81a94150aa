use roster_core::UserId;
use serde::Serialize;

use crate::Identity;

/// A capability the authorization engine decides on.
///
/// Actions that act on a specific record carry the target's id in the
/// variant, so a "required target is missing" state is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List every record in the directory.
    ViewAny,
    /// Create a new account (any role, including other admins).
    Create,
    /// Read a single record.
    View { target: UserId },
    /// Mutate a single record.
    Update { target: UserId },
}

/// Binary outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `actor` may perform `action`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Admins may do everything. Non-admins may only view and update their own
/// record; creating accounts and listing the directory are admin-only.
pub fn authorize(actor: &Identity, action: &Action) -> Decision {
    if actor.role.is_admin() {
        return Decision::Allow;
    }

    match action {
        Action::ViewAny | Action::Create => Decision::Deny,
        Action::View { target } | Action::Update { target } => {
            if actor.id == *target {
                Decision::Allow
            } else {
                Decision::Deny
            }
        }
    }
}

/// Whether `actor` may change the `role` field of an update payload.
///
/// Only admins may move an account between roles (including their own).
/// When a non-admin updates their own record, callers must silently drop
/// any `role` value from the payload and apply the rest: the request is
/// not rejected, the effective mutation set is narrowed. Do not turn this
/// into a validation error.
pub fn role_field_mutable(actor: &Identity) -> bool {
    actor.role.is_admin()
}
