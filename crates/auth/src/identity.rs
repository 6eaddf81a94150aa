use serde::{Deserialize, Serialize};

use roster_core::UserId;

use crate::Role;

/// The authenticated actor for a request.
///
/// Resolved once by the authenticator from a credential-store lookup and
/// then threaded explicitly through handlers for the request's lifetime.
/// Never mutated after resolution; never stored across requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub role: Role,
}

impl Identity {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}
