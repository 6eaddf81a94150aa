use roster_auth::Identity;
use roster_core::UserId;

/// Request-scoped authenticated actor.
///
/// Inserted by the auth middleware after a successful credential resolution
/// and immutable for the rest of the request. Handlers receive it as an
/// extension rather than reaching for any ambient global.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    identity: Identity,
}

impl IdentityContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn user_id(&self) -> UserId {
        self.identity.id
    }
}
