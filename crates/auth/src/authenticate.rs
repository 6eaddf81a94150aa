use thiserror::Error;

use crate::Identity;

/// Read-only lookup of the identity bound to an API key.
///
/// Keys map 1:1 to accounts and are stable for the account's lifetime, so a
/// lookup must be exact-match, case-sensitive, and free of side effects on
/// the store.
pub trait CredentialStore: Send + Sync {
    fn identity_for_key(&self, api_key: &str) -> Option<Identity>;
}

impl<S> CredentialStore for std::sync::Arc<S>
where
    S: CredentialStore + ?Sized,
{
    fn identity_for_key(&self, api_key: &str) -> Option<Identity> {
        (**self).identity_for_key(api_key)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential was presented (or it was blank).
    #[error("missing credential")]
    MissingCredential,

    /// A credential was presented but no account matches it.
    #[error("invalid credential")]
    InvalidCredential,
}

/// Resolve an inbound bearer token to an authenticated [`Identity`].
///
/// Deterministic for a given store state and token. The two failure variants
/// are kept distinct here for logging/tests, but transport layers must
/// collapse them into one generic unauthorized response so callers cannot
/// probe whether a key exists.
pub fn authenticate(
    store: &dyn CredentialStore,
    bearer: Option<&str>,
) -> Result<Identity, AuthError> {
    let token = bearer.map(str::trim).filter(|t| !t.is_empty());

    let token = token.ok_or(AuthError::MissingCredential)?;

    store
        .identity_for_key(token)
        .ok_or(AuthError::InvalidCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use roster_core::UserId;

    struct FixedStore {
        key: &'static str,
        identity: Identity,
    }

    impl CredentialStore for FixedStore {
        fn identity_for_key(&self, api_key: &str) -> Option<Identity> {
            (api_key == self.key).then_some(self.identity)
        }
    }

    fn store() -> FixedStore {
        FixedStore {
            key: "k3yk3yk3y",
            identity: Identity::new(UserId::new(), Role::User),
        }
    }

    #[test]
    fn missing_or_blank_token_is_missing_credential() {
        let s = store();

        assert_eq!(authenticate(&s, None), Err(AuthError::MissingCredential));
        assert_eq!(authenticate(&s, Some("")), Err(AuthError::MissingCredential));
        assert_eq!(authenticate(&s, Some("   ")), Err(AuthError::MissingCredential));
    }

    #[test]
    fn unknown_token_is_invalid_credential() {
        let s = store();

        assert_eq!(
            authenticate(&s, Some("not-the-key")),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let s = store();

        assert_eq!(
            authenticate(&s, Some("K3YK3Y K3Y")),
            Err(AuthError::InvalidCredential)
        );
        assert_eq!(
            authenticate(&s, Some("K3YK3YK3Y")),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn matching_token_resolves_identity() {
        let s = store();

        let identity = authenticate(&s, Some("k3yk3yk3y")).unwrap();
        assert_eq!(identity, s.identity);
    }

    #[test]
    fn resolution_is_deterministic_for_fixed_store() {
        let s = store();

        let first = authenticate(&s, Some("k3yk3yk3y"));
        let second = authenticate(&s, Some("k3yk3yk3y"));
        assert_eq!(first, second);
    }
}
