use std::sync::Arc;

use roster_core::DomainError;
use roster_directory::{NewUser, RegistrationNotifier, User};
use roster_infra::{
    generate_api_key, InMemoryUserStore, PasswordCrypto, StubRegistrationNotifier, UserStore,
};

/// Shared collaborators, injected into handlers as an extension.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub notifier: Arc<dyn RegistrationNotifier>,
    pub crypto: Arc<PasswordCrypto>,
    /// Verified against when a login email is unknown, so both login failure
    /// paths do comparable work.
    dummy_hash: Arc<str>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>, notifier: Arc<dyn RegistrationNotifier>) -> Self {
        let crypto = Arc::new(PasswordCrypto::new());
        let dummy_hash = crypto
            .hash_password("roster-login-padding")
            .expect("argon2 hashing with default parameters");

        Self {
            users,
            notifier,
            crypto,
            dummy_hash: dummy_hash.into(),
        }
    }

    /// Default wiring: in-memory store + stub notifier.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(StubRegistrationNotifier::new()),
        )
    }

    /// Hash credentials, mint an API key, and persist a new account.
    ///
    /// Used by the register handler and by bootstrap seeding. Duplicate
    /// emails surface as [`DomainError::Conflict`].
    pub fn create_account(&self, new: NewUser) -> Result<User, DomainError> {
        let password_hash = self
            .crypto
            .hash_password(&new.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let user = User::create(new, generate_api_key(), password_hash);

        self.users.insert(user.clone())?;
        Ok(user)
    }

    /// Resolve a login attempt to the account, doing password verification
    /// work whether or not the email exists.
    pub fn verify_login(&self, email: &str, password: &str) -> Option<User> {
        match self.users.find_by_email(email) {
            Some(user) => self
                .crypto
                .verify_password(password, &user.password_hash)
                .then_some(user),
            None => {
                let _ = self.crypto.verify_password(password, &self.dummy_hash);
                None
            }
        }
    }
}
