//! `roster-infra` — collaborators behind the core's ports.
//!
//! The user store doubles as the credential store (an API key resolves to
//! the identity of the account that owns it); crypto covers password
//! hashing and API-key generation.

pub mod crypto;
pub mod notifier;
pub mod user_store;

pub use crypto::{generate_api_key, CryptoError, PasswordCrypto};
pub use notifier::StubRegistrationNotifier;
pub use user_store::{InMemoryUserStore, UserStore};
