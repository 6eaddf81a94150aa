//! `roster-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. The
//! authenticator resolves an opaque bearer credential through the
//! [`CredentialStore`] port; the authorization engine is a pure function
//! over ([`Identity`], [`Action`]).

pub mod authenticate;
pub mod authorize;
pub mod identity;
pub mod role;

pub use authenticate::{authenticate, AuthError, CredentialStore};
pub use authorize::{authorize, role_field_mutable, Action, Decision};
pub use identity::Identity;
pub use role::Role;
