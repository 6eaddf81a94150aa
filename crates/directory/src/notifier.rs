//! Outbound registration-notification port.

use crate::user::User;

/// Fire-and-forget hook invoked after a successful account creation.
///
/// Called exactly once per created account, after the record is durably
/// stored and before the creation response is returned. The return value is
/// observational only: a `false` (or any downstream failure) must never fail
/// or roll back the creation, and no retries are owed.
pub trait RegistrationNotifier: Send + Sync {
    fn notify_registered(&self, user: &User) -> bool;
}

impl<N> RegistrationNotifier for std::sync::Arc<N>
where
    N: RegistrationNotifier + ?Sized,
{
    fn notify_registered(&self, user: &User) -> bool {
        (**self).notify_registered(user)
    }
}
