//! Stub implementation of the registration-notification port.

use roster_directory::{RegistrationNotifier, User};

/// Placeholder notifier pending the real outbound integration.
///
/// Logs the registration and reports success. Swapping in an HTTP-backed
/// implementation only requires providing another [`RegistrationNotifier`]
/// at wiring time.
#[derive(Debug, Default)]
pub struct StubRegistrationNotifier;

impl StubRegistrationNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationNotifier for StubRegistrationNotifier {
    fn notify_registered(&self, user: &User) -> bool {
        tracing::info!(user_id = %user.id, email = %user.email, "registration notification sent");
        true
    }
}
