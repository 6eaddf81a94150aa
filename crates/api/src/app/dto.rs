use serde::Deserialize;

use roster_directory::{RegistrationInput, UpdateInput};

// -------------------------
// Request DTOs
// -------------------------

/// Registration body. Field presence is checked by the validator (not by
/// serde) so failures come back as per-field messages, not a parse error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

impl From<RegisterRequest> for RegistrationInput {
    fn from(req: RegisterRequest) -> Self {
        RegistrationInput {
            name: req.name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            role: req.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

impl From<UpdateUserRequest> for UpdateInput {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateInput {
            name: req.name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            role: req.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
