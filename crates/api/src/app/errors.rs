use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use roster_directory::ValidationErrors;

/// Generic unauthorized body shared by missing and unknown credentials.
pub const MSG_INVALID_AUTH: &str = "Invalid authorisation.";

/// Denied `create` (admin-only registration).
pub const MSG_UNAUTHORISED: &str = "Unauthorised.";

/// Denied view/viewAny/update.
pub const MSG_NO_PERMISSION: &str = "You do not have permission to perform this action.";

/// Target record missing (checked before any authorization).
pub const MSG_USER_NOT_FOUND: &str = "This user does not exist.";

pub const MSG_INVALID_LOGIN: &str = "Invalid login details.";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

pub fn permission_denied() -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, MSG_NO_PERMISSION)
}

pub fn user_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, MSG_USER_NOT_FOUND)
}

/// 422 with one message list per invalid field.
pub fn validation_failed(errors: &ValidationErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({ "errors": errors })),
    )
        .into_response()
}

/// A store-level email collision surfaces like any other field validation
/// failure.
pub fn email_taken() -> axum::response::Response {
    let mut errors = ValidationErrors::new();
    errors.push("email", "The email has already been taken.");
    validation_failed(&errors)
}
