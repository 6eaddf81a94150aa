//! Registration and login endpoints.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use roster_auth::{authorize, Action, Decision};
use roster_core::DomainError;
use roster_directory::validate_registration;

use crate::app::dto::{LoginRequest, RegisterRequest};
use crate::app::{errors, AppServices};
use crate::context::IdentityContext;

/// POST /user/register: admin-only account creation.
pub async fn register(
    Extension(services): Extension<AppServices>,
    Extension(actor): Extension<IdentityContext>,
    Json(body): Json<RegisterRequest>,
) -> axum::response::Response {
    // Authorization comes before validation: a non-admin learns nothing
    // about what a valid payload looks like.
    if authorize(&actor.identity(), &Action::Create) == Decision::Deny {
        return errors::json_error(StatusCode::UNAUTHORIZED, errors::MSG_UNAUTHORISED);
    }

    let new = match validate_registration(body.into()) {
        Ok(new) => new,
        Err(failures) => return errors::validation_failed(&failures),
    };

    let user = match services.create_account(new) {
        Ok(user) => user,
        Err(DomainError::Conflict(_)) => return errors::email_taken(),
        Err(e) => {
            tracing::error!(error = %e, "account creation failed");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    // Best-effort: the account is already durable, a failed notification
    // must not fail the response.
    if !services.notifier.notify_registered(&user) {
        tracing::warn!(user_id = %user.id, "registration notification was not delivered");
    }

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User account created.",
            "user_id": user.id,
            "user": user,
            "api_key": user.api_key,
        })),
    )
        .into_response()
}

/// POST /user/login: public; exchanges email+password for the API key.
pub async fn login(
    Extension(services): Extension<AppServices>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    let email = body
        .email
        .as_deref()
        .map(|e| e.trim().to_lowercase())
        .unwrap_or_default();
    let password = body.password.unwrap_or_default();

    match services.verify_login(&email, &password) {
        Some(user) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Logged in successfully.",
                "user_id": user.id,
                "api_key": user.api_key,
            })),
        )
            .into_response(),
        None => errors::json_error(StatusCode::UNAUTHORIZED, errors::MSG_INVALID_LOGIN),
    }
}
