//! User retrieval and update endpoints.
//!
//! Every handler follows the same order: resolve the target first (404
//! before anything else, so permission errors never leak existence), then
//! authorize, then validate, then apply.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use roster_auth::{authorize, Action, Decision};
use roster_core::{DomainError, UserId};
use roster_directory::validate_update;

use crate::app::dto::UpdateUserRequest;
use crate::app::{errors, AppServices};
use crate::context::IdentityContext;

/// GET /user: the authenticated account's own record.
pub async fn current(
    Extension(services): Extension<AppServices>,
    Extension(actor): Extension<IdentityContext>,
) -> axum::response::Response {
    match services.users.get(actor.user_id()) {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        // The key resolved but the record is gone: treat as a stale key.
        None => errors::json_error(StatusCode::UNAUTHORIZED, errors::MSG_INVALID_AUTH),
    }
}

/// GET /user/:id: admins may view anyone, users only themselves.
pub async fn get(
    Extension(services): Extension<AppServices>,
    Extension(actor): Extension<IdentityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Some(user) = lookup(&services, &id) else {
        return errors::user_not_found();
    };

    if authorize(&actor.identity(), &Action::View { target: user.id }) == Decision::Deny {
        return errors::permission_denied();
    }

    (StatusCode::OK, Json(user)).into_response()
}

/// GET /users: admin-only directory listing.
pub async fn index(
    Extension(services): Extension<AppServices>,
    Extension(actor): Extension<IdentityContext>,
) -> axum::response::Response {
    if authorize(&actor.identity(), &Action::ViewAny) == Decision::Deny {
        return errors::permission_denied();
    }

    (StatusCode::OK, Json(services.users.list())).into_response()
}

/// POST /user/:id/update: admins may update anyone, users only themselves;
/// non-admin role changes are silently dropped, never rejected.
pub async fn update(
    Extension(services): Extension<AppServices>,
    Extension(actor): Extension<IdentityContext>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> axum::response::Response {
    let Some(mut user) = lookup(&services, &id) else {
        return errors::user_not_found();
    };

    let actor = actor.identity();
    if authorize(&actor, &Action::Update { target: user.id }) == Decision::Deny {
        return errors::permission_denied();
    }

    let fields = match validate_update(body.into()) {
        Ok(fields) => fields,
        Err(failures) => return errors::validation_failed(&failures),
    };

    let password_hash = match &fields.password {
        Some(password) => match services.crypto.hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::error!(error = %e, "password hashing failed");
                return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        },
        None => None,
    };

    let mut change = fields.into_update(password_hash);
    change.restrict_role_change(&actor);
    user.apply(change);

    match services.users.update(user.clone()) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Successfully updated.",
                "user": user,
            })),
        )
            .into_response(),
        Err(DomainError::Conflict(_)) => errors::email_taken(),
        Err(DomainError::NotFound) => errors::user_not_found(),
        Err(e) => {
            tracing::error!(error = %e, "user update failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Resolve a path id to a record. An unparseable id is indistinguishable
/// from an unknown one (both are "this user does not exist").
fn lookup(services: &AppServices, raw_id: &str) -> Option<roster_directory::User> {
    let id: UserId = raw_id.parse().ok()?;
    services.users.get(id)
}
