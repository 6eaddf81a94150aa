use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use roster_auth::authenticate;
use roster_infra::UserStore;

use crate::app::errors;
use crate::context::IdentityContext;

#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<dyn UserStore>,
}

/// Resolve the bearer API key to an identity, or terminate with 401.
///
/// Missing and unknown credentials share one response body so the endpoint
/// cannot be used to probe whether a key exists.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_bearer(req.headers());

    let identity = match authenticate(&state.users, token) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "credential resolution failed");
            return errors::json_error(StatusCode::UNAUTHORIZED, errors::MSG_INVALID_AUTH);
        }
    };

    req.extensions_mut().insert(IdentityContext::new(identity));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}
