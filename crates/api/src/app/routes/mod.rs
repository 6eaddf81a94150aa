use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod system;
pub mod users;

/// Router for all endpoints that require an authenticated identity.
pub fn router() -> Router {
    Router::new()
        .route("/user", get(users::current))
        .route("/user/register", post(auth::register))
        .route("/users", get(users::index))
        .route("/user/:id", get(users::get))
        .route("/user/:id/update", post(users::update))
}
