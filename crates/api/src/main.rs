use anyhow::Context;

use roster_api::app::{build_app, AppServices};
use roster_auth::Role;
use roster_directory::NewUser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster_observability::init();

    let services = AppServices::in_memory();
    bootstrap_admin(&services)?;

    let app = build_app(services);

    let bind_addr =
        std::env::var("ROSTER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Seed the first admin account from the environment.
///
/// Every authenticated route needs an existing API key, and registration is
/// itself admin-only, so a fresh store is unusable without this. The
/// generated key is logged once at startup.
fn bootstrap_admin(services: &AppServices) -> anyhow::Result<()> {
    let Ok(email) = std::env::var("ROSTER_BOOTSTRAP_ADMIN_EMAIL") else {
        tracing::warn!(
            "ROSTER_BOOTSTRAP_ADMIN_EMAIL not set; no account can authenticate until one exists"
        );
        return Ok(());
    };

    let password = std::env::var("ROSTER_BOOTSTRAP_ADMIN_PASSWORD")
        .context("ROSTER_BOOTSTRAP_ADMIN_PASSWORD must be set alongside the bootstrap email")?;

    let admin = services
        .create_account(NewUser {
            name: "Bootstrap Admin".to_string(),
            email: email.trim().to_lowercase(),
            password,
            phone_number: None,
            role: Role::Admin,
        })
        .context("failed to create the bootstrap admin account")?;

    tracing::info!(
        user_id = %admin.id,
        email = %admin.email,
        api_key = %admin.api_key,
        "bootstrap admin created"
    );

    Ok(())
}
