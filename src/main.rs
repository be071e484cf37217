//! # keyway-user-api
//!
//! Wires configuration, the MySQL repository, the Keycloak provider and
//! the guard pipeline into an Axum server. Binds to a configurable port
//! (default 8080).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};

use keyway_user_api::auth::{KeycloakProvider, RequestGuard, TokenValidator};
use keyway_user_api::config::{AppConfig, create_pool};
use keyway_user_api::db::MySqlDb;
use keyway_user_api::graphql::{build_schema, graphiql_handler, graphql_handler};
use keyway_user_api::time::{SystemClock, local::now_in_local};
use keyway_user_api::user::{MySqlUserRepo, UserRepo};
use keyway_user_api::web::{build_cors, not_found};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::from_env();

    // Fail fast on misconfiguration: without the identity provider the
    // guard pipeline would deny every request anyway.
    if !cfg.is_keycloak_configured() {
        bail!("identity provider is not configured; set the KEYCLOAK_* variables");
    }
    now_in_local(&cfg.tz).with_context(|| format!("invalid APP_TZ {:?}", cfg.tz))?;

    let pool = create_pool(&cfg.db).context("database pool initialization failed")?;
    let db = Arc::new(MySqlDb::new(pool));
    let clock = Arc::new(SystemClock::new(&cfg.tz));
    let repo: Arc<dyn UserRepo> = Arc::new(MySqlUserRepo::new(db, clock));

    let provider = Arc::new(KeycloakProvider::new(&cfg.keycloak)?);
    let guard = RequestGuard::new(TokenValidator::new(provider));

    let schema = build_schema(repo);

    let mut app = Router::new().route("/graphql", post(graphql_handler));
    if cfg.enable_graphiql {
        app = app.route(
            "/graphiql",
            get(|| async { graphiql_handler("/graphql").await }),
        );
        tracing::info!("GraphiQL enabled at /graphiql");
    }

    let app = app
        .fallback(not_found)
        .layer(Extension(schema))
        .layer(Extension(guard))
        .layer(build_cors(&cfg.cors))
        .layer(DefaultBodyLimit::max(cfg.http.max_body_bytes));

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("user API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
