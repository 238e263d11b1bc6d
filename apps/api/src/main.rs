//! Shiftscope API composition root.

#![forbid(unsafe_code)]

mod api_router;
mod dto;
mod error;
mod handlers;
mod request_context;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use shiftscope_application::{ContextService, RosterService, TaskService, TeamScopeResolver};
use shiftscope_core::AppError;
use shiftscope_domain::PermissionCatalog;
use shiftscope_infrastructure::{
    PostgresActorRepository, PostgresTaskRepository, PostgresTeamRepository,
    PostgresUserDirectoryRepository,
};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

    let database_url = required_env("DATABASE_URL")?;
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let catalog = Arc::new(PermissionCatalog::standard());

    let actor_repository = Arc::new(PostgresActorRepository::new(pool.clone()));
    let team_repository = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let directory_repository = Arc::new(PostgresUserDirectoryRepository::new(pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pool));

    let team_scope_resolver = TeamScopeResolver::new(team_repository);
    let context_service = ContextService::new(actor_repository, team_scope_resolver);
    let roster_service = RosterService::new(catalog.clone(), directory_repository);
    let task_service = TaskService::new(catalog.clone(), task_repository);

    let app_state = AppState {
        catalog,
        context_service,
        roster_service,
        task_service,
    };

    let app = api_router::build_router(app_state, &frontend_url)?;

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "shiftscope-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
