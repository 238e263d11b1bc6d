use std::str::FromStr;

use async_trait::async_trait;
use shiftscope_application::ActorRepository;
use shiftscope_core::{AppError, AppResult, CompanyId, UserId};
use shiftscope_domain::{Actor, Role};
use sqlx::PgPool;

/// PostgreSQL-backed actor lookup.
#[derive(Clone)]
pub struct PostgresActorRepository {
    pool: PgPool,
}

impl PostgresActorRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActorRepository for PostgresActorRepository {
    async fn find_actor(&self, user_id: UserId) -> AppResult<Option<Actor>> {
        let row = sqlx::query_as::<_, (i64, String, Option<i64>, bool)>(
            r#"
            SELECT id, role, company_id, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load actor: {error}")))?;

        let Some((id, role, company_id, is_active)) = row else {
            return Ok(None);
        };

        let role = Role::from_str(role.as_str()).map_err(|error| {
            AppError::Internal(format!("user {id} has an invalid stored role: {error}"))
        })?;

        Ok(Some(Actor {
            id: UserId::new(id),
            role,
            company_id: company_id.map(CompanyId::new),
            is_active,
        }))
    }
}
