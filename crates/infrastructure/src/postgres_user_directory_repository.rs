use std::str::FromStr;

use async_trait::async_trait;
use shiftscope_application::{UserDirectoryRepository, UserSummary};
use shiftscope_core::{AppError, AppResult, UserId};
use shiftscope_domain::{Role, ScopeFilters};
use sqlx::PgPool;

type UserRow = (i64, String, String, String);

/// PostgreSQL-backed scoped user-directory reads.
#[derive(Clone)]
pub struct PostgresUserDirectoryRepository {
    pool: PgPool,
}

impl PostgresUserDirectoryRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectoryRepository for PostgresUserDirectoryRepository {
    async fn list_users(&self, filters: &ScopeFilters) -> AppResult<Vec<UserSummary>> {
        let rows: Vec<UserRow> = if filters.is_global_scope {
            sqlx::query_as(
                r#"
                SELECT id, email, display_name, role
                FROM users
                WHERE is_active = TRUE
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(list_error)?
        } else {
            // Fail closed: a non-global actor with no company constraint
            // sees nothing rather than everything.
            let Some(company_id) = filters.company_id else {
                return Ok(Vec::new());
            };

            match &filters.team_member_ids {
                Some(member_ids) => {
                    let member_ids: Vec<i64> =
                        member_ids.iter().map(UserId::as_i64).collect();
                    sqlx::query_as(
                        r#"
                        SELECT id, email, display_name, role
                        FROM users
                        WHERE is_active = TRUE
                          AND company_id = $1
                          AND id = ANY($2)
                        ORDER BY id
                        "#,
                    )
                    .bind(company_id.as_i64())
                    .bind(member_ids)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(list_error)?
                }
                None => {
                    sqlx::query_as(
                        r#"
                        SELECT id, email, display_name, role
                        FROM users
                        WHERE is_active = TRUE
                          AND company_id = $1
                        ORDER BY id
                        "#,
                    )
                    .bind(company_id.as_i64())
                    .fetch_all(&self.pool)
                    .await
                    .map_err(list_error)?
                }
            }
        };

        rows.into_iter()
            .map(|(id, email, display_name, role)| {
                let role = Role::from_str(role.as_str()).map_err(|error| {
                    AppError::Internal(format!("user {id} has an invalid stored role: {error}"))
                })?;

                Ok(UserSummary {
                    id: UserId::new(id),
                    email,
                    display_name,
                    role,
                })
            })
            .collect()
    }
}

fn list_error(error: sqlx::Error) -> AppError {
    AppError::Internal(format!("failed to list users: {error}"))
}
