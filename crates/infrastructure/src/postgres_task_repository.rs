use async_trait::async_trait;
use shiftscope_application::{TaskRepository, TaskSummary};
use shiftscope_core::{AppError, AppResult, CompanyId, UserId};
use shiftscope_domain::ScopeFilters;
use sqlx::PgPool;

type TaskRow = (i64, i64, i64, String, String);

/// PostgreSQL-backed scoped task reads.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_tasks(&self, filters: &ScopeFilters) -> AppResult<Vec<TaskSummary>> {
        let rows: Vec<TaskRow> = if filters.is_global_scope {
            sqlx::query_as(
                r#"
                SELECT id, company_id, assignee_id, title, status
                FROM tasks
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(list_error)?
        } else {
            // Fail closed when no company constraint is available.
            let Some(company_id) = filters.company_id else {
                return Ok(Vec::new());
            };

            match &filters.team_member_ids {
                Some(member_ids) => {
                    let member_ids: Vec<i64> =
                        member_ids.iter().map(UserId::as_i64).collect();
                    sqlx::query_as(
                        r#"
                        SELECT id, company_id, assignee_id, title, status
                        FROM tasks
                        WHERE company_id = $1
                          AND assignee_id = ANY($2)
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
                        SELECT id, company_id, assignee_id, title, status
                        FROM tasks
                        WHERE company_id = $1
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

        Ok(rows
            .into_iter()
            .map(|(id, company_id, assignee_id, title, status)| TaskSummary {
                id,
                company_id: CompanyId::new(company_id),
                assignee_id: UserId::new(assignee_id),
                title,
                status,
            })
            .collect())
    }
}

fn list_error(error: sqlx::Error) -> AppError {
    AppError::Internal(format!("failed to list tasks: {error}"))
}
