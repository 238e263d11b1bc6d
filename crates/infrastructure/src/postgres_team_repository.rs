use async_trait::async_trait;
use shiftscope_application::{TeamLeaderRecord, TeamRepository};
use shiftscope_core::{AppError, AppResult, TeamLeaderId, UserId};
use sqlx::PgPool;


/// PostgreSQL-backed team-leader and membership lookups.
///
/// Reads current rows on every call; there is deliberately no caching so a
/// membership change is visible to the very next request.
#[derive(Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_for_leader(&self, user_id: UserId) -> AppResult<Option<TeamLeaderRecord>> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            r#"
            SELECT id, team_code, team_name
            FROM team_leaders
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to load team-leader record: {error}"))
        })?;

        Ok(row.map(|(id, team_code, team_name)| TeamLeaderRecord {
            id: TeamLeaderId::new(id),
            team_code,
            team_name,
        }))
    }

    async fn list_member_ids(&self, team_leader_id: TeamLeaderId) -> AppResult<Vec<UserId>> {
        let rows = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM team_members
            WHERE team_leader_id = $1
            ORDER BY user_id
            "#,
        )
        .bind(team_leader_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load team members: {error}")))?;

        Ok(rows.into_iter().map(UserId::new).collect())
    }
}
