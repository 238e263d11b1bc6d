use std::sync::Arc;

use async_trait::async_trait;
use shiftscope_core::{AppResult, TeamLeaderId, UserId};
use shiftscope_domain::TeamScope;

/// Team-leader record owned by a user, without its member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLeaderRecord {
    /// Stable id of the team-leader record.
    pub id: TeamLeaderId,
    /// Human-shareable team code.
    pub team_code: String,
    /// Team display name.
    pub team_name: String,
}

/// Repository port for team-leader records and current membership rows.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Finds the team-leader record owned by the given user, if any.
    async fn find_for_leader(&self, user_id: UserId) -> AppResult<Option<TeamLeaderRecord>>;

    /// Lists the user ids currently assigned to the team.
    async fn list_member_ids(&self, team_leader_id: TeamLeaderId) -> AppResult<Vec<UserId>>;
}

/// Resolves the authoritative [`TeamScope`] for a team-leader actor.
///
/// Membership rows are the source of truth and are read on every call; the
/// resolver holds no cache, so additions and removals take effect on the
/// next request.
#[derive(Clone)]
pub struct TeamScopeResolver {
    repository: Arc<dyn TeamRepository>,
}

impl TeamScopeResolver {
    /// Creates a resolver from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Resolves the current team scope for the given leader user id.
    ///
    /// Returns `None` when the user owns no team-leader record: a team
    /// leader in name only has no scope, and downstream guards must deny
    /// team-scoped operations rather than widen to any other scope.
    pub async fn resolve(&self, user_id: UserId) -> AppResult<Option<TeamScope>> {
        let Some(record) = self.repository.find_for_leader(user_id).await? else {
            return Ok(None);
        };

        let member_ids = self.repository.list_member_ids(record.id).await?;

        Ok(Some(TeamScope {
            team_leader_id: record.id,
            team_code: record.team_code,
            team_name: record.team_name,
            member_ids,
        }))
    }
}
