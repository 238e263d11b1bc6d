use std::sync::Arc;

use async_trait::async_trait;
use shiftscope_core::{AppResult, UserId};
use shiftscope_domain::{
    Permission, PermissionCatalog, PermissionCheck, RequestContext, Role, ScopeFilters,
    require_permissions, require_team_scope,
};

/// Directory row projected for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User record id.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Assigned role.
    pub role: Role,
}

/// Repository port for scoped user-directory reads.
///
/// Implementations must intersect every query against the provided filters;
/// a query that ignores them is a correctness bug.
#[async_trait]
pub trait UserDirectoryRepository: Send + Sync {
    /// Lists active users visible under the given filters.
    async fn list_users(&self, filters: &ScopeFilters) -> AppResult<Vec<UserSummary>>;
}

/// Scoped reads over the company user directory.
#[derive(Clone)]
pub struct RosterService {
    catalog: Arc<PermissionCatalog>,
    repository: Arc<dyn UserDirectoryRepository>,
}

impl RosterService {
    /// Creates the service from the catalog and a repository implementation.
    #[must_use]
    pub fn new(
        catalog: Arc<PermissionCatalog>,
        repository: Arc<dyn UserDirectoryRepository>,
    ) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Lists the users the actor may see.
    ///
    /// Guards run before any data access: the actor needs a users view
    /// grant, and a team leader additionally needs a resolved team scope.
    pub async fn list_users(&self, context: &RequestContext) -> AppResult<Vec<UserSummary>> {
        require_permissions(
            &self.catalog,
            context,
            &[Permission::UsersViewAll, Permission::UsersViewTeam],
            PermissionCheck::Any,
        )?;
        require_team_scope(context)?;

        let filters = ScopeFilters::for_context(context);
        self.repository.list_users(&filters).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use shiftscope_core::{AppError, AppResult, CompanyId, TeamLeaderId, UserId};
    use shiftscope_domain::{
        Actor, PermissionCatalog, RequestContext, Role, ScopeFilters, TeamScope,
    };
    use tokio::sync::Mutex;

    use super::{RosterService, UserDirectoryRepository, UserSummary};

    #[derive(Default)]
    struct RecordingDirectoryRepository {
        seen_filters: Mutex<Vec<ScopeFilters>>,
    }

    #[async_trait]
    impl UserDirectoryRepository for RecordingDirectoryRepository {
        async fn list_users(&self, filters: &ScopeFilters) -> AppResult<Vec<UserSummary>> {
            self.seen_filters.lock().await.push(filters.clone());
            Ok(Vec::new())
        }
    }

    fn context(role: Role, team_scope: Option<TeamScope>) -> RequestContext {
        RequestContext::new(
            Actor {
                id: UserId::new(1),
                role,
                company_id: Some(CompanyId::new(3)),
                is_active: true,
            },
            team_scope,
        )
    }

    fn service(repository: Arc<RecordingDirectoryRepository>) -> RosterService {
        RosterService::new(Arc::new(PermissionCatalog::standard()), repository)
    }

    #[tokio::test]
    async fn company_member_is_denied_before_any_query() {
        let repository = Arc::new(RecordingDirectoryRepository::default());
        let service = service(repository.clone());

        let result = service.list_users(&context(Role::CompanyMember, None)).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(repository.seen_filters.lock().await.is_empty());
    }

    #[tokio::test]
    async fn team_leader_without_scope_is_denied_before_any_query() {
        let repository = Arc::new(RecordingDirectoryRepository::default());
        let service = service(repository.clone());

        let result = service.list_users(&context(Role::TeamLeader, None)).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(repository.seen_filters.lock().await.is_empty());
    }

    #[tokio::test]
    async fn team_leader_query_carries_member_id_filter() {
        let repository = Arc::new(RecordingDirectoryRepository::default());
        let service = service(repository.clone());
        let scope = TeamScope {
            team_leader_id: TeamLeaderId::new(4),
            team_code: "TL-OPS".to_owned(),
            team_name: "Operations".to_owned(),
            member_ids: vec![UserId::new(8)],
        };

        let result = service
            .list_users(&context(Role::TeamLeader, Some(scope)))
            .await;
        assert!(result.is_ok());

        let seen = repository.seen_filters.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].team_member_ids, Some(vec![UserId::new(8)]));
        assert_eq!(seen[0].company_id, Some(CompanyId::new(3)));
    }

    #[tokio::test]
    async fn admin_query_is_company_scoped_without_member_filter() {
        let repository = Arc::new(RecordingDirectoryRepository::default());
        let service = service(repository.clone());

        let result = service.list_users(&context(Role::CompanyAdmin, None)).await;
        assert!(result.is_ok());

        let seen = repository.seen_filters.lock().await;
        assert_eq!(seen[0].team_member_ids, None);
        assert!(!seen[0].is_global_scope);
    }
}
