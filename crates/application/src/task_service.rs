use std::sync::Arc;

use async_trait::async_trait;
use shiftscope_core::{AppResult, CompanyId, UserId};
use shiftscope_domain::{
    Permission, PermissionCatalog, PermissionCheck, RequestContext, ScopeFilters,
    require_permissions, require_team_scope,
};

/// Task row projected for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// Task record id.
    pub id: i64,
    /// Owning company.
    pub company_id: CompanyId,
    /// User the task is assigned to.
    pub assignee_id: UserId,
    /// Task title.
    pub title: String,
    /// Workflow status string as stored.
    pub status: String,
}

/// Repository port for scoped task reads.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists tasks visible under the given filters.
    async fn list_tasks(&self, filters: &ScopeFilters) -> AppResult<Vec<TaskSummary>>;
}

/// Scoped reads over company tasks.
#[derive(Clone)]
pub struct TaskService {
    catalog: Arc<PermissionCatalog>,
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Creates the service from the catalog and a repository implementation.
    #[must_use]
    pub fn new(catalog: Arc<PermissionCatalog>, repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Lists the tasks the actor may see.
    pub async fn list_tasks(&self, context: &RequestContext) -> AppResult<Vec<TaskSummary>> {
        require_permissions(
            &self.catalog,
            context,
            &[Permission::TasksViewAll, Permission::TasksViewTeam],
            PermissionCheck::Any,
        )?;
        require_team_scope(context)?;

        let filters = ScopeFilters::for_context(context);
        self.repository.list_tasks(&filters).await
    }
}
