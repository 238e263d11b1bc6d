use serde::Serialize;
use shiftscope_application::{PermissionSnapshot, TaskSummary, UserSummary};
use shiftscope_core::{CompanyId, TeamLeaderId, UserId};
use shiftscope_domain::{Permission, Role, TeamScope};

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Resolved team scope as served to clients.
#[derive(Debug, Serialize)]
pub struct TeamScopeResponse {
    pub team_leader_id: TeamLeaderId,
    pub team_code: String,
    pub team_name: String,
    pub member_ids: Vec<UserId>,
}

impl From<TeamScope> for TeamScopeResponse {
    fn from(value: TeamScope) -> Self {
        Self {
            team_leader_id: value.team_leader_id,
            team_code: value.team_code,
            team_name: value.team_name,
            member_ids: value.member_ids,
        }
    }
}

/// Permission snapshot served for client-side UI gating.
///
/// Advisory only; every operation is re-checked server-side.
#[derive(Debug, Serialize)]
pub struct PermissionSnapshotResponse {
    pub permissions: Vec<Permission>,
    pub team_scope: Option<TeamScopeResponse>,
    pub is_global_scope: bool,
}

impl From<PermissionSnapshot> for PermissionSnapshotResponse {
    fn from(value: PermissionSnapshot) -> Self {
        Self {
            permissions: value.permissions,
            team_scope: value.team_scope.map(TeamScopeResponse::from),
            is_global_scope: value.is_global_scope,
        }
    }
}

/// Directory entry in a scoped roster listing.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl From<UserSummary> for UserResponse {
    fn from(value: UserSummary) -> Self {
        Self {
            id: value.id,
            email: value.email,
            display_name: value.display_name,
            role: value.role,
        }
    }
}

/// Task entry in a scoped task listing.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub company_id: CompanyId,
    pub assignee_id: UserId,
    pub title: String,
    pub status: String,
}

impl From<TaskSummary> for TaskResponse {
    fn from(value: TaskSummary) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            assignee_id: value.assignee_id,
            title: value.title,
            status: value.status,
        }
    }
}
