//! Authorization guards: pure predicates evaluated strictly before any data
//! access. A denial is terminal for the operation; guards are never retried.

use shiftscope_core::{AppError, AppResult};

use crate::{Permission, PermissionCatalog, RequestContext, Role};

/// How a multi-token permission requirement is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionCheck {
    /// At least one of the listed tokens must be held (the default posture).
    #[default]
    Any,
    /// Every listed token must be held.
    All,
}

/// Denies unless the actor's role appears in the allow-list.
///
/// The denial names the required roles so the caller can self-diagnose; role
/// names are not secret.
pub fn require_role(context: &RequestContext, allowed_roles: &[Role]) -> AppResult<()> {
    if allowed_roles.contains(&context.role()) {
        return Ok(());
    }

    Err(AppError::Forbidden(format!(
        "access denied: requires one of roles [{}]",
        join_roles(allowed_roles)
    )))
}

/// Denies unless the actor is a super admin or company admin.
pub fn require_admin(context: &RequestContext) -> AppResult<()> {
    require_role(context, &[Role::SuperAdmin, Role::CompanyAdmin])
}

/// Denies unless the actor is an admin or a team leader.
pub fn require_admin_or_team_leader(context: &RequestContext) -> AppResult<()> {
    require_role(
        context,
        &[Role::SuperAdmin, Role::CompanyAdmin, Role::TeamLeader],
    )
}

/// Denies unless the actor's role satisfies the permission requirement.
///
/// The denial lists the required tokens and the combine mode.
pub fn require_permissions(
    catalog: &PermissionCatalog,
    context: &RequestContext,
    required: &[Permission],
    check: PermissionCheck,
) -> AppResult<()> {
    let satisfied = match check {
        PermissionCheck::Any => catalog.has_any_permission(context.role(), required),
        PermissionCheck::All => catalog.has_all_permissions(context.role(), required),
    };

    if satisfied {
        return Ok(());
    }

    let mode = match check {
        PermissionCheck::Any => "any",
        PermissionCheck::All => "all",
    };

    Err(AppError::Forbidden(format!(
        "insufficient permissions: requires {mode} of [{}]",
        join_permissions(required)
    )))
}

/// Denies team-leader actors that carry no resolved team scope.
///
/// A team leader without a team must be denied, never silently widened to a
/// broader scope. No-op for every other role.
pub fn require_team_scope(context: &RequestContext) -> AppResult<()> {
    if context.role() == Role::TeamLeader && context.team_scope().is_none() {
        return Err(AppError::Forbidden(
            "team leader not assigned to a team".to_owned(),
        ));
    }

    Ok(())
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_permissions(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use shiftscope_core::{AppError, CompanyId, TeamLeaderId, UserId};

    use super::{
        PermissionCheck, require_admin, require_admin_or_team_leader, require_permissions,
        require_role, require_team_scope,
    };
    use crate::{Actor, Permission, PermissionCatalog, RequestContext, Role, TeamScope};

    fn context(role: Role, team_scope: Option<TeamScope>) -> RequestContext {
        RequestContext::new(
            Actor {
                id: UserId::new(1),
                role,
                company_id: Some(CompanyId::new(10)),
                is_active: true,
            },
            team_scope,
        )
    }

    fn scope() -> TeamScope {
        TeamScope {
            team_leader_id: TeamLeaderId::new(5),
            team_code: "TL-OPS".to_owned(),
            team_name: "Operations".to_owned(),
            member_ids: vec![UserId::new(7)],
        }
    }

    #[test]
    fn role_guard_allows_listed_role() {
        let context = context(Role::CompanyAdmin, None);
        assert!(require_role(&context, &[Role::CompanyAdmin]).is_ok());
        assert!(require_admin(&context).is_ok());
    }

    #[test]
    fn role_guard_denial_names_required_roles() {
        let context = context(Role::CompanyMember, None);
        let denied = require_admin(&context);
        let Err(AppError::Forbidden(message)) = denied else {
            panic!("expected forbidden denial");
        };
        assert!(message.contains("super_admin"));
        assert!(message.contains("company_admin"));
    }

    #[test]
    fn admin_or_team_leader_guard_allows_team_leader() {
        let context = context(Role::TeamLeader, Some(scope()));
        assert!(require_admin_or_team_leader(&context).is_ok());
    }

    #[test]
    fn permission_guard_denies_member_missing_company_wide_token() {
        let catalog = PermissionCatalog::standard();
        let context = context(Role::CompanyMember, None);
        let denied = require_permissions(
            &catalog,
            &context,
            &[Permission::TasksManageAll],
            PermissionCheck::Any,
        );
        let Err(AppError::Forbidden(message)) = denied else {
            panic!("expected forbidden denial");
        };
        assert!(message.contains("tasks:manage:all"));
    }

    #[test]
    fn permission_guard_allows_team_leader_with_all_required_tokens() {
        let catalog = PermissionCatalog::standard();
        let context = context(Role::TeamLeader, Some(scope()));
        let allowed = require_permissions(
            &catalog,
            &context,
            &[Permission::TasksViewTeam, Permission::TasksAssignTeam],
            PermissionCheck::All,
        );
        assert!(allowed.is_ok());
    }

    #[test]
    fn team_scope_guard_denies_leader_without_team() {
        let context = context(Role::TeamLeader, None);
        let denied = require_team_scope(&context);
        let Err(AppError::Forbidden(message)) = denied else {
            panic!("expected forbidden denial");
        };
        assert_eq!(message, "team leader not assigned to a team");
    }

    #[test]
    fn team_scope_guard_ignores_other_roles() {
        assert!(require_team_scope(&context(Role::CompanyMember, None)).is_ok());
        assert!(require_team_scope(&context(Role::SuperAdmin, None)).is_ok());
    }
}
