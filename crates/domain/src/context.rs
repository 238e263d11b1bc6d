use serde::{Deserialize, Serialize};
use shiftscope_core::{CompanyId, TeamLeaderId, UserId};

use crate::Role;

/// Resolved identity of the account executing the current operation.
///
/// Loaded fresh per request; never cached across requests, so a deactivation
/// takes effect on the next operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User record id.
    pub id: UserId,
    /// Role fixed at assignment time.
    pub role: Role,
    /// Company association; `None` only for a global-scope super admin.
    pub company_id: Option<CompanyId>,
    /// Accounts are deactivated rather than deleted.
    pub is_active: bool,
}

/// The set of members a team leader is authorized over, resolved at request
/// time from current membership rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScope {
    /// Id of the team-leader record that owns the team.
    pub team_leader_id: TeamLeaderId,
    /// Human-shareable team code.
    pub team_code: String,
    /// Team display name.
    pub team_name: String,
    /// User ids currently assigned to the team.
    pub member_ids: Vec<UserId>,
}

/// Per-operation aggregate of actor, tenant and scope, attached once by the
/// context loader and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    actor: Actor,
    company_id: Option<CompanyId>,
    is_global_scope: bool,
    team_scope: Option<TeamScope>,
}

impl RequestContext {
    /// Creates a context for a resolved actor.
    ///
    /// Global scope is derived here and nowhere else: a super admin with no
    /// company association sees every company, any other combination is
    /// bound to the actor's own company.
    #[must_use]
    pub fn new(actor: Actor, team_scope: Option<TeamScope>) -> Self {
        let is_global_scope = actor.role == Role::SuperAdmin && actor.company_id.is_none();
        let company_id = actor.company_id;

        Self {
            actor,
            company_id,
            is_global_scope,
            team_scope,
        }
    }

    /// Returns the resolved actor.
    #[must_use]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Returns the actor's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.actor.role
    }

    /// Returns the company every query must be constrained to, if any.
    #[must_use]
    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    /// Returns whether the actor holds unrestricted, company-agnostic scope.
    #[must_use]
    pub fn is_global_scope(&self) -> bool {
        self.is_global_scope
    }

    /// Returns the resolved team scope for team-leader actors.
    ///
    /// Absence for a team leader means "no active team" and must deny all
    /// team-scoped operations downstream, never widen to global scope.
    #[must_use]
    pub fn team_scope(&self) -> Option<&TeamScope> {
        self.team_scope.as_ref()
    }
}

/// Per-operation constraint object consumed by data access.
///
/// Every multi-tenant read or write intersects its query against this value;
/// created once from a loaded context and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFilters {
    /// Company to constrain all queries to; `None` only under global scope.
    pub company_id: Option<CompanyId>,
    /// True when no company constraint applies at all.
    pub is_global_scope: bool,
    /// Member-id restriction, present only for a team leader with a team.
    pub team_member_ids: Option<Vec<UserId>>,
}

impl ScopeFilters {
    /// Projects the filters out of a loaded context.
    ///
    /// The member-id set is copied only when the actor is a team leader with
    /// a resolved team scope; every other role filters on company alone.
    #[must_use]
    pub fn for_context(context: &RequestContext) -> Self {
        let team_member_ids = match (context.role(), context.team_scope()) {
            (Role::TeamLeader, Some(scope)) => Some(scope.member_ids.clone()),
            _ => None,
        };

        Self {
            company_id: context.company_id(),
            is_global_scope: context.is_global_scope(),
            team_member_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use shiftscope_core::{CompanyId, TeamLeaderId, UserId};

    use super::{Actor, RequestContext, ScopeFilters, TeamScope};
    use crate::Role;

    fn actor(role: Role, company_id: Option<i64>) -> Actor {
        Actor {
            id: UserId::new(1),
            role,
            company_id: company_id.map(CompanyId::new),
            is_active: true,
        }
    }

    fn scope() -> TeamScope {
        TeamScope {
            team_leader_id: TeamLeaderId::new(9),
            team_code: "TL-ALPHA".to_owned(),
            team_name: "Alpha".to_owned(),
            member_ids: vec![UserId::new(2), UserId::new(3)],
        }
    }

    #[test]
    fn super_admin_without_company_is_global() {
        let context = RequestContext::new(actor(Role::SuperAdmin, None), None);
        assert!(context.is_global_scope());
        assert_eq!(context.company_id(), None);
    }

    #[test]
    fn super_admin_with_company_is_not_global() {
        let context = RequestContext::new(actor(Role::SuperAdmin, Some(4)), None);
        assert!(!context.is_global_scope());
        assert_eq!(context.company_id(), Some(CompanyId::new(4)));
    }

    #[test]
    fn filters_copy_member_ids_for_team_leader_with_scope() {
        let context = RequestContext::new(actor(Role::TeamLeader, Some(4)), Some(scope()));
        let filters = ScopeFilters::for_context(&context);
        assert_eq!(
            filters.team_member_ids,
            Some(vec![UserId::new(2), UserId::new(3)])
        );
        assert_eq!(filters.company_id, Some(CompanyId::new(4)));
        assert!(!filters.is_global_scope);
    }

    #[test]
    fn filters_omit_member_ids_for_team_leader_without_scope() {
        let context = RequestContext::new(actor(Role::TeamLeader, Some(4)), None);
        let filters = ScopeFilters::for_context(&context);
        assert_eq!(filters.team_member_ids, None);
    }

    #[test]
    fn filters_omit_member_ids_for_non_leader_even_with_scope_attached() {
        let context = RequestContext::new(actor(Role::CompanyAdmin, Some(4)), Some(scope()));
        let filters = ScopeFilters::for_context(&context);
        assert_eq!(filters.team_member_ids, None);
    }
}
