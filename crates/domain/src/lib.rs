//! Domain entities and authorization invariants.

#![forbid(unsafe_code)]

mod catalog;
mod context;
mod guard;
mod permission;
mod role;

pub use catalog::PermissionCatalog;
pub use context::{Actor, RequestContext, ScopeFilters, TeamScope};
pub use guard::{
    PermissionCheck, require_admin, require_admin_or_team_leader, require_permissions,
    require_role, require_team_scope,
};
pub use permission::Permission;
pub use role::Role;
