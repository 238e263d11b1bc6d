use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shiftscope_core::{AppResult, UserId};
use shiftscope_domain::{Permission, PermissionCatalog, RequestContext, Role, TeamScope};

/// The permission view served to clients for UI gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    /// Tokens held by the actor's role, in catalog order.
    pub permissions: Vec<Permission>,
    /// Resolved team scope for team leaders, if any.
    pub team_scope: Option<TeamScope>,
    /// Whether the actor holds global scope.
    pub is_global_scope: bool,
}

impl PermissionSnapshot {
    /// Assembles the snapshot for a loaded context.
    #[must_use]
    pub fn for_context(catalog: &PermissionCatalog, context: &RequestContext) -> Self {
        Self {
            permissions: catalog.permissions_for(context.role()).to_vec(),
            team_scope: context.team_scope().cloned(),
            is_global_scope: context.is_global_scope(),
        }
    }
}

/// Port for fetching the authenticated actor's snapshot from the server.
#[async_trait]
pub trait PermissionSnapshotSource: Send + Sync {
    /// Fetches the current snapshot for the actor.
    async fn fetch_snapshot(&self, actor_id: UserId) -> AppResult<PermissionSnapshot>;
}

/// Actor-local advisory cache of the permission snapshot.
///
/// Drives UI visibility (navigation items, action buttons) only; the server
/// re-evaluates every operation against the catalog, so this cache is never
/// consulted for enforcement. `refetch` is the single writer, and every
/// predicate answers `false` until a snapshot has been loaded.
pub struct PermissionMirror {
    source: Arc<dyn PermissionSnapshotSource>,
    actor_id: UserId,
    role: Role,
    snapshot: Option<PermissionSnapshot>,
}

impl PermissionMirror {
    /// Creates an empty mirror for the authenticated actor.
    ///
    /// Callers replace the mirror (not just refetch it) whenever the actor's
    /// identity or role changes.
    #[must_use]
    pub fn new(source: Arc<dyn PermissionSnapshotSource>, actor_id: UserId, role: Role) -> Self {
        Self {
            source,
            actor_id,
            role,
            snapshot: None,
        }
    }

    /// Replaces the cached snapshot with a fresh fetch.
    ///
    /// On fetch failure the cache is cleared before the error propagates, so
    /// the mirror fails closed rather than serving a stale grant list.
    pub async fn refetch(&mut self) -> AppResult<()> {
        self.snapshot = None;
        let snapshot = self.source.fetch_snapshot(self.actor_id).await?;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Returns whether the mirrored grant list contains the permission.
    #[must_use]
    pub fn can(&self, permission: Permission) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.permissions.contains(&permission))
    }

    /// Returns whether any of the permissions is mirrored.
    #[must_use]
    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|permission| self.can(*permission))
    }

    /// Returns whether all of the permissions are mirrored.
    ///
    /// Unlike the catalog, an unloaded or empty mirror answers `false` even
    /// for an empty input: UI gating stays closed until data arrives.
    #[must_use]
    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        let loaded = self
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| !snapshot.permissions.is_empty());

        loaded && permissions.iter().all(|permission| self.can(*permission))
    }

    /// Returns whether the mirrored role appears in the allow-list.
    #[must_use]
    pub fn is_role(&self, allowed_roles: &[Role]) -> bool {
        allowed_roles.contains(&self.role)
    }

    /// Returns the mirrored team scope, if loaded.
    #[must_use]
    pub fn team_scope(&self) -> Option<&TeamScope> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.team_scope.as_ref())
    }

    /// Returns whether the mirrored snapshot carries global scope.
    #[must_use]
    pub fn is_global_scope(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.is_global_scope)
    }
}
