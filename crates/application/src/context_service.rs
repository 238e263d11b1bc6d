use std::sync::Arc;

use async_trait::async_trait;
use shiftscope_core::{AppError, AppResult, UserId};
use shiftscope_domain::{Actor, RequestContext, Role};

use crate::TeamScopeResolver;

/// Repository port for actor lookups.
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Finds an actor by user id, including deactivated accounts so the
    /// caller can distinguish "disabled" from "not found".
    async fn find_actor(&self, user_id: UserId) -> AppResult<Option<Actor>>;
}

/// Loads the per-request [`RequestContext`] for an authenticated actor.
///
/// The context is resolved fresh on every operation; nothing here is cached,
/// and a lookup failure denies the operation (fail-closed, never a
/// default-allow path).
#[derive(Clone)]
pub struct ContextService {
    actors: Arc<dyn ActorRepository>,
    team_scope: TeamScopeResolver,
}

impl ContextService {
    /// Creates a context service from its repository and resolver.
    #[must_use]
    pub fn new(actors: Arc<dyn ActorRepository>, team_scope: TeamScopeResolver) -> Self {
        Self { actors, team_scope }
    }

    /// Resolves the context for the actor id extracted from the request's
    /// authentication signal.
    ///
    /// Denials are all unauthenticated-class failures with distinct
    /// messages for client diagnostics, except the tenant-inconsistency
    /// case which is logged in detail but surfaced generically.
    pub async fn load_context(&self, actor_id: Option<UserId>) -> AppResult<RequestContext> {
        let Some(actor_id) = actor_id else {
            return Err(AppError::Unauthorized("authentication required".to_owned()));
        };

        let Some(actor) = self.actors.find_actor(actor_id).await? else {
            return Err(AppError::Unauthorized("unknown user account".to_owned()));
        };

        if !actor.is_active {
            return Err(AppError::Unauthorized("user account disabled".to_owned()));
        }

        if actor.company_id.is_none() && actor.role != Role::SuperAdmin {
            // Data-integrity condition: an orphaned tenant-less account.
            // Details go to the log, not to the client.
            tracing::warn!(
                user_id = %actor.id,
                role = actor.role.as_str(),
                "actor has no company association and is not global-scope eligible"
            );
            return Err(AppError::Unauthorized("authentication failed".to_owned()));
        }

        let team_scope = if actor.role == Role::TeamLeader {
            // Absent scope is valid here; team-scope guards decide later.
            self.team_scope.resolve(actor.id).await?
        } else {
            None
        };

        Ok(RequestContext::new(actor, team_scope))
    }
}
