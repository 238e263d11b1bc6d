use std::sync::Arc;

use shiftscope_application::{ContextService, RosterService, TaskService};
use shiftscope_domain::PermissionCatalog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Immutable permission catalog, built once at startup.
    pub catalog: Arc<PermissionCatalog>,
    /// Per-request context loader.
    pub context_service: ContextService,
    /// Scoped user-directory reads.
    pub roster_service: RosterService,
    /// Scoped task reads.
    pub task_service: TaskService,
}
