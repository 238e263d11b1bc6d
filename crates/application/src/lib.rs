//! Application services and ports.

#![forbid(unsafe_code)]

mod context_service;
mod permission_mirror;
mod roster_service;
mod task_service;
mod team_scope;

pub use context_service::{ActorRepository, ContextService};
pub use permission_mirror::{PermissionMirror, PermissionSnapshot, PermissionSnapshotSource};
pub use roster_service::{RosterService, UserDirectoryRepository, UserSummary};
pub use task_service::{TaskRepository, TaskService, TaskSummary};
pub use team_scope::{TeamLeaderRecord, TeamRepository, TeamScopeResolver};
