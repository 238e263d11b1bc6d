use axum::Json;
use axum::extract::State;
use shiftscope_application::PermissionSnapshot;

use crate::dto::PermissionSnapshotResponse;
use crate::request_context::LoadedContext;
use crate::state::AppState;

/// Serves the actor's permission snapshot for client-side gating.
pub async fn permission_snapshot_handler(
    State(state): State<AppState>,
    LoadedContext(context): LoadedContext,
) -> Json<PermissionSnapshotResponse> {
    let snapshot = PermissionSnapshot::for_context(&state.catalog, &context);
    Json(PermissionSnapshotResponse::from(snapshot))
}
