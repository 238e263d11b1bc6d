use axum::Json;
use axum::extract::State;

use crate::dto::TaskResponse;
use crate::error::ApiResult;
use crate::request_context::LoadedContext;
use crate::state::AppState;

/// Lists tasks visible within the actor's scope.
pub async fn list_tasks_handler(
    State(state): State<AppState>,
    LoadedContext(context): LoadedContext,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = state.task_service.list_tasks(&context).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}
