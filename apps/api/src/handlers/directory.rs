use axum::Json;
use axum::extract::State;

use crate::dto::UserResponse;
use crate::error::ApiResult;
use crate::request_context::LoadedContext;
use crate::state::AppState;

/// Lists users visible within the actor's scope.
pub async fn list_users_handler(
    State(state): State<AppState>,
    LoadedContext(context): LoadedContext,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.roster_service.list_users(&context).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
