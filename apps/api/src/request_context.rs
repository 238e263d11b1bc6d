use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use shiftscope_core::{AppError, UserId};
use shiftscope_domain::RequestContext;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Header carrying the resolved actor id.
///
/// Session and cookie mechanics live with the upstream gateway; this core
/// only requires a resolved actor identifier as input.
pub const ACTOR_ID_HEADER: &str = "x-user-id";

/// Middleware that loads the request context before any protected handler.
///
/// Loading is idempotent within one request: if a context extension is
/// already attached, nothing is re-fetched. A denial here short-circuits the
/// request; no handler or data access runs after a failed load.
pub async fn load_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    if request.extensions().get::<RequestContext>().is_none() {
        let actor_id = actor_id_from_headers(request.headers());
        let context = state.context_service.load_context(actor_id).await?;
        request.extensions_mut().insert(context);
    }

    Ok(next.run(request).await)
}

/// Extractor for the context attached by [`load_context`].
///
/// A missing context is a programming-contract violation (a route wired
/// without the loader middleware), surfaced as an internal error rather
/// than an authorization denial.
pub struct LoadedContext(pub RequestContext);

impl<S> FromRequestParts<S> for LoadedContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(context) = parts.extensions.get::<RequestContext>() else {
            return Err(AppError::Internal(
                "request context not loaded before handler".to_owned(),
            )
            .into());
        };

        Ok(Self(context.clone()))
    }
}

fn actor_id_from_headers(headers: &HeaderMap) -> Option<UserId> {
    headers
        .get(ACTOR_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .map(UserId::new)
}
