use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, MethodNotAllowedError},
    state::ApiState,
};

/// Middleware to map axum's `MethodNotAllowed` rejection to our [`ApiError`].
///
/// The rejection is produced by the router before any handler runs.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = next.run(req).await;

    match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            tracing::warn!(%method, %path, "Method not allowed");

            Err(MethodNotAllowedError::new(state.error_verbosity()).into())
        }
        _ => Ok(resp),
    }
}

/// Handler for methods axum would otherwise serve implicitly, such as `HEAD` on `GET` routes.
///
/// Logged by [`method_not_allowed`] like any other 405.
pub async fn reject_method(State(state): State<ApiState>) -> ApiError {
    MethodNotAllowedError::new(state.error_verbosity()).into()
}
