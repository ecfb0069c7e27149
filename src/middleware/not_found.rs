use axum::{extract::State, http::Uri};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    state::ApiState,
};

/// Fallback for every path without a route.
pub async fn not_found(State(state): State<ApiState>, uri: Uri) -> ApiError {
    tracing::warn!(%uri, "No route");

    NotFoundError::with_reason(state.error_verbosity(), format!("No route for {uri}")).into()
}
