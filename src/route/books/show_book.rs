use axum::extract::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    extractor::{query::ApiQuery, validated::ValidatedFromRequestParts},
    server_error,
    state::ApiState,
    traits::StateProvider,
};

use super::BookLines;

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ShowBookQuery {
    /// A missing `isbn` is treated like an empty one.
    #[serde(default)]
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub isbn: String,
}

pub async fn show_book(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiQuery(query)): ValidatedFromRequestParts<ApiQuery<ShowBookQuery>>,
) -> Result<BookLines, ApiError> {
    let isbn = query.isbn;

    let book = state
        .books()
        .find(&isbn)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| {
            tracing::debug!(%isbn, "Book not found");

            NotFoundError::with_reason(
                state.error_verbosity(),
                format!("Book with isbn {isbn} not found"),
            )
        })?;

    Ok(BookLines(vec![book]))
}
