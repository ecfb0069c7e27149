use axum::extract::State;

use crate::{error::ApiError, server_error, state::ApiState, traits::StateProvider};

use super::BookLines;

pub async fn list_books(State(state): State<ApiState>) -> Result<BookLines, ApiError> {
    let books = state.books().all().await.map_err(server_error!(state))?;

    tracing::debug!(count = books.len(), "Listed books");

    Ok(BookLines(books))
}
