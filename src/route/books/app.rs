use axum::{
    routing::{get, post},
    Router,
};

use crate::{middleware::method_not_allowed::reject_method, state::ApiState};

/// `GET` routes refuse `HEAD` explicitly, axum would otherwise run the `GET` handler for it.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            "/books",
            get(super::list_books::list_books).head(reject_method),
        )
        .route(
            "/books/show",
            get(super::show_book::show_book).head(reject_method),
        )
        .route("/books/create", post(super::create_book::create_book))
}
