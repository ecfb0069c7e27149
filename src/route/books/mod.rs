use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::book::Book;

pub mod app;
pub mod create_book;
pub mod list_books;
pub mod show_book;

/// Plain text response with one `isbn, title, author, £price` line per book.
#[derive(Debug)]
pub struct BookLines(pub Vec<Book>);

impl IntoResponse for BookLines {
    fn into_response(self) -> Response {
        let body: String = self.0.iter().map(|book| format!("{book}\n")).collect();

        (StatusCode::OK, body).into_response()
    }
}
