use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db::StoreError,
    error::{ApiError, BodyError, ConflictError, ErrorVerbosityProvider, InternalServerError},
    extractor::{form::ApiForm, validated::ValidatedFromRequest},
    state::ApiState,
    traits::StateProvider,
    types::book::Book,
};

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct CreateBookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub author: String,
    /// Decimal number, e.g. `5.90`.
    #[serde(default)]
    pub price: String,
}

#[derive(Debug)]
pub struct BookCreated {
    pub isbn: String,
    pub rows_affected: u64,
}

impl IntoResponse for BookCreated {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            format!(
                "Book {} created successfully ({} row affected)\n",
                self.isbn, self.rows_affected
            ),
        )
            .into_response()
    }
}

fn parse_price(price: &str) -> Result<f32, String> {
    let parsed = price
        .parse::<f32>()
        .map_err(|err| format!("`price` {price:?} is not a number: {err}"))?;

    if !parsed.is_finite() {
        return Err(format!("`price` {price:?} is out of range"));
    }

    Ok(parsed)
}

pub async fn create_book(
    State(state): State<ApiState>,
    ValidatedFromRequest(ApiForm(form)): ValidatedFromRequest<ApiForm<CreateBookForm>>,
) -> Result<BookCreated, ApiError> {
    let verbosity = state.error_verbosity();

    let price = parse_price(&form.price).map_err(|reason| {
        tracing::warn!(%reason, "Invalid price");

        BodyError::new(verbosity, reason, None)
    })?;

    let book = Book {
        isbn: form.isbn,
        title: form.title,
        author: form.author,
        price,
    };

    let rows_affected = state.books().insert(&book).await.map_err(|err| match err {
        StoreError::Duplicate { isbn } => {
            tracing::warn!(%isbn, "Book already exists");

            ApiError::from(ConflictError::new(
                verbosity,
                format!("Book with isbn {isbn} already exists"),
            ))
        }
        err => InternalServerError::from_generic_error(verbosity, err).into(),
    })?;

    tracing::info!(isbn = %book.isbn, rows_affected, "Book created");

    Ok(BookCreated {
        isbn: book.isbn,
        rows_affected,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_price;

    #[test]
    fn price_must_be_a_finite_number() {
        assert_eq!(parse_price("5.90"), Ok(5.9));
        assert_eq!(parse_price("12"), Ok(12.0));
        assert!(parse_price("").is_err());
        assert!(parse_price("five").is_err());
        assert!(parse_price("5,90").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("1e39").is_err());
    }
}
