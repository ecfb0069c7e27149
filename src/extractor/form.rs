use axum::{
    async_trait,
    extract::{Form as AxumForm, FromRequest, Request},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{ApiError, BodyError, ErrorVerbosityProvider};

use super::{expected_schema, Extractor};

/// A Wrapper around [`axum::extract::Form`] that rejects with an [`ApiError`].
///
/// Extracts an `application/x-www-form-urlencoded` body consuming the request.
pub struct ApiForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "form_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = AxumForm::<T>::from_request(req, state).await;

        match form {
            Ok(form) => {
                tracing::trace!(form=?form.0, "Extracted");

                Ok(ApiForm(form.0))
            }
            Err(form_rejection) => {
                tracing::warn!(rejection=?form_rejection, "Rejection");

                let verbosity = state.error_verbosity();

                let body_error_reason = form_rejection.body_text();
                let body_expected_schema = expected_schema::<T>(verbosity)?;

                Err(BodyError::new(verbosity, body_error_reason, body_expected_schema).into())
            }
        }
    }
}

impl<T> Extractor for ApiForm<T> {
    type Extracted = T;

    fn extracted(&self) -> &Self::Extracted {
        &self.0
    }
}
