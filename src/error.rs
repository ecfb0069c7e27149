use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::From;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns only the appropriate status code with an empty body.
    StatusCode,
    /// Server returns the status text (e.g. `Bad Request`) with the appropriate status code.
    #[default]
    Message,
    /// Server returns the status text followed by the error reason and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;
}

/// Maps any error into an [`InternalServerError`] using the verbosity of the given state.
///
/// ```ignore
/// state.books().all().await.map_err(server_error!(state))?;
/// ```
#[macro_export]
macro_rules! server_error {
    ($state:expr) => {
        |err| {
            $crate::error::InternalServerError::from_generic_error(
                $crate::error::ErrorVerbosityProvider::error_verbosity(&$state),
                err,
            )
        }
    };
}

#[derive(Debug, From)]
/// API error
///
/// Rendered as a plain text body, see [`ErrorVerbosity`].
pub enum ApiError {
    /// Returned when a backend operation fails.
    InternalServerError(InternalServerError),
    /// Returned when the query parameters are not as expected.
    Query(QueryError),
    /// Returned when the body is not as expected.
    Body(BodyError),
    /// Returned when the extracted input fails validation.
    Validation(ValidationError),
    /// Returned when the route exists but not for the used method.
    MethodNotAllowed(MethodNotAllowedError),
    /// Returned when the requested resource is not found.
    NotFound(NotFoundError),
    /// Returned when the resource to be created already exists.
    Conflict(ConflictError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Query(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Validation(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
            ApiError::Conflict(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "Internal Server Error",
            ApiError::Query(_) | ApiError::Body(_) | ApiError::Validation(_) => "Bad Request",
            ApiError::MethodNotAllowed(_) => "Method Not Allowed",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Conflict(_) => "Conflict",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Query(_) | ApiError::Body(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn reason(&self) -> Option<String> {
        match self {
            ApiError::InternalServerError(err) => err.internal_server_error.clone(),
            ApiError::Query(err) => with_schema(&err.query_error_reason, &err.query_expected_schema),
            ApiError::Body(err) => with_schema(&err.body_error_reason, &err.body_expected_schema),
            ApiError::Validation(err) => err.validation_error_reason.clone(),
            ApiError::MethodNotAllowed(_) => None,
            ApiError::NotFound(err) => err.not_found_reason.clone(),
            ApiError::Conflict(err) => err.conflict_reason.clone(),
        }
    }

    fn body(&self) -> String {
        let message = self.message();

        match self.reason() {
            Some(reason) => format!("{message}\n{reason}\n"),
            None => format!("{message}\n"),
        }
    }
}

fn with_schema(reason: &Option<String>, expected_schema: &Option<String>) -> Option<String> {
    match (reason, expected_schema) {
        (Some(reason), Some(schema)) => Some(format!("{reason}\nExpected:\n{schema}")),
        (Some(reason), None) => Some(reason.clone()),
        _ => None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.verbosity() {
            ErrorVerbosity::StatusCode => self.status_code().into_response(),
            ErrorVerbosity::Message => {
                (self.status_code(), format!("{}\n", self.message())).into_response()
            }
            ErrorVerbosity::Full => (self.status_code(), self.body()).into_response(),
        }
    }
}

#[derive(Debug)]
pub struct InternalServerError {
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }
}

#[derive(Debug)]
pub struct QueryError {
    verbosity: ErrorVerbosity,
    query_error_reason: Option<String>,
    query_expected_schema: Option<String>,
}

impl QueryError {
    pub fn new(
        verbosity: ErrorVerbosity,
        query_error_reason: String,
        query_expected_schema: Option<String>,
    ) -> Self {
        let (query_error_reason, query_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(query_error_reason), query_expected_schema),
                false => (None, None),
            };

        QueryError {
            verbosity,
            query_error_reason,
            query_expected_schema,
        }
    }
}

#[derive(Debug)]
pub struct BodyError {
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: Option<String>,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), body_expected_schema),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }
}

#[derive(Debug)]
pub struct ValidationError {
    verbosity: ErrorVerbosity,
    validation_error_reason: Option<String>,
}

impl ValidationError {
    pub fn from_validation_errors(
        verbosity: ErrorVerbosity,
        errors: validator::ValidationErrors,
    ) -> Self {
        let validation_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| errors.to_string());

        ValidationError {
            verbosity,
            validation_error_reason,
        }
    }
}

#[derive(Debug)]
pub struct MethodNotAllowedError {
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    verbosity: ErrorVerbosity,
    not_found_reason: Option<String>,
}

impl NotFoundError {
    pub fn with_reason(verbosity: ErrorVerbosity, not_found_reason: String) -> Self {
        let not_found_reason = verbosity
            .should_generate_error_reason()
            .then_some(not_found_reason);

        NotFoundError {
            verbosity,
            not_found_reason,
        }
    }
}

#[derive(Debug)]
pub struct ConflictError {
    verbosity: ErrorVerbosity,
    conflict_reason: Option<String>,
}

impl ConflictError {
    pub fn new(verbosity: ErrorVerbosity, conflict_reason: String) -> Self {
        let conflict_reason = verbosity
            .should_generate_error_reason()
            .then_some(conflict_reason);

        ConflictError {
            verbosity,
            conflict_reason,
        }
    }
}
