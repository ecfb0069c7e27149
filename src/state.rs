use std::{ops::Deref, sync::Arc};

use crate::{
    db::BookStore,
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    traits::StateProvider,
};

/// Shared by every request. Cloning only bumps a reference count.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, books: Box<dyn BookStore>) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                books,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    books: Box<dyn BookStore>,
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

impl StateProvider for ApiState {
    fn books(&self) -> &dyn BookStore {
        self.books.as_ref()
    }
}
