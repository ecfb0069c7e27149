use crate::{db::BookStore, error::ErrorVerbosityProvider};

pub trait StateProvider: ErrorVerbosityProvider {
    /// Returns the store backing the book routes.
    fn books(&self) -> &dyn BookStore;
}
