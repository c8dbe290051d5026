//! A module for handling diagnostics reported by the interpreter stages.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::array_list::ArrayList;

/// Represents a trait responsible for handling diagnostics in the interpreter.
pub trait Handler<T> {
    /// Receives an error and handles it.
    fn receive(&self, error: T);
}

/// Is a struct that implements [`Handler`] trait by storing all errors in an [`ArrayList`].
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    errors: RwLock<ArrayList<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(ArrayList::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying list of errors.
    pub fn into_list(self) -> ArrayList<T> {
        self.errors
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Returns a reference to the underlying list of errors.
    pub fn as_list(&self) -> RwLockReadGuard<ArrayList<T>> {
        self.errors
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Returns a mutable reference to the underlying list of errors.
    pub fn as_list_mut(&self) -> RwLockWriteGuard<ArrayList<T>> {
        self.errors
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) { self.as_list_mut().push(error.into()); }
}
