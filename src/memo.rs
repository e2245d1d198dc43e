//! Per-instance memoization of expensive accessors.
//!
//! A [`Memo`] is a single cache slot that a struct owns as an ordinary field.
//! The first read runs the computation and stores its result; every later
//! read returns the stored value. The slot lives and dies with its owner, so
//! two instances of the same type never share a value.
//!
//! The slot is backed by [`tokio::sync::OnceCell`]: concurrent first reads
//! wait for a single computation instead of racing. A computation that
//! returns an error leaves the slot empty, and the next read tries again.

use std::fmt;
use std::future::Future;

use tokio::sync::OnceCell;

/// A lazily computed, never invalidated value.
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value, if it has been computed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the computation has already succeeded.
    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }

    /// Returns the cached value, running `compute` first if the slot is empty.
    ///
    /// # Arguments
    ///
    /// * `compute` - Produces the value. Called at most once per slot.
    pub async fn get_or_compute<F, Fut>(&self, compute: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(compute).await
    }

    /// Fallible variant of [`Memo::get_or_compute`].
    ///
    /// If `compute` fails, its error is returned and nothing is stored, so a
    /// later call runs the computation again.
    ///
    /// # Arguments
    ///
    /// * `compute` - Produces the value or an error.
    pub async fn get_or_try_compute<F, Fut, E>(&self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(compute).await
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Memo").field(&self.cell.get()).finish()
    }
}
