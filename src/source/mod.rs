//! Re-iterable source sequences.
//!
//! A [`Source`] is a sequence that can be iterated any number of times, each
//! iteration starting afresh from the first element. Iteration is pull-based
//! and fallible: every item is a `Result`, and a failing item is always the
//! last one an iteration yields.
//!
//! Borrowed and owned collections are sources, as are closures producing a
//! fresh iterator ([`from_fn`], [`try_from_fn`]). A possibly absent source is
//! wrapped with [`nullable`]; its absence is only reported once somebody
//! starts pulling from it.
//!
//! # Examples
//!
//! ```rust
//! use seqops::source::{self, Source};
//!
//! let numbers = vec![3, 1, 2];
//! assert_eq!(numbers.materialize().unwrap(), vec![3, 1, 2]);
//!
//! let squares = source::from_fn(|| (1..=3).map(|n| n * n));
//! assert_eq!(squares.materialize().unwrap(), vec![1, 4, 9]);
//!
//! let missing = source::nullable(None::<Vec<i32>>);
//! let error = missing.materialize().unwrap_err();
//! assert_eq!(error.parameter(), Some("source"));
//! ```

mod adapters;

use std::rc::Rc;

use crate::error::{Result, SequenceError};

pub use adapters::{FromFn, Nullable, TryFromFn, UntilFault, from_fn, nullable, try_from_fn, until_fault};

/// A sequence that can be iterated repeatedly.
///
/// # Contract
///
/// - Every call to [`pull`](Source::pull) starts a new, independent
///   iteration from the first element.
/// - Once an iteration yields an `Err`, it yields nothing further.
/// - Pulling never mutates the source.
pub trait Source {
    /// The element type.
    type Item;

    /// Starts a fresh iteration over the sequence.
    fn pull(&self) -> impl Iterator<Item = Result<Self::Item>>;

    /// Pulls every element into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by the iteration; the elements pulled
    /// before it are discarded.
    fn materialize(&self) -> Result<Vec<Self::Item>> {
        self.pull().collect()
    }
}

impl<T: Clone> Source for Vec<T> {
    type Item = T;

    fn pull(&self) -> impl Iterator<Item = Result<T>> {
        self.iter().cloned().map(Ok)
    }
}

impl<T: Clone> Source for [T] {
    type Item = T;

    fn pull(&self) -> impl Iterator<Item = Result<T>> {
        self.iter().cloned().map(Ok)
    }
}

impl<T: Clone, const N: usize> Source for [T; N] {
    type Item = T;

    fn pull(&self) -> impl Iterator<Item = Result<T>> {
        self.iter().cloned().map(Ok)
    }
}

impl Source for str {
    type Item = char;

    fn pull(&self) -> impl Iterator<Item = Result<char>> {
        self.chars().map(Ok)
    }
}

impl Source for String {
    type Item = char;

    fn pull(&self) -> impl Iterator<Item = Result<char>> {
        self.chars().map(Ok)
    }
}

impl<S: Source + ?Sized> Source for &S {
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        (**self).pull()
    }
}

impl<S: Source + ?Sized> Source for Rc<S> {
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        (**self).pull()
    }
}

/// Reports an absent source as the only item of an iteration.
pub(crate) fn absent<T>(parameter: &'static str) -> Result<T> {
    tracing::debug!(parameter, "source sequence is absent");
    Err(SequenceError::NullSource { parameter })
}
