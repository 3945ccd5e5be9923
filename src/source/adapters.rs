//! Sources built from closures, possibly absent sources, and fault fencing.

use std::fmt;

use super::{Source, absent};
use crate::error::{BoxedFault, Result, SequenceError};

// =============================================================================
// FromFn
// =============================================================================

/// A source whose every iteration is produced by calling a factory.
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    factory: F,
}

/// Creates a source that calls `factory` at the start of every iteration.
///
/// Because the factory runs once per iteration, a source built over shared
/// mutable state observes every change made between two iterations.
///
/// # Examples
///
/// ```rust
/// use seqops::source::{self, Source};
///
/// let evens = source::from_fn(|| (0..10).filter(|n| n % 2 == 0));
/// assert_eq!(evens.materialize().unwrap(), vec![0, 2, 4, 6, 8]);
/// ```
pub const fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

impl<F, I> Source for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn pull(&self) -> impl Iterator<Item = Result<I::Item>> {
        (self.factory)().into_iter().map(Ok)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

// =============================================================================
// TryFromFn
// =============================================================================

/// A source over fallible items.
///
/// Created by [`try_from_fn`].
#[derive(Clone)]
pub struct TryFromFn<F> {
    factory: F,
}

/// Creates a source over an iterator of `Result`s.
///
/// The first `Err` is converted to [`SequenceError::SourceFault`] and ends
/// the iteration.
///
/// # Examples
///
/// ```rust
/// use seqops::source::{self, Source};
///
/// let rows = source::try_from_fn(|| vec![Ok(1), Err("corrupt row"), Ok(3)]);
/// let error = rows.materialize().unwrap_err();
/// assert!(error.is_fault());
/// ```
pub const fn try_from_fn<F, I, T, E>(factory: F) -> TryFromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator<Item = std::result::Result<T, E>>,
    E: Into<BoxedFault>,
{
    TryFromFn { factory }
}

impl<F, I, T, E> Source for TryFromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator<Item = std::result::Result<T, E>>,
    E: Into<BoxedFault>,
{
    type Item = T;

    fn pull(&self) -> impl Iterator<Item = Result<T>> {
        until_fault((self.factory)().into_iter().map(|item| {
            item.map_err(|error| {
                let error = SequenceError::fault(error);
                tracing::debug!(%error, "source faulted while being pulled");
                error
            })
        }))
    }
}

impl<F> fmt::Debug for TryFromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TryFromFn").finish_non_exhaustive()
    }
}

// =============================================================================
// Nullable
// =============================================================================

/// A source that may be absent.
///
/// Created by [`nullable`] or [`Nullable::named`]. An absent source does not
/// fail when it is created or wrapped by further operators; it fails with
/// [`SequenceError::NullSource`] on the first pull.
#[derive(Debug, Clone)]
pub struct Nullable<S> {
    source: Option<S>,
    parameter: &'static str,
}

/// Wraps a possibly absent source, reported as `"source"` when absent.
///
/// # Examples
///
/// ```rust
/// use seqops::source::{self, Source};
///
/// let present = source::nullable(Some(vec![1, 2]));
/// assert_eq!(present.materialize().unwrap(), vec![1, 2]);
///
/// let absent = source::nullable(None::<Vec<i32>>);
/// let mut iteration = absent.pull();
/// assert!(iteration.next().unwrap().is_err());
/// assert!(iteration.next().is_none());
/// ```
pub const fn nullable<S: Source>(source: Option<S>) -> Nullable<S> {
    Nullable::named(source, "source")
}

impl<S> Nullable<S> {
    /// Wraps a possibly absent source reported under `parameter`.
    pub const fn named(source: Option<S>, parameter: &'static str) -> Self {
        Self { source, parameter }
    }

    /// Returns `true` if the source is present.
    pub const fn is_present(&self) -> bool {
        self.source.is_some()
    }
}

impl<S: Source> Source for Nullable<S> {
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        let missing = self.source.is_none().then(|| absent(self.parameter));
        missing
            .into_iter()
            .chain(self.source.iter().flat_map(|source| source.pull()))
    }
}

// =============================================================================
// UntilFault
// =============================================================================

/// Ends an iteration right after its first error.
///
/// Created by [`until_fault`].
#[derive(Debug, Clone)]
pub struct UntilFault<I> {
    inner: I,
    faulted: bool,
}

/// Stops `iterator` after the first `Err` it yields.
///
/// # Examples
///
/// ```rust
/// use seqops::SequenceError;
/// use seqops::source::until_fault;
///
/// let items = vec![Ok(1), Err(SequenceError::NoMatchingElement), Ok(3)];
/// assert_eq!(until_fault(items.into_iter()).count(), 2);
/// ```
pub const fn until_fault<I, T>(iterator: I) -> UntilFault<I>
where
    I: Iterator<Item = Result<T>>,
{
    UntilFault {
        inner: iterator,
        faulted: false,
    }
}

impl<I, T> Iterator for UntilFault<I>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.faulted {
            return None;
        }
        let item = self.inner.next()?;
        self.faulted = item.is_err();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.faulted {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}
