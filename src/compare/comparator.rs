//! The single-key comparison capability.
//!
//! A [`Comparator`] answers one question: how do two values order relative to
//! each other? Anything that can answer it can drive a sort: the natural
//! `Ord` order, a reversed order, a projection through a key, a composite of
//! several criteria, or a plain closure.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqops::compare::{Comparator, NaturalOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(NaturalOrder.reversed().compare(&1, &2), Ordering::Greater);
//!
//! // Closures are comparators too
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"ab", &"a"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over values of type `T`.
///
/// Implementations must be pure and should describe a total order. An
/// inconsistent comparator never makes a sort panic, but the resulting
/// placement of the affected elements is unspecified.
pub trait Comparator<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Compares values by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl NaturalOrder {
    /// Returns the descending natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::compare::{Comparator, NaturalOrder};
    ///
    /// let descending = NaturalOrder.reversed();
    /// assert_eq!(descending.compare(&"b", &"a"), Ordering::Less);
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Wraps `comparator` so that it orders in the opposite direction.
    pub const fn new(comparator: C) -> Self {
        Self(comparator)
    }

    /// Returns the wrapped comparator.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Sort direction of a single criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl Direction {
    /// Applies this direction to an ordering.
    ///
    /// `Ascending` returns the ordering unchanged, `Descending` reverses it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::compare::Direction;
    ///
    /// assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
    /// assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns `true` for `Descending`.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
