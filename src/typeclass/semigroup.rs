//! Semigroup type class - types with an associative binary operation.
//!
//! Orderings form a semigroup under lexicographic combination: the left
//! result wins unless it is `Equal`, in which case the right result decides.
//! This is exactly how "sort by A, then by B" combines two comparisons.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqops::typeclass::Semigroup;
//!
//! assert_eq!(Ordering::Equal.combine(Ordering::Less), Ordering::Less);
//! assert_eq!(Ordering::Greater.combine(Ordering::Less), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::typeclass::Semigroup;
    ///
    /// let primary = Ordering::Equal;
    /// let secondary = Ordering::Greater;
    /// assert_eq!(primary.combine_ref(&secondary), Ordering::Greater);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::typeclass::Semigroup;
    ///
    /// let orderings = vec![Ordering::Equal, Ordering::Less, Ordering::Greater];
    /// assert_eq!(Ordering::reduce_left(orderings), Some(Ordering::Less));
    /// ```
    fn reduce_left<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for Ordering {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}
