//! Monoid type class - semigroups with an identity element.
//!
//! `Ordering::Equal` is the identity of lexicographic combination: a tie
//! never overrides a decision and never makes one.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqops::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(Ordering::empty(), Ordering::Equal);
//! assert_eq!(Ordering::empty().combine(Ordering::Less), Ordering::Less);
//! ```

use std::cmp::Ordering;

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    #[must_use]
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from `empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::typeclass::Monoid;
    ///
    /// assert_eq!(Ordering::combine_all(Vec::new()), Ordering::Equal);
    /// assert_eq!(
    ///     Ordering::combine_all([Ordering::Equal, Ordering::Less]),
    ///     Ordering::Less
    /// );
    /// ```
    #[must_use]
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for Ordering {
    #[inline]
    fn empty() -> Self {
        Self::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ordering::Less)]
    #[case(Ordering::Equal)]
    #[case(Ordering::Greater)]
    fn test_ordering_identity(#[case] value: Ordering) {
        assert_eq!(Ordering::empty().combine(value), value);
        assert_eq!(value.combine(Ordering::empty()), value);
    }

    #[rstest]
    fn test_combine_all_first_decision_wins() {
        let orderings = [
            Ordering::Equal,
            Ordering::Greater,
            Ordering::Less,
            Ordering::Equal,
        ];
        assert_eq!(Ordering::combine_all(orderings), Ordering::Greater);
    }
}
