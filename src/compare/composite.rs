//! Multi-criterion comparison.
//!
//! A [`CompositeComparator`] evaluates an ordered list of element
//! comparators and returns the first result that is not `Equal`. Later
//! criteria therefore only distinguish elements that tie on every earlier
//! criterion, which is what "sort by A, then by B, then by C" means.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::comparator::Comparator;
use crate::typeclass::{Monoid, Semigroup};

/// A shared, type-erased element comparator.
pub type SharedComparator<'a, T> = Rc<dyn Comparator<T> + 'a>;

/// Combines several element comparators into one.
///
/// Criteria are evaluated in insertion order and evaluation stops at the
/// first non-`Equal` result. Cloning is cheap: criteria are reference
/// counted and shared between clones.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use seqops::compare::{Comparator, CompositeComparator, NaturalOrder, Projection};
///
/// let by_group_then_rank = CompositeComparator::new(Projection::new(
///     |pair: &(char, u32)| pair.0,
///     NaturalOrder,
/// ))
/// .with(Projection::new(|pair: &(char, u32)| pair.1, NaturalOrder));
///
/// assert_eq!(by_group_then_rank.compare(&('A', 2), &('A', 1)), Ordering::Greater);
/// assert_eq!(by_group_then_rank.compare(&('A', 2), &('B', 1)), Ordering::Less);
/// ```
pub struct CompositeComparator<'a, T: ?Sized> {
    criteria: Vec<SharedComparator<'a, T>>,
}

impl<'a, T: ?Sized> CompositeComparator<'a, T> {
    /// Creates a composite with a single, primary criterion.
    pub fn new<C>(primary: C) -> Self
    where
        C: Comparator<T> + 'a,
    {
        Self::from_shared(Rc::new(primary))
    }

    /// Creates a composite from an already shared primary criterion.
    pub fn from_shared(primary: SharedComparator<'a, T>) -> Self {
        Self {
            criteria: vec![primary],
        }
    }

    /// Builds a composite from an ordered collection of criteria.
    ///
    /// Returns `None` if `comparators` is empty: a composite needs at least
    /// one criterion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use seqops::compare::{CompositeComparator, NaturalOrder, SharedComparator};
    ///
    /// let none: Vec<SharedComparator<'_, i32>> = Vec::new();
    /// assert!(CompositeComparator::from_comparators(none).is_none());
    ///
    /// let one: Vec<SharedComparator<'_, i32>> = vec![Rc::new(NaturalOrder)];
    /// assert_eq!(CompositeComparator::from_comparators(one).map(|c| c.len()), Some(1));
    /// ```
    pub fn from_comparators<I>(comparators: I) -> Option<Self>
    where
        I: IntoIterator<Item = SharedComparator<'a, T>>,
    {
        let criteria: Vec<_> = comparators.into_iter().collect();
        if criteria.is_empty() {
            None
        } else {
            Some(Self { criteria })
        }
    }

    /// Appends a subordinate criterion, consuming and returning the composite.
    #[must_use]
    pub fn with<C>(mut self, next: C) -> Self
    where
        C: Comparator<T> + 'a,
    {
        self.push(next);
        self
    }

    /// Appends a subordinate criterion in place.
    pub fn push<C>(&mut self, next: C)
    where
        C: Comparator<T> + 'a,
    {
        self.criteria.push(Rc::new(next));
    }

    /// Returns the number of criteria.
    #[inline]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` if the composite has no criteria.
    ///
    /// Only [`Monoid::empty`] produces such a composite.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<T: ?Sized> Comparator<T> for CompositeComparator<'_, T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.criteria
            .iter()
            .map(|criterion| criterion.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T: ?Sized> Clone for CompositeComparator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for CompositeComparator<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CompositeComparator")
            .field("criteria", &self.criteria.len())
            .finish()
    }
}

impl<T: ?Sized> Semigroup for CompositeComparator<'_, T> {
    fn combine(mut self, other: Self) -> Self {
        self.criteria.extend(other.criteria);
        self
    }
}

impl<T: ?Sized> Monoid for CompositeComparator<'_, T> {
    fn empty() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }
}
