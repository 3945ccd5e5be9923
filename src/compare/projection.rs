//! Comparison of elements through a projected key.
//!
//! A [`Projection`] turns a key selector `T -> K` and a comparator over `K`
//! into a comparator over `T`. It is the building block of every sort
//! criterion.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::comparator::{Comparator, Direction};

/// A comparator that orders elements by a key extracted from them.
///
/// `compare(x, y)` evaluates to
/// `direction.apply(key_comparator.compare(&selector(x), &selector(y)))`.
/// Keys are recomputed on every comparison; the selector should be cheap and
/// must be pure.
///
/// # Type Parameters
///
/// * `F` - The key selector, `Fn(&T) -> K`
/// * `C` - The key comparator, `Comparator<K>`
/// * `K` - The key type
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use seqops::compare::{Comparator, NaturalOrder, Projection};
///
/// let by_length = Projection::new(|word: &&str| word.len(), NaturalOrder);
/// assert_eq!(by_length.compare(&"pear", &"fig"), Ordering::Greater);
/// ```
pub struct Projection<F, C, K> {
    selector: F,
    comparator: C,
    direction: Direction,
    key: PhantomData<fn() -> K>,
}

impl<F, C, K> Projection<F, C, K> {
    /// Creates an ascending projection.
    ///
    /// # Arguments
    ///
    /// * `selector` - Extracts the sort key from an element
    /// * `comparator` - Orders two keys
    #[inline]
    pub const fn new(selector: F, comparator: C) -> Self {
        Self::with_direction(selector, comparator, Direction::Ascending)
    }

    /// Creates a projection sorting in the given direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqops::compare::{Comparator, Direction, NaturalOrder, Projection};
    ///
    /// let newest_first = Projection::with_direction(
    ///     |entry: &(u32, &str)| entry.0,
    ///     NaturalOrder,
    ///     Direction::Descending,
    /// );
    /// assert_eq!(newest_first.compare(&(2024, "b"), &(2019, "a")), Ordering::Less);
    /// ```
    #[inline]
    pub const fn with_direction(selector: F, comparator: C, direction: Direction) -> Self {
        Self {
            selector,
            comparator,
            direction,
            key: PhantomData,
        }
    }

    /// Returns the direction of this projection.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the same projection sorting in the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        let direction = match self.direction {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        };
        Self { direction, ..self }
    }
}

impl<T, F, C, K> Comparator<T> for Projection<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        let left_key = (self.selector)(left);
        let right_key = (self.selector)(right);
        self.direction
            .apply(self.comparator.compare(&left_key, &right_key))
    }
}

impl<F: Clone, C: Clone, K> Clone for Projection<F, C, K> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            comparator: self.comparator.clone(),
            direction: self.direction,
            key: PhantomData,
        }
    }
}

impl<F, C: fmt::Debug, K> fmt::Debug for Projection<F, C, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Projection")
            .field("comparator", &self.comparator)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
