//! The ordered sequence and its refinement chain.

use std::fmt;

use super::link::Link;
use super::sorted::{Sorted, produce};
use crate::compare::{Comparator, Direction, NaturalOrder};
use crate::error::Result;
use crate::persistent::{PersistentChain, ReferenceCounter};
use crate::source::Source;

/// A source paired with a chain of sort criteria.
///
/// An `OrderedSequence` is a recipe, not a result: it sorts nothing until it
/// is iterated, and every iteration pulls the source again and sorts afresh.
/// Refining it with one of the `then_*` methods returns a new sequence with
/// one more criterion and leaves the receiver untouched; both share the
/// source and the criteria they have in common.
///
/// # Type Parameters
///
/// - `'a`: lifetime of the key selectors and comparators in the chain
/// - `S`: the source being ordered
///
/// # Examples
///
/// ```rust
/// use seqops::compare::NaturalOrder;
/// use seqops::ordered::OrderedSequence;
///
/// let words = vec!["pear", "fig", "apple", "kiwi"];
/// let by_length = OrderedSequence::new(words, |word: &&str| word.len(), NaturalOrder);
/// let by_length_then_alphabet = by_length.then_by_key(|word: &&str| *word);
///
/// assert_eq!(by_length.to_vec().unwrap(), vec!["fig", "pear", "kiwi", "apple"]);
/// assert_eq!(
///     by_length_then_alphabet.to_vec().unwrap(),
///     vec!["fig", "kiwi", "pear", "apple"]
/// );
/// ```
pub struct OrderedSequence<'a, S: Source> {
    source: Option<ReferenceCounter<S>>,
    criteria: PersistentChain<Link<'a, S::Item>>,
}

// =============================================================================
// Construction
// =============================================================================

impl<'a, S: Source> OrderedSequence<'a, S> {
    /// Orders `source` ascending by the key `key_selector` extracts, with keys
    /// compared by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::compare::NaturalOrder;
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let sorted = OrderedSequence::new(vec![3, 1, 2], |n: &i32| *n, NaturalOrder);
    /// assert_eq!(sorted.to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn new<F, C, K>(source: S, key_selector: F, comparator: C) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        Self::with_direction(source, key_selector, comparator, Direction::Ascending)
    }

    /// Orders `source` by a key in the given direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::compare::{Direction, NaturalOrder};
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let sorted = OrderedSequence::with_direction(
    ///     vec![3, 1, 2],
    ///     |n: &i32| *n,
    ///     NaturalOrder,
    ///     Direction::Descending,
    /// );
    /// assert_eq!(sorted.to_vec().unwrap(), vec![3, 2, 1]);
    /// ```
    pub fn with_direction<F, C, K>(
        source: S,
        key_selector: F,
        comparator: C,
        direction: Direction,
    ) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        Self::from_link(
            Some(source),
            Link::projection(Some(key_selector), Some(comparator), direction),
        )
    }

    /// Orders `source` by a comparator over whole elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let sorted = OrderedSequence::from_comparator(vec!["bb", "a", "ccc"], |l: &&str, r: &&str| {
    ///     r.len().cmp(&l.len())
    /// });
    /// assert_eq!(sorted.to_vec().unwrap(), vec!["ccc", "bb", "a"]);
    /// ```
    pub fn from_comparator<C>(source: S, comparator: C) -> Self
    where
        C: Comparator<S::Item> + 'a,
    {
        Self::from_link(Some(source), Link::comparator(comparator))
    }

    /// Orders a source whose inputs may be absent.
    ///
    /// Construction always succeeds. An absent source is reported when the
    /// sequence is iterated; an absent key selector or comparator is reported
    /// when the first comparison is needed, which never happens for fewer
    /// than two elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::compare::NaturalOrder;
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let unsortable = OrderedSequence::from_optional(
    ///     Some(vec![2, 1]),
    ///     None::<fn(&i32) -> i32>,
    ///     Some(NaturalOrder),
    /// );
    /// let error = unsortable.to_vec().unwrap_err();
    /// assert_eq!(error.parameter(), Some("key_selector"));
    ///
    /// let singleton = OrderedSequence::from_optional(
    ///     Some(vec![7]),
    ///     None::<fn(&i32) -> i32>,
    ///     Some(NaturalOrder),
    /// );
    /// assert_eq!(singleton.to_vec().unwrap(), vec![7]);
    /// ```
    pub fn from_optional<F, C, K>(
        source: Option<S>,
        key_selector: Option<F>,
        comparator: Option<C>,
    ) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        Self::from_link(
            source,
            Link::projection(key_selector, comparator, Direction::Ascending),
        )
    }

    fn from_link(source: Option<S>, link: Link<'a, S::Item>) -> Self {
        Self {
            source: source.map(ReferenceCounter::new),
            criteria: PersistentChain::singleton(link),
        }
    }
}

// =============================================================================
// Refinement
// =============================================================================

impl<'a, S: Source> OrderedSequence<'a, S> {
    /// Adds a subordinate ascending criterion.
    ///
    /// The new criterion only decides between elements every earlier
    /// criterion considers equal.
    ///
    /// # Complexity
    ///
    /// O(1); nothing is sorted.
    #[must_use]
    pub fn then_by<F, C, K>(&self, key_selector: F, comparator: C) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        self.refine(Link::projection(
            Some(key_selector),
            Some(comparator),
            Direction::Ascending,
        ))
    }

    /// Adds a subordinate ascending criterion over a naturally ordered key.
    #[must_use]
    pub fn then_by_key<F, K>(&self, key_selector: F) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.then_by(key_selector, NaturalOrder)
    }

    /// Adds a subordinate descending criterion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::compare::NaturalOrder;
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c')];
    /// let sorted = OrderedSequence::new(pairs, |pair: &(i32, char)| pair.0, NaturalOrder)
    ///     .then_by_descending(|pair: &(i32, char)| pair.1, NaturalOrder);
    /// assert_eq!(sorted.to_vec().unwrap(), vec![(0, 'b'), (1, 'c'), (1, 'a')]);
    /// ```
    #[must_use]
    pub fn then_by_descending<F, C, K>(&self, key_selector: F, comparator: C) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        self.refine(Link::projection(
            Some(key_selector),
            Some(comparator),
            Direction::Descending,
        ))
    }

    /// Adds a subordinate descending criterion over a naturally ordered key.
    #[must_use]
    pub fn then_by_key_descending<F, K>(&self, key_selector: F) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.then_by_descending(key_selector, NaturalOrder)
    }

    /// Adds a subordinate criterion comparing whole elements.
    #[must_use]
    pub fn then_with<C>(&self, comparator: C) -> Self
    where
        C: Comparator<S::Item> + 'a,
    {
        self.refine(Link::comparator(comparator))
    }

    /// Adds a subordinate criterion whose inputs may be absent.
    ///
    /// Never fails here; see [`from_optional`](Self::from_optional) for when
    /// absence is reported.
    #[must_use]
    pub fn then_by_optional<F, C, K>(&self, key_selector: Option<F>, comparator: Option<C>) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        self.refine(Link::projection(
            key_selector,
            comparator,
            Direction::Ascending,
        ))
    }

    /// Returns the number of criteria, including the primary one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::compare::NaturalOrder;
    /// use seqops::ordered::OrderedSequence;
    ///
    /// let primary = OrderedSequence::new(vec![1], |n: &i32| *n, NaturalOrder);
    /// let refined = primary.then_by_key(|n: &i32| -n);
    /// assert_eq!(primary.criteria_len(), 1);
    /// assert_eq!(refined.criteria_len(), 2);
    /// ```
    #[must_use]
    pub const fn criteria_len(&self) -> usize {
        self.criteria.len()
    }

    fn refine(&self, link: Link<'a, S::Item>) -> Self {
        Self {
            source: self.source.clone(),
            criteria: self.criteria.push_back(link),
        }
    }
}

// =============================================================================
// Production
// =============================================================================

impl<'a, S: Source> OrderedSequence<'a, S> {
    /// Starts a new sorted iteration.
    ///
    /// The source is pulled and sorted on the first call to `next`, not here.
    /// See [`Sorted`] for the errors the iteration can yield.
    #[must_use]
    pub fn iter(&self) -> Sorted<'a, S> {
        Sorted::new(self.source.clone(), self.criteria.clone())
    }

    /// Sorts the source into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the error the iteration would yield; see [`Sorted`].
    pub fn to_vec(&self) -> Result<Vec<S::Item>> {
        produce(self.source.as_deref(), &self.criteria)
    }
}

impl<'a, S: Source> IntoIterator for OrderedSequence<'a, S> {
    type Item = Result<S::Item>;
    type IntoIter = Sorted<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        Sorted::new(self.source, self.criteria)
    }
}

impl<'a, S: Source> IntoIterator for &OrderedSequence<'a, S> {
    type Item = Result<S::Item>;
    type IntoIter = Sorted<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Source> Source for OrderedSequence<'_, S> {
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        self.iter()
    }

    fn materialize(&self) -> Result<Vec<S::Item>> {
        self.to_vec()
    }
}

impl<S: Source> Clone for OrderedSequence<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            criteria: self.criteria.clone(),
        }
    }
}

impl<S: Source> fmt::Debug for OrderedSequence<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderedSequence")
            .field("source_present", &self.source.is_some())
            .field("criteria", &self.criteria.len())
            .finish()
    }
}
