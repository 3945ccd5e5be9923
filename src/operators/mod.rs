//! One-pass query operators over sources.
//!
//! [`SourceExt`] is implemented for every [`Source`] and provides:
//!
//! - lazy adapters, themselves sources: [`filter`](SourceExt::filter),
//!   [`map`](SourceExt::map), [`flat_map`](SourceExt::flat_map),
//!   [`zip`](SourceExt::zip), the set operators
//!   [`distinct`](SourceExt::distinct), [`union`](SourceExt::union),
//!   [`intersect`](SourceExt::intersect), [`except`](SourceExt::except), and
//!   the keyed operators [`join`](SourceExt::join) and
//!   [`group_by`](SourceExt::group_by)
//! - eager terminals returning a `Result`: [`aggregate`](SourceExt::aggregate),
//!   [`all`](SourceExt::all), [`any`](SourceExt::any),
//!   [`first_where`](SourceExt::first_where), [`to_map`](SourceExt::to_map),
//!   [`collect_vec`](SourceExt::collect_vec), [`try_collect`](SourceExt::try_collect)
//! - entry points into ordering: [`order_by`](SourceExt::order_by) and friends
//!
//! Adapters take their sources by value. Pass a reference (`&source`) to keep
//! using the source afterwards. Every adapter can be iterated any number of
//! times and forwards a source error as its last item.
//!
//! # Hashing
//!
//! The hash-based operators build their tables with [`SequenceHasher`]:
//! `std`'s `RandomState` by default, `rustc_hash::FxBuildHasher` with the
//! `fxhash` feature, or `ahash::RandomState` with the `ahash` feature.
//!
//! # Examples
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! let readings = vec![12, 7, 31, 7, 18];
//! let sorted_distinct_large = (&readings)
//!     .filter(|reading: &i32| *reading > 10)
//!     .distinct(DefaultEquality)
//!     .order_by_key_descending(|reading: &i32| *reading);
//!
//! assert_eq!(sorted_distinct_large.to_vec().unwrap(), vec![31, 18, 12]);
//! assert_eq!(readings.aggregate(0, |sum, reading| sum + reading).unwrap(), 75);
//! ```

mod join;
mod set;
mod transform;

use std::hash::Hash;

pub use join::{GroupBy, Grouping, Join};
pub use set::{Distinct, Except, Intersect, Union};
pub use transform::{Filter, FlatMap, Map, Zip};

use crate::compare::{Comparator, Direction, EqualityComparer, NaturalOrder};
use crate::error::{Result, SequenceError};
use crate::ordered::OrderedSequence;
use crate::source::Source;

// =============================================================================
// Hasher Selection
// =============================================================================

/// The `BuildHasher` used by hash-based operators.
#[cfg(feature = "fxhash")]
pub type SequenceHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by hash-based operators.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SequenceHasher = ahash::RandomState;

/// The `BuildHasher` used by hash-based operators.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SequenceHasher = std::collections::hash_map::RandomState;

/// A `HashMap` using [`SequenceHasher`].
pub type HashMap<K, V> = std::collections::HashMap<K, V, SequenceHasher>;

pub(crate) type HashSet<T> = std::collections::HashSet<T, SequenceHasher>;

// =============================================================================
// SourceExt
// =============================================================================

/// Query operators available on every [`Source`].
pub trait SourceExt: Source + Sized {
    // -------------------------------------------------------------------------
    // Lazy adapters
    // -------------------------------------------------------------------------

    /// Keeps the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Projects every element through `selector`.
    fn map<F, U>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    /// Projects every element to a collection and concatenates them in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::prelude::*;
    ///
    /// let words = vec!["ab", "c"];
    /// let letters = words.flat_map(|word: &str| word.chars().collect::<Vec<_>>());
    /// assert_eq!(letters.collect_vec().unwrap(), vec!['a', 'b', 'c']);
    /// ```
    fn flat_map<F, I>(self, selector: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        FlatMap::new(self, selector)
    }

    /// Combines this source with `other` element by element, stopping at the
    /// end of the shorter one.
    fn zip<O, F, R>(self, other: O, combiner: F) -> Zip<Self, O, F>
    where
        O: Source,
        F: Fn(Self::Item, O::Item) -> R,
    {
        Zip::new(self, other, combiner)
    }

    /// Yields the first element of every equivalence class under `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::prelude::*;
    ///
    /// let words = vec!["Abc", "Bca", "abc", "bca"];
    /// let distinct = words.distinct(KeyEquality::new(|word: &&str| word.to_lowercase()));
    /// assert_eq!(distinct.collect_vec().unwrap(), vec!["Abc", "Bca"]);
    /// ```
    fn distinct<E>(self, comparer: E) -> Distinct<Self, E>
    where
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        Distinct::new(self, comparer)
    }

    /// Yields the distinct elements of this source, then the distinct
    /// elements of `other` not seen yet.
    fn union<O, E>(self, other: O, comparer: E) -> Union<Self, O, E>
    where
        O: Source<Item = Self::Item>,
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        Union::new(self, other, comparer)
    }

    /// Yields the distinct elements of this source that occur in `other`.
    fn intersect<O, E>(self, other: O, comparer: E) -> Intersect<Self, O, E>
    where
        O: Source<Item = Self::Item>,
        E: EqualityComparer<Self::Item>,
    {
        Intersect::new(self, other, comparer)
    }

    /// Yields the distinct elements of this source that do not occur in
    /// `other`.
    fn except<O, E>(self, other: O, comparer: E) -> Except<Self, O, E>
    where
        O: Source<Item = Self::Item>,
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        Except::new(self, other, comparer)
    }

    /// Pairs every element with the elements of `inner` sharing its key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::prelude::*;
    ///
    /// let joined = "ABCD".join(
    ///     "EFCD",
    ///     |outer: &char| *outer,
    ///     |inner: &char| *inner,
    ///     |outer: &char, _: &char| *outer,
    /// );
    /// assert_eq!(joined.collect_vec().unwrap(), vec!['C', 'D']);
    /// ```
    fn join<I, FO, FI, R, K, U>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: R,
    ) -> Join<Self, I, FO, FI, R>
    where
        I: Source,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        R: Fn(&Self::Item, &I::Item) -> U,
        K: Eq + Hash,
    {
        Join::new(self, inner, outer_key, inner_key, result)
    }

    /// Groups elements sharing a key, in order of first key appearance.
    fn group_by<F, K>(self, key_selector: F) -> GroupBy<Self, F>
    where
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash + Clone,
    {
        GroupBy::new(self, key_selector)
    }

    // -------------------------------------------------------------------------
    // Terminals
    // -------------------------------------------------------------------------

    /// Folds every element into an accumulator, starting from `seed`.
    ///
    /// # Errors
    ///
    /// Returns the first error the source yields.
    fn aggregate<A, F>(&self, seed: A, mut func: F) -> Result<A>
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.pull()
            .try_fold(seed, |accumulator, item| item.map(|value| func(accumulator, value)))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first element that does not.
    ///
    /// # Errors
    ///
    /// Returns the first error the source yields before the answer is known.
    fn all<P>(&self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self.pull() {
            if !predicate(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if some element satisfies `predicate`.
    ///
    /// Stops at the first element that does.
    ///
    /// # Errors
    ///
    /// Returns the first error the source yields before the answer is known.
    fn any<P>(&self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self.pull() {
            if predicate(&item?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoMatchingElement`] if no element matches, or
    /// the first error the source yields before a match is found.
    fn first_where<P>(&self, mut predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self.pull() {
            let item = item?;
            if predicate(&item) {
                return Ok(item);
            }
        }
        Err(SequenceError::NoMatchingElement)
    }

    /// Builds a map from a key and a value projected out of every element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`] when two elements produce the
    /// same key, or the first error the source yields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::prelude::*;
    ///
    /// let stock = vec![("apple", 3), ("pear", 5)];
    /// let by_name = stock.to_map(|entry: &(&str, i32)| entry.0, |entry| entry.1).unwrap();
    /// assert_eq!(by_name["pear"], 5);
    ///
    /// let duplicated = vec![("apple", 3), ("apple", 4)];
    /// let error = duplicated.to_map(|entry: &(&str, i32)| entry.0, |entry| entry.1).unwrap_err();
    /// assert!(matches!(error, SequenceError::DuplicateKey));
    /// ```
    fn to_map<K, V, FK, FV>(&self, key_selector: FK, mut value_selector: FV) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        FK: Fn(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        let mut map = HashMap::default();
        for item in self.pull() {
            let item = item?;
            let key = key_selector(&item);
            if map.contains_key(&key) {
                tracing::debug!(entries = map.len(), "to_map rejected a duplicate key");
                return Err(SequenceError::DuplicateKey);
            }
            map.insert(key, value_selector(item));
        }
        Ok(map)
    }

    /// Pulls every element into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first error the source yields.
    fn collect_vec(&self) -> Result<Vec<Self::Item>> {
        self.materialize()
    }

    /// Pulls every element into any collection.
    ///
    /// # Errors
    ///
    /// Returns the first error the source yields.
    fn try_collect<B>(&self) -> Result<B>
    where
        B: FromIterator<Self::Item>,
    {
        self.pull().collect()
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Orders ascending by a key compared with `comparator`.
    fn order_by<'a, F, C, K>(self, key_selector: F, comparator: C) -> OrderedSequence<'a, Self>
    where
        F: Fn(&Self::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        OrderedSequence::new(self, key_selector, comparator)
    }

    /// Orders ascending by a naturally ordered key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::prelude::*;
    ///
    /// let sorted = vec!["kiwi", "fig", "banana"].order_by_key(|fruit: &&str| fruit.len());
    /// assert_eq!(sorted.to_vec().unwrap(), vec!["fig", "kiwi", "banana"]);
    /// ```
    fn order_by_key<'a, F, K>(self, key_selector: F) -> OrderedSequence<'a, Self>
    where
        F: Fn(&Self::Item) -> K + 'a,
        K: Ord + 'a,
    {
        OrderedSequence::new(self, key_selector, NaturalOrder)
    }

    /// Orders descending by a key compared with `comparator`.
    fn order_by_descending<'a, F, C, K>(
        self,
        key_selector: F,
        comparator: C,
    ) -> OrderedSequence<'a, Self>
    where
        F: Fn(&Self::Item) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        OrderedSequence::with_direction(self, key_selector, comparator, Direction::Descending)
    }

    /// Orders descending by a naturally ordered key.
    fn order_by_key_descending<'a, F, K>(self, key_selector: F) -> OrderedSequence<'a, Self>
    where
        F: Fn(&Self::Item) -> K + 'a,
        K: Ord + 'a,
    {
        OrderedSequence::with_direction(self, key_selector, NaturalOrder, Direction::Descending)
    }

    /// Orders by a comparator over whole elements.
    fn order_with<'a, C>(self, comparator: C) -> OrderedSequence<'a, Self>
    where
        C: Comparator<Self::Item> + 'a,
    {
        OrderedSequence::from_comparator(self, comparator)
    }
}

impl<S: Source> SourceExt for S {}
