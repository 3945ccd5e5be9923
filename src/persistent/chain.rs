//! Persistent (immutable) append-only list.
//!
//! This module provides [`PersistentChain`], the mirror image of a cons list:
//! new elements are attached at the *back*, and every node points to the
//! node before it. Appending therefore shares the whole existing chain with
//! the new one.
//!
//! # Overview
//!
//! - O(1) append (`push_back`)
//! - O(1) last-element access
//! - O(1) removal of the last element (`init`)
//! - O(n) front-to-back iteration
//!
//! # Structural Sharing
//!
//! ```text
//! chain1:                 nil <- a <- b
//! chain2 = chain1 + c:   [nil <- a <- b] <- c   // shares [a, b] with chain1
//! chain3 = chain1 + d:   [nil <- a <- b] <- d   // shares [a, b] as well
//! ```
//!
//! Branching from the same chain twice never disturbs either branch, which is
//! what allows sort criteria to be refined incrementally.
//!
//! # Examples
//!
//! ```rust
//! use seqops::persistent::PersistentChain;
//!
//! let base = PersistentChain::new().push_back("name").push_back("age");
//! let refined = base.push_back("city");
//!
//! assert_eq!(base.len(), 2);
//! assert_eq!(refined.iter().collect::<Vec<_>>(), vec![&"name", &"age", &"city"]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;

/// Number of element references collected on the stack before iteration
/// spills to the heap.
const INLINE_CAPACITY: usize = 8;

struct Node<T> {
    element: T,
    previous: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) append-only list.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `push_back` | O(1)       |
/// | `last`      | O(1)       |
/// | `init`      | O(1)       |
/// | `len`       | O(1)       |
/// | `iter`      | O(n)       |
/// | `iter_rev`  | O(1) per element |
pub struct PersistentChain<T> {
    last: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> PersistentChain<T> {
    /// Creates a new empty chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::persistent::PersistentChain;
    ///
    /// let chain: PersistentChain<i32> = PersistentChain::new();
    /// assert!(chain.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            length: 0,
        }
    }

    /// Creates a chain containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push_back(element)
    }

    /// Returns a new chain with `element` appended at the back.
    ///
    /// The receiver is left untouched and shares all of its nodes with the
    /// result.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::persistent::PersistentChain;
    ///
    /// let chain = PersistentChain::new().push_back(1).push_back(2);
    /// assert_eq!(chain.last(), Some(&2));
    /// assert_eq!(chain.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        Self {
            last: Some(ReferenceCounter::new(Node {
                element,
                previous: self.last.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the most recently appended element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref().map(|node| &node.element)
    }

    /// Returns a reference to the first appended element.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.iter_rev().last()
    }

    /// Returns the chain without its last element.
    ///
    /// If the chain is empty, returns an empty chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::persistent::PersistentChain;
    ///
    /// let chain = PersistentChain::new().push_back(1).push_back(2);
    /// assert_eq!(chain.init().last(), Some(&1));
    /// ```
    #[must_use]
    pub fn init(&self) -> Self {
        self.last.as_ref().map_or_else(Self::new, |node| Self {
            last: node.previous.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Returns the number of elements in the chain.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the chain contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Returns an iterator from the most recently appended element back to
    /// the first one.
    #[inline]
    #[must_use]
    pub fn iter_rev(&self) -> PersistentChainRevIterator<'_, T> {
        PersistentChainRevIterator {
            current: self.last.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::persistent::PersistentChain;
    ///
    /// let chain: PersistentChain<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = chain.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentChainIterator<'_, T> {
        let mut elements: SmallVec<[&T; INLINE_CAPACITY]> = self.iter_rev().collect();
        elements.reverse();
        PersistentChainIterator {
            inner: elements.into_iter(),
        }
    }

    /// Returns `true` if both chains are the same allocation (or both empty).
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.last, &other.last) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentChain`], from
/// the back to the front.
pub struct PersistentChainRevIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentChainRevIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.previous.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentChainRevIterator<'_, T> {}

/// An iterator over references to elements of a [`PersistentChain`], in
/// insertion order.
pub struct PersistentChainIterator<'a, T> {
    inner: smallvec::IntoIter<[&'a T; INLINE_CAPACITY]>,
}

impl<'a, T> Iterator for PersistentChainIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for PersistentChainIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for PersistentChainIterator<'_, T> {}

impl<'a, T> IntoIterator for &'a PersistentChain<T> {
    type Item = &'a T;
    type IntoIter = PersistentChainIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentChain<T> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PersistentChain<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes iteratively so that long chains do not
        // overflow the stack through recursive drops.
        let mut current = self.last.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => current = owned.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for PersistentChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |chain, element| chain.push_back(element))
    }
}

impl<T: PartialEq> PartialEq for PersistentChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter_rev().eq(other.iter_rev())
    }
}

impl<T: Eq> Eq for PersistentChain<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let chain: PersistentChain<i32> = PersistentChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.last(), None);
        assert_eq!(chain.first(), None);
    }

    #[rstest]
    fn test_singleton() {
        let chain = PersistentChain::singleton(7);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.first(), Some(&7));
        assert_eq!(chain.last(), Some(&7));
    }

    #[rstest]
    fn test_push_back_keeps_receiver() {
        let base = PersistentChain::new().push_back(1);
        let extended = base.push_back(2);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(base.last(), Some(&1));
        assert_eq!(extended.last(), Some(&2));
    }

    #[rstest]
    fn test_branches_share_prefix() {
        let base: PersistentChain<i32> = (1..=3).collect();
        let left = base.push_back(10);
        let right = base.push_back(20);
        assert!(left.init().shares_storage_with(&base));
        assert!(right.init().shares_storage_with(&base));
        assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 10]);
        assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 20]);
    }

    #[rstest]
    fn test_iter_rev_order() {
        let chain: PersistentChain<i32> = (1..=4).collect();
        let reversed: Vec<i32> = chain.iter_rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
        assert_eq!(chain.iter_rev().len(), 4);
    }

    #[rstest]
    fn test_iter_spills_past_inline_capacity() {
        let chain: PersistentChain<usize> = (0..INLINE_CAPACITY * 3).collect();
        let collected: Vec<usize> = chain.iter().copied().collect();
        assert_eq!(collected, (0..INLINE_CAPACITY * 3).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_init_of_empty_is_empty() {
        let chain: PersistentChain<i32> = PersistentChain::new();
        assert!(chain.init().is_empty());
    }

    #[rstest]
    fn test_equality_ignores_sharing() {
        let left: PersistentChain<i32> = (1..=3).collect();
        let right: PersistentChain<i32> = (1..=3).collect();
        assert_eq!(left, right);
        assert!(!left.shares_storage_with(&right));
        assert_ne!(left, right.push_back(4));
    }

    #[rstest]
    fn test_debug_in_insertion_order() {
        let chain: PersistentChain<i32> = (1..=3).collect();
        assert_eq!(format!("{chain:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_long_chain_drops_without_overflow() {
        let chain: PersistentChain<u32> = (0..200_000).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}
