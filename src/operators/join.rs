//! Key-based correlation: equi-joins and grouping.

use std::fmt;
use std::hash::Hash;
use std::iter;
use std::vec;

use super::HashMap;
use crate::error::Result;
use crate::source::{Source, until_fault};

// =============================================================================
// Join
// =============================================================================

/// Inner equi-join of two sources on a hashed key.
///
/// Created by [`SourceExt::join`](super::SourceExt::join). Results follow the
/// order of the outer source; the matches of one outer element follow the
/// order of the inner source. The inner source is read in full once the
/// first outer element is known, and not at all if the outer source is empty.
#[derive(Clone)]
pub struct Join<S, I, FO, FI, R> {
    outer: S,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    result: R,
}

impl<S, I, FO, FI, R> Join<S, I, FO, FI, R> {
    pub(super) const fn new(outer: S, inner: I, outer_key: FO, inner_key: FI, result: R) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
        }
    }
}

impl<S, I, FO, FI, R, K> Join<S, I, FO, FI, R>
where
    I: Source,
    FI: Fn(&I::Item) -> K,
    K: Eq + Hash,
{
    fn lookup(&self) -> Result<HashMap<K, Vec<I::Item>>> {
        let mut lookup: HashMap<K, Vec<I::Item>> = HashMap::default();
        for item in self.inner.pull() {
            let item = item?;
            lookup.entry((self.inner_key)(&item)).or_default().push(item);
        }
        Ok(lookup)
    }
}

impl<S, I, FO, FI, R, K, U> Source for Join<S, I, FO, FI, R>
where
    S: Source,
    I: Source,
    FO: Fn(&S::Item) -> K,
    FI: Fn(&I::Item) -> K,
    R: Fn(&S::Item, &I::Item) -> U,
    K: Eq + Hash,
{
    type Item = U;

    fn pull(&self) -> impl Iterator<Item = Result<U>> {
        let mut lookup = None;
        let mut outer = self.outer.pull();
        let mut pending = Vec::new().into_iter();
        until_fault(iter::from_fn(move || {
            loop {
                if let Some(joined) = pending.next() {
                    return Some(Ok(joined));
                }
                let element = match outer.next()? {
                    Ok(element) => element,
                    Err(error) => return Some(Err(error)),
                };
                if lookup.is_none() {
                    match self.lookup() {
                        Ok(table) => lookup = Some(table),
                        Err(error) => return Some(Err(error)),
                    }
                }
                let matches = lookup
                    .as_ref()
                    .and_then(|table| table.get(&(self.outer_key)(&element)));
                if let Some(matches) = matches {
                    pending = matches
                        .iter()
                        .map(|inner| (self.result)(&element, inner))
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }))
    }
}

impl<S: fmt::Debug, I: fmt::Debug, FO, FI, R> fmt::Debug for Join<S, I, FO, FI, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Join")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Grouping
// =============================================================================

/// A key together with the elements that share it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// Returns the shared key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the elements of the group.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns the number of elements in the group; never zero.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: a group exists because an element has its key.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Splits the group into its key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T: Clone> Source for Grouping<K, T> {
    type Item = T;

    fn pull(&self) -> impl Iterator<Item = Result<T>> {
        self.elements.pull()
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

// =============================================================================
// GroupBy
// =============================================================================

/// Groups elements by a hashed key.
///
/// Created by [`SourceExt::group_by`](super::SourceExt::group_by). Groups are
/// yielded in the order their key first appears. The source is read in full
/// when the first group is requested.
#[derive(Clone)]
pub struct GroupBy<S, F> {
    source: S,
    key_selector: F,
}

impl<S, F> GroupBy<S, F> {
    pub(super) const fn new(source: S, key_selector: F) -> Self {
        Self {
            source,
            key_selector,
        }
    }
}

impl<S, F, K> GroupBy<S, F>
where
    S: Source,
    F: Fn(&S::Item) -> K,
    K: Eq + Hash + Clone,
{
    fn groups(&self) -> Result<Vec<Grouping<K, S::Item>>> {
        let mut positions: HashMap<K, usize> = HashMap::default();
        let mut groups: Vec<Grouping<K, S::Item>> = Vec::new();
        for item in self.source.pull() {
            let item = item?;
            let key = (self.key_selector)(&item);
            if let Some(&position) = positions.get(&key) {
                groups[position].elements.push(item);
            } else {
                positions.insert(key.clone(), groups.len());
                groups.push(Grouping {
                    key,
                    elements: vec![item],
                });
            }
        }
        Ok(groups)
    }
}

impl<S, F, K> Source for GroupBy<S, F>
where
    S: Source,
    F: Fn(&S::Item) -> K,
    K: Eq + Hash + Clone,
{
    type Item = Grouping<K, S::Item>;

    fn pull(&self) -> impl Iterator<Item = Result<Grouping<K, S::Item>>> {
        let mut groups = None;
        until_fault(iter::from_fn(move || {
            if groups.is_none() {
                match self.groups() {
                    Ok(collected) => groups = Some(collected.into_iter()),
                    Err(error) => return Some(Err(error)),
                }
            }
            groups.as_mut()?.next().map(Ok)
        }))
    }
}

impl<S: fmt::Debug, F> fmt::Debug for GroupBy<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GroupBy")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{self, Nullable};
    use rstest::rstest;

    #[rstest]
    fn test_join_preserves_outer_then_inner_order() {
        let owners = vec![("ann", 1), ("bob", 2), ("cid", 3)];
        let pets = vec![("rex", 2), ("tom", 1), ("kit", 2)];
        let join = Join::new(
            owners,
            pets,
            |owner: &(&str, i32)| owner.1,
            |pet: &(&str, i32)| pet.1,
            |owner: &(&str, i32), pet: &(&str, i32)| format!("{}:{}", owner.0, pet.0),
        );
        assert_eq!(
            join.materialize().unwrap(),
            vec!["ann:tom", "bob:rex", "bob:kit"]
        );
    }

    #[rstest]
    fn test_join_with_empty_outer_never_reads_inner() {
        let join = Join::new(
            Vec::<i32>::new(),
            Nullable::named(None::<Vec<i32>>, "inner"),
            |n: &i32| *n,
            |n: &i32| *n,
            |left: &i32, right: &i32| left + right,
        );
        assert_eq!(join.materialize().unwrap(), Vec::<i32>::new());
    }

    #[rstest]
    fn test_join_reports_absent_inner() {
        let join = Join::new(
            vec![1],
            Nullable::named(None::<Vec<i32>>, "inner"),
            |n: &i32| *n,
            |n: &i32| *n,
            |left: &i32, right: &i32| left + right,
        );
        let error = join.materialize().unwrap_err();
        assert_eq!(error.parameter(), Some("inner"));
    }

    #[rstest]
    fn test_group_by_orders_groups_by_first_appearance() {
        let groups = GroupBy::new(vec!["bee", "ant", "bat", "cow", "ape"], |word: &&str| {
            word.chars().next()
        });
        let parts: Vec<_> = groups
            .materialize()
            .unwrap()
            .into_iter()
            .map(Grouping::into_parts)
            .collect();
        assert_eq!(
            parts,
            vec![
                (Some('b'), vec!["bee", "bat"]),
                (Some('a'), vec!["ant", "ape"]),
                (Some('c'), vec!["cow"]),
            ]
        );
    }

    #[rstest]
    fn test_group_by_forwards_fault() {
        let groups = GroupBy::new(
            source::try_from_fn(|| vec![Ok(1), Err("broken")]),
            |n: &i32| n % 2,
        );
        let items: Vec<_> = groups.pull().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].as_ref().is_err_and(crate::SequenceError::is_fault));
    }

    #[rstest]
    fn test_grouping_is_a_source() {
        let groups = GroupBy::new(vec![1, 2, 3, 4], |n: &i32| n % 2 == 0);
        let evens = groups.materialize().unwrap().remove(1);
        assert_eq!(evens.key(), &true);
        assert_eq!(evens.len(), 2);
        assert!(!evens.is_empty());
        assert_eq!(evens.materialize().unwrap(), vec![2, 4]);
        assert_eq!(evens.elements(), &[2, 4]);
    }
}
