//! Set operators driven by an [`EqualityComparer`].
//!
//! All four operators yield each equivalence class at most once, represented
//! by the first element of the receiving source that belongs to it, and keep
//! the order of the receiving source.

use std::fmt;
use std::iter;

use super::HashSet;
use crate::compare::{EqualityComparer, Keyed};
use crate::error::Result;
use crate::source::{Source, until_fault};

/// Pulls `source` into a set keyed by `comparer`.
fn collect_set<'c, S, E>(source: &S, comparer: &'c E) -> Result<HashSet<Keyed<'c, S::Item, E>>>
where
    S: Source,
    E: EqualityComparer<S::Item>,
{
    source
        .pull()
        .map(|item| item.map(|value| Keyed::new(value, comparer)))
        .collect()
}

// =============================================================================
// Distinct
// =============================================================================

/// Drops every element equivalent to an earlier one.
///
/// Created by [`SourceExt::distinct`](super::SourceExt::distinct).
#[derive(Clone)]
pub struct Distinct<S, E> {
    source: S,
    comparer: E,
}

impl<S, E> Distinct<S, E> {
    pub(super) const fn new(source: S, comparer: E) -> Self {
        Self { source, comparer }
    }
}

impl<S, E> Source for Distinct<S, E>
where
    S: Source,
    S::Item: Clone,
    E: EqualityComparer<S::Item>,
{
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        let mut seen = HashSet::default();
        self.source.pull().filter(move |item| match item {
            Ok(value) => seen.insert(Keyed::new(value.clone(), &self.comparer)),
            Err(_) => true,
        })
    }
}

impl<S: fmt::Debug, E> fmt::Debug for Distinct<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Distinct")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Union
// =============================================================================

/// Distinct elements of the first source, then those of the second.
///
/// Created by [`SourceExt::union`](super::SourceExt::union).
#[derive(Clone)]
pub struct Union<S, O, E> {
    first: S,
    second: O,
    comparer: E,
}

impl<S, O, E> Union<S, O, E> {
    pub(super) const fn new(first: S, second: O, comparer: E) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<S, O, E> Source for Union<S, O, E>
where
    S: Source,
    O: Source<Item = S::Item>,
    S::Item: Clone,
    E: EqualityComparer<S::Item>,
{
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        let mut seen = HashSet::default();
        until_fault(self.first.pull().chain(self.second.pull())).filter(move |item| match item {
            Ok(value) => seen.insert(Keyed::new(value.clone(), &self.comparer)),
            Err(_) => true,
        })
    }
}

impl<S: fmt::Debug, O: fmt::Debug, E> fmt::Debug for Union<S, O, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Union")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Intersect
// =============================================================================

/// Distinct elements of the first source that also occur in the second.
///
/// Created by [`SourceExt::intersect`](super::SourceExt::intersect). The
/// second source is read in full when the first element is requested.
#[derive(Clone)]
pub struct Intersect<S, O, E> {
    first: S,
    second: O,
    comparer: E,
}

impl<S, O, E> Intersect<S, O, E> {
    pub(super) const fn new(first: S, second: O, comparer: E) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<S, O, E> Source for Intersect<S, O, E>
where
    S: Source,
    O: Source<Item = S::Item>,
    E: EqualityComparer<S::Item>,
{
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        let mut lookup = None;
        let mut first = self.first.pull();
        until_fault(iter::from_fn(move || {
            if lookup.is_none() {
                match collect_set(&self.second, &self.comparer) {
                    Ok(set) => lookup = Some(set),
                    Err(error) => return Some(Err(error)),
                }
            }
            let lookup = lookup.as_mut()?;
            loop {
                let candidate = match first.next()? {
                    Ok(value) => Keyed::new(value, &self.comparer),
                    Err(error) => return Some(Err(error)),
                };
                if lookup.remove(&candidate) {
                    return Some(Ok(candidate.value));
                }
            }
        }))
    }
}

impl<S: fmt::Debug, O: fmt::Debug, E> fmt::Debug for Intersect<S, O, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Intersect")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Except
// =============================================================================

/// Distinct elements of the first source that do not occur in the second.
///
/// Created by [`SourceExt::except`](super::SourceExt::except). The second
/// source is read in full when the first element is requested.
#[derive(Clone)]
pub struct Except<S, O, E> {
    first: S,
    second: O,
    comparer: E,
}

impl<S, O, E> Except<S, O, E> {
    pub(super) const fn new(first: S, second: O, comparer: E) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<S, O, E> Source for Except<S, O, E>
where
    S: Source,
    O: Source<Item = S::Item>,
    S::Item: Clone,
    E: EqualityComparer<S::Item>,
{
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        let mut excluded = None;
        let mut first = self.first.pull();
        until_fault(iter::from_fn(move || {
            if excluded.is_none() {
                match collect_set(&self.second, &self.comparer) {
                    Ok(set) => excluded = Some(set),
                    Err(error) => return Some(Err(error)),
                }
            }
            let excluded = excluded.as_mut()?;
            loop {
                let value = match first.next()? {
                    Ok(value) => value,
                    Err(error) => return Some(Err(error)),
                };
                if excluded.insert(Keyed::new(value.clone(), &self.comparer)) {
                    return Some(Ok(value));
                }
            }
        }))
    }
}

impl<S: fmt::Debug, O: fmt::Debug, E> fmt::Debug for Except<S, O, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Except")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}
