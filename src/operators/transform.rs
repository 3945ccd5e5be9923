//! Element-wise adapters: filtering, projection, flattening and zipping.

use std::fmt;
use std::iter;

use crate::error::Result;
use crate::source::{Source, until_fault};

// =============================================================================
// Filter
// =============================================================================

/// Keeps the elements that satisfy a predicate.
///
/// Created by [`SourceExt::filter`](super::SourceExt::filter).
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(super) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&self) -> impl Iterator<Item = Result<S::Item>> {
        self.source.pull().filter(move |item| match item {
            Ok(value) => (self.predicate)(value),
            Err(_) => true,
        })
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Map
// =============================================================================

/// Projects every element through a selector.
///
/// Created by [`SourceExt::map`](super::SourceExt::map).
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub(super) const fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, U> Source for Map<S, F>
where
    S: Source,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn pull(&self) -> impl Iterator<Item = Result<U>> {
        self.source
            .pull()
            .map(move |item| item.map(|value| (self.selector)(value)))
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FlatMap
// =============================================================================

/// Projects every element to a collection and concatenates the results.
///
/// Created by [`SourceExt::flat_map`](super::SourceExt::flat_map).
#[derive(Clone)]
pub struct FlatMap<S, F> {
    source: S,
    selector: F,
}

impl<S, F> FlatMap<S, F> {
    pub(super) const fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, I> Source for FlatMap<S, F>
where
    S: Source,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn pull(&self) -> impl Iterator<Item = Result<I::Item>> {
        self.source.pull().flat_map(move |item| {
            let (expanded, fault) = match item {
                Ok(value) => (Some((self.selector)(value)), None),
                Err(error) => (None, Some(Err(error))),
            };
            expanded.into_iter().flatten().map(Ok).chain(fault)
        })
    }
}

impl<S: fmt::Debug, F> fmt::Debug for FlatMap<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlatMap")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Zip
// =============================================================================

/// Combines two sources element by element, up to the shorter length.
///
/// Created by [`SourceExt::zip`](super::SourceExt::zip). The first source is
/// always advanced before the second, so when the first runs out the second
/// is not read any further.
#[derive(Clone)]
pub struct Zip<S, O, F> {
    first: S,
    second: O,
    combiner: F,
}

impl<S, O, F> Zip<S, O, F> {
    pub(super) const fn new(first: S, second: O, combiner: F) -> Self {
        Self {
            first,
            second,
            combiner,
        }
    }
}

impl<S, O, F, R> Source for Zip<S, O, F>
where
    S: Source,
    O: Source,
    F: Fn(S::Item, O::Item) -> R,
{
    type Item = R;

    fn pull(&self) -> impl Iterator<Item = Result<R>> {
        let mut first = self.first.pull();
        let mut second = self.second.pull();
        until_fault(iter::from_fn(move || {
            let left = match first.next()? {
                Ok(value) => value,
                Err(error) => return Some(Err(error)),
            };
            let right = match second.next()? {
                Ok(value) => value,
                Err(error) => return Some(Err(error)),
            };
            Some(Ok((self.combiner)(left, right)))
        }))
    }
}

impl<S: fmt::Debug, O: fmt::Debug, F> fmt::Debug for Zip<S, O, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Zip")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{self, Nullable};
    use rstest::rstest;

    #[rstest]
    fn test_filter_keeps_matching_elements() {
        let evens = Filter::new(vec![1, 2, 3, 4], |n: &i32| n % 2 == 0);
        assert_eq!(evens.materialize().unwrap(), vec![2, 4]);
    }

    #[rstest]
    fn test_filter_passes_faults_through() {
        let faulty = source::try_from_fn(|| vec![Ok(1), Err("broken"), Ok(2)]);
        let filtered = Filter::new(faulty, |_: &i32| false);
        let items: Vec<Result<i32>> = filtered.pull().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[rstest]
    fn test_map_projects_elements() {
        let lengths = Map::new(vec!["a", "bcd", "ef"], |word: &str| word.len());
        assert_eq!(lengths.materialize().unwrap(), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let expanded = FlatMap::new(vec![1, 2, 3], |n: i32| vec![n; usize::try_from(n).unwrap()]);
        assert_eq!(expanded.materialize().unwrap(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_flat_map_stops_at_fault() {
        let faulty = source::try_from_fn(|| vec![Ok(1), Err("broken"), Ok(2)]);
        let expanded = FlatMap::new(faulty, |n: i32| vec![n, n]);
        let items: Vec<Result<i32>> = expanded.pull().collect();
        assert_eq!(items.len(), 3);
        assert!(items[2].is_err());
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec!['a', 'b'], vec!["1a", "2b"])]
    #[case(vec![1], vec!['a', 'b'], vec!["1a"])]
    #[case(vec![], vec!['a'], vec![])]
    fn test_zip_stops_at_shorter(
        #[case] numbers: Vec<i32>,
        #[case] letters: Vec<char>,
        #[case] expected: Vec<&str>,
    ) {
        let zipped = Zip::new(numbers, letters, |n: i32, c: char| format!("{n}{c}"));
        assert_eq!(zipped.materialize().unwrap(), expected);
    }

    #[rstest]
    fn test_zip_reports_absent_second_source() {
        let zipped = Zip::new(
            vec![1],
            Nullable::named(None::<Vec<i32>>, "second"),
            |left: i32, right: i32| left + right,
        );
        let error = zipped.materialize().unwrap_err();
        assert_eq!(error.parameter(), Some("second"));
    }

    #[rstest]
    fn test_zip_with_empty_first_never_reads_second() {
        let zipped = Zip::new(
            Vec::<i32>::new(),
            Nullable::named(None::<Vec<i32>>, "second"),
            |left: i32, right: i32| left + right,
        );
        assert_eq!(zipped.materialize().unwrap(), Vec::<i32>::new());
    }
}
