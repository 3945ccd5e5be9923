//! The deferred sort performed by iterating an ordered sequence.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use super::link::{Link, resolve};
use super::merge::merge_sort;
use crate::error::Result;
use crate::persistent::{PersistentChain, ReferenceCounter};
use crate::source::{Source, absent};

/// An iteration over an [`OrderedSequence`](super::OrderedSequence).
///
/// Nothing is read from the source until the first call to `next`. That call
/// materializes the source into a private buffer, sorts the buffer with a
/// stable sort, and every later call yields from it. Each `Sorted` owns its
/// buffer, so two iterations never interfere.
///
/// Errors are yielded as the first and only item of the iteration:
///
/// - [`SequenceError::NullSource`](crate::SequenceError::NullSource) if the
///   source is absent
/// - any error the source yields while being materialized
/// - [`SequenceError::NullArgument`](crate::SequenceError::NullArgument) if a
///   criterion is absent and at least two elements have to be compared
pub struct Sorted<'a, S: Source> {
    source: Option<ReferenceCounter<S>>,
    criteria: PersistentChain<Link<'a, S::Item>>,
    state: State<S::Item>,
}

enum State<T> {
    Pending,
    Yielding(vec::IntoIter<T>),
    Finished,
}

impl<'a, S: Source> Sorted<'a, S> {
    pub(super) const fn new(
        source: Option<ReferenceCounter<S>>,
        criteria: PersistentChain<Link<'a, S::Item>>,
    ) -> Self {
        Self {
            source,
            criteria,
            state: State::Pending,
        }
    }
}

/// Materializes `source` and sorts it by `criteria`.
///
/// Criteria are only resolved when there is something to compare, so an
/// empty or single-element source succeeds even with absent criteria.
pub(super) fn produce<'a, S: Source>(
    source: Option<&S>,
    criteria: &PersistentChain<Link<'a, S::Item>>,
) -> Result<Vec<S::Item>> {
    let Some(source) = source else {
        return absent("source");
    };
    let mut working = source.materialize().inspect_err(|error| {
        tracing::debug!(%error, "ordered sequence could not materialize its source");
    })?;
    if working.len() < 2 {
        return Ok(working);
    }
    let comparator = resolve(criteria)?;
    tracing::trace!(
        elements = working.len(),
        criteria = comparator.len(),
        "sorting materialized source"
    );
    merge_sort(&mut working, &comparator);
    Ok(working)
}

impl<S: Source> Iterator for Sorted<'_, S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Yielding(sorted) => return sorted.next().map(Ok),
                State::Finished => return None,
                State::Pending => match produce(self.source.as_deref(), &self.criteria) {
                    Ok(sorted) => self.state = State::Yielding(sorted.into_iter()),
                    Err(error) => {
                        self.state = State::Finished;
                        return Some(Err(error));
                    }
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Pending => (0, None),
            State::Yielding(sorted) => sorted.size_hint(),
            State::Finished => (0, Some(0)),
        }
    }
}

impl<S: Source> FusedIterator for Sorted<'_, S> {}

impl<S: Source> fmt::Debug for Sorted<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Pending => "pending",
            State::Yielding(_) => "yielding",
            State::Finished => "finished",
        };
        formatter
            .debug_struct("Sorted")
            .field("criteria", &self.criteria.len())
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
